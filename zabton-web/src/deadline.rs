//! Deadline-to-display-date derivation.

use std::fmt;

/// Calendar date derived from a theme deadline.
///
/// `month0` is zero-indexed, `Date#getMonth` style, and the display line
/// shows it verbatim, so March prints as `2`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeadlineDate {
    pub year: i32,
    pub month0: u32,
    pub day: u32,
}

impl DeadlineDate {
    /// Parse the date portion of a backend deadline string.
    ///
    /// Accepts `YYYY-MM-DD` and `YYYY/MM/DD`, with or without a trailing
    /// time component (`T...` or ` ...`). Returns `None` for anything that
    /// does not contain a plausible calendar date.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let date_part = raw
            .split(['T', ' '])
            .next()
            .map(str::trim)
            .filter(|part| !part.is_empty())?;

        let mut fields = date_part.split(['-', '/']);
        let year: i32 = fields.next()?.parse().ok()?;
        let month: u32 = fields.next()?.parse().ok()?;
        let day: u32 = fields.next()?.parse().ok()?;
        if fields.next().is_some() {
            return None;
        }
        if !(1..=12).contains(&month) || !(1..=31).contains(&day) {
            return None;
        }

        Some(Self {
            year,
            month0: month - 1,
            day,
        })
    }
}

impl fmt::Display for DeadlineDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{year}.{month0}.{day}",
            year = self.year,
            month0 = self.month0,
            day = self.day
        )
    }
}

#[cfg(test)]
mod tests {
    use super::DeadlineDate;

    #[test]
    fn parses_plain_iso_date() {
        let date = DeadlineDate::parse("2024-03-15").expect("parseable");
        assert_eq!(date.year, 2024);
        assert_eq!(date.month0, 2);
        assert_eq!(date.day, 15);
    }

    #[test]
    fn parses_datetime_and_slash_variants() {
        assert_eq!(
            DeadlineDate::parse("2024-03-15T21:00:00+09:00"),
            DeadlineDate::parse("2024-03-15")
        );
        assert_eq!(
            DeadlineDate::parse("2024/03/15 21:00"),
            DeadlineDate::parse("2024-03-15")
        );
    }

    #[test]
    fn display_keeps_the_zero_indexed_month() {
        let date = DeadlineDate::parse("2024-03-15").expect("parseable");
        assert_eq!(date.to_string(), "2024.2.15");

        let january = DeadlineDate::parse("2025-01-02").expect("parseable");
        assert_eq!(january.to_string(), "2025.0.2");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(DeadlineDate::parse(""), None);
        assert_eq!(DeadlineDate::parse("soon"), None);
        assert_eq!(DeadlineDate::parse("2024-13-01"), None);
        assert_eq!(DeadlineDate::parse("2024-00-10"), None);
        assert_eq!(DeadlineDate::parse("2024-03-32"), None);
        assert_eq!(DeadlineDate::parse("2024-03-15-99"), None);
    }
}
