use crate::deadline::DeadlineDate;
use crate::model::Answer;
use yew::prelude::*;

/// Rank and date line under the answer text: `{place}位｜{year}.{month0}.{day}`.
///
/// A pending rank renders with an empty place and an unparseable deadline
/// with an empty date; the separator always stays.
pub(super) fn rank_line(answer: &Answer, date: Option<DeadlineDate>) -> String {
    let place = answer
        .place
        .map(|place| place.to_string())
        .unwrap_or_default();
    let date = date.map(|date| date.to_string()).unwrap_or_default();
    format!("{place}位｜{date}")
}

/// Static share affordances. The icons are presentational only; no share
/// action is wired yet.
pub(super) fn render_share_row() -> Html {
    html! {
        <>
            <p class="share-heading">{ "Let's Share!" }</p>
            <div class="share-row">
                { share_icon("Facebook", "#1977F2") }
                { share_icon("Twitter", "#1C9BF0") }
                { share_icon("Telegram", "#26A4E2") }
            </div>
        </>
    }
}

fn share_icon(name: &str, fill: &str) -> Html {
    html! {
        <svg class="share-icon" viewBox="0 0 24 24" role="img" aria-label={name.to_string()}>
            <circle cx="12" cy="12" r="12" fill={fill.to_string()} />
        </svg>
    }
}
