//! Application shell: reads the bootstrap payload embedded in the host page
//! and mounts the result view.

#[cfg(target_arch = "wasm32")]
use std::rc::Rc;

use crate::model::{Answer, Theme};
use serde::Deserialize;
use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use yew::prelude::*;

/// Element the host page embeds the payload in:
/// `<script id="zabton-bootstrap" type="application/json">…</script>`.
pub const BOOTSTRAP_ELEMENT_ID: &str = "zabton-bootstrap";

/// Payload the host page provides in place of the session context: the
/// theme being viewed and the user's answer to it.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Bootstrap {
    pub theme: Theme,
    pub answer: Answer,
}

#[derive(Debug, Error)]
pub enum BootstrapError {
    #[error("bootstrap element #{BOOTSTRAP_ELEMENT_ID} is missing or empty")]
    Missing,
    #[error("bootstrap payload is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse an embedded payload.
///
/// # Errors
/// Returns a parse error for malformed JSON or a payload that does not
/// match the wire shape.
pub fn parse_bootstrap(raw: &str) -> Result<Bootstrap, BootstrapError> {
    Ok(serde_json::from_str(raw)?)
}

#[cfg(target_arch = "wasm32")]
fn read_bootstrap() -> Result<Bootstrap, BootstrapError> {
    let raw = crate::dom::document()
        .get_element_by_id(BOOTSTRAP_ELEMENT_ID)
        .and_then(|el| el.text_content())
        .filter(|text| !text.trim().is_empty())
        .ok_or(BootstrapError::Missing)?;
    parse_bootstrap(&raw)
}

#[cfg(target_arch = "wasm32")]
#[function_component(App)]
pub fn app() -> Html {
    let payload = use_memo((), |()| {
        read_bootstrap().map(|bootstrap| (Rc::new(bootstrap.theme), Rc::new(bootstrap.answer)))
    });
    let selected = use_state(|| true);

    match payload.as_ref() {
        Ok((theme, answer)) => {
            if *selected {
                let on_deselect = {
                    let selected = selected.clone();
                    Callback::from(move |()| selected.set(false))
                };
                html! {
                    <crate::components::ui::view_result::ViewResult
                        theme={theme.clone()}
                        answer={answer.clone()}
                        on_deselect={on_deselect}
                    />
                }
            } else {
                // The answer list lives outside this bundle; hand the user a
                // visible landing region instead of a blank page.
                html! {
                    <main class="answer-list-placeholder">
                        <p>{ "回答一覧に戻りました" }</p>
                    </main>
                }
            }
        }
        Err(err) => {
            crate::dom::console_error(&format!("failed to read bootstrap payload: {err}"));
            html! {
                <main class="boot-error" role="alert">
                    <h1>{ "結果を表示できません" }</h1>
                    <p>{ err.to_string() }</p>
                </main>
            }
        }
    }
}
