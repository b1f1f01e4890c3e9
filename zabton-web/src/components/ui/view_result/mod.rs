//! Result view for a submitted answer: theme, answer text, rank placement,
//! and the share/minting affordances.
//!
//! On mount (and on every new answer) the component asks the server to
//! compute the answer's rank if it has none yet, gating the screen behind a
//! dismissible loading overlay while the request is in flight. The updated
//! rank arrives through the caller refetching the answer, not through this
//! component's own state.

mod layout;
mod share;

use std::rc::Rc;

use crate::api;
use crate::deadline::DeadlineDate;
use crate::dom;
use crate::model::{Answer, Theme, ThemeKind};
use crate::storage;
use crate::viewport::use_viewport_width;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Properties for the result view.
#[derive(Properties, Clone)]
pub struct ViewResultProps {
    pub theme: Rc<Theme>,
    pub answer: Rc<Answer>,
    /// Emitted by the back button to return to the answer selection screen.
    pub on_deselect: Callback<()>,
}

impl PartialEq for ViewResultProps {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.theme, &other.theme) && Rc::ptr_eq(&self.answer, &other.answer)
    }
}

/// Effect dependency keyed on `Rc` pointer identity rather than value, so a
/// refetched object reruns the effect even when its fields compare equal.
pub(crate) struct RcIdentity<T>(pub(crate) Rc<T>);

impl<T> PartialEq for RcIdentity<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl<T> Clone for RcIdentity<T> {
    fn clone(&self) -> Self {
        Self(Rc::clone(&self.0))
    }
}

/// Image resolution is skipped for text-only themes and for themes without
/// a stored image path.
pub(crate) fn should_resolve_image(theme: &Theme) -> bool {
    theme.kind() != ThemeKind::Text
        && theme
            .image_path
            .as_deref()
            .is_some_and(|path| !path.is_empty())
}

/// Collection runs only while the rank is still pending.
#[must_use]
pub(crate) const fn should_collect_result(answer: &Answer) -> bool {
    answer.place.is_none()
}

#[function_component(ViewResult)]
pub fn view_result(props: &ViewResultProps) -> Html {
    let image_url = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let date = use_state(|| None::<DeadlineDate>);
    // Generation counters invalidate in-flight requests that a newer theme
    // or answer has superseded, and stale completions after teardown.
    let resolve_generation = use_mut_ref(|| 0_u64);
    let collect_generation = use_mut_ref(|| 0_u64);

    // Resolve the theme image whenever the theme identity changes.
    {
        let image_url = image_url.clone();
        let resolve_generation = resolve_generation.clone();
        use_effect_with(RcIdentity(props.theme.clone()), move |RcIdentity(theme)| {
            *resolve_generation.borrow_mut() += 1;
            let generation = *resolve_generation.borrow();
            image_url.set(None);

            if should_resolve_image(theme) {
                let path = theme.image_path.clone().unwrap_or_default();
                let theme_id = theme.id;
                let image_url = image_url.clone();
                let resolve_generation = resolve_generation.clone();
                spawn_local(async move {
                    match storage::storage_file_url(storage::THEME_IMAGE_BUCKET, &path).await {
                        Ok(Some(url)) => {
                            if *resolve_generation.borrow() == generation {
                                image_url.set(Some(url));
                            }
                        }
                        // No usable URL: leave the image region blank.
                        Ok(None) => {}
                        Err(err) => {
                            dom::console_error(&format!(
                                "image resolution for theme {theme_id} failed: {err}"
                            ));
                        }
                    }
                });
            }
        });
    }

    // Collect the rank (and rederive the deadline) on answer identity change.
    {
        let loading = loading.clone();
        let date = date.clone();
        let collect_generation = collect_generation.clone();
        let theme = props.theme.clone();
        use_effect_with(RcIdentity(props.answer.clone()), move |RcIdentity(answer)| {
            // The deadline line belongs to whichever answer is being shown,
            // so it is rederived here rather than on theme change.
            let parsed = DeadlineDate::parse(&theme.deadline);
            if parsed.is_none() {
                log::warn!(
                    "theme {id} has an unparseable deadline: {deadline:?}",
                    id = theme.id,
                    deadline = theme.deadline
                );
            }
            date.set(parsed);

            if !should_collect_result(answer) {
                return;
            }

            *collect_generation.borrow_mut() += 1;
            let generation = *collect_generation.borrow();
            loading.set(true);

            let theme_id = theme.id;
            let loading = loading.clone();
            let collect_generation = collect_generation.clone();
            spawn_local(async move {
                let outcome = api::collect_result(theme_id).await;
                // A newer answer superseded this request; its own settle
                // owns the loading flag now.
                if *collect_generation.borrow() != generation {
                    return;
                }
                loading.set(false);
                if let Err(err) = outcome {
                    log::error!("result collection for theme {theme_id} failed: {err}");
                }
            });
        });
    }

    let width = use_viewport_width();

    let on_close_overlay = {
        let loading = loading.clone();
        Callback::from(move |()| loading.set(false))
    };
    let on_back = {
        let on_deselect = props.on_deselect.clone();
        Callback::from(move |_e: MouseEvent| on_deselect.emit(()))
    };

    layout::render_view(
        props,
        width,
        image_url.as_deref(),
        *date,
        *loading,
        &on_close_overlay,
        on_back,
    )
}
