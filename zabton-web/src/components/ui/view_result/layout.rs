use super::ViewResultProps;
use super::share;
use crate::components::button::Button;
use crate::components::modal::Modal;
use crate::components::spinner::Spinner;
use crate::deadline::DeadlineDate;
use crate::model::{Theme, ThemeKind};
use yew::prelude::*;

/// Fraction of the square panel an inset (captioned) image occupies.
const CAPTIONED_IMAGE_RATIO: f64 = 0.8;

#[allow(clippy::too_many_arguments)]
pub(super) fn render_view(
    props: &ViewResultProps,
    width: f64,
    image_url: Option<&str>,
    date: Option<DeadlineDate>,
    loading: bool,
    on_close_overlay: &Callback<()>,
    on_back: Callback<MouseEvent>,
) -> Html {
    let on_close_click = {
        let on_close = on_close_overlay.clone();
        Callback::from(move |_e: MouseEvent| on_close.emit(()))
    };

    html! {
        <div class="view-result">
            <Modal
                open={loading}
                title="ZBTNを用意しています！"
                on_close={on_close_overlay.clone()}
            >
                <Spinner label="読み込み中" />
                <Button class={classes!("overlay-close")} label="閉じる" onclick={on_close_click} />
            </Modal>

            <div class="view-result__theme">
                { render_theme_panel(&props.theme, width, image_url) }
            </div>

            <p class="view-result__answer">{ &props.answer.contents }</p>
            <p class="view-result__rank">{ share::rank_line(&props.answer, date) }</p>

            { share::render_share_row() }

            <div class="view-result__actions">
                <Button class={classes!("back-button")} label="戻る" onclick={on_back} />
                // Minting is not wired up yet; the button is a placeholder.
                <Button class={classes!("issue-button")} label="NFTを発行する" />
            </div>
        </div>
    }
}

/// One of three layouts, chosen by the theme kind. Unknown codes land in
/// the captioned branch via `ThemeKind::from_code`.
pub(super) fn render_theme_panel(theme: &Theme, width: f64, image_url: Option<&str>) -> Html {
    match theme.kind() {
        ThemeKind::Image => render_image_panel(width, image_url),
        ThemeKind::Text => render_text_panel(width, &theme.contents),
        ThemeKind::Captioned => render_captioned_panel(width, image_url, &theme.contents),
    }
}

fn square_style(width: f64) -> String {
    format!("width:{width}px;height:{width}px")
}

fn render_image_panel(width: f64, image_url: Option<&str>) -> Html {
    html! {
        <div class="theme-panel theme-panel--image" style={square_style(width)}>
            { render_image(image_url, None) }
        </div>
    }
}

fn render_text_panel(width: f64, contents: &str) -> Html {
    html! {
        <div class="theme-panel theme-panel--text" style={square_style(width)}>
            <p class="theme-panel__contents">{ contents }</p>
        </div>
    }
}

fn render_captioned_panel(width: f64, image_url: Option<&str>, contents: &str) -> Html {
    let inset = width * CAPTIONED_IMAGE_RATIO;
    html! {
        <div class="theme-panel theme-panel--captioned" style={square_style(width)}>
            { render_image(image_url, Some(inset)) }
            <p class="theme-panel__caption">{ contents }</p>
        </div>
    }
}

fn render_image(image_url: Option<&str>, size: Option<f64>) -> Html {
    // While the URL is still resolving, or resolution failed, the region
    // stays blank instead of pointing an <img> at an empty src.
    image_url.map_or_else(Html::default, |url| {
        let style = size.map(|px| format!("width:{px}px;height:{px}px"));
        html! { <img class="theme-panel__image" src={url.to_string()} alt="preview" {style} /> }
    })
}
