use std::rc::Rc;

use futures::executor::block_on;
use yew::html::ChildrenRenderer;
use yew::{AttrValue, Callback, LocalServerRenderer};
use zabton_web::components::modal::Modal;
use zabton_web::components::ui::view_result::{ViewResult, ViewResultProps};
use zabton_web::model::{Answer, Theme};

fn theme(kind_code: i32, image_path: Option<&str>) -> Rc<Theme> {
    Rc::new(Theme {
        id: 7,
        kind_code,
        image_path: image_path.map(str::to_string),
        contents: "犬も歩けば？".to_string(),
        deadline: "2024-03-15".to_string(),
    })
}

fn answer(place: Option<u32>) -> Rc<Answer> {
    Rc::new(Answer {
        id: 1,
        contents: "棒に当たる".to_string(),
        place,
    })
}

fn render_view(theme: Rc<Theme>, answer: Rc<Answer>) -> String {
    let props = ViewResultProps {
        theme,
        answer,
        on_deselect: Callback::noop(),
    };
    block_on(LocalServerRenderer::<ViewResult>::with_props(props).render())
}

#[test]
fn text_theme_renders_contents_without_an_image() {
    let html = render_view(theme(2, None), answer(Some(3)));
    assert!(html.contains("theme-panel--text"));
    assert!(html.contains("犬も歩けば？"));
    assert!(!html.contains("<img"));
}

#[test]
fn image_theme_renders_a_square_panel() {
    let html = render_view(theme(1, Some("x.png")), answer(Some(3)));
    assert!(html.contains("theme-panel--image"));
    assert!(html.contains("width:375px;height:375px"));
}

#[test]
fn unknown_kind_codes_render_the_captioned_layout() {
    let html = render_view(theme(99, Some("x.png")), answer(Some(3)));
    assert!(html.contains("theme-panel--captioned"));
    assert!(html.contains("犬も歩けば？"));
}

#[test]
fn answer_text_and_rank_line_render() {
    let html = render_view(theme(2, None), answer(Some(3)));
    assert!(html.contains("棒に当たる"));
    assert!(html.contains("3位｜"));
}

#[test]
fn share_row_and_action_buttons_render() {
    let html = render_view(theme(2, None), answer(Some(3)));
    assert!(html.contains("share-heading"));
    assert!(html.contains("share-row"));
    assert!(html.contains("戻る"));
    assert!(html.contains("NFTを発行する"));
}

#[test]
fn overlay_stays_hidden_until_collection_starts() {
    let html = render_view(theme(2, None), answer(None));
    assert!(!html.contains("modal-backdrop"));
}

#[test]
fn modal_renders_when_open_and_skips_when_closed() {
    let open_props = zabton_web::components::modal::Props {
        open: true,
        title: AttrValue::from("ZBTNを用意しています！"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(open_props).render());
    assert!(html.contains("modal-backdrop"));
    assert!(html.contains("ZBTNを用意しています！"));

    let closed_props = zabton_web::components::modal::Props {
        open: false,
        title: AttrValue::from("ZBTNを用意しています！"),
        on_close: Callback::noop(),
        children: ChildrenRenderer::default(),
    };
    let html = block_on(LocalServerRenderer::<Modal>::with_props(closed_props).render());
    assert!(!html.contains("modal-backdrop"));
}
