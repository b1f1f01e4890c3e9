use std::rc::Rc;

use yew::Callback;
use zabton_web::components::ui::view_result::ViewResultProps;
use zabton_web::model::{Answer, Theme};

fn sample_theme() -> Theme {
    Theme {
        id: 7,
        kind_code: 1,
        image_path: Some("x.png".to_string()),
        contents: "お題".to_string(),
        deadline: "2024-03-15".to_string(),
    }
}

fn sample_answer() -> Answer {
    Answer {
        id: 1,
        contents: "hello".to_string(),
        place: None,
    }
}

#[test]
fn view_result_props_use_pointer_equality() {
    let theme = Rc::new(sample_theme());
    let answer = Rc::new(sample_answer());

    let props_a = ViewResultProps {
        theme: theme.clone(),
        answer: answer.clone(),
        on_deselect: Callback::noop(),
    };
    let props_b = ViewResultProps {
        theme: theme.clone(),
        answer: answer.clone(),
        on_deselect: Callback::noop(),
    };
    assert!(props_a == props_b);

    // A refetched answer is a new allocation: equal contents, new identity.
    let props_c = ViewResultProps {
        theme,
        answer: Rc::new(sample_answer()),
        on_deselect: Callback::noop(),
    };
    assert!(props_a != props_c);
}
