use yew::prelude::*;

#[derive(Properties, PartialEq, Clone)]
pub struct Props {
    #[prop_or_default]
    pub label: Option<AttrValue>,
}

/// Indeterminate progress indicator shown while a server call is pending.
#[function_component(Spinner)]
pub fn spinner(props: &Props) -> Html {
    html! {
        <div class="spinner" role="status" aria-live="polite">
            <span class="spinner__indicator" aria-hidden="true"></span>
            { props.label.as_ref().map(|l| html! { <span class="spinner__label">{ l.clone() }</span> }).unwrap_or_default() }
        </div>
    }
}
