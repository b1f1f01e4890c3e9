//! Reactive viewport dimensions for sizing the theme panel.

use yew::prelude::*;

/// Width used where no browser window is available (server-side rendering
/// and native tests).
pub const FALLBACK_VIEWPORT_WIDTH: f64 = 375.0;

/// Current window inner width in CSS pixels.
#[must_use]
pub fn viewport_width() -> f64 {
    #[cfg(target_arch = "wasm32")]
    {
        crate::dom::window()
            .inner_width()
            .ok()
            .and_then(|value| value.as_f64())
            .unwrap_or(FALLBACK_VIEWPORT_WIDTH)
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        FALLBACK_VIEWPORT_WIDTH
    }
}

/// Viewport width as reactive state, refreshed from window `resize` events.
///
/// The listener is registered once per mounted component and removed again
/// on unmount.
#[hook]
pub fn use_viewport_width() -> f64 {
    let width = use_state(viewport_width);

    #[cfg(target_arch = "wasm32")]
    {
        let width = width.clone();
        use_effect_with((), move |()| {
            use wasm_bindgen::JsCast;
            use wasm_bindgen::closure::Closure;

            let on_resize = Closure::<dyn Fn()>::new(move || width.set(viewport_width()));
            let target: web_sys::EventTarget = crate::dom::window().into();
            if let Err(err) =
                target.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref())
            {
                crate::dom::console_error(&format!(
                    "failed to observe viewport resizes: {message}",
                    message = crate::dom::js_error_message(&err)
                ));
            }
            move || {
                let _ = target.remove_event_listener_with_callback(
                    "resize",
                    on_resize.as_ref().unchecked_ref(),
                );
            }
        });
    }

    *width
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::{FALLBACK_VIEWPORT_WIDTH, viewport_width};

    #[test]
    fn host_builds_use_the_fallback_width() {
        assert!((viewport_width() - FALLBACK_VIEWPORT_WIDTH).abs() < f64::EPSILON);
    }
}
