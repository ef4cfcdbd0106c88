//! Small wrappers around web-sys for listeners that live as long as the page.

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::{AddEventListenerOptions, Event, EventTarget};

/// Attach `handler` to `target` for the rest of the page's life.
///
/// The closure is leaked on purpose: the listeners installed here are never
/// removed.
pub fn listen<F>(target: &EventTarget, event: &str, passive: bool, handler: F)
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);

    let options = AddEventListenerOptions::new();
    options.set_passive(passive);

    let _ = target.add_event_listener_with_callback_and_add_event_listener_options(
        event,
        closure.as_ref().unchecked_ref(),
        &options,
    );
    closure.forget();
}

pub fn listen_window<F>(event: &str, passive: bool, handler: F)
where
    F: FnMut(Event) + 'static,
{
    if let Some(window) = web_sys::window() {
        listen(&window, event, passive, handler);
    }
}

pub fn scroll_y() -> f64 {
    web_sys::window()
        .and_then(|w| w.scroll_y().ok())
        .unwrap_or_default()
}

/// `offsetTop` of the element matching `selector`.
pub fn offset_top(selector: &str) -> Option<f64> {
    let document = web_sys::window()?.document()?;
    let element = document.query_selector(selector).ok()??;
    let element = element.dyn_into::<web_sys::HtmlElement>().ok()?;
    Some(f64::from(element.offset_top()))
}
