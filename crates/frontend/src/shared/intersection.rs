//! Viewport intersection: reveal-on-scroll and lazily loaded images.

use contracts::shared::lazy_image::{LazyImage, Reveal, REVEAL_ROOT_MARGIN, REVEAL_THRESHOLD};
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

/// Watch `element` until `on_entry` returns `true`.
///
/// Returns `false` when the browser has no `IntersectionObserver`; callers
/// should then apply the visible state directly.
fn observe_until<F>(element: &Element, options: Option<&IntersectionObserverInit>, mut on_entry: F) -> bool
where
    F: FnMut(bool) -> bool + 'static,
{
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array, observer: IntersectionObserver| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            if on_entry(entry.is_intersecting()) {
                observer.unobserve(&entry.target());
            }
        }
    }) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

    let observer = match options {
        Some(options) => IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), options),
        None => IntersectionObserver::new(callback.as_ref().unchecked_ref()),
    };

    match observer {
        Ok(observer) => {
            observer.observe(element);
            callback.forget();
            true
        }
        Err(e) => {
            log::warn!("IntersectionObserver unavailable: {e:?}");
            false
        }
    }
}

fn reveal_options() -> IntersectionObserverInit {
    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(REVEAL_THRESHOLD));
    options.set_root_margin(REVEAL_ROOT_MARGIN);
    options
}

/// Inline style for an element that fades in on its first intersection.
pub fn use_reveal(node_ref: NodeRef<html::Div>) -> Signal<&'static str> {
    let reveal = RwSignal::new(Reveal::default());

    Effect::new(move |_| {
        let Some(node) = node_ref.get() else {
            return;
        };
        let observed = observe_until(&node, Some(&reveal_options()), move |hit| {
            reveal.update(|r| r.on_intersect(hit));
            hit
        });
        if !observed {
            reveal.update(|r| r.on_intersect(true));
        }
    });

    Signal::derive(move || reveal.with(|r| r.style()))
}

/// `<img>` whose `src` is filled from `data-src` when it scrolls into view.
#[component]
pub fn LazyImg(
    #[prop(into)] data_src: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Img>::new();
    let image = RwSignal::new(LazyImage::new(Some(data_src.clone())));

    Effect::new(move |_| {
        let Some(img) = node_ref.get() else {
            return;
        };
        let observed = observe_until(&img, None, move |hit| {
            image.try_update(|i| i.on_intersect(hit)).unwrap_or(true)
        });
        if !observed {
            image.update(|i| {
                i.on_intersect(true);
            });
        }
    });

    let class = move || {
        if image.with(|i| i.loaded) {
            format!("{class} loaded")
        } else {
            class.clone()
        }
    };

    view! {
        <img
            node_ref=node_ref
            data-src=data_src
            src=move || image.with(|i| i.src.clone())
            alt=alt
            class=class
            loading="lazy"
        />
    }
}

/// `<div>` that fades in the first time it scrolls into view.
#[component]
pub fn RevealOnScroll(#[prop(into)] class: String, children: Children) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let style = use_reveal(node_ref);

    view! {
        <div node_ref=node_ref class=class style=move || style.get()>
            {children()}
        </div>
    }
}
