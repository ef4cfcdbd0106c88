//! Scroll listeners: navbar shadow, current-section tracking and hero
//! parallax, plus smooth scrolling for in-page anchors.

use crate::layout::global_context::SiteContext;
use crate::shared::dom::{listen_window, offset_top, scroll_y};
use contracts::shared::navigation::scroll::anchor_target;
use contracts::shared::navigation::{ScrollEffects, Section};
use leptos::prelude::*;
use std::cell::Cell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys::{ScrollBehavior, ScrollToOptions};

/// Scroll to an in-page anchor below the fixed navbar. Links that are not
/// anchors, bare `#` and anchors without a target keep their default action.
pub fn smooth_scroll_to(ev: &web_sys::MouseEvent, href: &str, effects: &ScrollEffects) {
    let Some(id) = anchor_target(href) else {
        return;
    };
    let Some(top) = offset_top(&format!("#{id}")) else {
        return;
    };
    let Some(target) = effects.smooth_scroll_target(href, top) else {
        return;
    };

    ev.prevent_default();
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(target);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

/// Current `section[id]` elements in document order.
fn page_sections() -> Vec<Section> {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return Vec::new();
    };
    let Ok(nodes) = document.query_selector_all("section[id]") else {
        return Vec::new();
    };

    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|node| node.dyn_into::<web_sys::HtmlElement>().ok())
        .map(|el| Section::new(el.id(), f64::from(el.offset_top())))
        .collect()
}

/// Install the page-wide scroll listeners. Call once.
pub fn install_scroll_effects(ctx: SiteContext) {
    let effects = ctx.scroll_effects();

    {
        let effects = effects.clone();
        listen_window("scroll", true, move |_| {
            let y = scroll_y();

            let shadow = effects.navbar_shadow(y);
            if ctx.navbar_shadow.get_untracked() != shadow {
                ctx.navbar_shadow.set(shadow);
            }

            let sections = page_sections();
            let current = effects.active_section(&sections, y).map(str::to_string);
            if ctx.active_section.with_untracked(|a| *a != current) {
                ctx.active_section.set(current);
            }
        });
    }

    // At most one parallax update per animation frame.
    let ticking = Rc::new(Cell::new(false));
    listen_window("scroll", true, move |_| {
        if ticking.replace(true) {
            return;
        }
        let ticking = Rc::clone(&ticking);
        let effects = effects.clone();
        request_animation_frame(move || {
            ctx.hero_offset.set(effects.parallax_offset(scroll_y()));
            ticking.set(false);
        });
    });
}
