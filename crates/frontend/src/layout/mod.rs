pub mod footer;
pub mod global_context;
pub mod navbar;

use crate::layout::global_context::use_site_context;
use crate::shared::scroll::install_scroll_effects;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |              Navbar (fixed)              |
/// +------------------------------------------+
/// |              sections...                 |
/// +------------------------------------------+
/// |              Footer                      |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    let ctx = use_site_context();

    // Scroll listeners are installed once the page is mounted.
    Effect::new(move |_| install_scroll_effects(ctx));

    view! {
        <navbar::Navbar />
        <main class="site-main">
            {children()}
        </main>
        <footer::Footer />
    }
}
