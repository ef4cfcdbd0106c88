use crate::layout::global_context::use_site_context;
use crate::shared::dom::listen_window;
use crate::shared::icons::icon;
use crate::shared::scroll::smooth_scroll_to;
use contracts::shared::navigation::scroll::nav_link_is_active;
use contracts::shared::viewport::Viewport;
use leptos::ev;
use leptos::prelude::*;
use wasm_bindgen::JsCast;

pub const NAV_LINKS: [(&str, &str); 5] = [
    ("#inicio", "Início"),
    ("#servicos", "Serviços"),
    ("#portfolio", "Portfólio"),
    ("#sobre", "Sobre"),
    ("#contato", "Contato"),
];

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_site_context();

    // Close the mobile menu on Escape, outside clicks and when the window
    // grows past the mobile breakpoint.
    Effect::new(move |_| {
        listen_window("keydown", false, move |event| {
            if let Some(keyboard_event) = event.dyn_ref::<web_sys::KeyboardEvent>() {
                if ctx.menu.with_untracked(|m| m.is_open()) {
                    ctx.menu.update(|m| {
                        m.handle_key(&keyboard_event.key());
                    });
                }
            }
        });

        listen_window("click", false, move |event| {
            let inside = event
                .target()
                .and_then(|t| t.dyn_into::<web_sys::Element>().ok())
                .and_then(|el| el.closest(".navbar-container").ok().flatten())
                .is_some();
            if !inside {
                ctx.close_menu();
            }
        });

        listen_window("resize", true, move |_| {
            let Some(window) = web_sys::window() else {
                return;
            };
            let width = window.inner_width().ok().and_then(|v| v.as_f64());
            let height = window.inner_height().ok().and_then(|v| v.as_f64());
            if let (Some(width), Some(height)) = (width, height) {
                if ctx.menu.with_untracked(|m| m.is_open()) {
                    ctx.menu.update(|m| {
                        m.handle_resize(&Viewport::new(width, height));
                    });
                }
            }
        });
    });

    let on_link_click = move |ev: ev::MouseEvent, href: &'static str| {
        ctx.close_menu();
        smooth_scroll_to(&ev, href, &ctx.scroll_effects());
    };

    view! {
        <nav class="navbar" style:box-shadow=move || ctx.navbar_shadow.get()>
            <div class="navbar-container">
                <a href="#inicio" class="navbar-brand" on:click=move |ev| on_link_click(ev, "#inicio")>
                    "Monteví Engenharia"
                </a>
                <button
                    id="menuToggle"
                    class="menu-toggle"
                    aria-label="Abrir menu"
                    aria-controls="navMenu"
                    aria-expanded=move || ctx.menu.with(|m| m.aria_expanded())
                    on:click=move |_| ctx.toggle_menu()
                >
                    {icon("menu")}
                </button>
                <ul id="navMenu" class="nav-menu" class:active=move || ctx.menu.with(|m| m.is_open())>
                    {NAV_LINKS.into_iter().map(|(href, title)| {
                        let is_active = move || {
                            ctx.active_section.with(|current| nav_link_is_active(href, current.as_deref()))
                        };
                        view! {
                            <li>
                                <a
                                    href=href
                                    class="nav-link"
                                    class:active=is_active
                                    on:click=move |ev| on_link_click(ev, href)
                                >
                                    {title}
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </div>
        </nav>
    }
}
