//! Service cards with their detail panels.
//!
//! All selection and flip state lives in one [`ServiceCardSelector`]; the
//! handlers below only translate DOM events into its methods, and every
//! `active` / `is-flipped` / `aria-*` value is derived from it.

use crate::shared::icons::icon;
use crate::shared::intersection::use_reveal;
use crate::layout::global_context::use_site_context;
use contracts::domain::a001_service_card::{ServiceCardSelector, ServiceId};
use leptos::ev;
use leptos::html;
use leptos::prelude::*;

#[derive(Debug, Clone)]
struct ServiceContent {
    id: ServiceId,
    title: &'static str,
    summary: &'static str,
    back: &'static str,
    details: &'static [&'static str],
}

fn catalog() -> Vec<ServiceContent> {
    vec![
        ServiceContent {
            id: ServiceId::Civil,
            title: "Engenharia Civil",
            summary: "Projetos estruturais, reformas e acompanhamento de obras.",
            back: "Do estudo de viabilidade à entrega das chaves, com responsabilidade técnica em cada etapa.",
            details: &[
                "Projetos estruturais em concreto armado e metálico",
                "Laudos técnicos e vistorias",
                "Gerenciamento e fiscalização de obras",
                "Regularização de imóveis",
            ],
        },
        ServiceContent {
            id: ServiceId::Electrical,
            title: "Engenharia Elétrica",
            summary: "Instalações de baixa e média tensão, SPDA e eficiência energética.",
            back: "Sistemas elétricos seguros e dimensionados conforme as normas vigentes.",
            details: &[
                "Projetos elétricos residenciais, comerciais e industriais",
                "Subestações e entradas de energia",
                "Sistemas de proteção contra descargas atmosféricas (SPDA)",
                "Sistemas fotovoltaicos",
            ],
        },
        ServiceContent {
            id: ServiceId::Complementary,
            title: "Projetos Complementares",
            summary: "Hidrossanitário, prevenção de incêndio e compatibilização.",
            back: "Todas as disciplinas do seu projeto conversando entre si.",
            details: &[
                "Projetos hidrossanitários",
                "Prevenção e combate a incêndio (PPCI)",
                "Cabeamento estruturado",
                "Compatibilização de projetos em BIM",
            ],
        },
    ]
}

fn first_touch_x(ev: &ev::TouchEvent) -> Option<f64> {
    ev.changed_touches().get(0).map(|t| f64::from(t.screen_x()))
}

#[component]
fn ServiceCardItem(
    index: usize,
    content: ServiceContent,
    selector: RwSignal<ServiceCardSelector>,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let reveal = use_reveal(node_ref);

    let service = content.id.to_string();
    let flip_service = service.clone();
    let detail_id = content.id.detail_id();

    let is_selected = move || selector.with(|s| s.is_selected(index));
    let is_flipped = move || selector.with(|s| s.is_flipped(index));
    let flip_label = move || {
        selector.with(|s| {
            s.card(index)
                .map(|c| c.accessible_description.clone())
                .filter(|d| !d.is_empty())
        })
    };

    let on_click = move |_: ev::MouseEvent| {
        selector.update(|s| {
            s.activate(index);
        });
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let handled = selector
            .try_update(|s| s.activate_with_key(index, &ev.key()))
            .unwrap_or(false);
        if handled {
            ev.prevent_default();
        }
    };

    let on_touchstart = move |ev: ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            selector.update(|s| s.touch_start(x));
        }
    };

    let on_touchend = move |ev: ev::TouchEvent| {
        if let Some(x) = first_touch_x(&ev) {
            let swiped = selector.try_update(|s| s.touch_end(x)).flatten();
            if let Some(direction) = swiped {
                log::debug!("swipe {direction:?} on service card {index}");
            }
        }
    };

    let on_touchcancel = move |_: ev::TouchEvent| {
        selector.update(|s| s.touch_cancel());
    };

    // A press on the face flips it and selects the card in one update.
    let on_flip_click = move |ev: ev::MouseEvent| {
        ev.stop_propagation();
        selector.update(|s| {
            s.press_flip_face(index);
        });
    };

    let on_flip_keydown = move |ev: ev::KeyboardEvent| {
        let handled = selector
            .try_update(|s| s.press_flip_face_with_key(index, &ev.key()))
            .unwrap_or(false);
        if handled {
            ev.prevent_default();
            ev.stop_propagation();
        }
    };

    view! {
        <div
            node_ref=node_ref
            class="service-card"
            class:active=is_selected
            style=move || reveal.get()
            data-service=service
            role="tab"
            tabindex="0"
            aria-selected=move || if is_selected() { "true" } else { "false" }
            aria-controls=detail_id
            on:click=on_click
            on:keydown=on_keydown
            on:touchstart=on_touchstart
            on:touchend=on_touchend
            on:touchcancel=on_touchcancel
        >
            <div
                class="service-card-flip"
                class:is-flipped=is_flipped
                data-service=flip_service
                role="button"
                tabindex="0"
                aria-pressed=move || if is_flipped() { "true" } else { "false" }
                aria-label=flip_label
                on:click=on_flip_click
                on:keydown=on_flip_keydown
            >
                <div class="service-card-front">
                    <div class="service-card-icon">{icon(content.id.as_str())}</div>
                    <h3>{content.title}</h3>
                    <p>{content.summary}</p>
                    <span class="service-card-hint">{icon("rotate")}" Saiba mais"</span>
                </div>
                <div class="service-card-back">
                    <p>{content.back}</p>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn Services() -> impl IntoView {
    let ctx = use_site_context();
    let catalog = catalog();

    let threshold = ctx.config.with_value(|c| c.services.swipe_threshold_px);
    let mut initial =
        ServiceCardSelector::with_matching_panels(catalog.iter().map(|s| s.id.clone()))
            .with_swipe_threshold(threshold);
    initial.initialize_default();

    let selector = RwSignal::new(initial);

    let cards = catalog
        .iter()
        .cloned()
        .enumerate()
        .map(|(index, content)| view! { <ServiceCardItem index=index content=content selector=selector /> })
        .collect_view();

    let panels = catalog
        .into_iter()
        .map(|content| {
            let detail_id = content.id.detail_id();
            let panel_id = detail_id.clone();
            let is_visible = move || selector.with(|s| s.is_panel_visible(&panel_id));
            view! {
                <div
                    id=detail_id
                    class="service-detail-item"
                    class:active=is_visible.clone()
                    role="tabpanel"
                    hidden=move || !is_visible()
                >
                    <h3>{content.title}</h3>
                    <ul>
                        {content.details.iter().map(|d| view! { <li>{*d}</li> }).collect_view()}
                    </ul>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id="servicos" class="services">
            <div class="section-container">
                <h2 class="section-title">"Nossos Serviços"</h2>
                <div class="service-cards" role="tablist">
                    {cards}
                </div>
                <div class="service-details">
                    {panels}
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_order_and_ids() {
        let ids: Vec<String> = catalog().into_iter().map(|s| s.id.to_string()).collect();
        assert_eq!(ids, ["civil", "electrical", "complementary"]);
    }

    #[test]
    fn test_catalog_titles_match_accessible_names() {
        for service in catalog() {
            assert_eq!(service.title, service.id.accessible_name());
            assert!(!service.details.is_empty());
        }
    }
}
