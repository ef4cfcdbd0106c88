use crate::layout::global_context::use_site_context;
use crate::shared::intersection::RevealOnScroll;
use crate::shared::scroll::smooth_scroll_to;
use contracts::shared::navigation::scroll::translate_y;
use leptos::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("+150", "Projetos entregues"),
    ("+10", "Anos de experiência"),
    ("100%", "Responsabilidade técnica"),
];

#[component]
pub fn Hero() -> impl IntoView {
    let ctx = use_site_context();

    view! {
        <section id="inicio" class="hero">
            <div class="hero-content">
                <h1>"Engenharia que constrói sonhos"</h1>
                <p class="hero-subtitle">
                    "Projetos de engenharia civil, elétrica e complementares com qualidade, segurança e compromisso com prazos."
                </p>
                <div class="hero-actions">
                    <a
                        href="#contato"
                        class="btn btn-primary"
                        on:click=move |ev| smooth_scroll_to(&ev, "#contato", &ctx.scroll_effects())
                    >
                        "Solicite um orçamento"
                    </a>
                    <a
                        href="#servicos"
                        class="btn btn-secondary"
                        on:click=move |ev| smooth_scroll_to(&ev, "#servicos", &ctx.scroll_effects())
                    >
                        "Conheça nossos serviços"
                    </a>
                </div>
                <div class="hero-stats">
                    {STATS.into_iter().map(|(value, label)| view! {
                        <RevealOnScroll class="stat">
                            <strong class="stat-value">{value}</strong>
                            <span class="stat-label">{label}</span>
                        </RevealOnScroll>
                    }).collect_view()}
                </div>
            </div>
            <div
                class="hero-placeholder"
                aria-hidden="true"
                style:transform=move || translate_y(ctx.hero_offset.get())
            ></div>
        </section>
    }
}
