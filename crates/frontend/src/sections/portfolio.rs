use crate::shared::intersection::{LazyImg, RevealOnScroll};
use leptos::prelude::*;

const PROJECTS: [(&str, &str, &str); 4] = [
    ("/assets/portfolio/residencial.jpg", "Residencial Vale Verde", "Estrutural e elétrico"),
    ("/assets/portfolio/galpao.jpg", "Galpão logístico", "Estrutura metálica"),
    ("/assets/portfolio/subestacao.jpg", "Subestação 13,8 kV", "Média tensão"),
    ("/assets/portfolio/clinica.jpg", "Clínica Santa Luzia", "PPCI e hidrossanitário"),
];

#[component]
pub fn Portfolio() -> impl IntoView {
    view! {
        <section id="portfolio" class="portfolio">
            <div class="section-container">
                <h2 class="section-title">"Portfólio"</h2>
                <div class="portfolio-grid">
                    {PROJECTS.into_iter().map(|(src, title, scope)| view! {
                        <RevealOnScroll class="portfolio-item">
                            <LazyImg data_src=src alt=title class="portfolio-image" />
                            <div class="portfolio-caption">
                                <h3>{title}</h3>
                                <p>{scope}</p>
                            </div>
                        </RevealOnScroll>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
