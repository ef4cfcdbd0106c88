use crate::shared::intersection::RevealOnScroll;
use leptos::prelude::*;

const TEAM: [(&str, &str, &str); 2] = [
    ("Monteví", "Engenheiro Civil", "Responsável técnico por projetos estruturais e gestão de obras."),
    ("Metta", "Engenheira Eletricista", "Especialista em instalações de média tensão e energia solar."),
];

#[component]
pub fn About() -> impl IntoView {
    view! {
        <section id="sobre" class="about">
            <div class="section-container">
                <h2 class="section-title">"Sobre nós"</h2>
                <p class="about-text">
                    "Somos uma empresa de engenharia focada em soluções completas: do projeto à execução, com atendimento próximo e transparente."
                </p>
                <div class="team-grid">
                    {TEAM.into_iter().map(|(name, role, bio)| view! {
                        <RevealOnScroll class="team-member">
                            <h3>{name}</h3>
                            <span class="team-role">{role}</span>
                            <p>{bio}</p>
                        </RevealOnScroll>
                    }).collect_view()}
                </div>
            </div>
        </section>
    }
}
