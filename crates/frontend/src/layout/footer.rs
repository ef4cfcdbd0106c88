use crate::layout::global_context::use_site_context;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[component]
pub fn Footer() -> impl IntoView {
    let recipient = use_site_context().config.with_value(|c| c.contact.recipient.clone());
    let href = format!("mailto:{recipient}");

    view! {
        <footer class="footer">
            <div class="footer-container">
                <div class="footer-brand">
                    <strong>"Monteví Engenharia"</strong>
                    <p>"Construção | Solução | Sonhos"</p>
                </div>
                <ul class="footer-contacts">
                    <li>{icon("mail")}<a href=href>{recipient}</a></li>
                    <li>{icon("map-pin")}<span>"Atendimento em todo o estado"</span></li>
                </ul>
                <p class="footer-copy">"© 2026 Monteví Engenharia. Todos os direitos reservados."</p>
            </div>
        </footer>
    }
}
