//! Contact form. Nothing is sent from the page: a valid form opens the
//! visitor's mail client through a `mailto:` link.

use crate::layout::global_context::use_site_context;
use crate::shared::notifications::use_notifications;
use contracts::domain::a002_contact::{ContactField, ContactForm, SUCCESS_MESSAGE};
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::html;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Contact() -> impl IntoView {
    let ctx = use_site_context();
    let notifications = use_notifications();

    let form = RwSignal::new(ContactForm::default());

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();

    let focus = move |field: ContactField| {
        let _ = match field {
            ContactField::Name => name_ref.get().map(|el| el.focus()),
            ContactField::Email => email_ref.get().map(|el| el.focus()),
            ContactField::Message => message_ref.get().map(|el| el.focus()),
        };
    };

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let message = match form.with_untracked(|f| f.validate()) {
            Ok(message) => message,
            Err(e) => {
                notifications.error(e.to_string());
                focus(e.field());
                return;
            }
        };

        let (recipient, delay_ms) = ctx
            .config
            .with_value(|c| (c.contact.recipient.clone(), c.contact.redirect_delay_ms));
        let link = message.mailto_link(&recipient);

        notifications.success(SUCCESS_MESSAGE);
        spawn_local(async move {
            TimeoutFuture::new(delay_ms).await;
            if let Some(window) = web_sys::window() {
                if let Err(e) = window.location().set_href(&link) {
                    log::error!("mailto navigation failed: {e:?}");
                }
            }
        });

        form.update(|f| f.reset());
    };

    view! {
        <section id="contato" class="contact">
            <div class="section-container">
                <h2 class="section-title">"Fale conosco"</h2>
                <form id="contactForm" class="contact-form" novalidate=true on:submit=on_submit>
                    <label>
                        "Nome"
                        <input
                            node_ref=name_ref
                            type="text"
                            name="name"
                            prop:value=move || form.with(|f| f.name.clone())
                            on:input=move |ev| form.update(|f| f.name = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "E-mail"
                        <input
                            node_ref=email_ref
                            type="email"
                            name="email"
                            prop:value=move || form.with(|f| f.email.clone())
                            on:input=move |ev| form.update(|f| f.email = event_target_value(&ev))
                        />
                    </label>
                    <label>
                        "Mensagem"
                        <textarea
                            node_ref=message_ref
                            name="message"
                            rows="5"
                            prop:value=move || form.with(|f| f.message.clone())
                            on:input=move |ev| form.update(|f| f.message = event_target_value(&ev))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary">"Enviar mensagem"</button>
                </form>
            </div>
        </section>
    }
}
