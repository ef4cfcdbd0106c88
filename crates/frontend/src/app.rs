use crate::layout::global_context::SiteContext;
use crate::layout::Shell;
use crate::sections::{About, Contact, Hero, Portfolio, Services};
use crate::shared::banner::report_critical_elements;
use crate::shared::notifications::{NotificationService, ToastHost};
use contracts::shared::config::{load_config, SiteConfig};
use leptos::prelude::*;

/// Site configuration compiled into the bundle.
const SITE_TOML: &str = include_str!("../site.toml");

fn site_config() -> SiteConfig {
    match load_config(Some(SITE_TOML)) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("site.toml rejected, using defaults: {e:#}");
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = site_config();

    provide_context(NotificationService::new(config.notifications.clone()));
    // Provide the SiteContext store to the whole page via context.
    provide_context(SiteContext::new(config));

    Effect::new(move |_| report_critical_elements());

    view! {
        <Shell>
            <Hero />
            <Services />
            <Portfolio />
            <About />
            <Contact />
        </Shell>
        <ToastHost />
    }
}
