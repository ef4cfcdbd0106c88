use contracts::shared::config::SiteConfig;
use contracts::shared::navigation::{NavMenu, ScrollEffects};
use leptos::prelude::*;

/// Page-wide reactive state shared by the navbar, the hero and the scroll
/// listeners.
#[derive(Clone, Copy)]
pub struct SiteContext {
    pub config: StoredValue<SiteConfig>,
    pub menu: RwSignal<NavMenu>,
    /// Id of the section currently under the navbar.
    pub active_section: RwSignal<Option<String>>,
    pub navbar_shadow: RwSignal<&'static str>,
    /// Vertical offset of the hero image, in pixels.
    pub hero_offset: RwSignal<f64>,
}

impl SiteContext {
    pub fn new(config: SiteConfig) -> Self {
        Self {
            config: StoredValue::new(config),
            menu: RwSignal::new(NavMenu::new()),
            active_section: RwSignal::new(None),
            navbar_shadow: RwSignal::new("none"),
            hero_offset: RwSignal::new(0.0),
        }
    }

    pub fn scroll_effects(&self) -> ScrollEffects {
        ScrollEffects::new(self.config.with_value(|c| c.scroll.clone()))
    }

    pub fn toggle_menu(&self) {
        self.menu.update(|m| {
            m.toggle();
        });
    }

    pub fn close_menu(&self) {
        // Skip the write when already closed so subscribers are not notified.
        if self.menu.with_untracked(|m| m.is_open()) {
            self.menu.update(|m| {
                m.close();
            });
        }
    }
}

pub fn use_site_context() -> SiteContext {
    use_context::<SiteContext>().expect("SiteContext context not found")
}
