//! Console greeting and startup diagnostics.

use wasm_bindgen::JsValue;

const BANNER: [(&str, &str); 3] = [
    ("%cMontevì Engenharia", "font-size: 24px; font-weight: bold; color: #247ba0;"),
    ("%cConstrução | Solução | Sonhos", "font-size: 14px; color: #5a7a8a;"),
    ("%c© 2026 Monteví Engenharia", "font-size: 12px; color: #999;"),
];

/// Elements the page scripts expect to find, by id.
const CRITICAL_ELEMENTS: [&str; 3] = ["menuToggle", "navMenu", "contactForm"];

/// Styled banner; `log` cannot pass CSS to the console, so this goes through
/// `console.log` directly.
pub fn print_banner() {
    for (text, style) in BANNER {
        web_sys::console::log_2(&JsValue::from_str(text), &JsValue::from_str(style));
    }
}

pub fn report_critical_elements() {
    log::info!("✓ Site carregado com sucesso");

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return;
    };
    match document.query_selector_all(".service-card") {
        Ok(cards) => log::info!("✓ {} cards de serviço encontrados", cards.length()),
        Err(e) => log::warn!("cards de serviço indisponíveis: {e:?}"),
    }
    for id in CRITICAL_ELEMENTS {
        if document.get_element_by_id(id).is_some() {
            log::info!("✓ Elemento {id} encontrado");
        } else {
            log::warn!("Elemento {id} ausente");
        }
    }
}
