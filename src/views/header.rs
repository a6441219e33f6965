// ============================================================================
// HEADER VIEW - Cuenta conectada y saldo
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::DappSettings;
use crate::dom::ElementBuilder;
use crate::state::DappState;
use crate::utils::t;

pub fn render_header(state: &DappState, settings: &DappSettings) -> Result<Element, JsValue> {
    let lang = state.language.as_str();

    let account = if state.session.is_connected() {
        state.session.account.clone()
    } else {
        t("sin_cuenta", lang)
    };

    let title = ElementBuilder::new("h1")?
        .class("dapp-title")
        .text(&t("titulo", lang))
        .build();

    let account_row = ElementBuilder::new("p")?
        .class("dapp-account")
        .text(&format!("{}: {}", t("cuenta_conectada", lang), account))
        .build();

    let balance_row = ElementBuilder::new("p")?
        .class("dapp-balance")
        .text(&format!(
            "{}: {} {}",
            t("saldo_tokens", lang),
            state.balance.display,
            settings.token_symbol
        ))
        .build();

    Ok(ElementBuilder::new("header")?
        .class("dapp-header")
        .children([title, account_row, balance_row])?
        .build())
}
