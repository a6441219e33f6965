// ============================================================================
// ACTIONS VIEW - Botones de compra y reserva
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::DappSettings;
use crate::dom::ElementBuilder;
use crate::state::Msg;
use crate::utils::{t, t_with};

/// Atributo que lee el listener delegado de la raíz
pub const ACTION_ATTR: &str = "data-action";

const ACTION_BUY: &str = "buy-tokens";
const ACTION_BOOK: &str = "book-room";

/// Mensaje asociado al `data-action` de un botón
pub fn action_message(action: &str) -> Option<Msg> {
    match action {
        ACTION_BUY => Some(Msg::BuyTokens),
        ACTION_BOOK => Some(Msg::BookRandomRoom),
        _ => None,
    }
}

pub fn render_actions(settings: &DappSettings, lang: &str) -> Result<Element, JsValue> {
    // Cada click es un envío independiente; no se deshabilitan los botones
    let buy_btn = ElementBuilder::new("button")?
        .class("btn btn-buy")
        .attr("type", "button")?
        .attr(ACTION_ATTR, ACTION_BUY)?
        .text(&t("comprar_tokens", lang))
        .build();

    let book_btn = ElementBuilder::new("button")?
        .class("btn btn-book")
        .attr("type", "button")?
        .attr(ACTION_ATTR, ACTION_BOOK)?
        .text(&t("reservar_aleatoria", lang))
        .build();

    let rate = settings.exchange_rate.to_string();
    let rate_hint = ElementBuilder::new("p")?
        .class("dapp-rate")
        .text(&t_with(
            "tasa_cambio",
            lang,
            &[("rate", &rate), ("symbol", &settings.token_symbol)],
        ))
        .build();

    Ok(ElementBuilder::new("section")?
        .class("dapp-actions")
        .children([buy_btn, book_btn, rate_hint])?
        .build())
}
