// ============================================================================
// ROOM CARD VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Room;
use crate::utils::{t, TOKEN_DECIMALS};

/// Textos y clases de una tarjeta, ya resueltos para el idioma
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomCardContent {
    pub card_class: &'static str,
    pub price: String,
    pub status: String,
    pub status_class: &'static str,
}

pub fn room_card_content(room: &Room, symbol: &str, lang: &str) -> RoomCardContent {
    let price = format!(
        "{}: {} {}",
        t("precio_noche", lang),
        room.price_display(TOKEN_DECIMALS),
        symbol
    );

    let (status_key, card_class, status_class) = if room.is_available {
        ("libre", "room-card", "room-status room-status--free")
    } else {
        (
            "reservada",
            "room-card room-card--booked",
            "room-status room-status--booked",
        )
    };

    RoomCardContent {
        card_class,
        price,
        status: format!("{}: {}", t("estado_habitacion", lang), t(status_key, lang)),
        status_class,
    }
}

/// Tarjeta de habitación: categoría, precio por noche y estado
pub fn render_room_card(room: &Room, symbol: &str, lang: &str) -> Result<Element, JsValue> {
    let content = room_card_content(room, symbol, lang);

    let category = ElementBuilder::new("h2")?
        .class("room-category")
        .text(&room.category)
        .build();

    let price = ElementBuilder::new("p")?
        .class("room-price")
        .text(&content.price)
        .build();

    let status = ElementBuilder::new("p")?
        .class(content.status_class)
        .text(&content.status)
        .build();

    Ok(ElementBuilder::new("article")?
        .class(content.card_class)
        .attr("data-room-id", &room.id.to_string())?
        .children([category, price, status])?
        .build())
}
