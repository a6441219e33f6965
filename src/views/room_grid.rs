// ============================================================================
// ROOM GRID VIEW
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::models::Room;
use crate::utils::t;
use crate::views::render_room_card;

/// Una tarjeta por habitación, en el orden del contrato
pub fn render_room_grid(rooms: &[Room], symbol: &str, lang: &str) -> Result<Element, JsValue> {
    let grid = ElementBuilder::new("section")?.class("room-grid");

    if rooms.is_empty() {
        let empty = ElementBuilder::new("p")?
            .class("room-grid-empty")
            .text(&t("sin_habitaciones", lang))
            .build();
        return Ok(grid.child(empty)?.build());
    }

    let cards = rooms
        .iter()
        .map(|room| render_room_card(room, symbol, lang))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(grid.children(cards)?.build())
}
