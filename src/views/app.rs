// ============================================================================
// APP VIEW - Página completa
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::config::DappSettings;
use crate::dom::ElementBuilder;
use crate::state::DappState;
use crate::views::{render_actions, render_header, render_room_grid};

/// Renderizar la página: cabecera, acciones y rejilla de habitaciones.
/// Sin listeners: los botones llevan `data-action` y la App delega los clicks.
pub fn render_app(state: &DappState, settings: &DappSettings) -> Result<Element, JsValue> {
    let lang = state.language.as_str();

    Ok(ElementBuilder::new("div")?
        .class("dapp")
        .child(render_header(state, settings)?)?
        .child(render_actions(settings, lang)?)?
        .child(render_room_grid(&state.rooms, &settings.token_symbol, lang)?)?
        .build())
}
