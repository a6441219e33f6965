// ============================================================================
// EVENT HANDLING - Delegación de clicks
// ============================================================================
// Un único listener sobre la raíz, registrado al crear la App. Las vistas
// solo marcan sus botones con un atributo; el `Closure` lo guarda quien lo
// registra y se libera con él.
// ============================================================================

use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, MouseEvent};

pub type ClickListener = Closure<dyn FnMut(MouseEvent)>;

/// Escuchar clicks en `root` y entregar a `handler` el valor de `attr` del
/// elemento marcado más cercano al objetivo del click.
pub fn delegate_clicks<F>(
    root: &Element,
    attr: &'static str,
    mut handler: F,
) -> Result<ClickListener, JsValue>
where
    F: FnMut(&str) + 'static,
{
    let selector = format!("[{}]", attr);
    let closure = Closure::wrap(Box::new(move |e: MouseEvent| {
        let Some(target) = e.target().and_then(|t| t.dyn_into::<Element>().ok()) else {
            return;
        };
        let Ok(Some(marked)) = target.closest(&selector) else {
            return;
        };
        if let Some(value) = marked.get_attribute(attr) {
            handler(&value);
        }
    }) as Box<dyn FnMut(MouseEvent)>);

    root.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())?;
    Ok(closure)
}
