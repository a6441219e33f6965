// ============================================================================
// HOTEL BOOKING DAPP - FRONTEND MVVM (RUST PURO)
// ============================================================================
// - Views: funciones que renderizan DOM (sin lógica)
// - ViewModel: cola de mensajes + ejecución de efectos
// - State: modelo + `update` puro
// - Services: SOLO comunicación con la wallet y los contratos
// ============================================================================

mod app;
mod config;
mod dom;
mod error;
mod models;
mod services;
mod state;
mod utils;
mod viewmodels;
mod views;

#[cfg(test)]
mod test_support;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;
use wasm_logger::Config;

use crate::app::App;
use crate::config::CONFIG;

// Instancia global de la App
thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    let level = if CONFIG.is_logging_enabled() {
        log::Level::Info
    } else {
        log::Level::Warn
    };
    wasm_logger::init(Config::new(level));
    log::info!("🚀 Hotel Booking DApp - Rust Puro + MVVM");

    let app = App::new()?;
    app.render()?;
    let viewmodel = app.viewmodel();

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    // Después de guardar la App: los re-renders ya la encuentran
    viewmodel.mount();

    Ok(())
}

/// Re-render completo de la página
pub fn rerender_app() {
    APP.with(|app_cell| {
        let Some(app) = &*app_cell.borrow() else {
            log::warn!("⚠️ [RERENDER] App no está inicializada");
            return;
        };
        if let Err(e) = app.render() {
            log::error!("❌ [RERENDER] Error re-renderizando: {:?}", e);
        }
    });
}
