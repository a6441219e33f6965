// ============================================================================
// ENVIRONMENT - Efectos del navegador (alertas, recarga, timers, tareas)
// ============================================================================

use futures::future::LocalBoxFuture;

/// Efectos de la página que el viewmodel necesita
#[allow(async_fn_in_trait)]
pub trait Environment {
    /// Aviso modal bloqueante
    fn alert(&self, message: &str);

    /// Recarga completa de la página
    fn reload(&self);

    async fn sleep(&self, millis: u32);
}

/// Lanzador de tareas asíncronas en el hilo de la UI
pub trait Spawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>);
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserEnvironment;

impl Environment for BrowserEnvironment {
    fn alert(&self, message: &str) {
        let Some(window) = web_sys::window() else {
            log::warn!("⚠️ [ENV] Sin window, alerta descartada: {}", message);
            return;
        };
        if let Err(e) = window.alert_with_message(message) {
            log::error!("❌ [ENV] Error mostrando alerta: {:?}", e);
        }
    }

    fn reload(&self) {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(e) = window.location().reload() {
            log::error!("❌ [ENV] Error recargando la página: {:?}", e);
        }
    }

    async fn sleep(&self, millis: u32) {
        gloo_timers::future::TimeoutFuture::new(millis).await;
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserSpawner;

impl Spawner for BrowserSpawner {
    fn spawn(&self, task: LocalBoxFuture<'static, ()>) {
        wasm_bindgen_futures::spawn_local(task);
    }
}
