// ============================================================================
// WALLET PROVIDER - window.ethereum (EIP-1193)
// ============================================================================
// Solo wrappers sobre el proveedor inyectado: `request` y suscripción a
// `accountsChanged` / `chainChanged`. Sin estado, sin lógica.
// ============================================================================

use std::rc::Rc;

use serde::Serialize;
use serde_json::Value;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;

use crate::error::DappError;

/// Notificaciones asíncronas de la wallet
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderEvent {
    AccountsChanged(Vec<String>),
    ChainChanged(String),
}

/// Superficie mínima de un proveedor EIP-1193
#[allow(async_fn_in_trait)]
pub trait WalletProvider {
    /// `provider.request({ method, params })`
    async fn request(&self, method: &str, params: Value) -> Result<Value, DappError>;

    /// Registrar el receptor de eventos de la wallet
    fn subscribe(&self, sink: Rc<dyn Fn(ProviderEvent)>) -> Result<(), DappError>;
}

#[derive(Serialize)]
struct RequestArguments<'a> {
    method: &'a str,
    #[serde(skip_serializing_if = "Value::is_null")]
    params: Value,
}

/// Proveedor inyectado por la extensión (MetaMask u otra)
pub struct InjectedProvider {
    ethereum: JsValue,
}

impl InjectedProvider {
    /// Detectar `window.ethereum`; `None` si no hay extensión instalada
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let ethereum = js_sys::Reflect::get(&window, &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            return None;
        }
        Some(Self { ethereum })
    }

    fn function(&self, name: &str) -> Result<js_sys::Function, DappError> {
        js_sys::Reflect::get(&self.ethereum, &JsValue::from_str(name))
            .ok()
            .and_then(|f| f.dyn_into::<js_sys::Function>().ok())
            .ok_or_else(|| DappError::rpc(format!("window.ethereum.{} is not a function", name)))
    }

    fn listen<F>(&self, on: &js_sys::Function, event: &str, handler: F) -> Result<(), DappError>
    where
        F: FnMut(JsValue) + 'static,
    {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(JsValue)>);
        on.call2(&self.ethereum, &JsValue::from_str(event), closure.as_ref())
            .map_err(js_error)?;
        // Listener global: vive lo mismo que la página
        closure.forget();
        Ok(())
    }
}

impl WalletProvider for InjectedProvider {
    async fn request(&self, method: &str, params: Value) -> Result<Value, DappError> {
        let args = RequestArguments { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| DappError::Decode(e.to_string()))?;

        let promise = self
            .function("request")?
            .call1(&self.ethereum, &args)
            .map_err(js_error)?
            .dyn_into::<js_sys::Promise>()
            .map_err(|_| DappError::rpc("window.ethereum.request did not return a Promise"))?;

        let result = JsFuture::from(promise).await.map_err(js_error)?;
        serde_wasm_bindgen::from_value(result).map_err(|e| DappError::Decode(e.to_string()))
    }

    fn subscribe(&self, sink: Rc<dyn Fn(ProviderEvent)>) -> Result<(), DappError> {
        let on = self.function("on")?;

        let accounts_sink = sink.clone();
        self.listen(&on, "accountsChanged", move |payload: JsValue| {
            match serde_wasm_bindgen::from_value::<Vec<String>>(payload) {
                Ok(accounts) => accounts_sink(ProviderEvent::AccountsChanged(accounts)),
                Err(e) => log::error!("❌ [PROVIDER] accountsChanged con payload inválido: {}", e),
            }
        })?;

        self.listen(&on, "chainChanged", move |payload: JsValue| {
            let chain_id = payload.as_string().unwrap_or_default();
            sink(ProviderEvent::ChainChanged(chain_id));
        })?;

        log::info!("✅ [PROVIDER] Listeners accountsChanged/chainChanged registrados");
        Ok(())
    }
}

/// Error de JS (rechazo de promesa o excepción) -> `DappError::Rpc`
fn js_error(value: JsValue) -> DappError {
    let code = js_sys::Reflect::get(&value, &JsValue::from_str("code"))
        .ok()
        .and_then(|c| c.as_f64())
        .map(|c| c as i64);
    let message = js_sys::Reflect::get(&value, &JsValue::from_str("message"))
        .ok()
        .and_then(|m| m.as_string())
        .or_else(|| value.as_string())
        .unwrap_or_else(|| format!("{:?}", value));
    DappError::Rpc { code, message }
}
