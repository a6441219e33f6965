// ============================================================================
// ERRORES - Taxonomía de errores del cliente
// ============================================================================
// Ningún error llega a romper la vista: el bucle de actualización los
// convierte en mensajes y quedan registrados en consola.
// ============================================================================

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DappError {
    /// No hay `window.ethereum` en el navegador
    #[error("no injected wallet provider detected")]
    ProviderMissing,

    /// Se pidió una operación on-chain sin proveedor conectado
    #[error("wallet provider is not connected")]
    ProviderUnavailable,

    /// El proveedor rechazó la petición (usuario, red o contrato)
    #[error("provider request failed (code {code:?}): {message}")]
    Rpc { code: Option<i64>, message: String },

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("ABI error: {0}")]
    Abi(String),

    #[error("could not decode provider response: {0}")]
    Decode(String),

    /// Transacción minada con status 0x0
    #[error("transaction {tx_hash} reverted")]
    Reverted { tx_hash: String },

    #[error("invalid configuration: {0}")]
    Config(String),
}

impl DappError {
    pub fn rpc(message: impl Into<String>) -> Self {
        Self::Rpc {
            code: None,
            message: message.into(),
        }
    }

    /// Código EIP-1193 4001: el usuario rechazó la petición en la wallet
    pub fn is_user_rejection(&self) -> bool {
        matches!(self, Self::Rpc { code: Some(4001), .. })
    }
}

impl From<alloy_sol_types::Error> for DappError {
    fn from(err: alloy_sol_types::Error) -> Self {
        Self::Abi(err.to_string())
    }
}

impl From<serde_json::Error> for DappError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}

pub type DappResult<T> = Result<T, DappError>;
