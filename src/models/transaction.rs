// ============================================================================
// TRANSACCIONES - Peticiones y parámetros JSON-RPC
// ============================================================================

use std::fmt;

use alloy_primitives::{Address, Bytes, U256};
use serde::{Deserialize, Serialize};

/// Acción de escritura iniciada por el usuario (para logs)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxAction {
    BuyTokens,
    BookRoom,
}

impl fmt::Display for TxAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BuyTokens => write!(f, "buy tokens"),
            Self::BookRoom => write!(f, "book room"),
        }
    }
}

/// Transferencia simple de moneda nativa al contrato del token.
/// Sin calldata: el contrato acredita tokens en su receive/fallback.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    pub from: String,
    pub to: Address,
    pub value: U256,
}

/// Llamada a `bookRoomByCategory(category, checkIn, checkOut)`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    pub from: String,
    /// Habitación elegida (solo para el aviso de éxito; el contrato reserva por categoría)
    pub room_id: U256,
    pub category: String,
    pub check_in: u64,
    pub check_out: u64,
}

/// Parámetros de `eth_call`
#[derive(Debug, Clone, Serialize)]
pub struct CallParams {
    pub to: Address,
    pub data: Bytes,
}

/// Parámetros de `eth_sendTransaction`
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionParams {
    pub from: String,
    pub to: Address,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Bytes>,
}

impl TransactionParams {
    /// Transferencia de valor sin datos
    pub fn transfer(request: &TransferRequest) -> Self {
        Self {
            from: request.from.clone(),
            to: request.to,
            value: Some(format!("{:#x}", request.value)),
            data: None,
        }
    }

    /// Llamada a método de contrato sin valor
    pub fn contract_call(from: &str, to: Address, data: Vec<u8>) -> Self {
        Self {
            from: from.to_string(),
            to,
            value: None,
            data: Some(Bytes::from(data)),
        }
    }
}

/// Recibo de `eth_getTransactionReceipt` (solo los campos que usamos)
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionReceipt {
    pub transaction_hash: String,
    #[serde(default)]
    pub status: Option<String>,
}

impl TransactionReceipt {
    /// Post-Byzantium: `0x1` éxito, `0x0` revertida
    pub fn succeeded(&self) -> bool {
        match self.status.as_deref() {
            Some(status) => status != "0x0",
            None => true,
        }
    }
}
