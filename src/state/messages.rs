// ============================================================================
// MENSAJES - Entradas y efectos del bucle de actualización
// ============================================================================

use alloy_primitives::U256;

use crate::error::DappError;
use crate::models::{BookingRequest, Room, TransferRequest, TxAction};
use crate::services::ProviderEvent;
use crate::utils::i18n::{t, t_with};

/// Mensajes de la cola única: acciones del usuario, eventos de la wallet
/// y resultados de operaciones asíncronas.
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Montaje de la página; indica si hay wallet inyectada
    Mounted { provider_detected: bool },
    AccountsAuthorized(Vec<String>),
    AuthorizationFailed(DappError),
    AccountsChanged(Vec<String>),
    ChainChanged(String),
    /// Resultado de una carga; cada consulta puede fallar por separado
    StateLoaded {
        account: String,
        balance: Result<U256, DappError>,
        rooms: Result<Vec<Room>, DappError>,
    },
    BuyTokens,
    BookRandomRoom,
    TokensPurchased { tx_hash: String },
    RoomBooked { room_id: U256, tx_hash: String },
    TransactionFailed { action: TxAction, error: DappError },
}

impl From<ProviderEvent> for Msg {
    fn from(event: ProviderEvent) -> Self {
        match event {
            ProviderEvent::AccountsChanged(accounts) => Msg::AccountsChanged(accounts),
            ProviderEvent::ChainChanged(chain_id) => Msg::ChainChanged(chain_id),
        }
    }
}

/// Efectos que el viewmodel ejecuta tras cada actualización
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Notify(Notice),
    RequestAccounts,
    /// Registrar `accountsChanged` / `chainChanged` (una sola vez)
    WatchProvider,
    LoadState { account: String },
    /// Recarga completa de la página (cambio de red)
    ReloadPage,
    SendTransfer(TransferRequest),
    SendBooking(BookingRequest),
}

/// Avisos modales para el usuario
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    InstallWallet,
    ProviderNotLoaded,
    TokensPurchased,
    NoRoomsAvailable,
    RoomBooked { room_id: U256 },
}

impl Notice {
    /// Aviso modal de un error de entorno; el resto de errores solo va a consola
    pub fn for_error(error: &DappError) -> Option<Notice> {
        match error {
            DappError::ProviderMissing => Some(Notice::InstallWallet),
            DappError::ProviderUnavailable => Some(Notice::ProviderNotLoaded),
            _ => None,
        }
    }

    pub fn message(&self, lang: &str) -> String {
        match self {
            Notice::InstallWallet => t("instalar_wallet", lang),
            Notice::ProviderNotLoaded => t("proveedor_no_cargado", lang),
            Notice::TokensPurchased => t("compra_exitosa", lang),
            Notice::NoRoomsAvailable => t("no_hay_habitaciones", lang),
            Notice::RoomBooked { room_id } => {
                t_with("reserva_exitosa", lang, &[("id", &room_id.to_string())])
            }
        }
    }
}
