// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use crate::models::{Room, Session, TokenBalance};
use crate::state::reactivity::ReactiveState;

/// Fase del ciclo de vida:
/// Disconnected -> (connect) -> Authorizing -> Loading -> Ready
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Sin cuenta autorizada (inicio, rechazo o wallet desconectada)
    Disconnected,
    /// No hay wallet inyectada: aviso fatal, no se hace ninguna llamada
    ProviderMissing,
    /// Esperando `eth_requestAccounts`
    Authorizing,
    /// Consultando saldo y habitaciones
    Loading,
    /// Datos cargados (o viejos si alguna consulta falló)
    Ready,
}

/// Modelo completo de la vista
#[derive(Debug, Clone, PartialEq)]
pub struct DappState {
    pub phase: Phase,
    pub session: Session,
    pub balance: TokenBalance,
    /// Último snapshot de `getAllRooms()`
    pub rooms: Vec<Room>,
    /// Wallet detectada en el navegador
    pub provider_connected: bool,
    pub language: String,
}

impl DappState {
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            phase: Phase::Disconnected,
            session: Session::default(),
            balance: TokenBalance::default(),
            rooms: Vec::new(),
            provider_connected: false,
            language: language.into(),
        }
    }
}

/// Contenedor compartido entre la vista y el viewmodel
pub type AppState = ReactiveState<DappState>;
