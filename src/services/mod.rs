// ============================================================================
// SERVICES - SOLO comunicación con la wallet y los contratos
// ============================================================================

pub mod booking_service;
pub mod contracts;
pub mod environment;
pub mod provider;
pub mod rpc;
pub mod token_service;

pub use booking_service::BookingService;
pub use environment::{BrowserEnvironment, BrowserSpawner, Environment, Spawner};
pub use provider::{InjectedProvider, ProviderEvent, WalletProvider};
pub use rpc::RpcClient;
pub use token_service::TokenService;
