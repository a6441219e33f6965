// ============================================================================
// VIEWMODELS - Orquestación entre estado, servicios y vistas
// ============================================================================

pub mod dapp_viewmodel;

pub use dapp_viewmodel::DappViewModel;
