// ============================================================================
// STATE MODULE - Modelo + mensajes + función de actualización
// ============================================================================

pub mod reactivity;
pub mod app_state;
pub mod messages;
pub mod update;

pub use app_state::*;
pub use messages::*;
pub use update::{update, UpdateDeps};
