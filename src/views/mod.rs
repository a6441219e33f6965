// ============================================================================
// VIEWS - Funciones que renderizan DOM a partir del estado (sin lógica)
// ============================================================================

pub mod actions;
pub mod app;
pub mod header;
pub mod room_card;
pub mod room_grid;

pub use actions::{action_message, render_actions, ACTION_ATTR};
pub use app::render_app;
pub use header::render_header;
pub use room_card::render_room_card;
pub use room_grid::render_room_grid;
