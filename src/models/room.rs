use alloy_primitives::U256;

use crate::models::balance::format_units;

/// Habitación tal como la devuelve `getAllRooms()`.
/// Solo el contrato cambia la disponibilidad; el cliente no la toca.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub id: U256,
    pub category: String,
    /// Precio por noche en la unidad mínima del token
    pub price_per_night: U256,
    pub is_available: bool,
}

impl Room {
    pub fn price_display(&self, decimals: u8) -> String {
        format_units(self.price_per_night, decimals)
    }
}

/// Habitaciones libres de un snapshot, en su orden original
pub fn available_rooms(rooms: &[Room]) -> Vec<&Room> {
    rooms.iter().filter(|room| room.is_available).collect()
}
