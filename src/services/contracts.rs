// ============================================================================
// CONTRACTS - Interfaces ABI de los contratos externos
// ============================================================================

use alloy_sol_types::sol;

use crate::models::Room;

sol! {
    /// Token HTK. Acredita tokens al recibir moneda nativa (receive/fallback).
    interface IHotelToken {
        function balanceOf(address account) external view returns (uint256 balance);
    }

    interface IHotelBooking {
        struct Room {
            uint256 id;
            string category;
            uint256 pricePerNight;
            bool isAvailable;
        }

        function getAllRooms() external view returns (Room[] rooms);

        function bookRoomByCategory(string category, uint256 checkInDate, uint256 checkOutDate) external;
    }
}

impl From<IHotelBooking::Room> for Room {
    fn from(room: IHotelBooking::Room) -> Self {
        Self {
            id: room.id,
            category: room.category,
            price_per_night: room.pricePerNight,
            is_available: room.isAvailable,
        }
    }
}
