// ============================================================================
// BOOKING SERVICE - Contrato de reservas
// ============================================================================

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::error::DappResult;
use crate::models::{BookingRequest, Room, TransactionParams};
use crate::services::contracts::IHotelBooking;
use crate::services::provider::WalletProvider;
use crate::services::rpc::RpcClient;

pub struct BookingService<P> {
    rpc: RpcClient<P>,
    address: Address,
}

impl<P: WalletProvider> BookingService<P> {
    pub fn new(rpc: RpcClient<P>, address: Address) -> Self {
        Self { rpc, address }
    }

    /// Snapshot completo de habitaciones
    pub async fn get_all_rooms(&self) -> DappResult<Vec<Room>> {
        let data = IHotelBooking::getAllRoomsCall {}.abi_encode();
        let raw = self.rpc.call(self.address, data).await?;
        let decoded = IHotelBooking::getAllRoomsCall::abi_decode_returns(&raw, true)?;
        Ok(decoded.rooms.into_iter().map(Room::from).collect())
    }

    /// `bookRoomByCategory(category, checkIn, checkOut)` firmada por la cuenta activa
    pub async fn book_room_by_category(&self, request: &BookingRequest) -> DappResult<String> {
        let data = IHotelBooking::bookRoomByCategoryCall {
            category: request.category.clone(),
            checkInDate: U256::from(request.check_in),
            checkOutDate: U256::from(request.check_out),
        }
        .abi_encode();
        self.rpc
            .send_transaction(&TransactionParams::contract_call(
                &request.from,
                self.address,
                data,
            ))
            .await
    }
}
