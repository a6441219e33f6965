pub mod balance;
pub mod room;
pub mod session;
pub mod transaction;

pub use balance::TokenBalance;
pub use room::Room;
pub use session::Session;
pub use transaction::{
    BookingRequest, CallParams, TransactionParams, TransactionReceipt, TransferRequest, TxAction,
};
