// ============================================================================
// TOKEN SERVICE - Contrato HTK
// ============================================================================

use std::str::FromStr;

use alloy_primitives::{Address, U256};
use alloy_sol_types::SolCall;

use crate::error::{DappError, DappResult};
use crate::models::{TransactionParams, TransferRequest};
use crate::services::contracts::IHotelToken;
use crate::services::provider::WalletProvider;
use crate::services::rpc::RpcClient;

pub struct TokenService<P> {
    rpc: RpcClient<P>,
    address: Address,
}

impl<P: WalletProvider> TokenService<P> {
    pub fn new(rpc: RpcClient<P>, address: Address) -> Self {
        Self { rpc, address }
    }

    /// `balanceOf(account)` en la unidad mínima (18 decimales)
    pub async fn balance_of(&self, account: &str) -> DappResult<U256> {
        let owner =
            Address::from_str(account).map_err(|_| DappError::InvalidAddress(account.to_string()))?;
        let data = IHotelToken::balanceOfCall { account: owner }.abi_encode();
        let raw = self.rpc.call(self.address, data).await?;
        let decoded = IHotelToken::balanceOfCall::abi_decode_returns(&raw, true)?;
        Ok(decoded.balance)
    }

    /// Compra = transferencia simple de moneda nativa a la dirección del token.
    /// No se invoca ningún método: el contrato acredita en su receive/fallback.
    pub async fn purchase(&self, request: &TransferRequest) -> DappResult<String> {
        if request.to != self.address {
            log::warn!(
                "⚠️ [TOKEN] Transferencia a {} distinta del contrato configurado {}",
                request.to,
                self.address
            );
        }
        self.rpc
            .send_transaction(&TransactionParams::transfer(request))
            .await
    }
}
