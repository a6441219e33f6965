// ============================================================================
// RPC CLIENT - Llamadas JSON-RPC tipadas sobre el proveedor
// ============================================================================

use std::rc::Rc;
use std::str::FromStr;

use alloy_primitives::{Address, Bytes};
use serde_json::Value;

use crate::error::{DappError, DappResult};
use crate::models::{CallParams, TransactionParams, TransactionReceipt};
use crate::services::environment::Environment;
use crate::services::provider::WalletProvider;

/// Cliente RPC (stateless) que delega todo en la wallet
pub struct RpcClient<P> {
    provider: Rc<P>,
}

impl<P> Clone for RpcClient<P> {
    fn clone(&self) -> Self {
        Self {
            provider: self.provider.clone(),
        }
    }
}

impl<P: WalletProvider> RpcClient<P> {
    pub fn new(provider: Rc<P>) -> Self {
        Self { provider }
    }

    /// `eth_requestAccounts` (puede abrir el popup de la wallet)
    pub async fn request_accounts(&self) -> DappResult<Vec<String>> {
        let accounts = self
            .provider
            .request("eth_requestAccounts", Value::Null)
            .await?;
        Ok(serde_json::from_value(accounts)?)
    }

    /// `eth_call` de solo lectura contra el bloque `latest`
    pub async fn call(&self, to: Address, data: Vec<u8>) -> DappResult<Bytes> {
        let call = serde_json::to_value(CallParams {
            to,
            data: Bytes::from(data),
        })?;
        let result = self
            .provider
            .request("eth_call", Value::Array(vec![call, Value::from("latest")]))
            .await?;
        parse_bytes(&result)
    }

    /// `eth_sendTransaction` firmado por la wallet; devuelve el hash
    pub async fn send_transaction(&self, params: &TransactionParams) -> DappResult<String> {
        let tx = serde_json::to_value(params)?;
        let hash = self
            .provider
            .request("eth_sendTransaction", Value::Array(vec![tx]))
            .await?;
        hash.as_str()
            .map(str::to_string)
            .ok_or_else(|| DappError::Decode(format!("expected tx hash, got {}", hash)))
    }

    /// `None` mientras la transacción está pendiente
    pub async fn transaction_receipt(&self, tx_hash: &str) -> DappResult<Option<TransactionReceipt>> {
        let receipt = self
            .provider
            .request(
                "eth_getTransactionReceipt",
                Value::Array(vec![Value::from(tx_hash)]),
            )
            .await?;
        if receipt.is_null() {
            return Ok(None);
        }
        Ok(Some(serde_json::from_value(receipt)?))
    }

    /// Esperar a que la transacción se mine. Sin límite de tiempo: solo
    /// termina con el recibo o con un error del proveedor.
    pub async fn wait_for_receipt<E: Environment>(
        &self,
        tx_hash: &str,
        env: &E,
        poll_interval_ms: u32,
    ) -> DappResult<TransactionReceipt> {
        loop {
            if let Some(receipt) = self.transaction_receipt(tx_hash).await? {
                if !receipt.succeeded() {
                    return Err(DappError::Reverted {
                        tx_hash: receipt.transaction_hash,
                    });
                }
                return Ok(receipt);
            }
            env.sleep(poll_interval_ms).await;
        }
    }
}

fn parse_bytes(value: &Value) -> DappResult<Bytes> {
    let hex = value
        .as_str()
        .ok_or_else(|| DappError::Decode(format!("expected hex string, got {}", value)))?;
    Bytes::from_str(hex).map_err(|e| DappError::Decode(format!("{}: {}", hex, e)))
}
