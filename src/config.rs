// ============================================================================
// CONFIGURACIÓN - Variables de entorno en tiempo de compilación
// ============================================================================
// `build.rs` carga `.env`; `option_env!` fija los valores en el binario.
// ============================================================================

use std::str::FromStr;

use alloy_primitives::utils::parse_ether;
use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::error::DappError;
use crate::utils::constants::ONE_NIGHT_SECONDS;

const DEFAULT_TOKEN_ADDRESS: &str = "0x7c01a66a51FA9a5e126D0950717e8d873da50d03";
const DEFAULT_BOOKING_ADDRESS: &str = "0x5e548731fB78433dc14958b7B8a0e896f7ffB17C";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub token_address: String,
    pub booking_address: String,
    pub token_symbol: String,
    pub purchase_amount_ether: String,
    /// 1 ETH = `exchange_rate` tokens (solo informativo, lo aplica el contrato)
    pub exchange_rate: u64,
    pub receipt_poll_interval_ms: u32,
    pub language: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            token_address: DEFAULT_TOKEN_ADDRESS.to_string(),
            booking_address: DEFAULT_BOOKING_ADDRESS.to_string(),
            token_symbol: "HTK".to_string(),
            purchase_amount_ether: "0.1".to_string(),
            exchange_rate: 1000,
            receipt_poll_interval_ms: 1500,
            language: "ZH".to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            token_address: option_env!("HOTEL_TOKEN_ADDRESS")
                .map(str::to_string)
                .unwrap_or(defaults.token_address),
            booking_address: option_env!("HOTEL_BOOKING_ADDRESS")
                .map(str::to_string)
                .unwrap_or(defaults.booking_address),
            token_symbol: option_env!("TOKEN_SYMBOL")
                .map(str::to_string)
                .unwrap_or(defaults.token_symbol),
            purchase_amount_ether: option_env!("PURCHASE_AMOUNT_ETHER")
                .map(str::to_string)
                .unwrap_or(defaults.purchase_amount_ether),
            exchange_rate: option_env!("EXCHANGE_RATE")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.exchange_rate),
            receipt_poll_interval_ms: option_env!("RECEIPT_POLL_INTERVAL_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.receipt_poll_interval_ms),
            language: option_env!("LANGUAGE")
                .map(str::to_uppercase)
                .unwrap_or(defaults.language),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

/// Direcciones de los contratos externos (ya desplegados)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractAddresses {
    pub token: Address,
    pub booking: Address,
}

/// Configuración ya validada que consume el bucle de actualización
#[derive(Debug, Clone, PartialEq)]
pub struct DappSettings {
    pub contracts: ContractAddresses,
    /// Cantidad en wei enviada en cada compra
    pub purchase_amount: U256,
    pub stay_seconds: u64,
    pub token_symbol: String,
    pub exchange_rate: u64,
    pub receipt_poll_interval_ms: u32,
}

impl DappSettings {
    pub fn from_config(config: &AppConfig) -> Result<Self, DappError> {
        let token = parse_address("token_address", &config.token_address)?;
        let booking = parse_address("booking_address", &config.booking_address)?;
        let purchase_amount = parse_ether(&config.purchase_amount_ether).map_err(|e| {
            DappError::Config(format!(
                "purchase_amount_ether={}: {}",
                config.purchase_amount_ether, e
            ))
        })?;

        Ok(Self {
            contracts: ContractAddresses { token, booking },
            purchase_amount,
            stay_seconds: ONE_NIGHT_SECONDS,
            token_symbol: config.token_symbol.clone(),
            exchange_rate: config.exchange_rate,
            receipt_poll_interval_ms: config.receipt_poll_interval_ms,
        })
    }
}

fn parse_address(field: &str, value: &str) -> Result<Address, DappError> {
    Address::from_str(value).map_err(|e| DappError::Config(format!("{}={}: {}", field, value, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_settings_parse() {
        let settings = DappSettings::from_config(&AppConfig::default()).unwrap();
        assert_eq!(
            settings.contracts.token,
            Address::from_str(DEFAULT_TOKEN_ADDRESS).unwrap()
        );
        // 0.1 ETH
        assert_eq!(settings.purchase_amount, U256::from(100_000_000_000_000_000u64));
        assert_eq!(settings.stay_seconds, 86_400);
    }

    #[test]
    fn bad_address_is_a_config_error() {
        let config = AppConfig {
            booking_address: "0xnot-an-address".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(
            DappSettings::from_config(&config),
            Err(DappError::Config(_))
        ));
    }

    #[test]
    fn bad_amount_is_a_config_error() {
        let config = AppConfig {
            purchase_amount_ether: "zero point one".to_string(),
            ..AppConfig::default()
        };
        assert!(DappSettings::from_config(&config).is_err());
    }
}
