// ============================================================================
// TOKEN BALANCE - Saldo HTK de la cuenta
// ============================================================================

use alloy_primitives::U256;

/// Saldo del token. Se vuelve a derivar del contrato en cada carga.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenBalance {
    pub display: String,
}

impl TokenBalance {
    pub fn from_raw(raw: U256, decimals: u8) -> Self {
        Self {
            display: format_units(raw, decimals),
        }
    }
}

impl Default for TokenBalance {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
        }
    }
}

/// Entero en la unidad mínima -> decimal, sin ceros finales
/// (`5000000000000000000` con 18 decimales -> `"5"`).
pub fn format_units(raw: U256, decimals: u8) -> String {
    let base = U256::from(10u8).pow(U256::from(decimals));
    let whole = raw / base;
    let fraction = raw % base;

    if fraction.is_zero() {
        return whole.to_string();
    }

    let padded = format!("{:0>width$}", fraction.to_string(), width = decimals as usize);
    format!("{}.{}", whole, padded.trim_end_matches('0'))
}
