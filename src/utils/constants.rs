/// Decimales del token HTK (convención fija de 18, igual que wei/ether)
pub const TOKEN_DECIMALS: u8 = 18;

/// Estancia fija de una noche: check-out = check-in + 86400 s
pub const ONE_NIGHT_SECONDS: u64 = 86_400;

/// ID del contenedor raíz en index.html
pub const ROOT_ELEMENT_ID: &str = "app";
