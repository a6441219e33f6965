// ============================================================================
// MÓDULO DE INTERNACIONALIZACIÓN
// ============================================================================

use std::collections::HashMap;

/// Obtener diccionario de traducciones para un idioma
fn get_translations(lang: &str) -> HashMap<&'static str, &'static str> {
    let mut translations = HashMap::new();
    let lang_upper = lang.to_uppercase();

    match lang_upper.as_str() {
        "EN" => {
            // Header
            translations.insert("titulo", "Hotel Booking DApp");
            translations.insert("cuenta_conectada", "Connected account");
            translations.insert("saldo_tokens", "Token balance");
            translations.insert("sin_cuenta", "Not connected");

            // Acciones
            translations.insert("comprar_tokens", "Buy tokens with ETH");
            translations.insert("reservar_aleatoria", "Book a random free room");
            translations.insert("tasa_cambio", "1 ETH = {rate} {symbol}");

            // Habitaciones
            translations.insert("precio_noche", "Price per night");
            translations.insert("estado_habitacion", "Room status");
            translations.insert("libre", "Available");
            translations.insert("reservada", "Booked");
            translations.insert("sin_habitaciones", "No room information yet");

            // Alertas
            translations.insert("instalar_wallet", "Please install the MetaMask extension!");
            translations.insert("proveedor_no_cargado", "Web3 is not loaded, make sure MetaMask is connected!");
            translations.insert("compra_exitosa", "Tokens purchased successfully!");
            translations.insert("no_hay_habitaciones", "No rooms available!");
            translations.insert("reserva_exitosa", "Room booked successfully, room number: {id}");
        }
        "ES" => {
            // Header
            translations.insert("titulo", "DApp de Reservas de Hotel");
            translations.insert("cuenta_conectada", "Cuenta conectada");
            translations.insert("saldo_tokens", "Saldo de tokens");
            translations.insert("sin_cuenta", "Sin conectar");

            // Acciones
            translations.insert("comprar_tokens", "Comprar tokens con ETH");
            translations.insert("reservar_aleatoria", "Reservar habitación libre al azar");
            translations.insert("tasa_cambio", "1 ETH = {rate} {symbol}");

            // Habitaciones
            translations.insert("precio_noche", "Precio por noche");
            translations.insert("estado_habitacion", "Estado");
            translations.insert("libre", "Libre");
            translations.insert("reservada", "Reservada");
            translations.insert("sin_habitaciones", "Todavía no hay información de habitaciones");

            // Alertas
            translations.insert("instalar_wallet", "¡Por favor instala la extensión MetaMask!");
            translations.insert("proveedor_no_cargado", "Web3 no está cargado, ¡asegúrate de conectar MetaMask!");
            translations.insert("compra_exitosa", "¡Compra de tokens exitosa!");
            translations.insert("no_hay_habitaciones", "¡No hay habitaciones libres!");
            translations.insert("reserva_exitosa", "Reserva exitosa, habitación número: {id}");
        }
        _ => {
            // ZH por defecto (textos de la interfaz original)
            translations.insert("titulo", "酒店预订DApp");
            translations.insert("cuenta_conectada", "连接的账户");
            translations.insert("saldo_tokens", "代币余额");
            translations.insert("sin_cuenta", "未连接");

            translations.insert("comprar_tokens", "使用ETH购买代币");
            translations.insert("reservar_aleatoria", "预订随机空房");
            translations.insert("tasa_cambio", "1 ETH = {rate} {symbol}");

            translations.insert("precio_noche", "每晚价格");
            translations.insert("estado_habitacion", "房间状态");
            translations.insert("libre", "空闲");
            translations.insert("reservada", "已预订");
            translations.insert("sin_habitaciones", "暂无房间信息");

            translations.insert("instalar_wallet", "请安装 MetaMask 扩展！");
            translations.insert("proveedor_no_cargado", "Web3 未加载，请确保连接了 MetaMask！");
            translations.insert("compra_exitosa", "代币购买成功！");
            translations.insert("no_hay_habitaciones", "没有空房间！");
            translations.insert("reserva_exitosa", "成功订房，房间号: {id}");
        }
    }

    translations
}

/// Función de traducción
///
/// Devuelve la clave tal cual si no existe traducción.
pub fn t(key: &str, lang: &str) -> String {
    get_translations(lang)
        .get(key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| key.to_string())
}

/// Traducción con sustitución de `{nombre}` por valores
pub fn t_with(key: &str, lang: &str, args: &[(&str, &str)]) -> String {
    args.iter().fold(t(key, lang), |text, (name, value)| {
        text.replace(&format!("{{{}}}", name), value)
    })
}
