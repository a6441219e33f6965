// ============================================================================
// CLOCK - Fuente de tiempo inyectable
// ============================================================================

/// Reloj en segundos desde epoch (inyectable para tests)
pub trait Clock {
    fn now_secs(&self) -> u64;
}

/// Reloj real del navegador (chrono con `wasmbind` usa `Date.now()`)
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_secs(&self) -> u64 {
        chrono::Utc::now().timestamp().max(0) as u64
    }
}

/// Formatea un timestamp para los logs
pub fn format_timestamp(secs: u64) -> String {
    i64::try_from(secs)
        .ok()
        .and_then(|s| chrono::DateTime::from_timestamp(s, 0))
        .map(|dt| dt.format("%Y-%m-%d %H:%M:%S UTC").to_string())
        .unwrap_or_else(|| secs.to_string())
}
