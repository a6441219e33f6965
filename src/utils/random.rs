// ============================================================================
// RANDOM - Selección aleatoria inyectable
// ============================================================================

/// Fuente de aleatoriedad para elegir habitación.
/// `next_index(len)` debe devolver un valor en `0..len` (`len > 0`).
pub trait RandomSource {
    fn next_index(&mut self, len: usize) -> usize;
}

/// `Math.random()` del navegador, igual que `Math.floor(Math.random() * len)`
#[derive(Debug, Default, Clone, Copy)]
pub struct MathRandom;

impl RandomSource for MathRandom {
    fn next_index(&mut self, len: usize) -> usize {
        let draw = (js_sys::Math::random() * len as f64).floor() as usize;
        draw.min(len.saturating_sub(1))
    }
}
