// Utils compartidos

pub mod clock;
pub mod constants;
pub mod i18n;
pub mod random;

pub use clock::{Clock, SystemClock};
pub use constants::*;
pub use i18n::{t, t_with};
pub use random::{MathRandom, RandomSource};
