// ============================================================================
// SESSION - Cuenta conectada
// ============================================================================

/// Sesión del usuario: la cuenta autorizada por la wallet.
/// Cuenta vacía = sin sesión.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Session {
    pub account: String,
    /// ¿La última carga de datos para esta cuenta terminó sin errores?
    pub loaded: bool,
}

impl Session {
    /// Activar una cuenta (nueva conexión o cambio de cuenta)
    pub fn activate(&mut self, account: impl Into<String>) {
        self.account = account.into();
        self.loaded = false;
    }

    pub fn clear(&mut self) {
        self.account.clear();
        self.loaded = false;
    }

    pub fn is_connected(&self) -> bool {
        !self.account.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_resets_loaded_flag() {
        let mut session = Session {
            account: "0xA".to_string(),
            loaded: true,
        };
        session.activate("0xB");
        assert_eq!(session.account, "0xB");
        assert!(!session.loaded);
        assert!(session.is_connected());

        session.clear();
        assert_eq!(session.account, "");
        assert!(!session.is_connected());
    }
}
