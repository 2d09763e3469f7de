use super::code_table::code_enum;

code_enum! {
    /// Synchronization policy of a system entity (`modoSincronizacion`)
    pub enum SyncMode {
        Manual => ("0", "Manual"),
        Automatic => ("1", "Automático"),
        Hybrid => ("2", "Híbrido"),
        Disabled => ("3", "Deshabilitado"),
    }
}

impl Default for SyncMode {
    fn default() -> Self {
        SyncMode::Hybrid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::CodeTable;

    #[test]
    fn test_all_modes_in_wire_order() {
        let codes: Vec<&str> = SyncMode::all().into_iter().map(|m| m.code()).collect();
        assert_eq!(codes, vec!["0", "1", "2", "3"]);
    }

    #[test]
    fn test_numeric_code_is_accepted() {
        let mode: SyncMode = serde_json::from_str("1").unwrap();
        assert_eq!(mode, SyncMode::Automatic);
        let mode: SyncMode = serde_json::from_str("\"3\"").unwrap();
        assert_eq!(mode.label(), "Deshabilitado");
    }

    #[test]
    fn test_unknown_mode_is_rejected() {
        assert!(serde_json::from_str::<SyncMode>("\"9\"").is_err());
    }
}
