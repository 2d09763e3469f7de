//! How a resource is shown: table columns, detail rows, disable summary.

use contracts::domain::common::Resource;
use contracts::enums::{CodeTable, StatusFlag};

use super::form::{FormModel, LookupKind};
use crate::shared::date_utils::format_datetime_or_dash;

/// Badge colour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Success,
    Warning,
    Error,
    Neutral,
}

impl Tone {
    /// Variant name of the `Badge` component
    pub fn variant(self) -> &'static str {
        match self {
            Tone::Primary => "primary",
            Tone::Success => "success",
            Tone::Warning => "warning",
            Tone::Error => "error",
            Tone::Neutral => "neutral",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Strong(String),
    Badge { label: String, tone: Tone },
    Lines(Vec<String>),
}

impl Cell {
    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    /// Status badge: green when active, red otherwise
    pub fn status<S: StatusFlag>(status: S) -> Self {
        Cell::Badge {
            label: status.label().to_string(),
            tone: if status.is_active() {
                Tone::Success
            } else {
                Tone::Error
            },
        }
    }

    pub fn optional(value: Option<&str>) -> Self {
        Cell::Text(
            value
                .filter(|v| !v.trim().is_empty())
                .unwrap_or("-")
                .to_string(),
        )
    }

    pub fn datetime(value: Option<&str>) -> Self {
        Cell::Text(format_datetime_or_dash(value))
    }

    /// Plain text of the cell, as shown
    pub fn plain(&self) -> String {
        match self {
            Cell::Text(v) | Cell::Strong(v) => v.clone(),
            Cell::Badge { label, .. } => label.clone(),
            Cell::Lines(lines) => lines.join(" "),
        }
    }
}

/// Card of a child row shown under an expanded master row
#[derive(Debug, Clone, PartialEq)]
pub struct ChildCard {
    pub id: i64,
    pub title: String,
    pub badges: Vec<(String, Tone)>,
}

/// UI description of a resource page
pub trait CrudResource: Resource {
    type Form: FormModel<Item = Self>;

    /// DOM id of the list page (`{index}_{name}--list`)
    fn page_id() -> &'static str;

    fn columns() -> Vec<&'static str>;

    fn cells(&self) -> Vec<Cell>;

    fn detail_rows(&self) -> Vec<(&'static str, Cell)>;

    /// Facts shown in the disable confirmation
    fn disable_summary(&self) -> Vec<(&'static str, String)> {
        vec![
            ("ID", self.id().to_string()),
            ("Nombre", self.name().to_string()),
            ("Estado", self.status().label().to_string()),
        ]
    }

    fn disable_warning(&self) -> Option<String> {
        None
    }

    /// Whether rows expand to show child rows
    fn expandable() -> bool {
        false
    }

    /// Child rows revealed by expanding this row
    fn children(&self) -> Vec<ChildCard> {
        Vec::new()
    }

    /// Heading and cards of the child section of the detail dialog
    fn detail_children(&self) -> Option<(String, Vec<ChildCard>)> {
        Self::expandable().then(|| {
            let cards = self.children();
            (format!("Elementos Asociados ({})", cards.len()), cards)
        })
    }

    fn can_disable(&self) -> bool {
        self.status().is_active()
    }

    /// Option lists the form needs
    fn lookups() -> Vec<LookupKind> {
        Vec::new()
    }

    /// "Nuevo …" / "Nueva …"
    fn create_label() -> String {
        let article = if Self::feminine() { "Nueva" } else { "Nuevo" };
        format!("{} {}", article, Self::element_name())
    }

    /// Text of an empty list
    fn empty_text() -> String {
        format!("No hay {} disponibles", Self::list_name().to_lowercase())
    }
}

/// Audit rows shared by every detail dialog
pub fn audit_rows<R: Resource>(item: &R) -> Vec<(&'static str, Cell)> {
    let audit = item.audit();
    vec![
        ("Usuario Registro", Cell::optional(Some(&audit.usuario_registro))),
        ("Fecha Registro", Cell::datetime(Some(&audit.fecha_registro))),
        (
            "Usuario Modificación",
            Cell::optional(audit.usuario_modificacion.as_deref()),
        ),
        (
            "Fecha Modificación",
            Cell::datetime(audit.fecha_modificacion.as_deref()),
        ),
    ]
}

/// Spanish participle agreeing with the resource ("creado" / "creada")
pub fn agree<R: Resource>(masculine: &str) -> String {
    if R::feminine() {
        match masculine.strip_suffix('o') {
            Some(stem) => format!("{}a", stem),
            None => masculine.to_string(),
        }
    } else {
        masculine.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contracts::domain::a002_parameter_group::aggregate::ParameterGroup;
    use contracts::domain::a003_system_entity::aggregate::SystemEntity;
    use contracts::enums::{ParameterStatus, RecordStatus};

    #[test]
    fn test_status_cell() {
        assert_eq!(
            Cell::status(ParameterStatus::Active),
            Cell::Badge {
                label: "Activo".to_string(),
                tone: Tone::Success
            }
        );
        assert_eq!(Cell::status(RecordStatus::Disabled).plain(), "Inactivo");
    }

    #[test]
    fn test_optional_and_dates() {
        assert_eq!(Cell::optional(None).plain(), "-");
        assert_eq!(Cell::optional(Some("  ")).plain(), "-");
        assert_eq!(Cell::datetime(None).plain(), "-");
    }

    #[test]
    fn test_agreement() {
        assert_eq!(agree::<SystemEntity>("creado"), "creada");
        assert_eq!(agree::<ParameterGroup>("creado"), "creado");
    }
}
