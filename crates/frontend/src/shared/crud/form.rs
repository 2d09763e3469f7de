//! Form schema and the edit model behind the create/edit dialog.

use std::collections::BTreeMap;

use contracts::domain::common::Resource;
use contracts::enums::CodeTable;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit,
}

/// Option list loaded from another collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LookupKind {
    ParameterGroups,
    Entities,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Options of a code enum, in wire order
pub fn code_options<T: CodeTable>() -> Vec<SelectOption> {
    T::ENTRIES
        .iter()
        .map(|(_, code, label)| SelectOption::new(*code, *label))
        .collect()
}

#[derive(Debug, Clone, PartialEq)]
pub enum FieldKind {
    Text,
    Number,
    Select(Vec<SelectOption>),
    /// Options come from a lookup; `empty` adds a leading "no value" entry
    Lookup {
        kind: LookupKind,
        empty: Option<&'static str>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub placeholder: &'static str,
}

impl FieldSpec {
    pub fn text(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            kind: FieldKind::Text,
            required: false,
            placeholder: "",
        }
    }

    pub fn number(key: &'static str, label: &'static str) -> Self {
        Self {
            kind: FieldKind::Number,
            ..Self::text(key, label)
        }
    }

    pub fn select(key: &'static str, label: &'static str, options: Vec<SelectOption>) -> Self {
        Self {
            kind: FieldKind::Select(options),
            ..Self::text(key, label)
        }
    }

    pub fn lookup(key: &'static str, label: &'static str, kind: LookupKind) -> Self {
        Self {
            kind: FieldKind::Lookup { kind, empty: None },
            ..Self::text(key, label)
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn placeholder(mut self, placeholder: &'static str) -> Self {
        self.placeholder = placeholder;
        self
    }

    pub fn with_empty(mut self, label: &'static str) -> Self {
        if let FieldKind::Lookup { empty, .. } = &mut self.kind {
            *empty = Some(label);
        }
        self
    }
}

/// Validation messages by field key
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, String>);

impl FieldErrors {
    pub fn add(&mut self, key: &'static str, message: impl Into<String>) {
        self.0.insert(key, message.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn remove(&mut self, key: &str) {
        self.0.remove(key);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// `Ok(())` when nothing was reported
    pub fn into_result(self) -> Result<(), FieldErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }

    /// Require a non-blank value
    pub fn require(&mut self, key: &'static str, value: &str, message: &str) {
        if value.trim().is_empty() {
            self.add(key, message);
        }
    }

    /// Require a positive integer, returning it when valid
    pub fn require_id(&mut self, key: &'static str, value: &str, message: &str) -> Option<i64> {
        match value.trim().parse::<i64>() {
            Ok(id) if id > 0 => Some(id),
            _ => {
                self.add(key, message);
                None
            }
        }
    }
}

/// Key of the user field present in every form. It fills `usuarioRegistro`
/// on create and `usuarioModificacion` on edit.
pub const USER_FIELD: &str = "usuario";

/// Edit model of a create/edit dialog.
///
/// Field values are held as the strings the inputs show; conversion to the
/// typed DTOs happens in `to_create`/`to_update`, which also validate.
pub trait FormModel: Clone + Default + PartialEq + Send + Sync + 'static {
    type Item: Resource;

    /// Blank form with the defaults of a new record
    fn for_create() -> Self {
        Self::default()
    }

    /// Form pre-filled from an existing record (user left blank)
    fn from_item(item: &Self::Item) -> Self;

    fn schema(mode: FormMode) -> Vec<FieldSpec>;

    fn value(&self, key: &str) -> String;

    fn set_value(&mut self, key: &str, value: String);

    fn validate(&self, mode: FormMode) -> FieldErrors;

    fn to_create(&self) -> Result<<Self::Item as Resource>::Create, FieldErrors>;

    /// Changed mutable fields plus the modifying user
    fn to_update(
        &self,
        original: &Self::Item,
    ) -> Result<<Self::Item as Resource>::Update, FieldErrors>;
}

/// `Some(new)` when it differs from `old`
pub fn changed<T: PartialEq>(old: &T, new: T) -> Option<T> {
    (old != &new).then_some(new)
}
