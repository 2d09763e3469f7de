use std::fmt;

/// Single mapping table between a wire code, its enum variant and the label
/// shown in the UI.
///
/// Every status-like field of the model is declared through [`code_enum!`],
/// which fills `ENTRIES` and derives serde on top of it, so the code strings
/// live in exactly one place.
pub trait CodeTable: Copy + PartialEq + fmt::Debug + 'static {
    /// `(variant, wire code, label)`
    const ENTRIES: &'static [(Self, &'static str, &'static str)];

    /// Type name used in decode errors
    const KIND: &'static str;

    /// Variant an unlisted wire code decodes to; `None` rejects it
    const UNKNOWN: Option<Self> = None;

    fn code(self) -> &'static str {
        Self::ENTRIES
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, code, _)| *code)
            .unwrap_or_default()
    }

    fn label(self) -> &'static str {
        Self::ENTRIES
            .iter()
            .find(|(variant, _, _)| *variant == self)
            .map(|(_, _, label)| *label)
            .unwrap_or_default()
    }

    fn from_code(code: &str) -> Option<Self> {
        let code = code.trim();
        Self::ENTRIES
            .iter()
            .find(|(_, c, _)| *c == code)
            .map(|(variant, _, _)| *variant)
    }

    fn all() -> Vec<Self> {
        Self::ENTRIES.iter().map(|(variant, _, _)| *variant).collect()
    }
}

/// Serde visitor shared by all code enums: accepts the code as a string or,
/// for numeric codes, as a JSON number.
pub(crate) struct CodeVisitor<T>(pub(crate) std::marker::PhantomData<T>);

impl<'de, T: CodeTable> serde::de::Visitor<'de> for CodeVisitor<T> {
    type Value = T;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a {} code", T::KIND)
    }

    fn visit_str<E: serde::de::Error>(self, v: &str) -> Result<T, E> {
        T::from_code(v)
            .or(T::UNKNOWN)
            .ok_or_else(|| E::custom(format!("unknown {} code: {:?}", T::KIND, v)))
    }

    fn visit_u64<E: serde::de::Error>(self, v: u64) -> Result<T, E> {
        self.visit_str(&v.to_string())
    }

    fn visit_i64<E: serde::de::Error>(self, v: i64) -> Result<T, E> {
        self.visit_str(&v.to_string())
    }
}

/// Declares a code enum together with its `CodeTable`, serde and `Display`
/// (label) implementations. A trailing `unknown => Variant;` makes unlisted
/// codes decode to that variant instead of failing.
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $( $(#[$vmeta:meta])* $variant:ident => ($code:literal, $label:literal) ),+ $(,)?
        }
        $( unknown => $unknown:ident; )?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        $vis enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $crate::enums::CodeTable for $name {
            const ENTRIES: &'static [(Self, &'static str, &'static str)] =
                &[ $( ($name::$variant, $code, $label) ),+ ];
            const KIND: &'static str = stringify!($name);
            $( const UNKNOWN: Option<Self> = Some($name::$unknown); )?
        }

        impl ::serde::Serialize for $name {
            fn serialize<S: ::serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str($crate::enums::CodeTable::code(*self))
            }
        }

        impl<'de> ::serde::Deserialize<'de> for $name {
            fn deserialize<D: ::serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                deserializer.deserialize_any($crate::enums::code_table::CodeVisitor::<$name>(
                    ::std::marker::PhantomData,
                ))
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                f.write_str($crate::enums::CodeTable::label(*self))
            }
        }
    };
}

pub(crate) use code_enum;
