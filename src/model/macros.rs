//! Declarative generators for shapes and enumerations
//!
//! Every shape member is declared once with its getter, setter and builder
//! names, its type and its display label:
//!
//! ```ignore
//! shape! {
//!     /// Result of creating an IP set
//!     pub struct CreateIpSetResult = "CreateIPSetResult" {
//!         /// ID of the new IP set
//!         ip_set_id [set_ip_set_id, with_ip_set_id]: String as "IpSetId",
//!     }
//! }
//! ```

/// Generate a shape: the struct with optional members, accessors, fluent
/// builders, `Display`, serde derives and the [`Shape`](super::Shape) impl.
macro_rules! shape {
    (
        $(#[$meta:meta])*
        pub struct $name:ident = $api_name:literal {
            $(
                $(#[$field_meta:meta])*
                $field:ident [$setter:ident, $builder:ident]: $ty:ty as $label:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(
            Debug,
            Clone,
            Default,
            PartialEq,
            Eq,
            Hash,
            serde::Serialize,
            serde::Deserialize,
        )]
        #[serde(rename_all = "camelCase")]
        pub struct $name {
            $(
                $(#[$field_meta])*
                #[serde(default, skip_serializing_if = "Option::is_none")]
                $field: Option<$ty>,
            )+
        }

        impl $name {
            /// Create an instance with every member absent
            pub fn new() -> Self {
                Self::default()
            }

            $(
                $(#[$field_meta])*
                pub fn $field(&self) -> Option<<$ty as $crate::model::FieldValue>::Ref<'_>> {
                    self.$field.as_ref().map($crate::model::FieldValue::as_field_ref)
                }

                #[doc = concat!("Replace `", $label, "`; `None` marks it absent.")]
                pub fn $setter(&mut self, value: Option<$ty>) {
                    self.$field = value;
                }

                #[doc = concat!("Set `", $label, "` and return this instance for chaining.")]
                #[must_use]
                pub fn $builder(mut self, value: impl Into<$ty>) -> Self {
                    self.$field = Some(value.into());
                    self
                }
            )+
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                let mut out = $crate::model::field::ShapeWriter::begin(f)?;
                $( out.field($label, self.$field.as_ref())?; )+
                out.finish()
            }
        }

        impl $crate::model::Shape for $name {
            const SHAPE_NAME: &'static str = $api_name;
            const FIELDS: &'static [&'static str] = &[$($label),+];

            fn structural_hash(&self) -> i32 {
                let mut hasher = $crate::model::field::StructuralHasher::new();
                $( hasher.field(self.$field.as_ref()); )+
                hasher.finish()
            }
        }

        impl $crate::model::FieldValue for $name {
            type Ref<'a> = &'a $name;

            fn as_field_ref(&self) -> &$name {
                self
            }

            fn field_hash(&self) -> i32 {
                $crate::model::Shape::structural_hash(self)
            }

            fn fmt_field(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                std::fmt::Display::fmt(self, f)
            }
        }
    };
}

/// Generate a closed enumeration backed by canonical wire strings.
macro_rules! wire_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $wire:literal
            ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        pub enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $wire)]
                $variant,
            )+
        }

        impl $name {
            /// Canonical wire string of this variant
            pub const fn as_str(self) -> &'static str {
                match self {
                    $( Self::$variant => $wire, )+
                }
            }

            /// Look up a variant by canonical string; absent, empty and
            /// unknown values are rejected.
            pub fn from_value(value: Option<&str>) -> $crate::error::Result<Self> {
                <Self as $crate::model::WireEnum>::from_value(value)
            }
        }

        impl $crate::model::WireEnum for $name {
            const ENUM_NAME: &'static str = stringify!($name);
            const ALL: &'static [Self] = &[$(Self::$variant),+];
            const WIRE_VALUES: &'static [&'static str] = &[$($wire),+];

            fn as_str(self) -> &'static str {
                $name::as_str(self)
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::error::Error;

            fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
                Self::from_value(Some(s))
            }
        }

        impl From<$name> for String {
            fn from(value: $name) -> Self {
                value.as_str().to_string()
            }
        }
    };
}

/// Generate `add_*_entry` / `clear_*_entries` builders for a map member.
macro_rules! map_entries {
    ($name:ident, $field:ident: $value:ty as $label:literal {
        $add:ident, $clear:ident
    }) => {
        impl $name {
            #[doc = concat!("Add one entry to `", $label, "`, creating the map if absent.")]
            ///
            /// Fails with `InvalidArgument` if the key is already present.
            pub fn $add(
                mut self,
                key: impl Into<String>,
                value: impl Into<$value>,
            ) -> $crate::error::Result<Self> {
                $crate::model::field::insert_entry(
                    &mut self.$field,
                    $label,
                    key.into(),
                    value.into(),
                )?;
                Ok(self)
            }

            #[doc = concat!("Remove every entry of `", $label, "`, marking it absent.")]
            #[must_use]
            pub fn $clear(mut self) -> Self {
                self.$field = None;
                self
            }
        }
    };
}
