//! Field-level building blocks shared by every generated shape
//!
//! [`FieldValue`] is implemented for each type a shape member can hold. It
//! decides how a member is borrowed by its getter, how it contributes to the
//! structural hash, and how it is rendered inside a shape's `Display` output.
//!
//! Structural hashes are deterministic across processes and platforms. They
//! use the 31-based polynomial scheme of the service's other SDKs, so a given
//! payload hashes to the same value everywhere.

use std::collections::BTreeMap;
use std::fmt;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use crate::error::{Error, Result};

/// Multiplier used when folding member hashes together
const HASH_PRIME: i32 = 31;

/// Behaviour shared by every type that can be stored in a shape member.
pub trait FieldValue {
    /// Borrowed view handed out by the member getter
    type Ref<'a>
    where
        Self: 'a;

    /// Borrow the value for a getter
    fn as_field_ref(&self) -> Self::Ref<'_>;

    /// Deterministic hash contribution of a present value
    fn field_hash(&self) -> i32;

    /// Render the value inside a shape's display string
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result;
}

impl FieldValue for String {
    type Ref<'a> = &'a str;

    fn as_field_ref(&self) -> &str {
        self.as_str()
    }

    fn field_hash(&self) -> i32 {
        self.encode_utf16()
            .fold(0i32, |hash, unit| hash.wrapping_mul(HASH_PRIME).wrapping_add(i32::from(unit)))
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self)
    }
}

impl FieldValue for i32 {
    type Ref<'a> = i32;

    fn as_field_ref(&self) -> i32 {
        *self
    }

    fn field_hash(&self) -> i32 {
        *self
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldValue for i64 {
    type Ref<'a> = i64;

    fn as_field_ref(&self) -> i64 {
        *self
    }

    fn field_hash(&self) -> i32 {
        let bits = *self as u64;
        (bits ^ (bits >> 32)) as i32
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl FieldValue for bool {
    type Ref<'a> = bool;

    fn as_field_ref(&self) -> bool {
        *self
    }

    fn field_hash(&self) -> i32 {
        if *self { 1231 } else { 1237 }
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

/// Floating-point member value.
///
/// Equality and hashing go through the bit pattern, with every NaN collapsed
/// to one canonical NaN, so shapes holding coordinates stay `Eq + Hash`.
/// `0.0` and `-0.0` are distinct.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Double(f64);

impl Double {
    pub const fn new(value: f64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> f64 {
        self.0
    }

    fn bits(self) -> u64 {
        if self.0.is_nan() {
            f64::NAN.to_bits()
        } else {
            self.0.to_bits()
        }
    }
}

impl From<f64> for Double {
    fn from(value: f64) -> Self {
        Self(value)
    }
}

impl PartialEq for Double {
    fn eq(&self, other: &Self) -> bool {
        self.bits() == other.bits()
    }
}

impl Eq for Double {}

impl Hash for Double {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.bits().hash(state);
    }
}

impl FieldValue for Double {
    type Ref<'a> = f64;

    fn as_field_ref(&self) -> f64 {
        self.0
    }

    fn field_hash(&self) -> i32 {
        let bits = self.bits();
        (bits ^ (bits >> 32)) as i32
    }

    // Debug keeps the fractional part (`8.0`, not `8`)
    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl<T: FieldValue> FieldValue for Vec<T> {
    type Ref<'a>
        = &'a [T]
    where
        Self: 'a;

    fn as_field_ref(&self) -> &[T] {
        self.as_slice()
    }

    fn field_hash(&self) -> i32 {
        self.iter().fold(1i32, |hash, item| {
            hash.wrapping_mul(HASH_PRIME).wrapping_add(item.field_hash())
        })
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, item) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            item.fmt_field(f)?;
        }
        f.write_str("]")
    }
}

impl<V: FieldValue> FieldValue for BTreeMap<String, V> {
    type Ref<'a>
        = &'a BTreeMap<String, V>
    where
        Self: 'a;

    fn as_field_ref(&self) -> &BTreeMap<String, V> {
        self
    }

    // Entry order does not matter: each entry contributes key ^ value and
    // the contributions are summed.
    fn field_hash(&self) -> i32 {
        self.iter().fold(0i32, |hash, (key, value)| {
            hash.wrapping_add(key.field_hash() ^ value.field_hash())
        })
    }

    fn fmt_field(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}=")?;
            value.fmt_field(f)?;
        }
        f.write_str("}")
    }
}

/// A generated request, result or nested value object.
pub trait Shape:
    fmt::Display + fmt::Debug + Clone + Default + Eq + Serialize + DeserializeOwned
{
    /// Name of the shape in the service API (e.g. `CreateIPSetResult`)
    const SHAPE_NAME: &'static str;

    /// Display labels of the members, in declaration order
    const FIELDS: &'static [&'static str];

    /// Deterministic hash over all members; equal shapes hash equally
    fn structural_hash(&self) -> i32;
}

/// A closed enumeration with one canonical wire string per variant.
pub trait WireEnum: Copy + Eq + fmt::Display + 'static {
    /// Name of the enumeration in the service API
    const ENUM_NAME: &'static str;

    /// Every variant, in declaration order
    const ALL: &'static [Self];

    /// Canonical strings, in declaration order
    const WIRE_VALUES: &'static [&'static str];

    /// Canonical string of this variant
    fn as_str(self) -> &'static str;

    /// Look up a variant by its canonical string.
    ///
    /// Absent or empty input and unrecognised strings fail with
    /// [`Error::InvalidArgument`]. Matching is exact and case-sensitive.
    fn from_value(value: Option<&str>) -> Result<Self> {
        let value = match value {
            Some(v) if !v.is_empty() => v,
            _ => {
                return Err(Error::InvalidArgument(format!(
                    "{} value cannot be empty",
                    Self::ENUM_NAME
                )));
            }
        };

        Self::ALL
            .iter()
            .copied()
            .find(|variant| variant.as_str() == value)
            .ok_or_else(|| {
                Error::InvalidArgument(format!(
                    "'{}' is not a valid {}",
                    value,
                    Self::ENUM_NAME
                ))
            })
    }
}

/// Accumulates member hashes in declaration order.
pub(crate) struct StructuralHasher {
    hash: i32,
}

impl StructuralHasher {
    pub(crate) fn new() -> Self {
        Self { hash: 1 }
    }

    pub(crate) fn field<T: FieldValue>(&mut self, value: Option<&T>) {
        let contribution = value.map_or(0, FieldValue::field_hash);
        self.hash = self.hash.wrapping_mul(HASH_PRIME).wrapping_add(contribution);
    }

    pub(crate) fn finish(&self) -> i32 {
        self.hash
    }
}

/// Writes `{Label: value, Label: value}`, skipping absent members.
pub(crate) struct ShapeWriter<'a, 'b> {
    f: &'a mut fmt::Formatter<'b>,
    empty: bool,
}

impl<'a, 'b> ShapeWriter<'a, 'b> {
    pub(crate) fn begin(f: &'a mut fmt::Formatter<'b>) -> std::result::Result<Self, fmt::Error> {
        f.write_str("{")?;
        Ok(Self { f, empty: true })
    }

    pub(crate) fn field<T: FieldValue>(&mut self, label: &str, value: Option<&T>) -> fmt::Result {
        let Some(value) = value else {
            return Ok(());
        };

        if !self.empty {
            self.f.write_str(", ")?;
        }
        self.empty = false;

        write!(self.f, "{label}: ")?;
        value.fmt_field(self.f)
    }

    pub(crate) fn finish(self) -> fmt::Result {
        self.f.write_str("}")
    }
}

/// Insert into an optional map member, creating the map on first use.
///
/// Fails if `key` is already present; the existing entry is left untouched.
pub(crate) fn insert_entry<V>(
    map: &mut Option<BTreeMap<String, V>>,
    member: &str,
    key: String,
    value: V,
) -> Result<()> {
    let entries = map.get_or_insert_with(BTreeMap::new);
    if entries.contains_key(&key) {
        return Err(Error::InvalidArgument(format!(
            "duplicate key '{key}' provided for {member}"
        )));
    }
    entries.insert(key, value);
    Ok(())
}
