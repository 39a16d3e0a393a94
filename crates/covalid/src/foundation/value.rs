//! Dynamic value model
//!
//! Rules never see user types directly. Every input is first converted
//! into a [`Value`] (see [`ToValue`](crate::foundation::ToValue)), a closed
//! set of variants that rules classify through [`Kind`].
//!
//! Pointer-like layers (`Option`, `Box`, `Arc`, references) are collapsed
//! during conversion: an absent value becomes [`Value::Nil`] and a present
//! one becomes its pointee.

use std::any::Any;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::foundation::{ToValue, Validatable, ValidationError};

/// Raised when a rule needs a number of one representation and gets another.
pub const ERR_CONVERSION: ValidationError =
    ValidationError::from_static("validation_conversion_invalid", "cannot convert {{.from}} to {{.to}}");

/// Raised when a text rule receives a value that is neither text nor bytes.
pub const ERR_NOT_STRING: ValidationError =
    ValidationError::from_static("validation_not_string", "must be either a string or byte slice");

// ============================================================================
// KIND
// ============================================================================

/// Semantic classification of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Nil,
    Bool,
    Number,
    Text,
    Collection,
    Struct,
    Other,
}

/// Capability of values the model does not know about, such as timestamps.
///
/// `is_zero` feeds the emptiness policy: a zero opaque value is blank.
pub trait Opaque: Any + fmt::Debug + fmt::Display + Send + Sync {
    /// Short name used in error messages.
    fn type_name(&self) -> &'static str;

    /// Returns `true` if the value is its type's zero value.
    fn is_zero(&self) -> bool {
        false
    }
}

// ============================================================================
// VALUE
// ============================================================================

/// A normalized input value.
#[derive(Debug, Clone, Default)]
pub enum Value {
    /// Absent value: `None`, a null JSON node, an unset pointer.
    #[default]
    Nil,
    Bool(bool),
    Int(i64),
    Uint(u64),
    Float(f64),
    Text(String),
    Bytes(Vec<u8>),
    List(Vec<Value>),
    Map(MapValue),
    Struct(StructValue),
    Opaque(Arc<dyn Opaque>),
}

impl Value {
    /// Wraps an opaque value.
    pub fn opaque(value: impl Opaque + 'static) -> Self {
        Self::Opaque(Arc::new(value))
    }

    /// Borrows an opaque value as its concrete type.
    pub fn downcast_opaque<T: Opaque>(&self) -> Option<&T> {
        match self {
            Self::Opaque(o) => {
                let any: &dyn Any = &**o;
                any.downcast_ref()
            }
            _ => None,
        }
    }

    /// Wraps raw bytes.
    pub fn bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self::Bytes(bytes.into())
    }

    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Int(_) | Self::Uint(_) | Self::Float(_) => Kind::Number,
            Self::Text(_) | Self::Bytes(_) => Kind::Text,
            Self::List(_) | Self::Map(_) => Kind::Collection,
            Self::Struct(_) => Kind::Struct,
            Self::Opaque(_) => Kind::Other,
        }
    }

    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Resolves the value, or `None` if it is nil.
    pub const fn indirect(&self) -> Option<&Self> {
        match self {
            Self::Nil => None,
            other => Some(other),
        }
    }

    /// Emptiness policy shared by every rule.
    ///
    /// Zero numbers, `false`, and zero-length text or collections are empty.
    /// Opaque values defer to [`Opaque::is_zero`]. Structs are never empty.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::Uint(u) => *u == 0,
            Self::Float(f) => *f == 0.0,
            Self::Text(s) => s.is_empty(),
            Self::Bytes(b) => b.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Map(map) => map.is_empty(),
            Self::Struct(_) => false,
            Self::Opaque(o) => o.is_zero(),
        }
    }

    /// Short type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Uint(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "string",
            Self::Bytes(_) => "bytes",
            Self::List(_) => "list",
            Self::Map(_) => "map",
            Self::Struct(_) => "struct",
            Self::Opaque(o) => o.type_name(),
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Length of text (in bytes), byte strings and collections.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::Text(s) => Some(s.len()),
            Self::Bytes(b) => Some(b.len()),
            Self::List(items) => Some(items.len()),
            Self::Map(map) => Some(map.len()),
            _ => None,
        }
    }

    /// Elements of a list or map labelled by index or key. Other values have none.
    pub fn entries(&self) -> Box<dyn Iterator<Item = (String, &Self)> + '_> {
        match self {
            Self::List(items) => Box::new(
                items.iter().enumerate().map(|(i, item)| (i.to_string(), item)),
            ),
            Self::Map(map) => Box::new(map.iter().map(|(k, v)| (k.to_string(), v))),
            _ => Box::new(std::iter::empty()),
        }
    }

    pub fn to_i64(&self) -> Result<i64, ValidationError> {
        match self {
            Self::Int(i) => Ok(*i),
            Self::Uint(u) => i64::try_from(*u).map_err(|_| conversion_error(self, "int")),
            _ => Err(conversion_error(self, "int")),
        }
    }

    pub fn to_u64(&self) -> Result<u64, ValidationError> {
        match self {
            Self::Uint(u) => Ok(*u),
            Self::Int(i) => u64::try_from(*i).map_err(|_| conversion_error(self, "uint")),
            _ => Err(conversion_error(self, "uint")),
        }
    }

    pub fn to_f64(&self) -> Result<f64, ValidationError> {
        match self {
            Self::Float(f) => Ok(*f),
            Self::Int(i) => Ok(*i as f64),
            Self::Uint(u) => Ok(*u as f64),
            _ => Err(conversion_error(self, "float")),
        }
    }

    /// JSON rendering, used for error parameters.
    pub fn to_json(&self) -> serde_json::Value {
        use serde_json::Value as Json;

        match self {
            Self::Nil => Json::Null,
            Self::Bool(b) => Json::Bool(*b),
            Self::Int(i) => Json::from(*i),
            Self::Uint(u) => Json::from(*u),
            Self::Float(f) => serde_json::Number::from_f64(*f).map_or(Json::Null, Json::Number),
            Self::Text(s) => Json::String(s.clone()),
            Self::Bytes(b) => Json::String(String::from_utf8_lossy(b).into_owned()),
            Self::List(items) => Json::Array(items.iter().map(Self::to_json).collect()),
            Self::Map(map) => Json::Object(
                map.iter()
                    .map(|(k, v)| (k.to_string(), v.to_json()))
                    .collect(),
            ),
            Self::Struct(s) => Json::Object(
                s.fields()
                    .iter()
                    .map(|f| (f.name().to_owned(), f.value().to_json()))
                    .collect(),
            ),
            Self::Opaque(o) => Json::String(o.to_string()),
        }
    }
}

fn conversion_error(value: &Value, to: &'static str) -> ValidationError {
    ERR_CONVERSION
        .with_param("from", value.type_name())
        .with_param("to", to)
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Uint(a), Self::Uint(b)) => a == b,
            (Self::Int(i), Self::Uint(u)) | (Self::Uint(u), Self::Int(i)) => {
                u64::try_from(*i).is_ok_and(|i| i == *u)
            }
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Bytes(a), Self::Bytes(b)) => a == b,
            (Self::List(a), Self::List(b)) => a == b,
            (Self::Map(a), Self::Map(b)) => a == b,
            (Self::Struct(a), Self::Struct(b)) => a == b,
            (Self::Opaque(a), Self::Opaque(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => f.write_str("<nil>"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Float(x) => write!(f, "{x}"),
            Self::Text(s) => f.write_str(s),
            Self::Bytes(b) => f.write_str(&String::from_utf8_lossy(b)),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{item}")?;
                }
                f.write_str("]")
            }
            Self::Map(map) => {
                f.write_str("map[")?;
                for (i, (k, v)) in map.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" ")?;
                    }
                    write!(f, "{k}:{v}")?;
                }
                f.write_str("]")
            }
            Self::Struct(s) => write!(f, "{}{{..}}", s.name()),
            Self::Opaque(o) => write!(f, "{o}"),
        }
    }
}

impl From<MapValue> for Value {
    fn from(map: MapValue) -> Self {
        Self::Map(map)
    }
}

impl From<StructValue> for Value {
    fn from(value: StructValue) -> Self {
        Self::Struct(value)
    }
}

/// Resolves `value`, or `None` if it is nil.
pub const fn indirect(value: &Value) -> Option<&Value> {
    value.indirect()
}

/// See [`Value::is_empty`].
pub fn is_empty(value: &Value) -> bool {
    value.is_empty()
}

/// Borrowed text view of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextRef<'a> {
    Str(&'a str),
    Bytes(&'a [u8]),
}

/// Narrows a value to text or bytes, if it is either.
pub fn string_or_bytes(value: &Value) -> Option<TextRef<'_>> {
    match value {
        Value::Text(s) => Some(TextRef::Str(s)),
        Value::Bytes(b) => Some(TextRef::Bytes(b)),
        _ => None,
    }
}

/// Narrows a value to a string; bytes are decoded lossily.
pub fn ensure_string(value: &Value) -> Result<Cow<'_, str>, ValidationError> {
    match string_or_bytes(value) {
        Some(TextRef::Str(s)) => Ok(Cow::Borrowed(s)),
        Some(TextRef::Bytes(b)) => Ok(String::from_utf8_lossy(b)),
        None => Err(ERR_NOT_STRING),
    }
}

// ============================================================================
// MAPS
// ============================================================================

/// Declared key type of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum KeyKind {
    /// Heterogeneous keys.
    #[default]
    Any,
    Bool,
    Int,
    Uint,
    Text,
}

/// A map key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
    Bool(bool),
    Int(i64),
    Uint(u64),
    Text(String),
}

impl MapKey {
    pub const fn kind(&self) -> KeyKind {
        match self {
            Self::Bool(_) => KeyKind::Bool,
            Self::Int(_) => KeyKind::Int,
            Self::Uint(_) => KeyKind::Uint,
            Self::Text(_) => KeyKind::Text,
        }
    }

    /// Converts the key into `kind`, if that can be done without loss.
    ///
    /// Heterogeneous maps store every integer that fits as `Int`.
    pub fn coerce(&self, kind: KeyKind) -> Option<Self> {
        match (kind, self) {
            (KeyKind::Any, Self::Uint(u)) => Some(i64::try_from(*u).map_or(Self::Uint(*u), Self::Int)),
            (KeyKind::Any, key) => Some(key.clone()),
            (KeyKind::Bool, Self::Bool(b)) => Some(Self::Bool(*b)),
            (KeyKind::Int, Self::Int(i)) => Some(Self::Int(*i)),
            (KeyKind::Int, Self::Uint(u)) => i64::try_from(*u).ok().map(Self::Int),
            (KeyKind::Uint, Self::Uint(u)) => Some(Self::Uint(*u)),
            (KeyKind::Uint, Self::Int(i)) => u64::try_from(*i).ok().map(Self::Uint),
            (KeyKind::Text, Self::Text(s)) => Some(Self::Text(s.clone())),
            _ => None,
        }
    }
}

impl fmt::Display for MapKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            Self::Int(i) => write!(f, "{i}"),
            Self::Uint(u) => write!(f, "{u}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MapKey {
    fn from(key: &str) -> Self {
        Self::Text(key.to_owned())
    }
}

impl From<String> for MapKey {
    fn from(key: String) -> Self {
        Self::Text(key)
    }
}

impl From<bool> for MapKey {
    fn from(key: bool) -> Self {
        Self::Bool(key)
    }
}

macro_rules! map_key_from_int {
    ($variant:ident as $repr:ty: $($t:ty),+) => {
        $(
            impl From<$t> for MapKey {
                #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
                fn from(key: $t) -> Self {
                    Self::$variant(key as $repr)
                }
            }
        )+
    };
}

map_key_from_int!(Int as i64: i8, i16, i32, i64, isize);
map_key_from_int!(Uint as u64: u8, u16, u32, u64, usize);

/// A map with a declared key type.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapValue {
    key_kind: KeyKind,
    entries: BTreeMap<MapKey, Value>,
}

impl MapValue {
    pub fn new(key_kind: KeyKind) -> Self {
        Self {
            key_kind,
            entries: BTreeMap::new(),
        }
    }

    pub const fn key_kind(&self) -> KeyKind {
        self.key_kind
    }

    /// Inserts an entry; the key is stored in the map's key type when possible.
    pub fn insert(&mut self, key: impl Into<MapKey>, value: Value) {
        let key = key.into();
        let key = key.coerce(self.key_kind).unwrap_or(key);
        self.entries.insert(key, value);
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use = "builder methods must be chained or built"]
    pub fn with<T: ToValue + ?Sized>(mut self, key: impl Into<MapKey>, value: &T) -> Self {
        self.insert(key, value.to_value());
        self
    }

    pub fn get(&self, key: &MapKey) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains_key(&self, key: &MapKey) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &MapKey> {
        self.entries.keys()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&MapKey, &Value)> {
        self.entries.iter()
    }
}

impl<K: Into<MapKey>> FromIterator<(K, Value)> for MapValue {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        let mut map = Self::new(KeyKind::Any);
        for (key, value) in iter {
            map.insert(key, value);
        }
        map
    }
}

// ============================================================================
// STRUCTS
// ============================================================================

/// A reflected struct: named fields in declaration order.
///
/// # Examples
///
/// ```rust,ignore
/// use covalid::{StructValue, ToValue, Value};
///
/// impl ToValue for Customer {
///     fn to_value(&self) -> Value {
///         StructValue::new("Customer")
///             .field("Name", &self.name)
///             .tagged_field("Email", "email,omitempty", &self.email)
///             .embedded("Address", &self.address)
///             .into()
///     }
/// }
/// ```
#[derive(Clone)]
pub struct StructValue {
    name: Cow<'static, str>,
    fields: Vec<FieldValue>,
    validator: Option<Arc<dyn Validatable>>,
}

impl StructValue {
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            validator: None,
        }
    }

    /// Adds a plain field.
    #[must_use = "builder methods must be chained or built"]
    pub fn field<T: ToValue + ?Sized>(self, name: impl Into<Cow<'static, str>>, value: &T) -> Self {
        self.push(FieldValue::new(name, None, false, value.to_value()))
    }

    /// Adds a field carrying a serialization tag such as `"email,omitempty"`.
    #[must_use = "builder methods must be chained or built"]
    pub fn tagged_field<T: ToValue + ?Sized>(
        self,
        name: impl Into<Cow<'static, str>>,
        tag: impl Into<Cow<'static, str>>,
        value: &T,
    ) -> Self {
        self.push(FieldValue::new(name, Some(tag.into()), false, value.to_value()))
    }

    /// Adds an embedded field whose own fields are promoted into this struct.
    #[must_use = "builder methods must be chained or built"]
    pub fn embedded<T: ToValue + ?Sized>(self, name: impl Into<Cow<'static, str>>, value: &T) -> Self {
        self.push(FieldValue::new(name, None, true, value.to_value()))
    }

    /// Attaches the struct's own validation, run before its rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn validated_by(mut self, validator: impl Validatable + 'static) -> Self {
        self.validator = Some(Arc::new(validator));
        self
    }

    fn push(mut self, field: FieldValue) -> Self {
        self.fields.push(field);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[FieldValue] {
        &self.fields
    }

    pub fn validator(&self) -> Option<&dyn Validatable> {
        self.validator.as_deref()
    }
}

impl fmt::Debug for StructValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StructValue")
            .field("name", &self.name)
            .field("fields", &self.fields)
            .field("validated", &self.validator.is_some())
            .finish()
    }
}

impl PartialEq for StructValue {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.fields == other.fields
    }
}

/// One field of a [`StructValue`].
#[derive(Debug, Clone, PartialEq)]
pub struct FieldValue {
    name: Cow<'static, str>,
    tag: Option<Cow<'static, str>>,
    embedded: bool,
    value: Value,
}

impl FieldValue {
    fn new(
        name: impl Into<Cow<'static, str>>,
        tag: Option<Cow<'static, str>>,
        embedded: bool,
        value: Value,
    ) -> Self {
        Self {
            name: name.into(),
            tag,
            embedded,
            value,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    pub const fn is_embedded(&self) -> bool {
        self.embedded
    }

    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// Key under which the field's errors are reported.
    ///
    /// The first segment of the tag, unless it is empty or `-`; the field
    /// name otherwise.
    pub fn error_key(&self) -> &str {
        match self.tag.as_deref().and_then(|t| t.split(',').next()) {
            Some(name) if !name.is_empty() && name != "-" => name,
            _ => &self.name,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, true)]
    #[case(Value::Bool(false), true)]
    #[case(Value::Bool(true), false)]
    #[case(Value::Int(0), true)]
    #[case(Value::Int(-1), false)]
    #[case(Value::Uint(0), true)]
    #[case(Value::Float(0.0), true)]
    #[case(Value::Float(0.1), false)]
    #[case(Value::Text(String::new()), true)]
    #[case(Value::Text("a".into()), false)]
    #[case(Value::bytes(Vec::new()), true)]
    #[case(Value::List(vec![]), true)]
    #[case(Value::List(vec![Value::Nil]), false)]
    #[case(Value::Map(MapValue::default()), true)]
    #[case(Value::Struct(StructValue::new("S")), false)]
    fn test_is_empty(#[case] value: Value, #[case] empty: bool) {
        assert_eq!(value.is_empty(), empty);
    }

    #[test]
    fn test_indirect() {
        assert!(indirect(&Value::Nil).is_none());
        assert_eq!(indirect(&Value::Int(3)), Some(&Value::Int(3)));
    }

    #[test]
    fn test_numeric_equality_across_representations() {
        assert_eq!(Value::Int(5), Value::Uint(5));
        assert_ne!(Value::Int(-5), Value::Uint(5));
        assert_ne!(Value::Int(5), Value::Float(5.0));
    }

    #[test]
    fn test_conversions() {
        assert_eq!(Value::Uint(7).to_i64(), Ok(7));
        assert_eq!(Value::Int(-1).to_u64().map_err(|e| e.to_string()), Err("cannot convert int to uint".to_owned()));
        assert_eq!(Value::Float(1.5).to_i64().map_err(|e| e.to_string()), Err("cannot convert float to int".to_owned()));
        assert_eq!(Value::Int(2).to_f64(), Ok(2.0));
    }

    #[test]
    fn test_ensure_string() {
        assert_eq!(ensure_string(&Value::Text("abc".into())).as_deref(), Ok("abc"));
        assert_eq!(ensure_string(&Value::bytes(*b"abc")).as_deref(), Ok("abc"));
        assert_eq!(ensure_string(&Value::Int(1)), Err(ERR_NOT_STRING));
    }

    #[test]
    fn test_map_key_coercion() {
        assert_eq!(MapKey::Uint(3).coerce(KeyKind::Int), Some(MapKey::Int(3)));
        assert_eq!(MapKey::Int(-3).coerce(KeyKind::Uint), None);
        assert_eq!(MapKey::Int(1).coerce(KeyKind::Text), None);
        assert_eq!(MapKey::Uint(3).coerce(KeyKind::Any), Some(MapKey::Int(3)));
    }

    #[test]
    fn test_typed_map_insert_normalizes_key() {
        let mut map = MapValue::new(KeyKind::Int);
        map.insert(3u8, Value::Bool(true));
        assert!(map.contains_key(&MapKey::Int(3)));
    }

    #[rstest]
    #[case(None, "Name")]
    #[case(Some("name"), "name")]
    #[case(Some("t4,x1,omitempty"), "t4")]
    #[case(Some(",omitempty"), "Name")]
    #[case(Some("-"), "Name")]
    fn test_field_error_key(#[case] tag: Option<&'static str>, #[case] expected: &str) {
        let field = FieldValue::new("Name", tag.map(Cow::Borrowed), false, Value::Nil);
        assert_eq!(field.error_key(), expected);
    }

    #[test]
    fn test_to_json() {
        let map: MapValue = [("a", Value::Int(1)), ("b", Value::List(vec![Value::Bool(true)]))]
            .into_iter()
            .collect();
        assert_eq!(
            Value::Map(map).to_json(),
            serde_json::json!({ "a": 1, "b": [true] })
        );
    }

    #[rstest]
    #[case(Value::Nil, Kind::Nil)]
    #[case(Value::Uint(3), Kind::Number)]
    #[case(Value::bytes(*b"ab"), Kind::Text)]
    #[case(Value::List(vec![]), Kind::Collection)]
    #[case(Value::from(StructValue::new("S")), Kind::Struct)]
    fn test_kind(#[case] value: Value, #[case] kind: Kind) {
        assert_eq!(value.kind(), kind);
    }

    #[test]
    fn test_entries_are_labelled() {
        let list = Value::List(vec![Value::Int(1), Value::Nil]);
        let labels: Vec<String> = list.entries().map(|(k, _)| k).collect();
        assert_eq!(labels, ["0", "1"]);
        assert_eq!(Value::Text("ab".into()).entries().count(), 0);
    }
}
