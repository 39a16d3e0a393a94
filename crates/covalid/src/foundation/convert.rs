//! Conversion of Rust values into the [`Value`] model
//!
//! [`ToValue`] replaces runtime reflection: anything that can describe
//! itself as a [`Value`] can be validated. Implementations are provided for
//! primitives, strings, collections, smart pointers, `Option` and
//! `serde_json::Value`; user structs implement it by building a
//! [`StructValue`](crate::foundation::StructValue).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::rc::Rc;
use std::sync::Arc;

use crate::foundation::{KeyKind, MapKey, MapValue, Value};

// ============================================================================
// CORE TRAITS
// ============================================================================

/// Types that can be inspected by rules.
pub trait ToValue {
    /// Builds the value model of `self`.
    fn to_value(&self) -> Value;
}

/// Types usable as map keys.
pub trait ToMapKey {
    /// Key type of maps keyed by `Self`.
    const KIND: KeyKind;

    fn to_map_key(&self) -> MapKey;
}

// ============================================================================
// REFLEXIVE AND POINTER-LIKE IMPLEMENTATIONS
// ============================================================================

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for &mut T {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Arc<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue + ?Sized> ToValue for Rc<T> {
    #[inline]
    fn to_value(&self) -> Value {
        (**self).to_value()
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        self.as_ref().map_or(Value::Nil, ToValue::to_value)
    }
}

// ============================================================================
// SCALARS
// ============================================================================

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

macro_rules! to_value_int {
    ($variant:ident as $repr:ty: $($t:ty),+) => {
        $(
            impl ToValue for $t {
                #[allow(trivial_numeric_casts, clippy::unnecessary_cast)]
                fn to_value(&self) -> Value {
                    Value::$variant(*self as $repr)
                }
            }

            impl ToMapKey for $t {
                const KIND: KeyKind = KeyKind::$variant;

                fn to_map_key(&self) -> MapKey {
                    MapKey::from(*self)
                }
            }
        )+
    };
}

to_value_int!(Int as i64: i8, i16, i32, i64, isize);
to_value_int!(Uint as u64: u8, u16, u32, u64, usize);

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_owned())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.as_ref().to_owned())
    }
}

impl ToMapKey for bool {
    const KIND: KeyKind = KeyKind::Bool;

    fn to_map_key(&self) -> MapKey {
        MapKey::Bool(*self)
    }
}

impl ToMapKey for str {
    const KIND: KeyKind = KeyKind::Text;

    fn to_map_key(&self) -> MapKey {
        MapKey::Text(self.to_owned())
    }
}

impl ToMapKey for String {
    const KIND: KeyKind = KeyKind::Text;

    fn to_map_key(&self) -> MapKey {
        MapKey::Text(self.clone())
    }
}

impl<K: ToMapKey + ?Sized> ToMapKey for &K {
    const KIND: KeyKind = K::KIND;

    fn to_map_key(&self) -> MapKey {
        (**self).to_map_key()
    }
}

// ============================================================================
// COLLECTIONS
// ============================================================================

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self.as_slice().to_value()
    }
}

fn map_value<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value
where
    K: ToMapKey + 'a,
    V: ToValue + 'a,
{
    let mut map = MapValue::new(K::KIND);
    for (key, value) in entries {
        map.insert(key.to_map_key(), value.to_value());
    }
    Value::Map(map)
}

impl<K: ToMapKey, V: ToValue, S: BuildHasher> ToValue for HashMap<K, V, S> {
    fn to_value(&self) -> Value {
        map_value(self.iter())
    }
}

impl<K: ToMapKey, V: ToValue> ToValue for BTreeMap<K, V> {
    fn to_value(&self) -> Value {
        map_value(self.iter())
    }
}

// ============================================================================
// JSON
// ============================================================================

impl ToValue for serde_json::Value {
    fn to_value(&self) -> Value {
        use serde_json::Value as Json;

        match self {
            Json::Null => Value::Nil,
            Json::Bool(b) => Value::Bool(*b),
            Json::Number(n) => n
                .as_i64()
                .map(Value::Int)
                .or_else(|| n.as_u64().map(Value::Uint))
                .or_else(|| n.as_f64().map(Value::Float))
                .unwrap_or(Value::Nil),
            Json::String(s) => Value::Text(s.clone()),
            Json::Array(items) => items.to_value(),
            Json::Object(fields) => {
                let mut map = MapValue::new(KeyKind::Text);
                for (key, value) in fields {
                    map.insert(key.as_str(), value.to_value());
                }
                Value::Map(map)
            }
        }
    }
}

// ============================================================================
// TEMPORAL
// ============================================================================

#[cfg(feature = "temporal")]
mod temporal {
    use super::ToValue;
    use crate::foundation::{Opaque, Value};

    // The zero of a timestamp is the earliest representable instant, never an
    // ordinary date such as the Unix epoch.
    macro_rules! opaque_time {
        ($($t:ty => $name:literal, $zero:expr),+ $(,)?) => {
            $(
                impl Opaque for $t {
                    fn type_name(&self) -> &'static str {
                        $name
                    }

                    fn is_zero(&self) -> bool {
                        *self == $zero
                    }
                }

                impl ToValue for $t {
                    fn to_value(&self) -> Value {
                        Value::opaque(*self)
                    }
                }
            )+
        };
    }

    opaque_time! {
        chrono::DateTime<chrono::Utc> => "datetime", chrono::DateTime::<chrono::Utc>::MIN_UTC,
        chrono::NaiveDateTime => "naive datetime", chrono::NaiveDateTime::MIN,
        chrono::NaiveDate => "date", chrono::NaiveDate::MIN,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_option_collapses_to_nil() {
        assert_eq!(None::<i32>.to_value(), Value::Nil);
        assert_eq!(Some(Box::new(3u8)).to_value(), Value::Uint(3));
        assert_eq!(Some(&"x").to_value(), Value::Text("x".into()));
    }

    #[test]
    fn test_hash_map_keeps_key_kind() {
        let map: HashMap<i32, &str> = [(1, "a")].into_iter().collect();
        let Value::Map(map) = map.to_value() else {
            panic!("expected a map");
        };
        assert_eq!(map.key_kind(), KeyKind::Int);
        assert_eq!(map.get(&MapKey::Int(1)), Some(&Value::Text("a".into())));
    }

    #[test]
    fn test_json_conversion() {
        let json = serde_json::json!({ "name": "demo", "tags": [1, -2, 2.5], "extra": null });
        let Value::Map(map) = json.to_value() else {
            panic!("expected a map");
        };
        assert_eq!(map.key_kind(), KeyKind::Text);
        assert_eq!(map.get(&MapKey::from("extra")), Some(&Value::Nil));
        assert_eq!(
            map.get(&MapKey::from("tags")),
            Some(&Value::List(vec![Value::Int(1), Value::Int(-2), Value::Float(2.5)]))
        );
    }

    #[cfg(feature = "temporal")]
    #[test]
    fn test_epoch_is_not_blank() {
        use chrono::{DateTime, NaiveDate, Utc};

        let epoch = NaiveDate::from_ymd_opt(1970, 1, 1).unwrap();
        assert!(!epoch.to_value().is_empty());
        assert!(!epoch.and_hms_opt(0, 0, 0).unwrap().to_value().is_empty());
        assert!(!DateTime::<Utc>::UNIX_EPOCH.to_value().is_empty());

        assert!(NaiveDate::MIN.to_value().is_empty());
        assert!(DateTime::<Utc>::MIN_UTC.to_value().is_empty());
    }
}
