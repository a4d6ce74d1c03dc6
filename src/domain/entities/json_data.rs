//! Decoded JSON data model.

use serde_json::{Map, Number, Value};

/// Structured data decoded from a document's content.
///
/// Objects decode to an insertion-ordered [`JsonData::Mapping`] rather than a
/// nominal type, so an empty object and an empty array both compare equal as
/// "no entries". Integral numbers decode to [`JsonData::Integer`].
#[derive(Debug, Clone)]
pub enum JsonData {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Sequence(Vec<JsonData>),
    Mapping(Vec<(String, JsonData)>),
}

impl JsonData {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as `f64`, widening integers.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Integer(i) => Some(*i as f64),
            Self::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Number of entries in a sequence or mapping; zero for scalars.
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(items) => items.len(),
            Self::Mapping(entries) => entries.len(),
            _ => 0,
        }
    }

    /// True for empty sequences and mappings.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Sequence(_) | Self::Mapping(_)) && self.len() == 0
    }

    /// Looks up a mapping entry by key.
    pub fn get(&self, key: &str) -> Option<&JsonData> {
        match self {
            Self::Mapping(entries) => entries.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Returns the sequence item at `index`.
    pub fn at(&self, index: usize) -> Option<&JsonData> {
        match self {
            Self::Sequence(items) => items.get(index),
            _ => None,
        }
    }

    /// Mapping keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        let entries: &[(String, JsonData)] = match self {
            Self::Mapping(entries) => entries.as_slice(),
            _ => &[],
        };
        entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for JsonData {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Null, Self::Null) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::String(a), Self::String(b)) => a == b,
            (Self::Sequence(a), Self::Sequence(b)) => a == b,
            (Self::Mapping(a), Self::Mapping(b)) => {
                a.len() == b.len()
                    && a.iter().all(|(k, v)| other.get(k) == Some(v))
                    && b.iter().all(|(k, v)| self.get(k) == Some(v))
            }
            (Self::Sequence(a), Self::Mapping(b)) | (Self::Mapping(b), Self::Sequence(a)) => {
                a.is_empty() && b.is_empty()
            }
            _ => false,
        }
    }
}

fn decode_number(number: &Number) -> JsonData {
    if let Some(i) = number.as_i64() {
        return JsonData::Integer(i);
    }

    let f = number.as_f64().unwrap_or(f64::NAN);
    // i64::MAX is not exactly representable; the upper bound is exclusive.
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        JsonData::Integer(f as i64)
    } else {
        JsonData::Float(f)
    }
}

impl From<Value> for JsonData {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => decode_number(&n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Sequence(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Mapping(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}

impl From<JsonData> for Value {
    fn from(data: JsonData) -> Self {
        match data {
            JsonData::Null => Value::Null,
            JsonData::Bool(b) => Value::Bool(b),
            JsonData::Integer(i) => Value::from(i),
            JsonData::Float(f) => Number::from_f64(f).map_or(Value::Null, Value::Number),
            JsonData::String(s) => Value::String(s),
            JsonData::Sequence(items) => {
                Value::Array(items.into_iter().map(Value::from).collect())
            }
            JsonData::Mapping(entries) => Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k, Value::from(v)))
                    .collect::<Map<_, _>>(),
            ),
        }
    }
}
