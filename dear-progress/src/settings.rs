//! Key/value settings storage
//!
//! Widgets read their resource settings from, and write them back to, a
//! [`Properties`] store. The same store type carries dialog variables, the
//! named integers a host publishes for widgets to poll.
//!
//! Getters coerce between value kinds the way resource stores usually do: a
//! float stored as a string is still readable with [`Properties::get_float`],
//! and anything unparsable yields the caller's default.

use std::borrow::Cow;
use std::collections::BTreeMap;

/// A single stored value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Value {
    Bool(bool),
    Int(i32),
    Float(f32),
    String(String),
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

/// Ordered map of named values.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Properties {
    entries: BTreeMap<String, Value>,
}

impl Properties {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.set(key, value);
        self
    }

    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.entries.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn set_float(&mut self, key: impl Into<String>, value: f32) {
        self.set(key, Value::Float(value));
    }

    pub fn set_int(&mut self, key: impl Into<String>, value: i32) {
        self.set(key, Value::Int(value));
    }

    pub fn set_bool(&mut self, key: impl Into<String>, value: bool) {
        self.set(key, Value::Bool(value));
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.set(key, Value::String(value.into()));
    }

    pub fn get_float(&self, key: &str, default: f32) -> f32 {
        match self.get(key) {
            Some(Value::Float(v)) => *v,
            Some(Value::Int(v)) => *v as f32,
            Some(Value::Bool(v)) => f32::from(u8::from(*v)),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(default),
            None => default,
        }
    }

    pub fn get_int(&self, key: &str, default: i32) -> i32 {
        match self.get(key) {
            Some(Value::Int(v)) => *v,
            Some(Value::Float(v)) => *v as i32,
            Some(Value::Bool(v)) => i32::from(*v),
            Some(Value::String(s)) => {
                let s = s.trim();
                s.parse::<i32>()
                    .ok()
                    .or_else(|| s.parse::<f32>().ok().map(|f| f as i32))
                    .unwrap_or(default)
            }
            None => default,
        }
    }

    /// `None` when the key is absent or holds something that is not a boolean.
    pub fn get_bool(&self, key: &str) -> Option<bool> {
        match self.get(key)? {
            Value::Bool(v) => Some(*v),
            Value::Int(v) => Some(*v != 0),
            Value::Float(v) => Some(*v != 0.0),
            Value::String(s) => match s.trim() {
                "1" => Some(true),
                "0" => Some(false),
                s if s.eq_ignore_ascii_case("true") => Some(true),
                s if s.eq_ignore_ascii_case("false") => Some(false),
                _ => None,
            },
        }
    }

    /// String view of a value; numbers and booleans are formatted.
    pub fn get_str(&self, key: &str) -> Option<Cow<'_, str>> {
        match self.get(key)? {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Int(v) => Some(Cow::Owned(v.to_string())),
            Value::Float(v) => Some(Cow::Owned(v.to_string())),
            Value::Bool(v) => Some(Cow::Borrowed(if *v { "1" } else { "0" })),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Properties {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut props = Properties::new();
        for (k, v) in iter {
            props.set(k, v);
        }
        props
    }
}

/// Kind of an editable widget setting
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum SettingKind {
    String,
    Integer,
    Float,
    Bool,
}

/// Name and kind of one editable widget setting
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct SettingDescriptor {
    pub name: &'static str,
    pub kind: SettingKind,
}

impl SettingDescriptor {
    pub const fn new(name: &'static str, kind: SettingKind) -> Self {
        Self { name, kind }
    }
}
