//! Ordered HTML attribute lists and their serialisation into tag fragments.
//!
//! Values are JSON-stringified with the outer quotes removed. This is a quoting convenience,
//! not HTML escaping: callers must only pass trusted values.

use serde::Deserialize;
use serde_json::Value;
use tracing::trace;

/// A single entry in an attribute list.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
  /// Bare attribute name such as `disabled`.
  Flag(String),
  /// Raw token emitted unchanged, without a name.
  Positional(String),
  /// `name="value"` pair.
  Pair(String, Value),
}

impl Attribute {
  /// Attribute name, when the entry has one.
  pub fn name(&self) -> Option<&str> {
    match self {
      Self::Flag(name) | Self::Pair(name, _) => Some(name),
      Self::Positional(_) => None,
    }
  }

  /// Render the entry as it appears inside a tag.
  pub fn render(&self) -> String {
    match self {
      Self::Flag(name) => name.clone(),
      Self::Positional(token) => token.clone(),
      Self::Pair(name, Value::Null) => name.clone(),
      Self::Pair(name, value) => format!("{name}=\"{}\"", quote_value(value)),
    }
  }
}

fn quote_value(value: &Value) -> String {
  let encoded = value.to_string();
  match encoded
    .strip_prefix('"')
    .and_then(|inner| inner.strip_suffix('"'))
  {
    Some(inner) => inner.to_string(),
    None => encoded,
  }
}

/// Ordered attribute list used by the tag emitters.
///
/// Named entries are unique: inserting a name that is already present replaces the existing
/// entry in place, so defaults keep their position while callers override their values.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(try_from = "Value")]
pub struct Attributes(Vec<Attribute>);

impl Attributes {
  /// Empty attribute list.
  pub fn new() -> Self {
    Self::default()
  }

  /// Add a bare attribute.
  pub fn flag(mut self, name: impl Into<String>) -> Self {
    self.insert(Attribute::Flag(name.into()));
    self
  }

  /// Add a `name="value"` attribute.
  pub fn set(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
    self.insert(Attribute::Pair(name.into(), value.into()));
    self
  }

  /// Add a raw token.
  pub fn token(mut self, token: impl Into<String>) -> Self {
    self.insert(Attribute::Positional(token.into()));
    self
  }

  /// Insert an entry, replacing a same-named entry in place.
  ///
  /// A `null` pair is stored as a flag.
  pub fn insert(&mut self, attribute: Attribute) {
    let attribute = match attribute {
      Attribute::Pair(name, Value::Null) => Attribute::Flag(name),
      other => other,
    };
    let existing = attribute
      .name()
      .and_then(|name| self.0.iter().position(|entry| entry.name() == Some(name)));

    match existing {
      Some(index) => self.0[index] = attribute,
      None => self.0.push(attribute),
    }
  }

  /// Apply `overrides` on top of this list.
  pub fn merge(mut self, overrides: Attributes) -> Self {
    self.extend(overrides);
    self
  }

  /// Returns `true` when an entry with `name` is present.
  pub fn contains(&self, name: &str) -> bool {
    self.0.iter().any(|entry| entry.name() == Some(name))
  }

  /// Returns `true` when the list has no entries.
  pub fn is_empty(&self) -> bool {
    self.0.is_empty()
  }

  /// Iterate over the entries in order.
  pub fn iter(&self) -> impl Iterator<Item = &Attribute> {
    self.0.iter()
  }

  /// Render all entries separated by single spaces.
  pub fn render(&self) -> String {
    let rendered = self
      .iter()
      .map(Attribute::render)
      .collect::<Vec<_>>()
      .join(" ");
    trace!(attributes = %rendered, "rendered attributes");
    rendered
  }
}

impl Extend<Attribute> for Attributes {
  fn extend<I: IntoIterator<Item = Attribute>>(&mut self, iter: I) {
    for attribute in iter {
      self.insert(attribute);
    }
  }
}

impl FromIterator<Attribute> for Attributes {
  fn from_iter<I: IntoIterator<Item = Attribute>>(iter: I) -> Self {
    let mut attributes = Self::new();
    attributes.extend(iter);
    attributes
  }
}

impl IntoIterator for Attributes {
  type Item = Attribute;
  type IntoIter = std::vec::IntoIter<Attribute>;

  fn into_iter(self) -> Self::IntoIter {
    self.0.into_iter()
  }
}

impl TryFrom<Value> for Attributes {
  type Error = String;

  /// Objects map `null` to flags and everything else to pairs; arrays hold raw tokens or
  /// nested objects.
  fn try_from(value: Value) -> Result<Self, Self::Error> {
    let mut attributes = Self::new();
    match value {
      Value::Null => {}
      Value::Object(map) => {
        attributes.extend(map.into_iter().map(|(name, value)| match value {
          Value::Null => Attribute::Flag(name),
          value => Attribute::Pair(name, value),
        }));
      }
      Value::Array(items) => {
        for item in items {
          match item {
            Value::String(token) => attributes.insert(Attribute::Positional(token)),
            nested @ Value::Object(_) => attributes.extend(Self::try_from(nested)?),
            other => return Err(format!("unsupported attribute entry `{other}`")),
          }
        }
      }
      other => return Err(format!("expected an attribute object or list, found `{other}`")),
    }
    Ok(attributes)
  }
}
