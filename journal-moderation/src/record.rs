//! Records submitted for moderation.
//!
//! A record exposes its textual fields through [`Moderable::fields`], an
//! explicit ordered list of accessors. [`PostFields`] is the known shape
//! of a journal post; [`DynamicRecord`] covers ad-hoc JSON payloads and
//! rejects values that are not text.

use serde::{Deserialize, Serialize};

use crate::errors::{ModerationError, Result};

/// A borrowed view of one field value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    /// A single text value.
    Text(&'a str),
    /// A list of text values, each evaluated on its own.
    List(&'a [String]),
    /// No value.
    Absent,
}

impl<'a> FieldValue<'a> {
    /// Creates a field value from an optional string.
    #[must_use]
    pub fn from_option(value: Option<&'a str>) -> Self {
        value.map_or(Self::Absent, Self::Text)
    }

    /// Returns true if there is nothing to evaluate.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Text(text) => text.is_empty(),
            Self::List(items) => items.is_empty(),
            Self::Absent => true,
        }
    }

    /// Iterates the non-empty texts contained in this value.
    pub fn texts(&self) -> impl Iterator<Item = &'a str> + 'a {
        let items: Vec<&'a str> = match *self {
            Self::Text(text) => vec![text],
            Self::List(items) => items.iter().map(String::as_str).collect(),
            Self::Absent => Vec::new(),
        };
        items.into_iter().filter(|text| !text.is_empty())
    }
}

/// A record whose text fields can be moderated.
pub trait Moderable {
    /// Returns the record's fields in evaluation order.
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)>;
}

/// The text fields of a journal post submission.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PostFields {
    /// Name of the preacher.
    pub preacher: Option<String>,
    /// The word received from the sermon.
    pub my_word: Option<String>,
    /// The author's response.
    pub my_response: Option<String>,
    /// An affirmation.
    pub my_affirmation: Option<String>,
    /// A testimony.
    pub my_testimony: Option<String>,
    /// Prayer points.
    pub prayer_points: Vec<String>,
}

impl PostFields {
    /// Creates an empty submission.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the preacher.
    #[must_use]
    pub fn with_preacher(mut self, preacher: impl Into<String>) -> Self {
        self.preacher = Some(preacher.into());
        self
    }

    /// Sets the word.
    #[must_use]
    pub fn with_word(mut self, word: impl Into<String>) -> Self {
        self.my_word = Some(word.into());
        self
    }

    /// Sets the response.
    #[must_use]
    pub fn with_response(mut self, response: impl Into<String>) -> Self {
        self.my_response = Some(response.into());
        self
    }

    /// Sets the affirmation.
    #[must_use]
    pub fn with_affirmation(mut self, affirmation: impl Into<String>) -> Self {
        self.my_affirmation = Some(affirmation.into());
        self
    }

    /// Sets the testimony.
    #[must_use]
    pub fn with_testimony(mut self, testimony: impl Into<String>) -> Self {
        self.my_testimony = Some(testimony.into());
        self
    }

    /// Adds a prayer point.
    #[must_use]
    pub fn with_prayer_point(mut self, point: impl Into<String>) -> Self {
        self.prayer_points.push(point.into());
        self
    }

    /// Returns a copy without prayer points that are blank after trimming.
    #[must_use]
    pub fn without_blank_prayer_points(&self) -> Self {
        Self {
            prayer_points: self
                .prayer_points
                .iter()
                .filter(|p| !p.trim().is_empty())
                .cloned()
                .collect(),
            ..self.clone()
        }
    }

    /// Returns the length-limited free-text fields with their names.
    #[must_use]
    pub fn body_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("myWord", self.my_word.as_deref()),
            ("myResponse", self.my_response.as_deref()),
            ("myAffirmation", self.my_affirmation.as_deref()),
            ("myTestimony", self.my_testimony.as_deref()),
        ]
    }
}

impl Moderable for PostFields {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        vec![
            ("preacher", FieldValue::from_option(self.preacher.as_deref())),
            ("myWord", FieldValue::from_option(self.my_word.as_deref())),
            ("myResponse", FieldValue::from_option(self.my_response.as_deref())),
            ("myAffirmation", FieldValue::from_option(self.my_affirmation.as_deref())),
            ("myTestimony", FieldValue::from_option(self.my_testimony.as_deref())),
            ("prayerPoints", FieldValue::List(&self.prayer_points)),
        ]
    }
}

/// An owned field value of a [`DynamicRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OwnedFieldValue {
    /// A single text value.
    Text(String),
    /// A list of text values.
    List(Vec<String>),
    /// No value.
    Absent,
}

impl OwnedFieldValue {
    /// Borrows this value.
    #[must_use]
    pub fn as_field_value(&self) -> FieldValue<'_> {
        match self {
            Self::Text(text) => FieldValue::Text(text),
            Self::List(items) => FieldValue::List(items),
            Self::Absent => FieldValue::Absent,
        }
    }
}

impl From<&str> for OwnedFieldValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OwnedFieldValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<Vec<String>> for OwnedFieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::List(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for OwnedFieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Absent, Into::into)
    }
}

/// An ordered record with caller-defined field names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DynamicRecord {
    fields: Vec<(String, OwnedFieldValue)>,
}

impl DynamicRecord {
    /// Creates an empty record.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a field.
    #[must_use]
    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<OwnedFieldValue>) -> Self {
        self.fields.push((name.into(), value.into()));
        self
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Builds a record from a JSON object, keeping its key order.
    ///
    /// Values must be strings, arrays of strings, or null. Any other
    /// value is a contract violation and is rejected.
    pub fn from_json(value: &serde_json::Value) -> Result<Self> {
        let serde_json::Value::Object(map) = value else {
            return Err(ModerationError::unsupported_value("<record>", value));
        };

        let mut record = Self::new();
        for (name, field) in map {
            let owned = match field {
                serde_json::Value::Null => OwnedFieldValue::Absent,
                serde_json::Value::String(text) => OwnedFieldValue::Text(text.clone()),
                serde_json::Value::Array(items) => OwnedFieldValue::List(
                    items
                        .iter()
                        .enumerate()
                        .map(|(i, item)| match item {
                            serde_json::Value::String(text) => Ok(text.clone()),
                            other => Err(ModerationError::unsupported_value(
                                format!("{name}[{i}]"),
                                other,
                            )),
                        })
                        .collect::<Result<Vec<_>>>()?,
                ),
                other => return Err(ModerationError::unsupported_value(name.clone(), other)),
            };
            record.fields.push((name.clone(), owned));
        }
        Ok(record)
    }
}

impl Moderable for DynamicRecord {
    fn fields(&self) -> Vec<(&str, FieldValue<'_>)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_field_value()))
            .collect()
    }
}
