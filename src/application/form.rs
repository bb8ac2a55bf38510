// src/application/form.rs
use std::collections::HashMap;

/// Raw form submission: field name to submitted text.
///
/// Values are trimmed on read and blank values are treated the same as a
/// missing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormFields(HashMap<String, String>);

/// Value a checkbox submits when ticked.
pub const CHECKBOX_ON: &str = "on";

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    /// Trimmed value, or `None` when the field is missing or blank.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.0
            .get(name)
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
    }

    pub fn owned(&self, name: &str) -> Option<String> {
        self.text(name).map(str::to_owned)
    }

    /// First non-blank field among `names`.
    pub fn first_of(&self, names: &[&str]) -> Option<&str> {
        names.iter().find_map(|name| self.text(name))
    }

    /// Checkboxes are true only when the submitted value is `"on"`.
    pub fn checkbox(&self, name: &str) -> bool {
        self.0.get(name).map(String::as_str) == Some(CHECKBOX_ON)
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(value: HashMap<String, String>) -> Self {
        Self(value)
    }
}

impl<K, V> FromIterator<(K, V)> for FormFields
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(name, value)| (name.into(), value.into()))
                .collect(),
        )
    }
}
