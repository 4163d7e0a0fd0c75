//! Suggestion records offered for tag completion and value selection.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A suggestion value as delivered by the source: a JSON number or string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SuggestionValue {
    Number(serde_json::Number),
    Text(String),
}

/// Whole floats below this magnitude print without a fraction or exponent.
const PLAIN_INTEGER_LIMIT: f64 = 1e21;

impl fmt::Display for SuggestionValue {
    /// Whole-valued floats print as integers (`3.0` as `3`, `1.5e3` as
    /// `1500`); other numbers keep their JSON form.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => match n.as_f64() {
                Some(x) if n.is_f64() && x == 0.0 => f.write_str("0"),
                Some(x) if n.is_f64() && x.fract() == 0.0 && x.abs() < PLAIN_INTEGER_LIMIT => {
                    write!(f, "{x}")
                }
                _ => write!(f, "{n}"),
            },
            Self::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for SuggestionValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<i64> for SuggestionValue {
    fn from(value: i64) -> Self {
        Self::Number(value.into())
    }
}

/// A candidate `(name, category, value)` record. Identity is `id`; several
/// suggestions may share a `name` and offer alternative values for that tag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    pub id: String,
    pub name: String,
    pub category: String,
    pub value: SuggestionValue,
}

impl Suggestion {
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        category: impl Into<String>,
        value: impl Into<SuggestionValue>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            category: category.into(),
            value: value.into(),
        }
    }

    /// Value as the string stored in the tag map.
    #[must_use]
    pub fn value_string(&self) -> String {
        self.value.to_string()
    }
}

/// Suggestions whose name exactly equals `name`. No case or whitespace
/// normalisation is applied.
pub fn matching<'a>(
    suggestions: &'a [Suggestion],
    name: &'a str,
) -> impl Iterator<Item = &'a Suggestion> + 'a {
    suggestions.iter().filter(move |s| s.name == name)
}
