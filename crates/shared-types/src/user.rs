use crate::error::AppError;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Placeholder shown in the profile badge when no usable name exists.
pub const INITIALS_PLACEHOLDER: &str = "?";

/// The signed-in user as written to local storage by the login flow.
///
/// Every field is optional. Scalars other than strings (a numeric phone
/// number, say) are kept as their JSON text; nested values are dropped.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserRecord {
    #[serde(default, deserialize_with = "display_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "display_text")]
    pub role: Option<String>,
}

fn display_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    })
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

impl UserRecord {
    /// Interpret the raw string stored under the session key.
    ///
    /// `Ok(None)` means "nobody is signed in" (blank, `null`, or `{}`).
    /// Anything that is not a non-empty JSON object is an error, which
    /// callers treat the same as `Ok(None)` after logging it.
    pub fn from_session_value(raw: &str) -> Result<Option<Self>, AppError> {
        if raw.trim().is_empty() {
            return Ok(None);
        }

        let value: Value =
            serde_json::from_str(raw).map_err(|e| AppError::session_malformed(e.to_string()))?;

        match value {
            Value::Null => Ok(None),
            Value::Object(map) if map.is_empty() => Ok(None),
            Value::Object(map) => serde_json::from_value(Value::Object(map))
                .map(Some)
                .map_err(|e| AppError::session_malformed(e.to_string())),
            other => Err(AppError::session_malformed(format!(
                "expected a JSON object, found {}",
                json_kind(&other)
            ))),
        }
    }

    /// Badge label for this user.
    pub fn initials(&self) -> String {
        initials_from_name(self.name.as_deref())
    }
}

/// Upper-cased first letters of the first two whitespace-separated words.
///
/// Falls back to [`INITIALS_PLACEHOLDER`] when the name is absent or blank.
pub fn initials_from_name(name: Option<&str>) -> String {
    let initials: String = name
        .unwrap_or_default()
        .split_whitespace()
        .take(2)
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    if initials.is_empty() {
        INITIALS_PLACEHOLDER.to_string()
    } else {
        initials
    }
}
