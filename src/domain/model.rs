use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const ACCESSIBILITY_FIELD: &str = "accessibility";
pub const PRICE_FIELD: &str = "price";

/// A normalized suggestion from the upstream API.
///
/// Only `accessibility` and `price` carry meaning here; every other field is
/// passed back to the client untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Activity {
    pub fields: Map<String, Value>,
}

impl Activity {
    pub fn new(fields: Map<String, Value>) -> Self {
        Self { fields }
    }

    pub fn accessibility(&self) -> Option<&str> {
        self.fields.get(ACCESSIBILITY_FIELD).and_then(Value::as_str)
    }

    pub fn price(&self) -> Option<&str> {
        self.fields.get(PRICE_FIELD).and_then(Value::as_str)
    }

    /// Both categories equal the profile's, compared as raw JSON values.
    /// Absent only equals absent, and a number never equals a label.
    pub fn matches(&self, profile: &Profile) -> bool {
        self.fields.get(ACCESSIBILITY_FIELD) == profile.accessibility.as_ref()
            && self.fields.get(PRICE_FIELD) == profile.price.as_ref()
    }
}

/// A user's saved category preferences.
///
/// Submissions are not validated: every field may be missing or hold any
/// JSON value, and is kept exactly as sent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accessibility: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<Value>,
}

impl Profile {
    pub fn new(
        name: impl Into<String>,
        accessibility: impl Into<String>,
        price: impl Into<String>,
    ) -> Self {
        Self {
            name: Some(Value::String(name.into())),
            accessibility: Some(Value::String(accessibility.into())),
            price: Some(Value::String(price.into())),
        }
    }

    /// Reads a submitted body without rejecting anything. Members of a JSON
    /// object are taken as-is; any other body yields an empty profile.
    pub fn from_body(body: &[u8]) -> Self {
        match serde_json::from_slice::<Value>(body) {
            Ok(Value::Object(mut obj)) => Self {
                name: obj.remove("name"),
                accessibility: obj.remove(ACCESSIBILITY_FIELD),
                price: obj.remove(PRICE_FIELD),
            },
            Ok(_) | Err(_) => {
                tracing::debug!("Profile body is not a JSON object, storing an empty profile");
                Self::default()
            }
        }
    }
}

/// Result of a profile-matching run.
#[derive(Debug, Clone, PartialEq)]
pub enum MatchOutcome {
    Found(Activity),
    NotFound {
        attempts: u32,
        failures: u32,
        elapsed_ms: u128,
    },
}
