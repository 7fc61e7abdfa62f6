use crate::domain::model::Profile;
use chrono::{DateTime, Utc};
use serde_json::Value;

/// Stored shape of a profile: the three profile columns plus when it arrived.
#[derive(Debug, Clone, PartialEq)]
pub struct ProfileRow {
    pub name: Option<Value>,
    pub accessibility: Option<Value>,
    pub price: Option<Value>,
    pub submitted_at: DateTime<Utc>,
}

impl ProfileRow {
    pub fn from_profile(profile: &Profile, submitted_at: DateTime<Utc>) -> Self {
        Self {
            name: profile.name.clone(),
            accessibility: profile.accessibility.clone(),
            price: profile.price.clone(),
            submitted_at,
        }
    }

    pub fn to_profile(&self) -> Profile {
        Profile {
            name: self.name.clone(),
            accessibility: self.accessibility.clone(),
            price: self.price.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_keeps_profile_columns() {
        let profile = Profile::new("A", "High", "Low");
        let now = Utc::now();

        let row = ProfileRow::from_profile(&profile, now);

        assert_eq!(row.name, Some(Value::String("A".to_string())));
        assert_eq!(row.submitted_at, now);
        assert_eq!(row.to_profile(), profile);
    }
}
