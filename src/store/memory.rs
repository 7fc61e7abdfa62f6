use crate::domain::model::Profile;
use crate::domain::ports::ProfileRepository;
use crate::store::row::ProfileRow;
use crate::utils::error::{ProxyError, Result};
use chrono::Utc;
use std::sync::{PoisonError, RwLock};

#[derive(Debug, Default)]
struct Inner {
    rows: Vec<ProfileRow>,
    last: Option<Profile>,
}

/// Process-local profile store. Everything is gone on restart.
#[derive(Debug, Default)]
pub struct InMemoryProfileStore {
    inner: RwLock<Inner>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    fn rows(&self) -> Result<Vec<ProfileRow>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.rows.clone())
    }
}

fn poisoned<T>(_: PoisonError<T>) -> ProxyError {
    ProxyError::Store {
        message: "profile store lock poisoned".to_string(),
    }
}

impl ProfileRepository for InMemoryProfileStore {
    fn submit(&self, profile: Profile) -> Result<()> {
        let row = ProfileRow::from_profile(&profile, Utc::now());
        let mut inner = self.inner.write().map_err(poisoned)?;
        // Row and slot change under the same guard so the slot never points
        // past the history.
        inner.rows.push(row);
        inner.last = Some(profile);
        tracing::debug!("Stored profile #{}", inner.rows.len());
        Ok(())
    }

    fn most_recent(&self) -> Result<Option<Profile>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.last.clone())
    }

    fn all(&self) -> Result<Vec<Profile>> {
        let inner = self.inner.read().map_err(poisoned)?;
        Ok(inner.rows.iter().map(ProfileRow::to_profile).collect())
    }
}
