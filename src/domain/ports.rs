use crate::domain::model::{Activity, Profile};
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// Something that hands out one fresh activity per call.
#[async_trait]
pub trait ActivitySource: Send + Sync {
    async fn fetch(&self) -> Result<Activity>;
}

pub trait ProfileRepository: Send + Sync {
    fn submit(&self, profile: Profile) -> Result<()>;
    fn most_recent(&self) -> Result<Option<Profile>>;
    fn all(&self) -> Result<Vec<Profile>>;
}

pub trait ServiceSettings: Send + Sync {
    fn upstream_url(&self) -> &str;
    fn host(&self) -> &str;
    fn port(&self) -> u16;
    fn match_timeout(&self) -> Duration;
}
