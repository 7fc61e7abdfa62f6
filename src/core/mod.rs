pub mod fetcher;
pub mod matcher;
pub mod normalizer;

pub use crate::domain::model::{Activity, MatchOutcome, Profile};
pub use crate::domain::ports::{ActivitySource, ProfileRepository, ServiceSettings};
pub use crate::utils::error::Result;
