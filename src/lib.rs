pub mod config;
pub mod core;
pub mod domain;
pub mod server;
pub mod store;
pub mod utils;

pub use config::CliConfig;
pub use core::{fetcher::HttpActivityFetcher, matcher::ProfileMatcher};
pub use domain::model::{Activity, MatchOutcome, Profile};
pub use server::{router, start_server, AppState};
pub use store::InMemoryProfileStore;
pub use utils::error::{ProxyError, Result};
