use crate::domain::model::{MatchOutcome, Profile};
use crate::domain::ports::ActivitySource;
use crate::utils::error::{ProxyError, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::{timeout_at, Instant};

/// Polls an [`ActivitySource`] until an activity fits a profile or the
/// deadline passes.
///
/// The deadline is armed once per call, before the first attempt, and each
/// attempt only gets the budget that is left. Attempts follow each other
/// without delay.
///
/// A failed attempt counts as "no match" and the loop goes on. If the deadline
/// runs out and no attempt ever succeeded, the last error is returned instead
/// of [`MatchOutcome::NotFound`].
pub struct ProfileMatcher {
    source: Arc<dyn ActivitySource>,
    timeout: Duration,
}

impl ProfileMatcher {
    pub fn new(source: Arc<dyn ActivitySource>, timeout: Duration) -> Self {
        Self { source, timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub async fn find_activity(&self, target: Option<&Profile>) -> Result<MatchOutcome> {
        let Some(profile) = target else {
            tracing::debug!("No profile set, returning first activity");
            let activity = self.source.fetch().await?;
            return Ok(MatchOutcome::Found(activity));
        };

        let started = Instant::now();
        let deadline = started + self.timeout;
        let mut attempts: u32 = 0;
        let mut succeeded = false;
        let mut failures: u32 = 0;
        let mut last_error: Option<ProxyError> = None;

        while Instant::now() < deadline {
            attempts += 1;

            match timeout_at(deadline, self.source.fetch()).await {
                Ok(Ok(activity)) => {
                    succeeded = true;
                    if activity.matches(profile) {
                        tracing::info!(
                            "Matched activity after {} attempt(s) in {}ms",
                            attempts,
                            started.elapsed().as_millis()
                        );
                        return Ok(MatchOutcome::Found(activity));
                    }
                    tracing::trace!(
                        "Attempt {} missed: accessibility={:?} price={:?}",
                        attempts,
                        activity.accessibility(),
                        activity.price()
                    );
                }
                Ok(Err(e)) => {
                    failures += 1;
                    if failures == 1 {
                        tracing::warn!("Attempt {} failed, retrying: {}", attempts, e);
                    } else {
                        tracing::debug!("Attempt {} failed, retrying: {}", attempts, e);
                    }
                    last_error = Some(e);
                }
                Err(_) => {
                    tracing::debug!("Attempt {} cut off by the deadline", attempts);
                    break;
                }
            }

            tokio::task::yield_now().await;
        }

        if failures > 1 {
            tracing::warn!("{} of {} attempts failed", failures, attempts);
        }

        if !succeeded {
            if let Some(e) = last_error {
                tracing::error!("Every attempt failed before the deadline: {}", e);
                return Err(e);
            }
        }

        let elapsed_ms = started.elapsed().as_millis();
        tracing::info!(
            "No matching activity after {} attempt(s) in {}ms",
            attempts,
            elapsed_ms
        );
        Ok(MatchOutcome::NotFound {
            attempts,
            failures,
            elapsed_ms,
        })
    }
}
