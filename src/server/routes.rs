use crate::domain::model::{Activity, MatchOutcome, Profile};
use crate::server::error::ApiError;
use crate::server::state::AppState;
use crate::utils::error::ProxyError;
use axum::{body::Bytes, extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// Uses the profile that is current when the request arrives. A profile
/// submitted while matching is running applies to the next request.
pub async fn activity_handler(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Activity>, ApiError> {
    let profile = state.profiles.most_recent()?;

    match state.matcher.find_activity(profile.as_ref()).await? {
        MatchOutcome::Found(activity) => Ok(Json(activity)),
        MatchOutcome::NotFound { .. } => Err(ApiError::NoMatch {
            timeout_ms: state.matcher.timeout().as_millis(),
        }),
    }
}

/// Takes the raw body so that neither content type nor field types can get
/// a submission rejected.
pub async fn submit_user_handler(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<impl IntoResponse, ApiError> {
    let profile = Profile::from_body(&body);
    tracing::debug!("Submitting profile {:?}", profile.name);
    state.profiles.submit(profile)?;

    Ok((StatusCode::OK, Json(serde_json::json!({}))))
}

pub async fn log_users_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    tracing::info!("User profiles in store below:");
    for profile in state.profiles.all()? {
        tracing::info!("{}", to_json(&profile)?);
    }

    Ok((StatusCode::OK, "logged all user profiles, check app logs"))
}

pub async fn log_last_handler(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, ApiError> {
    let profile = state
        .profiles
        .most_recent()?
        .ok_or(ApiError::RecordNotFound)?;

    tracing::info!("Last user profile: {}", to_json(&profile)?);

    Ok((StatusCode::OK, "logged last user profile, check app logs"))
}

fn to_json(profile: &Profile) -> Result<String, ProxyError> {
    Ok(serde_json::to_string(profile)?)
}
