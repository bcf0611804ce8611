use crate::errors::AppError;
use crate::models::{DailyStatsResponse, SmileEntry, SmileRequest};
use crate::state::{AppState, Session};
use crate::storage::persist_log;
use crate::ui::render_index;
use axum::{
    extract::State,
    response::{Html, Redirect},
    Json,
};
use chrono::Local;
use serde_json::json;
use tracing::error;

pub async fn index(State(state): State<AppState>) -> Html<String> {
    let session = state.session.lock().await;
    Html(render_index(&session.window.date_label(), &session.stats))
}

pub async fn get_today(State(state): State<AppState>) -> Json<DailyStatsResponse> {
    let session = state.session.lock().await;
    Json(to_response(&session))
}

pub async fn smile(
    State(state): State<AppState>,
    Json(payload): Json<SmileRequest>,
) -> Result<Json<DailyStatsResponse>, AppError> {
    let smile_back = match payload.action.trim() {
        "smile_back" => true,
        "no_smile_back" => false,
        _ => {
            return Err(AppError::bad_request(
                "action must be 'smile_back' or 'no_smile_back'",
            ))
        }
    };

    let response = apply_smile(&state, smile_back).await;
    Ok(Json(response))
}

pub async fn smile_back_form(State(state): State<AppState>) -> Redirect {
    apply_smile(&state, true).await;
    Redirect::to("/")
}

pub async fn no_smile_back_form(State(state): State<AppState>) -> Redirect {
    apply_smile(&state, false).await;
    Redirect::to("/")
}

/// Counters first, then the event, then the append. The in-memory counters
/// stay updated even when the persist fails, so the display can run ahead
/// of the disk until the next restart.
async fn apply_smile(state: &AppState, smile_back: bool) -> DailyStatsResponse {
    let timestamp = Local::now().timestamp_millis();
    let mut session = state.session.lock().await;

    session.stats.record(smile_back);

    let event = if smile_back {
        "smile_back_reported"
    } else {
        "no_smile_back_reported"
    };
    state.analytics.capture(
        event,
        json!({
            "timestamp": timestamp,
            "daily_total_smiles": session.stats.total_smiles,
            "daily_smiles_back": session.stats.smiles_back,
        }),
    );

    session.log.append(SmileEntry {
        smile_back,
        timestamp,
    });
    if let Err(err) = persist_log(&state.data_path, &session.log).await {
        error!("failed to persist smile log: {err}");
    }

    to_response(&session)
}

fn to_response(session: &Session) -> DailyStatsResponse {
    DailyStatsResponse {
        date: session.window.date_label(),
        total_smiles: session.stats.total_smiles,
        smiles_back: session.stats.smiles_back,
        total_new_smiles: session.stats.total_new_smiles,
    }
}
