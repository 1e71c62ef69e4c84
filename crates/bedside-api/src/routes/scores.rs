use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};

use bedside_core::models::input::Inputs;
use bedside_scores::{ComputationResult, Modality, ScoreDefinition, ScoreEngine};

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct ScoreSummary {
    id: String,
    name: String,
    modality: Modality,
}

#[derive(Deserialize)]
pub struct ComputeRequest {
    #[serde(default)]
    inputs: Inputs,
}

pub async fn list_scores(State(state): State<AppState>) -> Json<Vec<ScoreSummary>> {
    let scores: Vec<ScoreSummary> = state
        .catalog
        .definitions()
        .map(|d| ScoreSummary {
            id: d.id.clone(),
            name: d.name.clone(),
            modality: d.modality(),
        })
        .collect();
    Json(scores)
}

pub async fn get_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ScoreDefinition>, ApiError> {
    let definition = state
        .catalog
        .lookup(&id)
        .ok_or_else(|| ApiError::NotFound(format!("score not found: {id}")))?;

    Ok(Json(definition.clone()))
}

/// Recompute a score from the caller's full current input state.
pub async fn compute_score(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<ComputeRequest>, JsonRejection>,
) -> Result<Json<ComputationResult>, ApiError> {
    let Json(request) = payload?;
    let result = ScoreEngine::new(&state.catalog).compute(&id, &request.inputs)?;
    Ok(Json(result))
}
