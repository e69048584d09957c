use std::sync::Arc;

use axum::{extract::State, Json};
use chrono::Utc;
use core_types::ScoredStock;
use selection::{assess_risk, build_advice, InvestmentAdvice, RiskAssessment};
use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::{error::AppError, AppState};

/// # GET /api/health
pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok", "timestamp": Utc::now().to_rfc3339() }))
}

/// One catalog entry as shown to API clients.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategySummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub default_params: Map<String, Value>,
}

/// # GET /api/strategies
/// Lists the registered strategies in registration order.
pub async fn list_strategies(State(state): State<Arc<AppState>>) -> Json<Value> {
    let strategies: Vec<StrategySummary> = state
        .service
        .list_strategies()
        .map(|def| StrategySummary {
            id: def.id.clone(),
            name: def.name.clone(),
            description: def.description.clone(),
            default_params: def.default_params.clone(),
        })
        .collect();

    Json(json!({ "success": true, "count": strategies.len(), "data": strategies }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SelectRequest {
    pub strategy: String,
    pub params: Map<String, Value>,
    pub include_advice: bool,
}

impl Default for SelectRequest {
    fn default() -> Self {
        Self {
            strategy: "default".to_string(),
            params: Map::new(),
            include_advice: false,
        }
    }
}

/// One screening result, with risk and advice attached when the caller asked
/// for them.
#[derive(Debug, Serialize)]
pub struct SelectionItem {
    #[serde(flatten)]
    pub stock: ScoredStock,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk: Option<RiskAssessment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub advice: Option<InvestmentAdvice>,
}

/// # POST /api/select-stocks
/// Runs one strategy over the loaded dataset and returns the ranked results.
pub async fn select_stocks(
    State(state): State<Arc<AppState>>,
    Json(request): Json<SelectRequest>,
) -> Result<Json<Value>, AppError> {
    let results = state
        .service
        .run_strategy(&request.strategy, &request.params)?;

    let data: Vec<SelectionItem> = results
        .into_iter()
        .map(|stock| {
            let (risk, advice) = if request.include_advice {
                (Some(assess_risk(&stock.record)), Some(build_advice(&stock)))
            } else {
                (None, None)
            };
            SelectionItem { stock, risk, advice }
        })
        .collect();

    Ok(Json(json!({
        "success": true,
        "strategy": request.strategy,
        "count": data.len(),
        "data": data,
    })))
}
