//! Batch evaluation of calculation requests
//!
//! Boards are loaded once from a [`ReferenceStore`] and shared read-only
//! across one tokio task per request. Outcomes come back in request order
//! and a failed request never aborts the others.

use serde::{Deserialize, Serialize};
use shared::{logging, BiophysicsInputs, Board, CalculationResult, Measurements, Panel, Sex};
use std::sync::Arc;
use tokio::task::JoinSet;
use tracing::{debug, warn};

use crate::age_engine::BiologicalAgeEngine;
use crate::error::{EngineError, EngineResult};
use crate::traits::ReferenceStore;

/// One calculation, tagged by panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "panel", rename_all = "lowercase")]
pub enum CalculationRequest {
    Biophysics {
        chronological_age: f64,
        sex: Sex,
        #[serde(default)]
        is_athlete: bool,
        #[serde(default)]
        measurements: BiophysicsInputs,
    },
    Biochemistry {
        chronological_age: f64,
        #[serde(default)]
        measurements: Measurements,
    },
    Elemental {
        chronological_age: f64,
        #[serde(default)]
        measurements: Measurements,
    },
}

impl CalculationRequest {
    pub fn panel(&self) -> Panel {
        match self {
            CalculationRequest::Biophysics { .. } => Panel::Biophysics,
            CalculationRequest::Biochemistry { .. } => Panel::Biochemistry,
            CalculationRequest::Elemental { .. } => Panel::Elemental,
        }
    }

    /// Run this request against already-loaded boards
    pub fn evaluate(&self, engine: &BiologicalAgeEngine, boards: &[Board]) -> EngineResult<CalculationResult> {
        match self {
            CalculationRequest::Biophysics {
                chronological_age,
                sex,
                is_athlete,
                measurements,
            } => engine.biophysics(boards, measurements, *chronological_age, *sex, *is_athlete),
            CalculationRequest::Biochemistry {
                chronological_age,
                measurements,
            } => engine.biochemistry(boards, measurements, *chronological_age),
            CalculationRequest::Elemental {
                chronological_age,
                measurements,
            } => engine.elemental(measurements, *chronological_age),
        }
    }
}

/// Parse a request document holding either one request or an array of them
pub fn parse_requests(json: &str) -> EngineResult<Vec<CalculationRequest>> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    let requests = match value {
        serde_json::Value::Array(_) => serde_json::from_value(value)?,
        other => vec![serde_json::from_value(other)?],
    };
    Ok(requests)
}

/// Result of one request within a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchOutcome {
    pub index: usize,
    pub panel: Panel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<CalculationResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl BatchOutcome {
    fn from_result(index: usize, panel: Panel, result: EngineResult<CalculationResult>) -> Self {
        match result {
            Ok(result) => Self {
                index,
                panel,
                result: Some(result),
                error: None,
            },
            Err(e) => Self {
                index,
                panel,
                result: None,
                error: Some(e.to_string()),
            },
        }
    }

    pub fn is_ok(&self) -> bool {
        self.result.is_some()
    }
}

/// Load boards once and evaluate every request concurrently
pub async fn evaluate_batch<S>(
    store: &S,
    engine: Arc<BiologicalAgeEngine>,
    requests: Vec<CalculationRequest>,
) -> EngineResult<Vec<BatchOutcome>>
where
    S: ReferenceStore + ?Sized,
{
    let boards: Arc<[Board]> = store.load_boards().await?.into();
    debug!(requests = requests.len(), boards = boards.len(), "evaluating batch");

    let mut tasks = JoinSet::new();
    for (index, request) in requests.into_iter().enumerate() {
        let engine = Arc::clone(&engine);
        let boards = Arc::clone(&boards);
        tasks.spawn(async move {
            let panel = request.panel();
            let result = request.evaluate(&engine, &boards);
            BatchOutcome::from_result(index, panel, result)
        });
    }

    let mut outcomes = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        let outcome = joined.map_err(|e| EngineError::TaskError {
            message: e.to_string(),
        })?;

        match (&outcome.result, &outcome.error) {
            (Some(result), _) => logging::log_calculation(
                result.panel,
                result.biological_age,
                result.differential_age,
                result.contributing_count(),
            ),
            (None, Some(error)) => warn!(index = outcome.index, panel = %outcome.panel, %error, "request failed"),
            (None, None) => {}
        }

        outcomes.push(outcome);
    }

    outcomes.sort_by_key(|outcome| outcome.index);
    Ok(outcomes)
}
