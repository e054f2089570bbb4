//! Command line entry point
//!
//! Loads reference boards from a JSON file, evaluates every request file
//! given on the command line and prints the outcomes as JSON on stdout.

use clap::Parser;
use std::path::PathBuf;
use std::sync::Arc;

use engine::{
    evaluate_batch, parse_requests, services::RealReferenceStore, BiologicalAgeEngine,
    CalculationRequest, EngineConfig, EngineError, EngineResult, DEFAULT_NORMAL_BAND,
};
use shared::{logging, panel_debug};

/// Biological age calculator for biophysics, biochemistry and elemental panels
#[derive(Parser)]
#[command(name = "bioage")]
#[command(about = "Computes biological ages from biomarker measurements and reference boards")]
pub struct Args {
    /// JSON file holding the reference boards
    #[arg(long, env = "BIOAGE_BOARDS")]
    pub boards: PathBuf,

    /// Request file (one request or an array of requests), may be repeated
    #[arg(long = "request", required = true)]
    pub requests: Vec<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "BIOAGE_LOG_LEVEL")]
    pub log_level: String,

    /// Differential ages within ± this many years are classified as normal
    #[arg(long, default_value_t = DEFAULT_NORMAL_BAND, env = "BIOAGE_NORMAL_BAND")]
    pub normal_band: f64,

    /// Pretty-print the JSON output
    #[arg(long)]
    pub pretty: bool,
}

async fn read_requests(paths: &[PathBuf]) -> EngineResult<Vec<CalculationRequest>> {
    let mut requests = Vec::new();
    for path in paths {
        let contents = tokio::fs::read_to_string(path).await?;
        let parsed = parse_requests(&contents)
            .map_err(|e| EngineError::request(format!("{}: {e}", path.display())))?;
        requests.extend(parsed);
    }
    Ok(requests)
}

#[tokio::main]
async fn main() -> EngineResult<()> {
    dotenv::dotenv().ok();
    let args = Args::parse();

    logging::init_tracing_with_level(Some(&args.log_level));
    logging::log_startup(&format!("boards: {}", args.boards.display()));

    let requests = match read_requests(&args.requests).await {
        Ok(requests) => requests,
        Err(e) => {
            logging::log_error("Reading requests", &e);
            return Err(e);
        }
    };
    for request in &requests {
        panel_debug!(request.panel(), "request queued");
    }

    let engine = Arc::new(BiologicalAgeEngine::new(EngineConfig {
        normal_band: args.normal_band,
    }));
    let store = RealReferenceStore::new(&args.boards);

    let outcomes = match evaluate_batch(&store, engine, requests).await {
        Ok(outcomes) => outcomes,
        Err(e) => {
            logging::log_error("Evaluating batch", &e);
            return Err(e);
        }
    };

    let output = if args.pretty {
        serde_json::to_string_pretty(&outcomes)?
    } else {
        serde_json::to_string(&outcomes)?
    };
    println!("{output}");

    Ok(())
}
