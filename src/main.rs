//! Batch evaluator: predicts risk for every record of a dataset, then reports MAE and a verdict.
//! Result lines go to stdout as ndjson; diagnostics go through tracing on stderr.

use fis_risk::{config::AppConfig, dataset, inference::FisEngine, logging::StructuredLogger};
use std::path::PathBuf;
use tracing::info;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config_path = std::env::var("FIS_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let mut config = AppConfig::load(&config_path);
    if let Some(path) = std::env::args_os().nth(1) {
        config.dataset_path = PathBuf::from(path);
    }

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(dataset = ?config.dataset_path, "fis-risk starting");

    let records = dataset::load(&config.dataset_path)?;
    let engine = FisEngine::new();
    let evaluation = engine.evaluate(&records)?;
    let verdict = evaluation.verdict(&config.report);

    if let Some(v) = verdict {
        info!(
            run_id = %evaluation.run_id,
            mae = evaluation.mae,
            verdict = %v,
            unfired = evaluation.unfired().count(),
            "model verdict"
        );
    }

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    StructuredLogger::emit_evaluation(&evaluation, verdict, &mut out)?;

    Ok(())
}
