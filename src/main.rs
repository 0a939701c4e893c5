//! Wiring & DI. Entry point: load config and model, inject into services, run UI.
//! No business logic here.

use dotenv::dotenv;
use reflect_journal::adapters::clock::SystemClock;
use reflect_journal::adapters::export::CsvExporter;
use reflect_journal::adapters::model::{MockModel, ModelArtifacts};
use reflect_journal::adapters::ui::progress;
use reflect_journal::adapters::ui::tui::TuiInputPort;
use reflect_journal::ports::{Clock, ExportPort, InputPort};
use reflect_journal::shared::config::AppConfig;
use reflect_journal::usecases::{EmotionClassifier, JournalService};
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!("no .env found"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("{}", e))?;

    reflect_journal::adapters::ui::init_ui();

    // --- Model: loaded exactly once, shared read-only for the whole process ---
    let classifier: Arc<EmotionClassifier> = if cfg.use_mock_model() {
        warn!("REFLECT_USE_MOCK_MODEL set, using keyword mock model");
        Arc::new(MockModel::new().into_classifier())
    } else {
        let paths = cfg.artifact_paths();
        info!(
            vectorizer = %paths.vectorizer.display(),
            classifier = %paths.classifier.display(),
            label_encoder = %paths.label_encoder.display(),
            "loading model artifacts"
        );
        let pb = progress::spinner("Loading model...");
        let loaded = ModelArtifacts::load(&paths).await;
        pb.finish_and_clear();
        let artifacts = loaded.map_err(|e| {
            anyhow::anyhow!(
                "{} (set REFLECT_MODEL_DIR, or REFLECT_USE_MOCK_MODEL=true to try without a model)",
                e
            )
        })?;
        Arc::new(artifacts.into_classifier())
    };

    // --- Services ---
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let journal = Arc::new(JournalService::new(classifier, clock));

    let export_dir = cfg.export_dir_or_default();
    info!(path = %export_dir.display(), "export directory");
    let exporter: Arc<dyn ExportPort> = Arc::new(CsvExporter::new(export_dir));

    let input_port: Arc<dyn InputPort> = Arc::new(TuiInputPort::new(journal, exporter));

    // --- Run (main menu -> Journal / History / Trends) ---
    input_port
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("{}", e))?;

    Ok(())
}
