use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use tokio::net::TcpListener;

use vocsplit::application::ports::ArtifactStore;
use vocsplit::application::services::{
    ConversionDispatcher, RetentionSweeper, Segmenter, VoiceCloneService,
};
use vocsplit::domain::ConversionParams;
use vocsplit::infrastructure::audio::SymphoniaAudioCodec;
use vocsplit::infrastructure::conversion::InferenceEngineFactory;
use vocsplit::infrastructure::observability::{TracingConfig, init_tracing};
use vocsplit::infrastructure::storage::LocalArtifactStore;
use vocsplit::presentation::{AppState, Environment, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment = Environment::from_env().map_err(anyhow::Error::msg)?;
    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let store: Arc<dyn ArtifactStore> = Arc::new(LocalArtifactStore::new(PathBuf::from(
        &settings.storage.artifact_dir,
    ))?);

    let engine = InferenceEngineFactory::create(&settings.conversion)?;
    tracing::info!(
        engine = engine.name(),
        artifact_dir = %settings.storage.artifact_dir,
        resolution_ms = settings.segmentation.resolution_ms,
        "Inference engine ready"
    );

    let dispatcher = Arc::new(ConversionDispatcher::new(engine, ConversionParams::fixed()));
    let clone_service = Arc::new(VoiceCloneService::new(
        Arc::clone(&store),
        Arc::new(SymphoniaAudioCodec),
        dispatcher,
        Segmenter::new(settings.segmentation.resolution_ms),
    ));

    if let Some(retention_secs) = settings.storage.retention_secs {
        let sweeper = RetentionSweeper::new(
            Arc::clone(&store),
            Duration::from_secs(retention_secs),
            Duration::from_secs(settings.storage.sweep_interval_secs.max(1)),
        );
        tokio::spawn(sweeper.run());
    }

    let addr: SocketAddr = format!("{}:{}", settings.server.host, settings.server.port).parse()?;

    let state = AppState {
        clone_service,
        settings: Arc::new(settings),
    };
    let router = create_router(state);

    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
