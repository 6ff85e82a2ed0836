use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;

use tokio::net::TcpListener;

use callcoach::application::ports::CredentialSource;
use callcoach::application::services::{CredentialResolver, ReviewService};
use callcoach::infrastructure::audio::OpenAiTranscribeEngine;
use callcoach::infrastructure::credentials::{EnvCredentialSource, FileCredentialSource};
use callcoach::infrastructure::document::DocxRenderer;
use callcoach::infrastructure::llm::OpenAiFeedbackClient;
use callcoach::infrastructure::observability::{TracingConfig, init_tracing};
use callcoach::presentation::{AppState, Environment, ScaffoldConfig, Settings, create_router};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let environment: Environment = std::env::var("APP_ENVIRONMENT")
        .unwrap_or_else(|_| "local".to_string())
        .try_into()
        .map_err(anyhow::Error::msg)?;

    let settings = Settings::load(environment)?;

    init_tracing(
        TracingConfig::from_settings(&settings.logging, environment),
        settings.server.port,
    );

    let transcription_engine = Arc::new(OpenAiTranscribeEngine::new(
        settings.transcription.base_url.clone(),
        settings.transcription.model.clone(),
    ));
    let feedback_client = Arc::new(OpenAiFeedbackClient::new(&settings.llm));
    let report_renderer = Arc::new(DocxRenderer::new(settings.review.trainer_name.clone()));

    let credential_sources: Vec<Arc<dyn CredentialSource>> = vec![
        Arc::new(EnvCredentialSource::new(settings.credentials.env_var.clone())),
        Arc::new(FileCredentialSource::new(
            settings.credentials.secret_file.clone(),
        )),
    ];

    let review_service = Arc::new(ReviewService::new(
        CredentialResolver::new(credential_sources),
        transcription_engine,
        feedback_client,
        Arc::clone(&report_renderer),
    ));

    let state = AppState {
        review_service,
        report_renderer,
        settings: settings.clone(),
        scaffold_config: ScaffoldConfig::default(),
    };

    let router = create_router(state);

    let host: IpAddr = settings.server.host.parse()?;
    let addr = SocketAddr::new(host, settings.server.port);
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router).await?;

    Ok(())
}
