use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

use workshop_registrations::modules::registrations::core::registration::REGISTRATION_HEADER;
use workshop_registrations::shared::infrastructure::notifier::Notifier;
use workshop_registrations::shared::infrastructure::notifier::in_memory::InMemoryNotifier;
use workshop_registrations::shared::infrastructure::notifier::smtp::SmtpNotifier;
use workshop_registrations::shared::infrastructure::row_store::RowStore;
use workshop_registrations::shared::infrastructure::row_store::csv_file::CsvRowStore;
use workshop_registrations::shared::infrastructure::row_store::in_memory::InMemoryRowStore;
use workshop_registrations::shell::config::{AppConfig, StoreConfig};
use workshop_registrations::shell::http::router;
use workshop_registrations::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env()?;

    let store: Arc<dyn RowStore> = match &config.store {
        StoreConfig::Csv(path) => {
            tracing::info!(path = %path.display(), "storing registrations in CSV file");
            Arc::new(CsvRowStore::new(path, &REGISTRATION_HEADER))
        }
        StoreConfig::InMemory => {
            tracing::warn!("REGISTRATIONS_CSV not set, registrations are kept in memory only");
            Arc::new(InMemoryRowStore::new(&REGISTRATION_HEADER))
        }
    };

    let notifier: Arc<dyn Notifier> = match &config.smtp {
        Some(settings) => {
            tracing::info!(host = %settings.host, port = settings.port, "sending confirmations via SMTP");
            Arc::new(SmtpNotifier::new(settings)?)
        }
        None => {
            tracing::warn!("SMTP_HOST not set, confirmation emails are recorded but not sent");
            Arc::new(InMemoryNotifier::new())
        }
    };

    let state = AppState::new(
        config.calendar,
        config.utc_offset,
        config.confirmation,
        store,
        notifier,
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!("registration endpoint: http://{}/", config.bind_addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
