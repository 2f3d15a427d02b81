use anyhow::Result;
use room_availability::client::HttpAvailabilityClient;
use room_availability::config::AppConfig;
use room_availability::handlers::check_availability::{CheckOutcome, check_availability};
use room_availability::notify::Notifier;
use room_availability::notify::console::ConsoleBackend;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = AppConfig::from_env()?;
    let client = HttpAvailabilityClient::new(&config.client)?;
    tracing::info!("checking against {}", client.endpoint());
    let notifier = Notifier::with_config(ConsoleBackend::new(), &config.notifier);

    match check_availability(&notifier, &client, &config.client.booking_path).await? {
        CheckOutcome::Failed(err) => Err(err.into()),
        _ => Ok(()),
    }
}
