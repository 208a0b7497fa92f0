use anyhow::Context;
use forum::configuration::get_config;
use forum::startup::Application;
use forum::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    let subscriber = get_subscriber("forum".into(), "info".into(), std::io::stdout);
    init_subscriber(subscriber);

    let config = get_config().context("Failed to read configuration")?;
    let application = Application::build(config).await?;

    tracing::info!(port = application.port(), "forum server started");
    application.run_until_stopped().await
}
