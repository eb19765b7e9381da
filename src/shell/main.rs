use anyhow::Context;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

use registration_smoke::modules::registrations::adapters::outbound::http_transport::HttpRegistrationTransport;
use registration_smoke::modules::registrations::use_cases::send_registration_batch::handler::SendRegistrationBatchHandler;
use registration_smoke::shell::config::{SenderConfig, load_env_file};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    load_env_file(None).context("invalid .env file")?;
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SenderConfig::from_env().context("invalid sender configuration")?;
    let transport = HttpRegistrationTransport::new(config.endpoint.clone(), config.timeout)
        .context("failed to build the HTTP client")?;
    info!(
        endpoint = %config.endpoint,
        count = config.count,
        base_index = config.base_index,
        "sending registrations"
    );

    let handler = SendRegistrationBatchHandler::new(Arc::new(transport));
    let report = handler
        .handle(config.batch(), |outcome| println!("{outcome}"))
        .await;

    info!(
        run_id = %report.run_id,
        issued = report.issued,
        succeeded = report.succeeded(),
        failed = report.failed(),
        aborted = report.aborted,
        by_status = ?report.responses_by_status(),
        elapsed_ms = (report.finished_at - report.started_at).num_milliseconds(),
        "registration batch finished"
    );
    Ok(())
}
