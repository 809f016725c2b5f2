//! genai-trace CLI — emit one traced GenAI chat completion.

use clap::Parser;
use genai_trace::chat::chat_complete_operation;
use genai_trace::config::Config;
use genai_trace::telemetry::{TelemetryConfig, init_telemetry};

#[derive(Parser)]
#[command(
    name = "genai-trace",
    about = "Emit a demo chat-completion span with GenAI semantic attributes"
)]
struct Cli {
    /// OTLP collector endpoint (overrides OTEL_ENDPOINT)
    #[arg(long)]
    endpoint: Option<String>,
    /// Service name reported in telemetry (overrides OTEL_SERVICE_NAME)
    #[arg(long)]
    service_name: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(endpoint) = cli.endpoint {
        config.otel_endpoint = Some(endpoint);
    }
    if let Some(name) = cli.service_name {
        config.service_name = name;
    }

    let guard = init_telemetry(TelemetryConfig {
        endpoint: config.otel_endpoint.clone(),
        service_name: config.service_name.clone(),
        log_level: config.log_level.clone(),
    })?;

    println!("Running GenAI chat completion demo...");

    let tracer = guard.tracer();
    chat_complete_operation(&tracer).await?;

    guard.force_flush();
    println!("GenAI operation completed with tracing");

    Ok(())
}
