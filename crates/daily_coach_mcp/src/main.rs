use daily_coach::config::Config;
use daily_coach_mcp::{DailyCoachMcpHandler, startup};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Configure logging from env var `DAILY_COACH_LOG_LEVEL` (or fallback to `RUST_LOG`, default `info`).
    let log_env = startup::log_level_with(|k| std::env::var(k).ok());
    tracing_subscriber::fmt()
        .compact()
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .with_env_filter(startup::env_filter(&log_env))
        .init();
    tracing::info!("daily_coach_mcp: log filter: {}", log_env);

    if let Some(addr) = startup::metrics_addr_with(|k| std::env::var(k).ok())? {
        metrics_exporter_prometheus::PrometheusBuilder::new()
            .with_http_listener(addr)
            .install()?;
        tracing::info!(%addr, "daily_coach_mcp: prometheus exporter listening");
    }

    let config = Config::from_env()?;
    let handler = DailyCoachMcpHandler::new(config.rule_set());

    tracing::info!(
        "daily_coach_mcp: registered {} tools and {} prompts",
        handler.tool_count(),
        handler.prompt_count()
    );

    // stdout carries the protocol; logs stay on stderr
    tracing::info!("daily_coach_mcp: starting stdio MCP server...");

    use rmcp::serve_server;
    let transport = (tokio::io::stdin(), tokio::io::stdout());
    let server = serve_server(handler, transport).await?;

    tracing::info!("daily_coach_mcp: service initialized as server");

    server.waiting().await?;

    Ok(())
}
