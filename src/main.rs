use clap::Parser;
use courtside::cli::{self, Cli, Commands};
use courtside::config::AppConfig;
use courtside::error::Result;
use courtside::tui;
use tracing::error;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load_from(&cli.config)?;
    init_logging(&config);

    if let Err(errors) = config.validate() {
        for e in &errors {
            error!("config: {}", e);
        }
        return Err(courtside::CourtsideError::Internal(format!(
            "invalid configuration ({} problem{})",
            errors.len(),
            if errors.len() == 1 { "" } else { "s" }
        )));
    }

    match cli.command {
        Some(Commands::Top {
            season,
            limit,
            all,
            search,
            filter,
            json,
        }) => {
            cli::show_top(
                &config,
                season,
                limit,
                all,
                search.as_deref(),
                filter.as_deref(),
                json,
            )
            .await?;
        }
        Some(Commands::Dashboard { season, demo }) => {
            let dash = tui::DashboardConfig::from_app_config(&config, season, demo);
            tui::run_dashboard(dash).await?;
        }
        None => {
            let dash = tui::DashboardConfig::from_app_config(&config, None, false);
            tui::run_dashboard(dash).await?;
        }
    }

    Ok(())
}

/// RUST_LOG wins; otherwise the configured level, capped at warn for
/// the courtside target so log lines don't fight the alternate screen.
fn init_logging(config: &AppConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{},courtside=warn", config.logging.level)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .try_init();
}
