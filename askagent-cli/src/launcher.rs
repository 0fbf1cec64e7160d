use crate::cli::{Cli, RunMode};
use crate::error::LaunchError;
use askagent_core::AppConfig;
use askagent_core::agent::{AgentOrchestrator, AgentQuery};
use askagent_core::frontend::{self, FrontendState};
use askagent_core::server::{self, ServerState};
use askagent_core::types::Query;
use std::path::Path;
use tracing::{debug, error, info};
use tracing_subscriber::{EnvFilter, fmt};

pub async fn run(cli: Cli) -> Result<(), LaunchError> {
    init_tracing();
    debug!(mode = ?cli.mode, config = ?cli.config, "CLI arguments parsed");

    let config_path = cli.config.as_deref().map(Path::new);
    let mut config = AppConfig::load(config_path)?;
    match config_path {
        Some(path) => info!(path = %path.display(), "Loaded configuration from file"),
        None => info!("Loaded configuration from default path"),
    }
    apply_cli_overrides(&cli, &mut config);

    info!(mode = ?cli.mode, "Running in selected mode");
    match cli.mode {
        RunMode::Backend => run_backend(&config).await?,
        RunMode::Frontend => run_frontend(&config).await?,
        RunMode::All => {
            let state = ServerState::from_config(&config)?;
            let backend = config.backend.clone();
            let backend_handle = tokio::spawn(async move {
                if let Err(err) = server::serve(state, &backend).await {
                    error!(error = %err, "Backend server error");
                }
            });

            tokio::time::sleep(config.frontend.startup_delay).await;
            let frontend_result = run_frontend(&config).await;

            backend_handle.abort();
            frontend_result?;
        }
        RunMode::Ask => ask(&cli, &config).await?,
    }
    info!("askagent finished");
    Ok(())
}

async fn run_backend(config: &AppConfig) -> Result<(), LaunchError> {
    let state = ServerState::from_config(config)?;
    server::serve(state, &config.backend).await?;
    Ok(())
}

async fn run_frontend(config: &AppConfig) -> Result<(), LaunchError> {
    let state = FrontendState::from_config(config)?;
    frontend::serve(state, &config.frontend).await?;
    Ok(())
}

async fn ask(cli: &Cli, config: &AppConfig) -> Result<(), LaunchError> {
    let prompt = cli.prompt.join(" ");
    if prompt.trim().is_empty() {
        return Err(LaunchError::EmptyPrompt);
    }
    let model = cli
        .model
        .clone()
        .or_else(|| config.allowed_models.first().cloned())
        .unwrap_or_default();
    if !config.is_model_allowed(&model) {
        return Err(LaunchError::ModelNotAllowed(model));
    }

    let orchestrator = AgentOrchestrator::from_config(config)?;
    let answer = orchestrator
        .respond(AgentQuery {
            model,
            query: Query::from(prompt),
            allow_search: cli.search,
            system_prompt: cli.system.clone().unwrap_or_default(),
        })
        .await?;
    println!("{answer}");
    Ok(())
}

fn apply_cli_overrides(cli: &Cli, config: &mut AppConfig) {
    if let Some(addr) = cli.backend_addr {
        info!(%addr, "Overriding backend bind address from CLI flag");
        config.backend.bind = addr;
    }
    if let Some(addr) = cli.frontend_addr {
        info!(%addr, "Overriding frontend bind address from CLI flag");
        config.frontend.bind = addr;
    }
}

fn init_tracing() {
    static INIT: std::sync::Once = std::sync::Once::new();
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
        fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_level(true)
            .init();
    });
}
