use dotenvy::dotenv;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

use activity_signup::config::AppConfig;
use activity_signup::database::activity_roster_repo::ActivityRosterRepo;
use activity_signup::database::seed_repo;
use activity_signup::error::StartupError;
use activity_signup::logging;
use activity_signup::web::{self, AppState};

#[tokio::main]
async fn main() -> Result<(), StartupError> {
    dotenv().ok();
    let config = AppConfig::from_env()?;

    // 1. Logging
    logging::init_logging(config.log_json);
    info!(build_id = env!("ACTIVITY_SIGNUP_BUILD_ID"), "starting");

    // 2. Roster seed
    let catalog = match &config.seed_path {
        Some(path) => {
            info!(path = %path.display(), "loading roster seed file");
            seed_repo::load_catalog_file(path)?
        }
        None => seed_repo::default_catalog(),
    };
    let activities = catalog.len();
    let roster = ActivityRosterRepo::new(catalog).with_capacity_enforced(config.enforce_capacity);
    info!(
        activities,
        enforce_capacity = roster.enforces_capacity(),
        "roster ready"
    );

    // 3. Router
    let app = web::app(AppState::new(roster), &config.static_dir);

    // 4. Listener, with one fallback port
    let listener = bind_with_fallback(&config.host, config.port).await?;
    let bound_addr = listener.local_addr()?;
    info!("server listening on http://{}", bound_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn bind_with_fallback(host: &str, port: u16) -> Result<TcpListener, StartupError> {
    let addr = parse_addr(host, port)?;
    match TcpListener::bind(addr).await {
        Ok(l) => Ok(l),
        Err(e) => {
            let fallback = parse_addr(host, fallback_port(port)?)?;
            warn!(%addr, error = %e, %fallback, "bind failed, trying fallback port");
            TcpListener::bind(fallback)
                .await
                .map_err(|source| StartupError::Bind {
                    addr: fallback.to_string(),
                    source,
                })
        }
    }
}

fn fallback_port(port: u16) -> Result<u16, StartupError> {
    port.checked_add(1).ok_or(StartupError::InvalidEnv {
        name: "PORT",
        value: port.to_string(),
    })
}

fn parse_addr(host: &str, port: u16) -> Result<SocketAddr, StartupError> {
    format!("{}:{}", host, port)
        .parse()
        .map_err(|_| StartupError::InvalidEnv {
            name: "HOST",
            value: host.to_string(),
        })
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "could not listen for ctrl-c");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
