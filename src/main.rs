use dream_tool::server::{config::Config, router, scheduler::Scheduler, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), dream_tool::server::error::Error> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let db = startup::connect_to_database(&config).await?;

    if let Some(cron) = &config.maintenance_sweep_cron {
        Scheduler::new(db.clone()).await?.start(cron).await?;
    }

    let app_state = startup::build_app_state(&config, db)?;
    let app = router::routes().with_state(app_state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);

    axum::serve(listener, app).await?;

    Ok(())
}
