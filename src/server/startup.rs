use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::Error,
    model::{app::AppState, auth::JwtVerifier},
    service::whatsapp::client::WhatsAppClient,
};

/// Connect to the database and run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database and applied migrations");

    Ok(db)
}

/// Build the state shared by all HTTP handlers
pub fn build_app_state(config: &Config, db: DatabaseConnection) -> Result<AppState, Error> {
    Ok(AppState {
        db,
        whatsapp: WhatsAppClient::new(&config.whatsapp)?,
        jwt: JwtVerifier::new(&config.jwt_secret),
    })
}
