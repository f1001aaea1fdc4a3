use color_eyre::eyre::Result;
use ticketera::{
    Argon2PasswordHasher, ExposeSecret, JwtAuthConfig, PostgresTicketStore, PostgresUserStore,
    TicketeraService, TicketeraSettings, get_postgres_pool,
};
use tracing_error::ErrorLayer;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    color_eyre::install().expect("Failed to install color_eyre");
    init_tracing().expect("Failed to initialize tracing");

    // Load configuration
    dotenvy::dotenv().ok();
    let config = TicketeraSettings::load();

    // Setup database connection pool
    let pg_pool = get_postgres_pool(config.postgres.url.expose_secret()).await?;

    // Run migrations
    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    // Create stores
    let user_store = PostgresUserStore::new(pg_pool.clone());
    let ticket_store = PostgresTicketStore::new(pg_pool);
    let password_hasher = Argon2PasswordHasher;

    let jwt_config = JwtAuthConfig {
        jwt_secret: config.auth.jwt.secret.clone(),
        token_ttl_in_seconds: config.auth.jwt.time_to_live,
    };

    let service = TicketeraService::new(user_store, ticket_store, password_hasher, jwt_config);

    // Run as standalone server
    let listener = tokio::net::TcpListener::bind(&config.app.address).await?;
    tracing::info!("Starting ticketera on {}", config.app.address);

    service
        .run_standalone(listener, Some(config.app.allowed_origins.clone()))
        .await?;

    Ok(())
}

pub fn init_tracing() -> Result<()> {
    let fmt_layer = fmt::layer().compact();

    let filter_layer = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .with(ErrorLayer::default())
        .init();

    Ok(())
}
