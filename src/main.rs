use std::net::TcpListener;
use std::time::Duration;

use secrecy::ExposeSecret;
use sqlx::postgres::PgPoolOptions;

use lifepulse_backend::config::settings::{get_config, get_jwt_settings};
use lifepulse_backend::run;
use lifepulse_backend::telemetry::{get_subscriber, init_subscriber};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Panic if we can't read the config
    let config = get_config().expect("Failed to read the config.");

    let subscriber = get_subscriber(
        "lifepulse-backend".into(),
        config.application.log_level.clone(),
        std::io::stdout,
    );
    init_subscriber(subscriber);

    let jwt_settings = get_jwt_settings(&config);

    // Alert events degrade to log lines when Redis is not configured
    let redis_client = match &config.redis {
        Some(redis) => match redis::Client::open(redis.url.expose_secret()) {
            Ok(client) => {
                tracing::info!("Redis client created successfully");
                Some(client)
            }
            Err(e) => {
                tracing::error!(
                    "Failed to create Redis client: {}. Alert events will only be logged.",
                    e
                );
                None
            }
        },
        None => {
            tracing::info!("No Redis configured. Alert events will only be logged.");
            None
        }
    };

    // Only try to establish connection when actually used
    let connection_pool = PgPoolOptions::new()
        .max_connections(32)
        .acquire_timeout(Duration::from_secs(10))
        .idle_timeout(Duration::from_secs(600))
        .max_lifetime(Duration::from_secs(1800))
        .connect_lazy(config.database.connection_string().expose_secret())
        .expect("Failed to create Postgres connection pool");

    let address = format!("{}:{}", config.application.host, config.application.port);
    let listener = TcpListener::bind(&address)?;

    run(listener, connection_pool, jwt_settings, redis_client)?.await
}
