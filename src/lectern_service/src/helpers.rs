use color_eyre::eyre::{Result, WrapErr};
use lectern_adapters::PlatformSettings;
use redis::{Client, RedisResult, aio::MultiplexedConnection};
use secrecy::ExposeSecret;
use sqlx::{PgPool, postgres::PgPoolOptions};

/// Creates the PostgreSQL pool and runs the embedded migrations.
pub async fn configure_postgresql(settings: &PlatformSettings) -> Result<PgPool> {
    let pg_pool = get_postgres_pool(settings.postgres.url.expose_secret())
        .await
        .wrap_err("Failed to create Postgres connection pool")?;

    sqlx::migrate!()
        .run(&pg_pool)
        .await
        .wrap_err("Failed to run migrations")?;

    Ok(pg_pool)
}

/// Opens a multiplexed Redis connection shared by every repository.
pub async fn configure_redis(settings: &PlatformSettings) -> Result<MultiplexedConnection> {
    get_redis_client(&settings.redis.host_name)
        .wrap_err("Failed to get Redis client")?
        .get_multiplexed_async_connection()
        .await
        .wrap_err("Failed to get Redis connection")
}

pub async fn get_postgres_pool(url: &str) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new().max_connections(5).connect(url).await
}

pub fn get_redis_client(redis_hostname: &str) -> RedisResult<Client> {
    let redis_url = format!("redis://{}/", redis_hostname);
    redis::Client::open(redis_url)
}
