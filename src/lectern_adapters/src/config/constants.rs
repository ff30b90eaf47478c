pub const CONFIG_FILE: &str = "config/base";
pub const ENV_PREFIX: &str = "LECTERN";
pub const ENV_SEPARATOR: &str = "__";

/// Unprefixed variables honoured for compatibility with common tooling.
pub mod env {
    pub const DATABASE_URL_ENV_VAR: &str = "DATABASE_URL";
    pub const REDIS_HOST_NAME_ENV_VAR: &str = "REDIS_HOST_NAME";
    pub const JWT_SECRET_ENV_VAR: &str = "JWT_SECRET";
}

pub mod defaults {
    pub const REDIS_HOST_NAME: &str = "127.0.0.1";
    /// One week.
    pub const JWT_TIME_TO_LIVE: i64 = 7 * 24 * 60 * 60;
    pub const ENTITY_TTL_SECS: u64 = 30 * 60;
    pub const LIST_TTL_SECS: u64 = 10 * 60;
    pub const DEADLINE_MILLIS: u64 = 10_000;
    pub const UPLOAD_DIR: &str = "./uploads";
    pub const BASE_URL: &str = "/uploads";
}
