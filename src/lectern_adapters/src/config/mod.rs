pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::{
    AuthSettings, CacheSettings, JwtSettings, PlatformSettings, PostgresSettings, RedisSettings,
    StorageSettings,
};
