pub mod auth;
pub mod cache;
pub mod config;
pub mod persistence;
pub mod storage;

pub use auth::{
    argon2_codec::Argon2CredentialCodec,
    bearer_validator::{BearerValidator, extract_bearer_token},
    jwt_token_authority::{Claims, JwtConfig, JwtTokenAuthority},
};
pub use cache::{memory_cache::MemoryCache, pattern::glob_matches, redis_cache::RedisCache};
pub use crate::config::{
    AuthSettings, CacheSettings, JwtSettings, PlatformSettings, PostgresSettings, RedisSettings,
    StorageSettings,
};
pub use persistence::{
    hashmap_account_store::HashmapAccountStore, hashmap_course_store::HashmapCourseStore,
    hashmap_file_store::HashmapFileStore, postgres_account_store::PostgresAccountStore,
    postgres_course_store::PostgresCourseStore, postgres_file_store::PostgresFileStore,
};
pub use storage::{
    local_disk_storage::LocalDiskStorage, memory_object_storage::MemoryObjectStorage,
};
