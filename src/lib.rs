//! # Lectern - course platform core
//!
//! Facade crate re-exporting the public API of the platform components:
//! accounts and identity, courses, uploaded content, and the cache-aside
//! repositories they share.
//!
//! ## Usage
//!
//! Add to your `Cargo.toml`:
//! ```toml
//! [dependencies]
//! lectern = { path = "../lectern" }
//! ```
//!
//! ## Structure
//!
//! - **Core domain types**: `Account`, `Course`, `FileAsset`, `Email`, `Password`, ids
//! - **Ports**: `AccountStore`, `CourseStore`, `FileStore`, `CacheBackend`,
//!   `CredentialCodec`, `TokenAuthority`, `ObjectStorage`
//! - **Application**: cache-aside repositories and one use case per operation
//! - **Adapters**: PostgreSQL stores, Redis and in-memory caches, Argon2, JWT, disk storage
//! - **Service**: `Platform` and the `AccountService`, `CourseService` and
//!   `ContentService` facades

// ============================================================================
// Core Domain Types
// ============================================================================

/// Core domain types and value objects
pub mod core {
    pub use lectern_core::*;
}

// Re-export most commonly used core types at the root level
pub use lectern_core::{
    Account, AccountId, AccountProfile, CategoryId, Course, CourseId, CoursePage, CourseStatus,
    CourseUpdate, Email, ErrorKind, FileAsset, FileCategory, FileFilter, FileId, FilePage, Page,
    Password, ProfileUpdate, ServiceError, UploadRequest,
};

// ============================================================================
// Ports
// ============================================================================

/// Store, cache and service port definitions
pub mod ports {
    pub use lectern_core::{
        AccountStore, AuthValidator, CacheBackend, CacheError, CourseStore, CredentialCodec,
        FileStore, HashingError, ObjectStorage, SharedCache, StorageError, StoreError,
        TokenAuthority, TokenError,
    };
}

pub use ports::{
    AccountStore, AuthValidator, CacheBackend, CourseStore, CredentialCodec, FileStore,
    ObjectStorage, TokenAuthority, TokenError,
};

// ============================================================================
// Use Cases (Application Layer)
// ============================================================================

/// Repositories and use cases
pub mod use_cases {
    pub use lectern_application::*;
}

pub use lectern_application::{
    AccountLookup, CacheAside, CachePolicy, CourseDraft, LoginOutcome, Registration,
};

// ============================================================================
// Adapters (Infrastructure)
// ============================================================================

/// Infrastructure adapters
pub mod adapters {
    /// Store implementations
    pub mod persistence {
        pub use lectern_adapters::persistence::*;
    }

    /// Cache backends
    pub mod cache {
        pub use lectern_adapters::cache::*;
    }

    /// Password hashing and bearer tokens
    pub mod auth {
        pub use lectern_adapters::auth::*;
    }

    /// Object storage
    pub mod storage {
        pub use lectern_adapters::storage::*;
    }

    /// Configuration
    pub mod config {
        pub use lectern_adapters::config::*;
    }
}

pub use lectern_adapters::{
    Argon2CredentialCodec, BearerValidator, HashmapAccountStore, HashmapCourseStore,
    HashmapFileStore, JwtConfig, JwtTokenAuthority, LocalDiskStorage, MemoryCache,
    MemoryObjectStorage, PlatformSettings, PostgresAccountStore, PostgresCourseStore,
    PostgresFileStore, RedisCache,
};

// ============================================================================
// Service (Main Entry Point)
// ============================================================================

pub use lectern_service::{
    AccountService, ContentService, CourseService, Platform, PostgresPlatform,
    helpers::{configure_postgresql, configure_redis, get_postgres_pool, get_redis_client},
    telemetry::init_tracing,
};

// ============================================================================
// Re-export common external dependencies
// ============================================================================

/// Re-export async-trait for implementing port traits
pub use async_trait::async_trait;

/// Re-export secrecy for working with secrets
pub use secrecy::{ExposeSecret, Secret};

pub use http;
