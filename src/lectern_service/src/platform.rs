use std::sync::Arc;

use color_eyre::eyre::{Result, eyre};
use lectern_adapters::{
    Argon2CredentialCodec, BearerValidator, CacheSettings, JwtConfig, JwtTokenAuthority,
    LocalDiskStorage, PlatformSettings, PostgresAccountStore, PostgresCourseStore,
    PostgresFileStore, RedisCache,
};
use lectern_application::{
    AccountRepository, CacheAside, CachePolicy, CourseRepository, FileRepository,
};
use lectern_core::{
    AccountId, AccountStore, AuthValidator, CourseStore, FileStore, ObjectStorage, ServiceError,
    SharedCache,
};

use crate::{
    AccountService, ContentService, CourseService,
    helpers::{configure_postgresql, configure_redis},
};

pub fn cache_policy(settings: &CacheSettings) -> CachePolicy {
    CachePolicy {
        entity_ttl: settings.entity_ttl(),
        list_ttl: settings.list_ttl(),
        deadline: settings.deadline(),
    }
}

/// The platform wired against PostgreSQL, Redis and the local disk.
pub type PostgresPlatform =
    Platform<PostgresAccountStore, PostgresCourseStore, PostgresFileStore, LocalDiskStorage>;

/// Composition root: one shared cache, three repositories and the services
/// built on them.
#[derive(Clone)]
pub struct Platform<A, C, F, O> {
    accounts: AccountService<A>,
    courses: CourseService<C, A>,
    content: ContentService<F, O>,
    bearer: BearerValidator<JwtTokenAuthority>,
}

impl<A, C, F, O> Platform<A, C, F, O>
where
    A: AccountStore + Clone,
    C: CourseStore + Clone,
    F: FileStore + Clone,
    O: ObjectStorage + Clone,
{
    pub fn new(
        account_store: A,
        course_store: C,
        file_store: F,
        storage: O,
        cache: SharedCache,
        policy: CachePolicy,
        tokens: JwtTokenAuthority,
    ) -> Self {
        let cache = CacheAside::new(cache, policy);
        let accounts = AccountRepository::new(account_store, cache.clone());
        let courses = CourseRepository::new(course_store, cache.clone());
        let files = FileRepository::new(file_store, cache);

        Self {
            accounts: AccountService::new(
                accounts.clone(),
                Argon2CredentialCodec::new(),
                tokens.clone(),
            ),
            courses: CourseService::new(courses, accounts),
            content: ContentService::new(files, storage),
            bearer: BearerValidator::new(tokens),
        }
    }

    pub fn accounts(&self) -> &AccountService<A> {
        &self.accounts
    }

    pub fn courses(&self) -> &CourseService<C, A> {
        &self.courses
    }

    pub fn content(&self) -> &ContentService<F, O> {
        &self.content
    }

    pub fn bearer(&self) -> &BearerValidator<JwtTokenAuthority> {
        &self.bearer
    }

    /// Mandatory authentication of an incoming request.
    pub async fn authenticate(&self, parts: &http::request::Parts) -> Result<AccountId, ServiceError> {
        Ok(self.bearer.validate(parts).await?)
    }

    /// Optional authentication: any failure means an anonymous caller.
    pub async fn identify(&self, parts: &http::request::Parts) -> Option<AccountId> {
        self.bearer.identify(parts).await
    }
}

impl PostgresPlatform {
    /// Connects to PostgreSQL and Redis, runs migrations and wires everything.
    #[tracing::instrument(name = "Platform::connect", skip_all)]
    pub async fn connect(settings: &PlatformSettings) -> Result<Self> {
        let pool = configure_postgresql(settings).await?;
        let redis = configure_redis(settings).await?;

        let tokens = JwtTokenAuthority::new(JwtConfig {
            secret: settings.auth.jwt.secret.clone(),
            time_to_live_seconds: settings.auth.jwt.time_to_live,
        })
        .map_err(|e| eyre!("invalid token configuration: {e}"))?;

        let cache: SharedCache = Arc::new(RedisCache::new(redis));
        let storage = LocalDiskStorage::new(
            settings.storage.upload_dir.clone(),
            settings.storage.base_url.clone(),
        );

        tracing::info!("Platform connected");

        Ok(Platform::new(
            PostgresAccountStore::new(pool.clone()),
            PostgresCourseStore::new(pool.clone()),
            PostgresFileStore::new(pool),
            storage,
            cache,
            cache_policy(&settings.cache),
            tokens,
        ))
    }
}
