use argon2::{
    Algorithm, Argon2, Params, PasswordHasher, PasswordVerifier, Version,
    password_hash::{self, SaltString, rand_core::OsRng},
};
use lectern_core::{CredentialCodec, HashingError, Password, PasswordHash};
use secrecy::{ExposeSecret, Secret};

/// Argon2id hashing, run off the async executor.
#[derive(Debug, Clone, Copy, Default)]
pub struct Argon2CredentialCodec;

impl Argon2CredentialCodec {
    pub fn new() -> Self {
        Self
    }
}

fn hasher() -> Result<Argon2<'static>, argon2::Error> {
    Ok(Argon2::new(
        Algorithm::Argon2id,
        Version::V0x13,
        Params::new(15000, 2, 1, None)?,
    ))
}

#[async_trait::async_trait]
impl CredentialCodec for Argon2CredentialCodec {
    #[tracing::instrument(name = "Computing password hash", skip_all)]
    async fn hash(&self, password: &Password) -> Result<PasswordHash, HashingError> {
        let password = password.clone();
        let current_span: tracing::Span = tracing::Span::current();

        tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let salt = SaltString::generate(&mut OsRng);
                hasher()
                    .map_err(|e| HashingError::Hash(e.to_string()))?
                    .hash_password(password.as_ref().expose_secret().as_bytes(), &salt)
                    .map(|digest| PasswordHash::new(Secret::new(digest.to_string())))
                    .map_err(|e| HashingError::Hash(e.to_string()))
            })
        })
        .await
        .map_err(|e| HashingError::Task(e.to_string()))?
    }

    #[tracing::instrument(name = "Verifying password hash", skip_all)]
    async fn verify(&self, candidate: &Secret<String>, digest: &PasswordHash) -> bool {
        let candidate = candidate.clone();
        let digest = digest.clone();
        let current_span: tracing::Span = tracing::Span::current();

        let result = tokio::task::spawn_blocking(move || {
            current_span.in_scope(|| {
                let expected = password_hash::PasswordHash::new(digest.as_ref().expose_secret())
                    .map_err(|e| e.to_string())?;
                hasher()
                    .map_err(|e| e.to_string())?
                    .verify_password(candidate.expose_secret().as_bytes(), &expected)
                    .map_err(|e| e.to_string())
            })
        })
        .await;

        match result {
            Ok(Ok(())) => true,
            Ok(Err(reason)) => {
                tracing::debug!(%reason, "Password verification failed");
                false
            }
            Err(e) => {
                tracing::error!(error = %e, "Password verification task failed");
                false
            }
        }
    }
}
