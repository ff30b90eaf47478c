use chrono::Utc;
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode,
    errors::ErrorKind as JwtErrorKind,
};
use lectern_core::{AccountId, TokenAuthority, TokenError};
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};

#[derive(Clone)]
pub struct JwtConfig {
    pub secret: Secret<String>,
    pub time_to_live_seconds: i64,
}

impl JwtConfig {
    pub fn as_bytes(&self) -> &[u8] {
        self.secret.expose_secret().as_bytes()
    }
}

/// Token payload. `account_id` is optional on the wire so that tokens
/// lacking it surface as [`TokenError::ClaimsMissing`] instead of a decode
/// failure.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub account_id: Option<i64>,
    #[serde(default)]
    pub iat: i64,
    pub exp: i64,
}

/// HS256 signer and verifier sharing one secret.
#[derive(Clone)]
pub struct JwtTokenAuthority {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
    time_to_live_seconds: i64,
}

impl JwtTokenAuthority {
    pub fn new(config: JwtConfig) -> Result<Self, TokenError> {
        if config.secret.expose_secret().is_empty() {
            return Err(TokenError::Signing("signing secret is empty".to_string()));
        }
        if config.time_to_live_seconds <= 0 {
            return Err(TokenError::Signing(format!(
                "token lifetime must be positive, got {}",
                config.time_to_live_seconds
            )));
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Ok(Self {
            encoding_key: EncodingKey::from_secret(config.as_bytes()),
            decoding_key: DecodingKey::from_secret(config.as_bytes()),
            validation,
            time_to_live_seconds: config.time_to_live_seconds,
        })
    }

    fn claims_for(&self, account_id: AccountId) -> Result<Claims, TokenError> {
        let delta = chrono::Duration::try_seconds(self.time_to_live_seconds)
            .ok_or_else(|| TokenError::Signing("token lifetime out of range".to_string()))?;
        let now = Utc::now();
        let exp = now
            .checked_add_signed(delta)
            .ok_or_else(|| TokenError::Signing("expiry out of range".to_string()))?;

        Ok(Claims {
            account_id: Some(account_id.get()),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        })
    }
}

fn token_error(error: jsonwebtoken::errors::Error) -> TokenError {
    match error.kind() {
        JwtErrorKind::ExpiredSignature => TokenError::Expired,
        JwtErrorKind::InvalidSignature | JwtErrorKind::InvalidAlgorithm => {
            TokenError::SignatureInvalid
        }
        JwtErrorKind::MissingRequiredClaim(_) => TokenError::ClaimsMissing,
        _ => TokenError::Malformed,
    }
}

impl TokenAuthority for JwtTokenAuthority {
    #[tracing::instrument(name = "Issuing access token", skip(self))]
    fn issue(&self, account_id: AccountId) -> Result<String, TokenError> {
        let claims = self.claims_for(account_id)?;
        encode(&Header::new(Algorithm::HS256), &claims, &self.encoding_key)
            .map_err(|e| TokenError::Signing(e.to_string()))
    }

    fn verify(&self, token: &str) -> Result<AccountId, TokenError> {
        let claims = decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(token_error)?;

        match claims.account_id.map(AccountId::new) {
            Some(id) if !id.is_unset() => Ok(id),
            _ => Err(TokenError::ClaimsMissing),
        }
    }
}
