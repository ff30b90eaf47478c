use http::{HeaderMap, header::AUTHORIZATION};
use lectern_core::{AccountId, AuthValidator, TokenAuthority, TokenError};

/// Pulls the token out of an `Authorization: Bearer <token>` header.
pub fn extract_bearer_token(headers: &HeaderMap) -> Result<&str, TokenError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(TokenError::MissingToken)?
        .to_str()
        .map_err(|_| TokenError::InvalidHeader)?;

    match value.split_once(' ') {
        Some(("Bearer", token)) => Ok(token),
        _ => Err(TokenError::InvalidHeader),
    }
}

/// Resolves the calling account from a bearer token.
#[derive(Clone)]
pub struct BearerValidator<T> {
    tokens: T,
}

impl<T> BearerValidator<T> {
    pub fn new(tokens: T) -> Self {
        Self { tokens }
    }
}

#[async_trait::async_trait]
impl<T> AuthValidator for BearerValidator<T>
where
    T: TokenAuthority + Clone + 'static,
{
    type Identity = AccountId;
    type RequestParts = http::request::Parts;
    type Error = TokenError;

    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Identity, Self::Error> {
        let token = extract_bearer_token(&parts.headers)?;
        self.tokens.verify(token)
    }
}
