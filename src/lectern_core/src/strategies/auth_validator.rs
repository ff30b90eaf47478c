use async_trait::async_trait;

/// Resolves the caller's identity from the non-body parts of a request.
///
/// Implementations receive request parts (headers, method, URI) rather than the
/// full request so they never need the body to be `Sync`.
#[async_trait]
pub trait AuthValidator: Clone + Send + Sync + 'static {
    /// What a valid credential resolves to, e.g. an account id.
    type Identity: Clone + Send + Sync + 'static;

    /// Typically `http::request::Parts`.
    type RequestParts: Sync;

    type Error: std::error::Error + Send + Sync + 'static;

    /// Mandatory mode: a missing, malformed or rejected credential is an error.
    async fn validate(&self, parts: &Self::RequestParts) -> Result<Self::Identity, Self::Error>;

    /// Optional mode: any failure yields no identity and the request proceeds
    /// unauthenticated.
    async fn identify(&self, parts: &Self::RequestParts) -> Option<Self::Identity> {
        self.validate(parts).await.ok()
    }
}
