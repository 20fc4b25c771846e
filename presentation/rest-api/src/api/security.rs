use poem::Request;
use poem_openapi::SecurityScheme;
use poem_openapi::auth::ApiKey;

/// Identity attached to each request by the upstream auth gateway.
///
/// The gateway terminates authentication and forwards the caller's stable
/// user id in the `X-User-Id` header; this service trusts the header as-is.
#[derive(SecurityScheme)]
#[oai(
    ty = "api_key",
    key_name = "X-User-Id",
    key_in = "header",
    checker = "user_identity_checker"
)]
pub struct UserIdentity(pub String);

async fn user_identity_checker(_req: &Request, api_key: ApiKey) -> Option<String> {
    let identity = normalize_identity(&api_key.key);
    if identity.is_none() {
        tracing::warn!("Request carried an empty X-User-Id header");
    }
    identity
}

fn normalize_identity(raw: &str) -> Option<String> {
    let id = raw.trim();
    if id.is_empty() {
        None
    } else {
        Some(id.to_string())
    }
}
