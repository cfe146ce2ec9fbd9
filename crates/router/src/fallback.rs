//! Deterministic fallback address
//!
//! When discovery is unreachable, connectivity must still be attemptable
//! via a well-known address derived from the application identifier alone.

/// Host template the fallback subdomain is embedded into.
const FALLBACK_HOST: &str = "play.lncldglobal.com";

/// Build the deterministic fallback route URL for an application.
///
/// The first 8 characters of `app_id`, lowercased, become a subdomain of
/// the well-known fallback host. Pure and total: an empty `app_id` yields
/// an empty subdomain segment rather than an error (the resulting URL is
/// still well-formed text; it will simply never resolve).
pub fn fallback_router_url(app_id: &str) -> String {
    let prefix: String = app_id.chars().take(8).collect::<String>().to_lowercase();
    format!("https://{prefix}.{FALLBACK_HOST}/1/multiplayer/router/route")
}
