use axum::http::{header, HeaderName, HeaderValue};
use axum::Router;
use tower_http::set_header::SetResponseHeaderLayer;

const PERMISSIONS_POLICY: &str = "permissions-policy";

const NOSNIFF: &str = "nosniff";
const DENY: &str = "DENY";
const HSTS_VALUE: &str = "max-age=31536000; includeSubDomains";
// The calendar page uses inline script and style.
const CSP_VALUE: &str = "default-src 'self'; script-src 'self' 'unsafe-inline'; style-src 'self' 'unsafe-inline'; frame-ancestors 'none'";
const REFERRER_POLICY_VALUE: &str = "strict-origin-when-cross-origin";
const PERMISSIONS_POLICY_VALUE: &str = "geolocation=(), microphone=(), camera=()";

fn header_layer(name: HeaderName, value: &'static str) -> SetResponseHeaderLayer<HeaderValue> {
    SetResponseHeaderLayer::overriding(name, HeaderValue::from_static(value))
}

/// Adds the standard security headers to every response. HSTS only makes
/// sense behind HTTPS, so it is limited to production.
pub fn apply_security_headers(router: Router, include_hsts: bool) -> Router {
    let router = router
        .layer(header_layer(header::X_CONTENT_TYPE_OPTIONS, NOSNIFF))
        .layer(header_layer(header::X_FRAME_OPTIONS, DENY))
        .layer(header_layer(header::CONTENT_SECURITY_POLICY, CSP_VALUE))
        .layer(header_layer(header::REFERRER_POLICY, REFERRER_POLICY_VALUE))
        .layer(header_layer(
            HeaderName::from_static(PERMISSIONS_POLICY),
            PERMISSIONS_POLICY_VALUE,
        ));

    if include_hsts {
        tracing::info!("Security: HSTS header enabled (production mode)");
        router.layer(header_layer(header::STRICT_TRANSPORT_SECURITY, HSTS_VALUE))
    } else {
        tracing::info!("Security: HSTS header disabled (development mode)");
        router
    }
}
