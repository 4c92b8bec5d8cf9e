//! Release channel routes and base link composition.
//!
//! ESI exposes every endpoint under a release channel segment
//! (`https://esi.evetech.net/latest/...`). Settings persist the fully
//! composed link, so the channel has to be recovered from the link when a
//! partial update does not name one.

use url::Url;

use crate::error::{DomainError, DomainResult};

/// Host serving the ESI API.
pub const SERVER: &str = "esi.evetech.net";

/// Release channels accepted by [`validate_route`].
pub const ROUTES: &[&str] = &[
    "latest", "legacy", "dev", "v1", "v2", "v3", "v4", "v5", "v6",
];

/// Channel used when nothing else is known.
pub const DEFAULT_ROUTE: &str = "latest";

/// Datasource every endpoint is queried against.
pub const DATASOURCE: &str = "tranquility";

/// Checks that `route` is one of [`ROUTES`], case-sensitively.
///
/// # Errors
///
/// Returns [`DomainError::InvalidRoute`] carrying the offending value and
/// the allow-list.
pub fn validate_route(route: &str) -> DomainResult<&str> {
    if ROUTES.contains(&route) {
        Ok(route)
    } else {
        Err(DomainError::InvalidRoute {
            route: route.to_string(),
            allowed: ROUTES.iter().map(ToString::to_string).collect(),
        })
    }
}

/// Composes the base link for a release channel.
///
/// The route is not checked here; callers validate it first.
#[must_use]
pub fn build_link(route: &str) -> String {
    format!("https://{SERVER}/{route}/")
}

/// Recovers the release channel from a previously composed link.
///
/// Returns the last non-empty path segment, or `None` when the link is not
/// a URL or has no path.
#[must_use]
pub fn route_from_link(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.path_segments()?
        .rfind(|segment| !segment.is_empty())
        .map(ToString::to_string)
}

/// Builds an endpoint URL below `link`, pinned to the tranquility datasource.
///
/// `path` is relative to the link and should end with a slash, e.g.
/// `"alliances/"`.
#[must_use]
pub fn endpoint(link: &str, path: &str) -> String {
    format!("{link}{path}?datasource={DATASOURCE}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_build_link_latest() {
        assert_eq!(build_link("latest"), "https://esi.evetech.net/latest/");
    }

    #[test]
    fn test_build_link_has_no_double_slash_after_scheme() {
        for route in ROUTES {
            let link = build_link(route);
            let after_scheme = link.trim_start_matches("https://");
            assert!(!after_scheme.contains("//"), "{link}");
            assert!(link.ends_with('/'));
        }
    }

    #[test]
    fn test_validate_route_accepts_allow_listed() {
        assert_eq!(validate_route("latest").unwrap(), "latest");
        assert_eq!(validate_route("v2").unwrap(), "v2");
    }

    #[test]
    fn test_validate_route_is_case_sensitive() {
        let err = validate_route("Latest").unwrap_err();
        match err {
            DomainError::InvalidRoute { route, allowed } => {
                assert_eq!(route, "Latest");
                assert_eq!(allowed.len(), ROUTES.len());
            }
            other => unreachable!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_invalid_route_message_lists_allowed() {
        let err = validate_route("bogus").unwrap_err();
        let message = err.to_string();
        assert!(message.contains("bogus"));
        assert!(message.contains("latest,legacy,dev"));
    }

    #[test]
    fn test_route_from_link() {
        assert_eq!(
            route_from_link("https://esi.evetech.net/latest/").as_deref(),
            Some("latest")
        );
        assert_eq!(
            route_from_link("https://esi.evetech.net/v4").as_deref(),
            Some("v4")
        );
        assert_eq!(route_from_link("https://esi.evetech.net/"), None);
        assert_eq!(route_from_link("latest"), None);
    }

    #[test]
    fn test_route_from_link_inverts_build_link() {
        for route in ROUTES {
            assert_eq!(route_from_link(&build_link(route)).as_deref(), Some(*route));
        }
    }

    #[test]
    fn test_endpoint() {
        assert_eq!(
            endpoint("https://esi.evetech.net/latest/", "alliances/"),
            "https://esi.evetech.net/latest/alliances/?datasource=tranquility"
        );
    }
}
