//! Client Settings Domain Model
//!
//! Defines the persisted client configuration and the partial updates
//! applied to it.

use serde::{Deserialize, Serialize};

use crate::error::DomainResult;
use crate::route::{DEFAULT_ROUTE, build_link, route_from_link, validate_route};

/// Language used when neither the update nor the stored settings name one.
pub const DEFAULT_LANGUAGE: &str = "en/us";

/// Returns the project name used when none has ever been configured.
#[must_use]
pub fn default_project_name() -> String {
    format!("esi-rs-v{}", env!("CARGO_PKG_VERSION"))
}

/// Persisted client configuration.
///
/// `link` is always the fully composed base URL
/// (`https://esi.evetech.net/latest/`), never a bare channel name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Name of the consuming project, sent as the user agent.
    pub project_name: String,

    /// Base URL every endpoint path is appended to.
    pub link: String,

    /// Bearer token for authenticated endpoints.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,

    /// Locale code, e.g. `en/us`.
    pub language: String,
}

impl Settings {
    /// Returns the release channel encoded in `link`, if any.
    #[must_use]
    pub fn route(&self) -> Option<String> {
        route_from_link(&self.link)
    }
}

/// Partial, caller-supplied patch for [`Settings`].
///
/// Absent and empty fields keep the stored value. An empty string therefore
/// cannot be used to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SettingsUpdate {
    /// Release channel name.
    pub route: Option<String>,
    /// Bearer token.
    pub auth_token: Option<String>,
    /// Locale code.
    pub language: Option<String>,
    /// Project name.
    pub project_name: Option<String>,
}

impl SettingsUpdate {
    /// Creates an empty update.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the release channel.
    #[must_use]
    pub fn with_route(mut self, route: impl Into<String>) -> Self {
        self.route = Some(route.into());
        self
    }

    /// Sets the auth token.
    #[must_use]
    pub fn with_auth_token(mut self, token: impl Into<String>) -> Self {
        self.auth_token = Some(token.into());
        self
    }

    /// Sets the language.
    #[must_use]
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    /// Sets the project name.
    #[must_use]
    pub fn with_project_name(mut self, name: impl Into<String>) -> Self {
        self.project_name = Some(name.into());
        self
    }

    /// Merges this update over `current` and composes the resulting settings.
    ///
    /// Each field resolves to the first non-empty value among the update,
    /// the current settings, and the update's own default. Defaults only
    /// matter on the first write, when `current` is `None`.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::InvalidRoute`](crate::DomainError::InvalidRoute)
    /// if the resolved route is not allow-listed.
    pub fn apply(self, current: Option<&Settings>) -> DomainResult<Settings> {
        let route = present(self.route)
            .or_else(|| current.and_then(Settings::route))
            .unwrap_or_else(|| DEFAULT_ROUTE.to_string());

        let auth_token = present(self.auth_token)
            .or_else(|| current.and_then(|c| present(c.auth_token.clone())));

        let language = present(self.language)
            .or_else(|| current.and_then(|c| present(Some(c.language.clone()))))
            .unwrap_or_else(|| DEFAULT_LANGUAGE.to_string());

        let project_name = present(self.project_name)
            .or_else(|| current.and_then(|c| present(Some(c.project_name.clone()))))
            .unwrap_or_else(default_project_name);

        let route = validate_route(&route)?;

        Ok(Settings {
            project_name,
            link: build_link(route),
            auth_token,
            language,
        })
    }
}

/// Treats empty strings as absent.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::DomainError;
    use crate::route::ROUTES;
    use pretty_assertions::assert_eq;

    fn stored() -> Settings {
        Settings {
            project_name: "my-project".to_string(),
            link: "https://esi.evetech.net/legacy/".to_string(),
            auth_token: Some("token-1".to_string()),
            language: "fr/fr".to_string(),
        }
    }

    #[test]
    fn first_write_uses_update_defaults() {
        let settings = SettingsUpdate::new().apply(None).unwrap();
        assert_eq!(settings.link, "https://esi.evetech.net/latest/");
        assert_eq!(settings.language, DEFAULT_LANGUAGE);
        assert_eq!(settings.project_name, default_project_name());
        assert_eq!(settings.auth_token, None);
    }

    #[test]
    fn omitted_fields_keep_stored_values() {
        let current = stored();
        let settings = SettingsUpdate::new().apply(Some(&current)).unwrap();
        assert_eq!(settings, current);
    }

    #[test]
    fn empty_strings_do_not_clear_fields() {
        let current = stored();
        let update = SettingsUpdate::new()
            .with_route("")
            .with_auth_token("")
            .with_language("")
            .with_project_name("");
        let settings = update.apply(Some(&current)).unwrap();
        assert_eq!(settings, current);
    }

    #[test]
    fn provided_fields_override_stored_values() {
        let current = stored();
        let settings = SettingsUpdate::new()
            .with_route("latest")
            .with_language("de/de")
            .apply(Some(&current))
            .unwrap();
        assert_eq!(settings.link, "https://esi.evetech.net/latest/");
        assert_eq!(settings.language, "de/de");
        assert_eq!(settings.auth_token.as_deref(), Some("token-1"));
        assert_eq!(settings.project_name, "my-project");
    }

    #[test]
    fn rejects_unknown_route() {
        let err = SettingsUpdate::new()
            .with_route("bogus")
            .apply(Some(&stored()))
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::InvalidRoute {
                route: "bogus".to_string(),
                allowed: ROUTES.iter().map(ToString::to_string).collect(),
            }
        );
    }

    #[test]
    fn unparseable_stored_link_falls_back_to_default_route() {
        let mut current = stored();
        current.link = "not a url".to_string();
        let settings = SettingsUpdate::new().apply(Some(&current)).unwrap();
        assert_eq!(settings.link, "https://esi.evetech.net/latest/");
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let json = serde_json::to_value(stored()).unwrap();
        assert_eq!(json["projectName"], "my-project");
        assert_eq!(json["authToken"], "token-1");
        assert_eq!(json["link"], "https://esi.evetech.net/legacy/");
    }

    #[test]
    fn missing_auth_token_is_omitted_and_accepted() {
        let mut current = stored();
        current.auth_token = None;
        let json = serde_json::to_string(&current).unwrap();
        assert!(!json.contains("authToken"));

        let parsed: Settings = serde_json::from_str(
            r#"{"projectName":"p","link":"https://esi.evetech.net/latest/","language":"en/us"}"#,
        )
        .unwrap();
        assert_eq!(parsed.auth_token, None);
    }
}
