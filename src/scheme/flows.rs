use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single OAuth2 flow (one grant type)
///
/// Every URL is optional here; OpenAPI requires different URLs per grant
/// type but the descriptor only checks that at least one flow is configured.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlow {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_url: Option<String>,
    /// Scope name → scope description
    #[serde(default)]
    pub scopes: BTreeMap<String, String>,
}

impl OAuthFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn authorization_url(mut self, url: impl Into<String>) -> Self {
        self.authorization_url = Some(url.into());
        self
    }

    pub fn token_url(mut self, url: impl Into<String>) -> Self {
        self.token_url = Some(url.into());
        self
    }

    pub fn refresh_url(mut self, url: impl Into<String>) -> Self {
        self.refresh_url = Some(url.into());
        self
    }

    /// Add a scope; a later scope with the same name replaces the earlier one
    pub fn scope(mut self, name: impl Into<String>, description: impl Into<String>) -> Self {
        self.scopes.insert(name.into(), description.into());
        self
    }

    /// A flow counts as configured once it carries any URL or scope
    pub fn is_configured(&self) -> bool {
        let has_url = [
            self.authorization_url.as_deref(),
            self.token_url.as_deref(),
            self.refresh_url.as_deref(),
        ]
        .into_iter()
        .flatten()
        .any(|s| !s.trim().is_empty());
        has_url || !self.scopes.is_empty()
    }
}

/// The OAuth2 flows supported by a scheme
///
/// Field order matches the order flows are rendered in.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OAuthFlows {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub implicit: Option<OAuthFlow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<OAuthFlow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_credentials: Option<OAuthFlow>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_code: Option<OAuthFlow>,
}

impl OAuthFlows {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn implicit(mut self, flow: OAuthFlow) -> Self {
        self.implicit = Some(flow);
        self
    }

    pub fn password(mut self, flow: OAuthFlow) -> Self {
        self.password = Some(flow);
        self
    }

    pub fn client_credentials(mut self, flow: OAuthFlow) -> Self {
        self.client_credentials = Some(flow);
        self
    }

    pub fn authorization_code(mut self, flow: OAuthFlow) -> Self {
        self.authorization_code = Some(flow);
        self
    }

    /// Number of present sub-flows that are configured
    pub fn configured_count(&self) -> usize {
        [
            self.implicit.as_ref(),
            self.password.as_ref(),
            self.client_credentials.as_ref(),
            self.authorization_code.as_ref(),
        ]
        .into_iter()
        .flatten()
        .filter(|f| f.is_configured())
        .count()
    }

    pub fn is_empty(&self) -> bool {
        self.configured_count() == 0
    }

    /// Copy holding only the configured sub-flows
    pub fn configured(&self) -> OAuthFlows {
        let keep = |flow: &Option<OAuthFlow>| flow.clone().filter(OAuthFlow::is_configured);
        OAuthFlows {
            implicit: keep(&self.implicit),
            password: keep(&self.password),
            client_credentials: keep(&self.client_credentials),
            authorization_code: keep(&self.authorization_code),
        }
    }
}
