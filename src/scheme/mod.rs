//! # Security Scheme Module
//!
//! Typed, validated descriptions of OpenAPI security schemes.
//!
//! A [`SecuritySchemeDescriptor`] is built once through
//! [`SecuritySchemeBuilder`], checked against the field requirements of its
//! `type`, and rendered into a [`SchemeFragment`] that a document builder
//! embeds under `components.securitySchemes.<name>`.
//!
//! | type            | required fields         | rendered fields                  |
//! |-----------------|-------------------------|----------------------------------|
//! | `apiKey`        | `name`, `in`            | `name`, `in`                     |
//! | `http`          | `scheme`                | `scheme`, `bearerFormat` (bearer)|
//! | `oauth2`        | `flows` (≥ 1 configured)| `flows`                          |
//! | `openIdConnect` | `openIdConnectUrl`      | `openIdConnectUrl`               |
//!
//! Fields that do not apply to the declared type are accepted and ignored.
//!
//! ```rust
//! use brrtrouter_schemes::scheme::SecuritySchemeDescriptor;
//!
//! let scheme = SecuritySchemeDescriptor::builder("http")
//!     .scheme("bearer")
//!     .bearer_format("JWT")
//!     .build()
//!     .unwrap();
//! let fragment = scheme.to_fragment();
//! assert_eq!(fragment.keys().collect::<Vec<_>>(), ["type", "scheme", "bearerFormat"]);
//! ```

mod error;
mod flows;
mod fragment;


pub use error::SchemeError;
pub use flows::{OAuthFlow, OAuthFlows};
pub use fragment::{FragmentValue, SchemeFragment};

use std::fmt;
use std::str::FromStr;

use tracing::debug;
use url::Url;

/// The four OpenAPI security scheme types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SecuritySchemeType {
    ApiKey,
    Http,
    OAuth2,
    OpenIdConnect,
}

impl SecuritySchemeType {
    /// OpenAPI wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            SecuritySchemeType::ApiKey => "apiKey",
            SecuritySchemeType::Http => "http",
            SecuritySchemeType::OAuth2 => "oauth2",
            SecuritySchemeType::OpenIdConnect => "openIdConnect",
        }
    }
}

impl FromStr for SecuritySchemeType {
    type Err = SchemeError;

    /// Exact, case-sensitive match on the wire name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "apiKey" => Ok(SecuritySchemeType::ApiKey),
            "http" => Ok(SecuritySchemeType::Http),
            "oauth2" => Ok(SecuritySchemeType::OAuth2),
            "openIdConnect" => Ok(SecuritySchemeType::OpenIdConnect),
            other => Err(SchemeError::InvalidType {
                value: other.to_string(),
            }),
        }
    }
}

impl fmt::Display for SecuritySchemeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where an API key is carried
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApiKeyLocation {
    Query,
    Header,
    Cookie,
}

impl ApiKeyLocation {
    pub fn as_str(&self) -> &'static str {
        match self {
            ApiKeyLocation::Query => "query",
            ApiKeyLocation::Header => "header",
            ApiKeyLocation::Cookie => "cookie",
        }
    }
}

impl FromStr for ApiKeyLocation {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "query" => Ok(ApiKeyLocation::Query),
            "header" => Ok(ApiKeyLocation::Header),
            "cookie" => Ok(ApiKeyLocation::Cookie),
            _ => Err(()),
        }
    }
}

impl fmt::Display for ApiKeyLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<ApiKeyLocation> for String {
    fn from(loc: ApiKeyLocation) -> Self {
        loc.as_str().to_string()
    }
}

/// One validated security scheme declaration
///
/// Immutable once built. The scheme's name is not part of the record; the
/// document builder supplies it as the map key. Fields irrelevant to the
/// declared type are kept as given (so equality covers them) but never
/// rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecuritySchemeDescriptor {
    scheme_type: SecuritySchemeType,
    description: Option<String>,
    name: Option<String>,
    location: Option<String>,
    scheme: Option<String>,
    bearer_format: Option<String>,
    flows: Option<OAuthFlows>,
    open_id_connect_url: Option<String>,
}

impl SecuritySchemeDescriptor {
    /// Start a declaration of the given type
    ///
    /// The type string is only checked in [`SecuritySchemeBuilder::build`].
    pub fn builder(scheme_type: impl Into<String>) -> SecuritySchemeBuilder {
        SecuritySchemeBuilder::new(scheme_type)
    }

    pub fn scheme_type(&self) -> SecuritySchemeType {
        self.scheme_type
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Raw `in` value as declared
    pub fn location(&self) -> Option<&str> {
        self.location.as_deref()
    }

    /// Parsed `in` value; always `Some` for `apiKey` schemes
    pub fn api_key_location(&self) -> Option<ApiKeyLocation> {
        self.location.as_deref().and_then(|l| l.parse().ok())
    }

    pub fn scheme(&self) -> Option<&str> {
        self.scheme.as_deref()
    }

    pub fn bearer_format(&self) -> Option<&str> {
        self.bearer_format.as_deref()
    }

    pub fn flows(&self) -> Option<&OAuthFlows> {
        self.flows.as_ref()
    }

    pub fn open_id_connect_url(&self) -> Option<&str> {
        self.open_id_connect_url.as_deref()
    }

    fn is_bearer(&self) -> bool {
        self.scheme
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("bearer"))
    }

    /// Render the `components.securitySchemes` entry for this scheme
    ///
    /// Emits `type`, `description` when non-empty, and only the fields that
    /// apply to the type. Pure; repeated calls yield identical fragments.
    pub fn to_fragment(&self) -> SchemeFragment {
        let mut fragment = SchemeFragment::default();
        fragment.push_text("type", self.scheme_type.as_str());
        if let Some(description) = &self.description {
            fragment.push_text("description", description);
        }

        match self.scheme_type {
            SecuritySchemeType::ApiKey => {
                if let Some(name) = &self.name {
                    fragment.push_text("name", name);
                }
                if let Some(location) = &self.location {
                    fragment.push_text("in", location);
                }
            }
            SecuritySchemeType::Http => {
                if let Some(scheme) = &self.scheme {
                    fragment.push_text("scheme", scheme);
                }
                if self.is_bearer() {
                    if let Some(format) = &self.bearer_format {
                        fragment.push_text("bearerFormat", format);
                    }
                }
            }
            SecuritySchemeType::OAuth2 => {
                if let Some(flows) = &self.flows {
                    fragment.push("flows", FragmentValue::Flows(flows.configured()));
                }
            }
            SecuritySchemeType::OpenIdConnect => {
                if let Some(url) = &self.open_id_connect_url {
                    fragment.push_text("openIdConnectUrl", url);
                }
            }
        }

        fragment
    }
}

/// Builder for [`SecuritySchemeDescriptor`]
///
/// Every field except the type is optional; [`build`](Self::build) applies
/// the per-type requirements.
///
/// # Example
///
/// ```rust
/// use brrtrouter_schemes::scheme::{ApiKeyLocation, SecuritySchemeDescriptor};
///
/// let api_key = SecuritySchemeDescriptor::builder("apiKey")
///     .name("X-API-Key")
///     .location(ApiKeyLocation::Header)
///     .description("Static key issued per tenant")
///     .build()
///     .expect("valid apiKey scheme");
/// assert_eq!(api_key.api_key_location(), Some(ApiKeyLocation::Header));
/// ```
#[derive(Debug, Clone, Default)]
pub struct SecuritySchemeBuilder {
    scheme_type: String,
    description: Option<String>,
    name: Option<String>,
    location: Option<String>,
    scheme: Option<String>,
    bearer_format: Option<String>,
    flows: Option<OAuthFlows>,
    open_id_connect_url: Option<String>,
    strict_urls: bool,
}

impl SecuritySchemeBuilder {
    pub fn new(scheme_type: impl Into<String>) -> Self {
        Self {
            scheme_type: scheme_type.into(),
            ..Self::default()
        }
    }

    /// CommonMark description; empty means absent
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Header, query or cookie parameter name (`apiKey`)
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// The `in` field: `query`, `header` or `cookie` (`apiKey`)
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// RFC 7235 authorization scheme name (`http`)
    pub fn scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = Some(scheme.into());
        self
    }

    /// Bearer token format hint (`http` + `bearer`)
    pub fn bearer_format(mut self, format: impl Into<String>) -> Self {
        self.bearer_format = Some(format.into());
        self
    }

    pub fn flows(mut self, flows: OAuthFlows) -> Self {
        self.flows = Some(flows);
        self
    }

    /// OpenID Connect discovery URL (`openIdConnect`)
    pub fn open_id_connect_url(mut self, url: impl Into<String>) -> Self {
        self.open_id_connect_url = Some(url.into());
        self
    }

    /// Also require `http`/`https` and a host on `openIdConnectUrl`
    pub fn strict_urls(mut self, strict: bool) -> Self {
        self.strict_urls = strict;
        self
    }

    /// Validate the declaration and produce the descriptor
    ///
    /// # Errors
    ///
    /// - [`SchemeError::InvalidType`] for an unknown type string
    /// - [`SchemeError::MissingRequiredField`] when a field required by the
    ///   type is absent or blank, or `in` is not an allowed location
    /// - [`SchemeError::InvalidUrl`] when `openIdConnectUrl` does not parse
    ///   as an absolute URL
    pub fn build(self) -> Result<SecuritySchemeDescriptor, SchemeError> {
        let scheme_type: SecuritySchemeType = self.scheme_type.parse()?;
        let raw_type = self.scheme_type.as_str();

        match scheme_type {
            SecuritySchemeType::ApiKey => {
                if is_blank(&self.name) {
                    return Err(SchemeError::missing(raw_type, "name"));
                }
                let valid_location = self
                    .location
                    .as_deref()
                    .is_some_and(|l| l.parse::<ApiKeyLocation>().is_ok());
                if !valid_location {
                    return Err(SchemeError::missing(raw_type, "in"));
                }
            }
            SecuritySchemeType::Http => {
                if is_blank(&self.scheme) {
                    return Err(SchemeError::missing(raw_type, "scheme"));
                }
            }
            SecuritySchemeType::OAuth2 => {
                if self.flows.as_ref().map_or(true, OAuthFlows::is_empty) {
                    return Err(SchemeError::missing(raw_type, "flows"));
                }
            }
            SecuritySchemeType::OpenIdConnect => match self.open_id_connect_url.as_deref() {
                Some(url) if !url.trim().is_empty() => check_url(url, self.strict_urls)?,
                _ => return Err(SchemeError::missing(raw_type, "openIdConnectUrl")),
            },
        }

        debug!(scheme_type = %scheme_type, "security scheme validated");

        Ok(SecuritySchemeDescriptor {
            scheme_type,
            description: non_empty(self.description),
            name: self.name,
            location: self.location,
            scheme: self.scheme,
            bearer_format: non_empty(self.bearer_format),
            flows: self.flows,
            open_id_connect_url: self.open_id_connect_url,
        })
    }
}

fn is_blank(value: &Option<String>) -> bool {
    value.as_deref().map_or(true, |s| s.trim().is_empty())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn check_url(raw: &str, strict: bool) -> Result<(), SchemeError> {
    let invalid = |reason: String| SchemeError::InvalidUrl {
        url: raw.to_string(),
        reason,
    };

    // The URL parser strips these silently; the raw value is what gets rendered.
    if raw != raw.trim() {
        return Err(invalid("surrounding whitespace".to_string()));
    }
    if raw.contains(['\t', '\n', '\r']) {
        return Err(invalid("embedded tab or newline".to_string()));
    }

    let url = Url::parse(raw).map_err(|e| invalid(e.to_string()))?;
    if strict {
        if !matches!(url.scheme(), "http" | "https") {
            return Err(invalid(format!("unsupported scheme '{}'", url.scheme())));
        }
        if url.host_str().map_or(true, str::is_empty) {
            return Err(invalid("missing host".to_string()));
        }
    }
    Ok(())
}
