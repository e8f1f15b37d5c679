use std::fmt;

/// Security scheme construction error
///
/// Returned by `SecuritySchemeBuilder::build()` when a declaration does not
/// describe a valid OpenAPI security scheme. Construction either yields a
/// fully valid descriptor or exactly one of these.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemeError {
    /// `type` is not one of `apiKey`, `http`, `oauth2`, `openIdConnect`
    InvalidType {
        /// The rejected type string
        value: String,
    },
    /// A field required by the declared type is absent, empty, or (for
    /// `in`) not one of the allowed locations
    MissingRequiredField {
        /// The declared type, as written
        scheme_type: String,
        /// OpenAPI field name (e.g. `name`, `in`, `flows`)
        field: &'static str,
    },
    /// `openIdConnectUrl` is present but not a well-formed absolute URL
    InvalidUrl {
        /// The rejected URL string
        url: String,
        /// Why parsing rejected it
        reason: String,
    },
}

impl SchemeError {
    /// Stable error kind name, used as the `kind` of a validation issue
    pub fn kind(&self) -> &'static str {
        match self {
            SchemeError::InvalidType { .. } => "InvalidType",
            SchemeError::MissingRequiredField { .. } => "MissingRequiredField",
            SchemeError::InvalidUrl { .. } => "InvalidUrl",
        }
    }

    pub(crate) fn missing(scheme_type: &str, field: &'static str) -> Self {
        SchemeError::MissingRequiredField {
            scheme_type: scheme_type.to_string(),
            field,
        }
    }
}

impl fmt::Display for SchemeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SchemeError::InvalidType { value } => {
                write!(
                    f,
                    "Security scheme error: Invalid type '{}'. \
                    Expected one of: apiKey, http, oauth2, openIdConnect",
                    value
                )
            }
            SchemeError::MissingRequiredField { scheme_type, field } if scheme_type.is_empty() => {
                write!(f, "Security scheme error: Field '{}' is required", field)
            }
            SchemeError::MissingRequiredField { scheme_type, field } => {
                write!(
                    f,
                    "Security scheme error: Field '{}' is required for type '{}'",
                    field, scheme_type
                )
            }
            SchemeError::InvalidUrl { url, reason } => {
                write!(
                    f,
                    "Security scheme error: Invalid openIdConnectUrl '{}' ({}). \
                    Expected an absolute URL (e.g., https://issuer.example/.well-known/openid-configuration)",
                    url, reason
                )
            }
        }
    }
}

impl std::error::Error for SchemeError {}
