//! # brrtrouter-schemes
//!
//! Typed, validated [OpenAPI 3.1](https://spec.openapis.org/oas/v3.1.0#security-scheme-object)
//! security scheme declarations.
//!
//! ## Overview
//!
//! Services describe their authentication mechanisms (API key, HTTP auth,
//! OAuth2, OpenID Connect) as [`SecuritySchemeDescriptor`] values instead of
//! hand-written `components.securitySchemes` JSON/YAML. Each descriptor is
//! checked against the field requirements of its `type` when it is built and
//! renders to an ordered [`SchemeFragment`] that a document builder embeds
//! under the scheme's name.
//!
//! ## Architecture
//!
//! - **[`scheme`]** - The descriptor, its builder, OAuth2 flows, fragments and errors
//! - **[`loader`]** - Reads declarations from YAML/JSON/TOML files or OpenAPI documents
//! - **[`validator`]** - Collects and reports per-declaration issues
//! - **[`cli`]** - `brrtrouter-schemes check` / `render`
//! - **[`otel`]** - `tracing` subscriber setup
//! - **[`runtime_config`]** - Environment configuration
//!
//! ```mermaid
//! sequenceDiagram
//!     participant Caller
//!     participant Loader as loader::DeclarationLoader
//!     participant Builder as scheme::SecuritySchemeBuilder
//!     participant Doc as Document builder
//!
//!     Caller->>Loader: load("openapi.yaml")
//!     Loader->>Builder: SchemeDeclaration::into_descriptor()
//!     Builder-->>Loader: descriptor | SchemeError
//!     Loader-->>Caller: LoadedSchemes { schemes, issues }
//!     Caller->>Doc: name, descriptor.to_fragment()
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use brrtrouter_schemes::{OAuthFlow, OAuthFlows, SecuritySchemeDescriptor};
//!
//! let oauth = SecuritySchemeDescriptor::builder("oauth2")
//!     .description("Delegated access")
//!     .flows(OAuthFlows::new().authorization_code(
//!         OAuthFlow::new()
//!             .authorization_url("https://auth.example/authorize")
//!             .token_url("https://auth.example/token")
//!             .scope("pets:read", "Read pets"),
//!     ))
//!     .build()
//!     .expect("valid oauth2 scheme");
//!
//! let json = serde_json::to_value(oauth.to_fragment()).unwrap();
//! assert_eq!(json["type"], "oauth2");
//! assert_eq!(
//!     json["flows"]["authorizationCode"]["scopes"]["pets:read"],
//!     "Read pets"
//! );
//! ```
//!
//! ## Errors
//!
//! Construction fails with exactly one [`SchemeError`]:
//! `InvalidType`, `MissingRequiredField` or `InvalidUrl`. There is no
//! partially valid descriptor.

pub mod cli;
pub mod loader;
pub mod otel;
pub mod runtime_config;
pub mod scheme;
pub mod validator;

pub use loader::{load_declarations, parse_declarations, DeclarationFormat, DeclarationLoader, LoadedSchemes};
pub use scheme::{
    ApiKeyLocation, FragmentValue, OAuthFlow, OAuthFlows, SchemeError, SchemeFragment,
    SecuritySchemeBuilder, SecuritySchemeDescriptor, SecuritySchemeType,
};
pub use validator::ValidationIssue;
