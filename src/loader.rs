//! # Declaration Loader
//!
//! Reads security scheme declarations from YAML, JSON or TOML and runs each
//! one through [`SecuritySchemeBuilder`](crate::scheme::SecuritySchemeBuilder).
//!
//! Three document shapes are accepted:
//!
//! ```yaml
//! # 1. an OpenAPI document
//! openapi: 3.1.0
//! components:
//!   securitySchemes:
//!     ApiKeyAuth: { type: apiKey, name: X-API-Key, in: header }
//!
//! # 2. a securitySchemes section on its own
//! securitySchemes:
//!   ApiKeyAuth: { type: apiKey, name: X-API-Key, in: header }
//!
//! # 3. a bare name -> declaration map
//! ApiKeyAuth: { type: apiKey, name: X-API-Key, in: header }
//! ```
//!
//! Bad declarations do not abort the load. Each one becomes a
//! [`ValidationIssue`] so every problem in a file is reported at once.

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{bail, Context};
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::{debug, info, warn};

use crate::runtime_config::RuntimeConfig;
use crate::scheme::{OAuthFlows, SchemeError, SecuritySchemeDescriptor};
use crate::validator::{issues_to_error, ValidationIssue};

/// Serialization format of a declaration file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationFormat {
    Yaml,
    Json,
    Toml,
}

impl DeclarationFormat {
    /// Pick the format from the file extension; unknown extensions are JSON
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("yaml") | Some("yml") => DeclarationFormat::Yaml,
            Some("toml") => DeclarationFormat::Toml,
            _ => DeclarationFormat::Json,
        }
    }
}

/// A security scheme as written in a file, before validation
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemeDeclaration {
    #[serde(rename = "type")]
    pub scheme_type: Option<String>,
    pub description: Option<String>,
    pub name: Option<String>,
    #[serde(rename = "in")]
    pub location: Option<String>,
    pub scheme: Option<String>,
    pub bearer_format: Option<String>,
    pub flows: Option<OAuthFlows>,
    pub open_id_connect_url: Option<String>,
}

impl SchemeDeclaration {
    /// Validate into a descriptor
    pub fn into_descriptor(self, strict_urls: bool) -> Result<SecuritySchemeDescriptor, SchemeError> {
        let scheme_type = self
            .scheme_type
            .ok_or_else(|| SchemeError::missing("", "type"))?;

        let mut builder = SecuritySchemeDescriptor::builder(scheme_type).strict_urls(strict_urls);
        if let Some(v) = self.description {
            builder = builder.description(v);
        }
        if let Some(v) = self.name {
            builder = builder.name(v);
        }
        if let Some(v) = self.location {
            builder = builder.location(v);
        }
        if let Some(v) = self.scheme {
            builder = builder.scheme(v);
        }
        if let Some(v) = self.bearer_format {
            builder = builder.bearer_format(v);
        }
        if let Some(v) = self.flows {
            builder = builder.flows(v);
        }
        if let Some(v) = self.open_id_connect_url {
            builder = builder.open_id_connect_url(v);
        }
        builder.build()
    }
}

/// Outcome of loading a declaration file
#[derive(Debug, Clone, Default)]
pub struct LoadedSchemes {
    /// Valid descriptors keyed by scheme name
    pub schemes: BTreeMap<String, SecuritySchemeDescriptor>,
    /// One entry per rejected declaration
    pub issues: Vec<ValidationIssue>,
}

impl LoadedSchemes {
    pub fn is_valid(&self) -> bool {
        self.issues.is_empty()
    }

    /// Fail with every issue when any declaration was rejected
    pub fn into_result(self) -> anyhow::Result<BTreeMap<String, SecuritySchemeDescriptor>> {
        issues_to_error(self.issues)?;
        Ok(self.schemes)
    }
}

/// Loader settings
#[derive(Debug, Clone, Copy, Default)]
pub struct DeclarationLoader {
    strict_urls: bool,
}

impl DeclarationLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_config(config: &RuntimeConfig) -> Self {
        Self {
            strict_urls: config.strict_urls,
        }
    }

    pub fn strict_urls(mut self, strict: bool) -> Self {
        self.strict_urls = strict;
        self
    }

    /// Read and validate a declaration file
    pub fn load(&self, path: &Path) -> anyhow::Result<LoadedSchemes> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        self.parse(&content, DeclarationFormat::from_path(path))
            .with_context(|| format!("failed to load security schemes from {}", path.display()))
    }

    /// Validate declarations from an in-memory document
    pub fn parse(&self, content: &str, format: DeclarationFormat) -> anyhow::Result<LoadedSchemes> {
        let root: Value = match format {
            DeclarationFormat::Yaml => serde_yaml::from_str(content)?,
            DeclarationFormat::Json => serde_json::from_str(content)?,
            DeclarationFormat::Toml => toml::from_str(content)?,
        };

        let mut loaded = LoadedSchemes::default();
        for (name, value) in scheme_entries(root)? {
            if value.get("$ref").is_some() {
                warn!(scheme = %name, "skipping $ref security scheme");
                continue;
            }

            let declaration: SchemeDeclaration = match serde_json::from_value(value) {
                Ok(d) => d,
                Err(e) => {
                    loaded
                        .issues
                        .push(ValidationIssue::new(&name, "InvalidDeclaration", e.to_string()));
                    continue;
                }
            };

            match declaration.into_descriptor(self.strict_urls) {
                Ok(descriptor) => {
                    debug!(scheme = %name, scheme_type = %descriptor.scheme_type(), "accepted security scheme");
                    loaded.schemes.insert(name, descriptor);
                }
                Err(e) => {
                    debug!(scheme = %name, error = %e, "rejected security scheme");
                    loaded.issues.push(ValidationIssue::from_scheme_error(&name, &e));
                }
            }
        }

        info!(
            accepted = loaded.schemes.len(),
            rejected = loaded.issues.len(),
            "loaded security scheme declarations"
        );
        Ok(loaded)
    }
}

/// Load a declaration file with default settings
pub fn load_declarations(path: impl AsRef<Path>) -> anyhow::Result<LoadedSchemes> {
    DeclarationLoader::new().load(path.as_ref())
}

/// Parse declarations from a string with default settings
pub fn parse_declarations(content: &str, format: DeclarationFormat) -> anyhow::Result<LoadedSchemes> {
    DeclarationLoader::new().parse(content, format)
}

fn scheme_entries(root: Value) -> anyhow::Result<Map<String, Value>> {
    let Value::Object(mut root) = root else {
        bail!("declaration document must be a mapping");
    };

    let section = if root.contains_key("openapi") || root.contains_key("components") {
        root.remove("components")
            .and_then(|mut c| c.get_mut("securitySchemes").map(Value::take))
            .unwrap_or_else(|| Value::Object(Map::new()))
    } else if let Some(section) = root.remove("securitySchemes") {
        section
    } else {
        return Ok(root);
    };

    match section {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => bail!("securitySchemes must be a mapping"),
    }
}
