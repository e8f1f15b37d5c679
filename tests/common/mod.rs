#![allow(dead_code)]

pub mod temp_files {
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    /// Write `content` to a temporary file with the given extension
    ///
    /// The file is removed when the returned handle is dropped.
    pub fn create_temp_declarations(content: &str, ext: &str) -> NamedTempFile {
        let mut file = Builder::new()
            .prefix("brrt_schemes_")
            .suffix(&format!(".{ext}"))
            .tempfile()
            .unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file.flush().unwrap();
        file
    }

    pub fn create_temp_yaml(content: &str) -> NamedTempFile {
        create_temp_declarations(content, "yaml")
    }

    pub fn create_temp_json(content: &str) -> NamedTempFile {
        create_temp_declarations(content, "json")
    }

    pub fn create_temp_toml(content: &str) -> NamedTempFile {
        create_temp_declarations(content, "toml")
    }
}

pub const PET_STORE_SPEC: &str = r#"openapi: 3.1.0
info:
  title: Pet Store
  version: '1.0'
paths: {}
components:
  securitySchemes:
    ApiKeyHeader:
      type: apiKey
      in: header
      name: X-API-Key
    BearerAuth:
      type: http
      scheme: bearer
      bearerFormat: JWT
    OAuth:
      type: oauth2
      description: Delegated access
      flows:
        implicit:
          authorizationUrl: https://example.com/auth
          scopes:
            read: Read access
    Oidc:
      type: openIdConnect
      openIdConnectUrl: https://issuer.example/.well-known/openid-configuration
    Shared:
      $ref: '#/components/securitySchemes/BearerAuth'
"#;

pub const BROKEN_SPEC: &str = r#"openapi: 3.1.0
info:
  title: Broken
  version: '1.0'
components:
  securitySchemes:
    NoName:
      type: apiKey
      in: header
    BadType:
      type: mutualTLS
    BadUrl:
      type: openIdConnect
      openIdConnectUrl: not a url
    Fine:
      type: http
      scheme: basic
"#;
