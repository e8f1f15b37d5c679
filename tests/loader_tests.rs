//! Integration tests for loading declaration files
//!
//! Covers OpenAPI documents, bare `securitySchemes` sections and plain maps
//! in YAML, JSON and TOML, plus per-declaration issue reporting.

mod common;
use common::temp_files::{create_temp_json, create_temp_toml, create_temp_yaml};
use common::{BROKEN_SPEC, PET_STORE_SPEC};

use brrtrouter_schemes::{
    load_declarations, parse_declarations, ApiKeyLocation, DeclarationFormat, DeclarationLoader,
    SecuritySchemeType,
};

#[test]
fn test_load_openapi_document() {
    let file = create_temp_yaml(PET_STORE_SPEC);
    let loaded = load_declarations(file.path()).unwrap();

    assert!(loaded.is_valid(), "issues: {:?}", loaded.issues);
    assert_eq!(
        loaded.schemes.keys().map(String::as_str).collect::<Vec<_>>(),
        ["ApiKeyHeader", "BearerAuth", "OAuth", "Oidc"]
    );

    let api_key = &loaded.schemes["ApiKeyHeader"];
    assert_eq!(api_key.scheme_type(), SecuritySchemeType::ApiKey);
    assert_eq!(api_key.api_key_location(), Some(ApiKeyLocation::Header));

    let oauth = &loaded.schemes["OAuth"];
    assert_eq!(oauth.description(), Some("Delegated access"));
    let implicit = oauth.flows().and_then(|f| f.implicit.as_ref()).unwrap();
    assert_eq!(implicit.scopes.get("read").map(String::as_str), Some("Read access"));
}

#[test]
fn test_ref_entries_are_skipped() {
    let loaded = parse_declarations(PET_STORE_SPEC, DeclarationFormat::Yaml).unwrap();
    assert!(!loaded.schemes.contains_key("Shared"));
    assert!(loaded.issues.is_empty());
}

#[test]
fn test_each_bad_declaration_reported() {
    let loaded = parse_declarations(BROKEN_SPEC, DeclarationFormat::Yaml).unwrap();

    assert_eq!(loaded.schemes.len(), 1);
    assert!(loaded.schemes.contains_key("Fine"));

    let mut kinds: Vec<(&str, &str)> = loaded
        .issues
        .iter()
        .map(|i| (i.location.as_str(), i.kind.as_str()))
        .collect();
    kinds.sort();
    assert_eq!(
        kinds,
        [
            ("BadType", "InvalidType"),
            ("BadUrl", "InvalidUrl"),
            ("NoName", "MissingRequiredField"),
        ]
    );

    let err = loaded.into_result().unwrap_err().to_string();
    assert!(err.contains("3 security scheme issue(s)"));
}

#[test]
fn test_malformed_declaration_is_an_issue() {
    let loaded = parse_declarations(
        r#"{"securitySchemes": {"Odd": {"type": "http", "scheme": ["bearer"]}}}"#,
        DeclarationFormat::Json,
    )
    .unwrap();
    assert_eq!(loaded.issues.len(), 1);
    assert_eq!(loaded.issues[0].kind, "InvalidDeclaration");
    assert_eq!(loaded.issues[0].location, "Odd");
}

#[test]
fn test_json_bare_map() {
    let file = create_temp_json(
        r#"{
            "BasicAuth": { "type": "http", "scheme": "basic" },
            "CookieKey": { "type": "apiKey", "name": "session", "in": "cookie" }
        }"#,
    );
    let schemes = load_declarations(file.path()).unwrap().into_result().unwrap();
    assert_eq!(schemes.len(), 2);
    assert_eq!(
        schemes["CookieKey"].api_key_location(),
        Some(ApiKeyLocation::Cookie)
    );
}

#[test]
fn test_toml_security_schemes_section() {
    let file = create_temp_toml(
        r#"
[securitySchemes.Partner]
type = "oauth2"

[securitySchemes.Partner.flows.clientCredentials]
tokenUrl = "https://auth.example/token"

[securitySchemes.Partner.flows.clientCredentials.scopes]
"partners:write" = "Write partner data"

[securitySchemes.Sso]
type = "openIdConnect"
openIdConnectUrl = "https://sso.example/.well-known/openid-configuration"
"#,
    );
    let schemes = load_declarations(file.path()).unwrap().into_result().unwrap();
    assert_eq!(schemes["Partner"].scheme_type(), SecuritySchemeType::OAuth2);
    assert_eq!(
        schemes["Partner"].flows().map(|f| f.configured_count()),
        Some(1)
    );
    assert_eq!(schemes["Sso"].scheme_type(), SecuritySchemeType::OpenIdConnect);
}

#[test]
fn test_strict_loader_rejects_non_http_urls() {
    let doc = r#"
Urn:
  type: openIdConnect
  openIdConnectUrl: urn:example:issuer
"#;
    let lenient = parse_declarations(doc, DeclarationFormat::Yaml).unwrap();
    assert!(lenient.is_valid());

    let strict = DeclarationLoader::new()
        .strict_urls(true)
        .parse(doc, DeclarationFormat::Yaml)
        .unwrap();
    assert_eq!(strict.issues.len(), 1);
    assert_eq!(strict.issues[0].kind, "InvalidUrl");
}

#[test]
fn test_missing_file_is_error() {
    let err = load_declarations("/definitely/not/here.yaml").unwrap_err();
    assert!(format!("{err:#}").contains("failed to read"));
}

#[test]
fn test_non_mapping_root_is_error() {
    assert!(parse_declarations("- a\n- b\n", DeclarationFormat::Yaml).is_err());
}
