use super::*;
use crate::loader::{parse_declarations, DeclarationFormat};
use clap::Parser;

#[test]
fn test_parse_check_command() {
    let cli = Cli::parse_from(["brrtrouter-schemes", "check", "--file", "schemes.yaml"]);
    assert!(!cli.strict_urls);
    match cli.command {
        Commands::Check { file, allow_errors } => {
            assert_eq!(file.to_str(), Some("schemes.yaml"));
            assert!(!allow_errors);
        }
        _ => panic!("expected check"),
    }
}

#[test]
fn test_parse_render_command_with_global_flag() {
    let cli = Cli::parse_from([
        "brrtrouter-schemes",
        "render",
        "-f",
        "schemes.json",
        "--format",
        "yaml",
        "--strict-urls",
    ]);
    assert!(cli.strict_urls);
    match cli.command {
        Commands::Render { format, .. } => assert_eq!(format, OutputFormat::Yaml),
        _ => panic!("expected render"),
    }
}

#[test]
fn test_render_fragments_json_keeps_field_order() {
    let loaded = parse_declarations(
        r#"{"Bearer": {"bearerFormat": "JWT", "scheme": "bearer", "type": "http"}}"#,
        DeclarationFormat::Json,
    )
    .unwrap();
    let out = render_fragments(&loaded, OutputFormat::Json).unwrap();
    let type_pos = out.find("\"type\"").unwrap();
    let scheme_pos = out.find("\"scheme\"").unwrap();
    let format_pos = out.find("\"bearerFormat\"").unwrap();
    assert!(type_pos < scheme_pos && scheme_pos < format_pos);
}

#[test]
fn test_render_fragments_yaml() {
    let loaded = parse_declarations(
        "Key:\n  type: apiKey\n  name: X-API-Key\n  in: header\n",
        DeclarationFormat::Yaml,
    )
    .unwrap();
    let out = render_fragments(&loaded, OutputFormat::Yaml).unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&out).unwrap();
    assert_eq!(value["Key"]["in"].as_str(), Some("header"));
    assert_eq!(value["Key"]["type"].as_str(), Some("apiKey"));
}
