use crate::scheme::SchemeError;

/// One rejected declaration, reported alongside its siblings
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationIssue {
    /// Scheme name (map key) the issue belongs to
    pub location: String,
    /// Error kind, e.g. `MissingRequiredField`
    pub kind: String,
    pub message: String,
}

impl ValidationIssue {
    pub fn new(location: impl Into<String>, kind: impl Into<String>, message: impl Into<String>) -> Self {
        ValidationIssue {
            location: location.into(),
            kind: kind.into(),
            message: message.into(),
        }
    }

    pub fn from_scheme_error(location: impl Into<String>, err: &SchemeError) -> Self {
        ValidationIssue::new(location, err.kind(), err.to_string())
    }
}

pub fn print_issues(issues: &[ValidationIssue]) {
    eprintln!("\n❌ Security scheme validation failed. {} issue(s) found:\n", issues.len());
    for issue in issues {
        eprintln!("[{}] {}: {}", issue.kind, issue.location, issue.message);
    }
    eprintln!("\nPlease fix the declarations before building the document.\n");
}

/// Turn collected issues into an error listing every one of them
pub fn issues_to_error(issues: Vec<ValidationIssue>) -> anyhow::Result<()> {
    if issues.is_empty() {
        return Ok(());
    }
    let summary = issues
        .iter()
        .map(|i| format!("[{}] {}: {}", i.kind, i.location, i.message))
        .collect::<Vec<_>>()
        .join("\n");
    anyhow::bail!("{} security scheme issue(s):\n{}", issues.len(), summary)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_issues_is_ok() {
        assert!(issues_to_error(vec![]).is_ok());
    }

    #[test]
    fn test_issues_listed_in_error() {
        let err = issues_to_error(vec![
            ValidationIssue::new("ApiKeyAuth", "MissingRequiredField", "name missing"),
            ValidationIssue::new("Oidc", "InvalidUrl", "bad url"),
        ])
        .unwrap_err()
        .to_string();
        assert!(err.starts_with("2 security scheme issue(s)"));
        assert!(err.contains("[InvalidUrl] Oidc: bad url"));
    }

    #[test]
    fn test_from_scheme_error_uses_kind() {
        let err = SchemeError::InvalidType {
            value: "mutualTLS".into(),
        };
        let issue = ValidationIssue::from_scheme_error("Mtls", &err);
        assert_eq!(issue.kind, "InvalidType");
        assert!(issue.message.contains("mutualTLS"));
    }
}
