use serde::Deserialize;

/// Output format of the license report
///
/// Shared by the CLI, the config file, and the formatter factory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Machine-readable JSON report (default)
    #[default]
    Json,
    /// Human-readable Markdown document
    #[serde(alias = "md")]
    Markdown,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "markdown" | "md" => Ok(OutputFormat::Markdown),
            _ => Err(format!(
                "Invalid format: {}. Please specify 'json' or 'markdown'",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Markdown => write!(f, "markdown"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_from_str_accepts_aliases_case_insensitively() {
        assert_eq!(OutputFormat::from_str("JSON").unwrap(), OutputFormat::Json);
        assert_eq!(
            OutputFormat::from_str("Markdown").unwrap(),
            OutputFormat::Markdown
        );
        assert_eq!(OutputFormat::from_str("md").unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_from_str_invalid() {
        let error = OutputFormat::from_str("html").unwrap_err();
        assert!(error.contains("Invalid format: html"));
        assert!(error.contains("'json' or 'markdown'"));
        assert!(OutputFormat::from_str("").is_err());
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        for format in [OutputFormat::Json, OutputFormat::Markdown] {
            assert_eq!(OutputFormat::from_str(&format.to_string()).unwrap(), format);
        }
    }

    #[test]
    fn test_default_is_json() {
        assert_eq!(OutputFormat::default(), OutputFormat::Json);
    }

    #[test]
    fn test_deserialize_from_yaml() {
        let format: OutputFormat = serde_yaml_ng::from_str("markdown").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
        let format: OutputFormat = serde_yaml_ng::from_str("md").unwrap();
        assert_eq!(format, OutputFormat::Markdown);
    }
}
