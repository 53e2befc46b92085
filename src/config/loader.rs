//! Definitions file loader with TOML parsing and environment variable overrides

use super::schema::DefinitionsFile;
use crate::domain::environment::Environment;
use crate::domain::errors::BedrockError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Loads environment definitions from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (`${VAR}` syntax)
/// 3. Parses the TOML into [`DefinitionsFile`]
/// 4. Applies environment variable overrides (`BEDROCK_*` prefix)
/// 5. Checks the file declares at least one recognized environment
///
/// The result is an immutable snapshot: the resolver never re-reads the file.
///
/// # Arguments
///
/// * `path` - Path to the TOML definitions file
///
/// # Errors
///
/// Returns an error if:
/// - File cannot be read
/// - TOML parsing fails
/// - Environment variable substitution fails
/// - An `[environments.<name>]` key is not a recognized environment
///
/// # Examples
///
/// ```no_run
/// use bedrock::config::loader::load_definitions;
///
/// let definitions = load_definitions("bedrock.toml").expect("Failed to load definitions");
/// ```
pub fn load_definitions(path: impl AsRef<Path>) -> Result<DefinitionsFile> {
    let path = path.as_ref();

    // Check if file exists
    if !path.exists() {
        return Err(BedrockError::Configuration(format!(
            "Definitions file not found: {}",
            path.display()
        )));
    }

    // Read file contents
    let contents = fs::read_to_string(path).map_err(|e| {
        BedrockError::Configuration(format!(
            "Failed to read definitions file {}: {}",
            path.display(),
            e
        ))
    })?;

    // Perform environment variable substitution
    let contents = substitute_env_vars(&contents)?;

    // Parse TOML
    let mut definitions: DefinitionsFile = toml::from_str(&contents)
        .map_err(|e| BedrockError::Configuration(format!("Failed to parse TOML: {e}")))?;

    // Apply environment variable overrides
    apply_env_overrides(&mut definitions);

    // Structural checks the schema can't express
    check_environment_keys(&definitions)?;

    Ok(definitions)
}

/// Substitutes environment variables in the format `${VAR_NAME}`
///
/// # Errors
///
/// Returns an error listing every referenced environment variable that is
/// not set
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").unwrap();
    let mut result = String::new();
    let mut missing_vars = Vec::new();

    // Process line by line to skip comments
    for line in input.lines() {
        let trimmed = line.trim_start();

        // Skip comment lines - don't process env vars in comments
        if trimmed.starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{var_name}}}");
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.contains(&var_name.to_string()) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(BedrockError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

/// Applies environment variable overrides using the `BEDROCK_*` prefix
///
/// Overrides target the `[defaults]` table, so a single exported variable
/// shifts every environment at once (e.g. a region failover drill):
/// `BEDROCK_DEFAULTS_REGION`, `BEDROCK_DEFAULTS_APP_NAME`,
/// `BEDROCK_DEFAULTS_KUBERNETES_VERSION`.
fn apply_env_overrides(definitions: &mut DefinitionsFile) {
    if let Ok(val) = std::env::var("BEDROCK_DEFAULTS_REGION") {
        definitions.defaults.region = Some(val);
    }
    if let Ok(val) = std::env::var("BEDROCK_DEFAULTS_APP_NAME") {
        definitions.defaults.app_name = Some(val);
    }
    if let Ok(val) = std::env::var("BEDROCK_DEFAULTS_KUBERNETES_VERSION") {
        definitions.defaults.kubernetes_version = Some(val);
    }
}

/// Rejects files with no environments or with unrecognized environment keys
fn check_environment_keys(definitions: &DefinitionsFile) -> Result<()> {
    if definitions.environments.is_empty() {
        return Err(BedrockError::Configuration(
            "No environments defined: expected at least one [environments.<name>] table"
                .to_string(),
        ));
    }

    for name in definitions.environments.keys() {
        if name.parse::<Environment>().is_err() {
            return Err(BedrockError::Configuration(format!(
                "Unrecognized environment key '[environments.{name}]' (expected one of: dev, staging, production)"
            )));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(contents.as_bytes()).unwrap();
        temp_file.flush().unwrap();
        temp_file
    }

    #[test]
    fn test_substitute_env_vars() {
        std::env::set_var("TEST_BEDROCK_PROJECT", "billing");
        let input = "Project = \"${TEST_BEDROCK_PROJECT}\"";
        let result = substitute_env_vars(input).unwrap();
        assert_eq!(result, "Project = \"billing\"\n");
        std::env::remove_var("TEST_BEDROCK_PROJECT");
    }

    #[test]
    fn test_substitute_env_vars_missing() {
        std::env::remove_var("BEDROCK_MISSING_VAR");
        let input = "region = \"${BEDROCK_MISSING_VAR}\"";
        let result = substitute_env_vars(input);
        assert!(result.is_err());
    }

    #[test]
    fn test_substitute_env_vars_skips_comments() {
        std::env::remove_var("BEDROCK_COMMENTED_VAR");
        let input = "# region = \"${BEDROCK_COMMENTED_VAR}\"\napp_name = \"my-app\"";
        let result = substitute_env_vars(input).unwrap();
        assert!(result.contains("${BEDROCK_COMMENTED_VAR}"));
    }

    #[test]
    fn test_load_definitions_missing_file() {
        let result = load_definitions("nonexistent.toml");
        assert!(result.is_err());
    }

    #[test]
    fn test_load_definitions_valid() {
        let temp_file = write_temp(
            r#"
[defaults]
app_name = "my-app"
region = "us-east-1"

[environments.dev]
environment = "dev"
cluster_name = "my-app-dev-eks"
"#,
        );

        let definitions = load_definitions(temp_file.path()).unwrap();
        assert_eq!(definitions.defaults.app_name.as_deref(), Some("my-app"));
        assert_eq!(definitions.environments.len(), 1);
        assert_eq!(
            definitions.environments["dev"].cluster_name.as_deref(),
            Some("my-app-dev-eks")
        );
    }

    #[test]
    fn test_load_definitions_rejects_empty_file() {
        let temp_file = write_temp("[defaults]\napp_name = \"my-app\"\n");
        let result = load_definitions(temp_file.path());
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("No environments defined"));
    }

    #[test]
    fn test_load_definitions_rejects_unrecognized_environment_key() {
        let temp_file = write_temp("[environments.qa]\nenvironment = \"qa\"\n");
        let result = load_definitions(temp_file.path());
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("environments.qa"));
    }

    #[test]
    fn test_load_definitions_rejects_unknown_field() {
        let temp_file = write_temp(
            r#"
[environments.dev]
environment = "dev"
node_group_min_sze = 2
"#,
        );
        let result = load_definitions(temp_file.path());
        assert!(result.is_err());
    }
}
