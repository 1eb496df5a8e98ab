//! Parameter shaping service
//!
//! Turns store parameters into environment variables.

use crate::domain::{EnvVar, InputFormat, Parameter};
use serde_json::{Map, Value};

/// Service for deriving variables from parameters
#[derive(Debug, Clone)]
pub struct Shaper {
    path: String,
    input_format: InputFormat,
}

impl Shaper {
    /// Create a new shaper for parameters listed under `path`
    pub fn new(path: impl Into<String>, input_format: InputFormat) -> Self {
        Self {
            path: path.into(),
            input_format,
        }
    }

    /// Derive the variables for one parameter
    ///
    /// Parameter mode always yields exactly one variable. JSON mode yields
    /// one variable per top-level key, or none if the value is not a JSON
    /// object.
    pub fn shape(&self, parameter: &Parameter) -> Vec<EnvVar> {
        match self.input_format {
            InputFormat::Parameter => vec![EnvVar::new(
                env_name(&self.path, &parameter.name),
                escape_newlines(&parameter.value),
            )],
            InputFormat::Json => match parse_object(&parameter.value) {
                Some(object) => object
                    .into_iter()
                    .map(|(key, value)| EnvVar::new(key, value))
                    .collect(),
                None => {
                    log::warn!(
                        "Skipping {}: value is not a JSON object",
                        parameter.name
                    );
                    Vec::new()
                }
            },
        }
    }
}

/// Derive a variable name from a parameter name
///
/// `/app/db/host` under `/app/` becomes `db_host`. A name equal to the path
/// yields an empty name.
pub fn env_name(path: &str, name: &str) -> String {
    let suffix = name.strip_prefix(path).unwrap_or_else(|| {
        log::warn!("Parameter {} is not under {}", name, path);
        name
    });

    suffix.trim_matches('/').replace('/', "_")
}

/// Replace newlines with a literal `\n`
pub fn escape_newlines(value: &str) -> String {
    value.replace('\n', "\\n")
}

fn parse_object(value: &str) -> Option<Map<String, Value>> {
    serde_json::from_str(value).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::EnvValue;
    use serde_json::json;

    #[test]
    fn test_env_name() {
        assert_eq!(env_name("/app/", "/app/db/host"), "db_host");
        assert_eq!(env_name("/app", "/app/db/host"), "db_host");
        assert_eq!(env_name("/app/", "/app/a/b/c/"), "a_b_c");
    }

    #[test]
    fn test_env_name_equal_to_path() {
        assert_eq!(env_name("/app/", "/app/"), "");
        assert_eq!(env_name("/app", "/app"), "");
    }

    #[test]
    fn test_env_name_outside_path() {
        assert_eq!(env_name("/app/", "/other/key"), "other_key");
    }

    #[test]
    fn test_env_name_never_contains_prefix() {
        let path = "/svc/prod/";
        for name in ["/svc/prod/a", "/svc/prod/a/b", "/svc/prod/svc/prod/x"] {
            let env = env_name(path, name);
            assert!(!env.starts_with(path));
            assert!(!env.contains('/'));
        }
    }

    #[test]
    fn test_escape_newlines() {
        assert_eq!(escape_newlines("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_newlines("plain"), "plain");
        assert_eq!(escape_newlines("\n\n"), "\\n\\n");
    }

    #[test]
    fn test_shape_parameter_mode() {
        let shaper = Shaper::new("/app/", InputFormat::Parameter);
        let vars = shaper.shape(&Parameter::new("/app/db/host", "localhost"));
        assert_eq!(vars, vec![EnvVar::new("db_host", "localhost")]);
    }

    #[test]
    fn test_shape_parameter_mode_escapes_value() {
        let shaper = Shaper::new("/app/", InputFormat::Parameter);
        let vars = shaper.shape(&Parameter::new("/app/cert", "a\nb"));
        assert_eq!(vars[0].value, EnvValue::String("a\\nb".to_string()));
    }

    #[test]
    fn test_shape_json_mode() {
        let shaper = Shaper::new("/app/", InputFormat::Json);
        let vars = shaper.shape(&Parameter::new("/app/settings", r#"{"b":"x","a":1}"#));

        assert_eq!(vars.len(), 2);
        // Keys come out sorted and are used without path stripping
        assert_eq!(vars[0].name, "a");
        assert_eq!(vars[0].value, EnvValue::from(json!(1)));
        assert_eq!(vars[1].name, "b");
        assert_eq!(vars[1].value, EnvValue::String("x".to_string()));
    }

    #[test]
    fn test_shape_json_mode_does_not_escape() {
        let shaper = Shaper::new("/app/", InputFormat::Json);
        let vars = shaper.shape(&Parameter::new("/app/s", r#"{"k":"a\nb"}"#));
        assert_eq!(vars[0].value, EnvValue::String("a\nb".to_string()));
    }

    #[test]
    fn test_shape_json_mode_invalid() {
        let shaper = Shaper::new("/app/", InputFormat::Json);
        assert!(shaper.shape(&Parameter::new("/app/s", "not valid json")).is_empty());
        assert!(shaper.shape(&Parameter::new("/app/s", "[1,2]")).is_empty());
        assert!(shaper.shape(&Parameter::new("/app/s", "42")).is_empty());
        assert!(shaper.shape(&Parameter::new("/app/s", "{}")).is_empty());
    }
}
