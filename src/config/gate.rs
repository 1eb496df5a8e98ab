//! Startup gate
//!
//! Decides once, before any pipeline stage is built, whether the tool should
//! run at all. The gate variable doubles as the path to query.

/// Environment variable holding the parameter path
pub const ENV_PATH_VAR: &str = "AWS_ENV_PATH";

/// Outcome of the startup check
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Gate {
    /// Configured: export parameters under this path
    Run { path: String },
    /// Not configured: exit successfully without output
    Skip,
}

impl Gate {
    /// Check using a variable lookup such as `std::env::var`
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: FnOnce(&str) -> Option<String>,
    {
        match lookup(ENV_PATH_VAR) {
            Some(path) if !path.is_empty() => Gate::Run { path },
            _ => Gate::Skip,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_unset() {
        let gate = Gate::from_lookup(|_| None);
        assert_eq!(gate, Gate::Skip);
    }

    #[test]
    fn test_gate_empty() {
        let gate = Gate::from_lookup(|_| Some(String::new()));
        assert_eq!(gate, Gate::Skip);
    }

    #[test]
    fn test_gate_set() {
        let gate = Gate::from_lookup(|key| {
            assert_eq!(key, ENV_PATH_VAR);
            Some("/app/".to_string())
        });
        assert_eq!(
            gate,
            Gate::Run {
                path: "/app/".to_string()
            }
        );
    }

    #[test]
    fn test_gate_keeps_whitespace_path() {
        // Only an empty value disables the tool
        let gate = Gate::from_lookup(|_| Some(" ".to_string()));
        assert_eq!(
            gate,
            Gate::Run {
                path: " ".to_string()
            }
        );
    }
}
