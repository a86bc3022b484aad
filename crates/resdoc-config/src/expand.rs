//! Environment variable expansion for configuration strings.
//!
//! `${VAR}` expands to the value of VAR and fails when it is unset.
//! `${VAR:-default}` falls back to `default`. Bare `$VAR` is left alone.

use crate::ConfigError;

/// Expand environment references in `value` in place.
///
/// `field` is the dotted config path used in error messages.
pub(crate) fn expand_in_place(value: &mut String, field: &str) -> Result<(), ConfigError> {
    if !value.contains("${") {
        return Ok(());
    }

    let expanded = shellexpand::env_with_context(value.as_str(), |var| {
        std::env::var(var).map(Some).map_err(|_| Unset(var.to_owned()))
    })
    .map_err(|e| ConfigError::EnvVar {
        field: field.to_owned(),
        message: format!("${{{}}} not set", e.cause.0),
    })?;

    *value = expanded.into_owned();
    Ok(())
}

/// Name of an environment variable that was referenced but not set.
struct Unset(String);

#[cfg(test)]
mod tests {
    use super::*;

    fn expand(value: &str) -> Result<String, ConfigError> {
        let mut value = value.to_owned();
        expand_in_place(&mut value, "man.date")?;
        Ok(value)
    }

    #[test]
    fn test_literal_unchanged() {
        assert_eq!(expand("Feb 11, 2016").unwrap(), "Feb 11, 2016");
    }

    #[test]
    fn test_expand_set_var() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::set_var("RESDOC_TEST_RELEASE_DATE", "Mar 1, 2024");
        }
        assert_eq!(
            expand("Released ${RESDOC_TEST_RELEASE_DATE}").unwrap(),
            "Released Mar 1, 2024"
        );
        unsafe {
            std::env::remove_var("RESDOC_TEST_RELEASE_DATE");
        }
    }

    #[test]
    fn test_default_used_when_unset() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("RESDOC_TEST_UNSET_LAYOUT");
        }
        assert_eq!(expand("${RESDOC_TEST_UNSET_LAYOUT:-docs}").unwrap(), "docs");
    }

    #[test]
    fn test_missing_var_names_field() {
        // SAFETY: variable name is unique to this test
        unsafe {
            std::env::remove_var("RESDOC_TEST_MISSING");
        }
        let err = expand("${RESDOC_TEST_MISSING}").unwrap_err();
        assert!(matches!(err, ConfigError::EnvVar { .. }));
        assert!(err.to_string().contains("RESDOC_TEST_MISSING"));
        assert!(err.to_string().contains("man.date"));
    }

    #[test]
    fn test_bare_dollar_not_expanded() {
        assert_eq!(expand("$HOME/docs").unwrap(), "$HOME/docs");
    }
}
