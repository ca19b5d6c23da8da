//! Validation utilities.

use contribot_config::{ApiDriver, Config};
use contribot_models::RepositoryPath;
use thiserror::Error;

/// Part of the configuration a command relies on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ValidationScope {
    LabelEvent,
    CommunityIssues,
    Contributors,
}

#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("Errors on environment variables:\n{}", errors)]
    EnvVarsError { errors: String },
}

fn validate_env_vars(config: &Config, scope: ValidationScope) -> Result<(), ValidationError> {
    #[inline]
    fn _missing(error: &mut String, name: &str) {
        error.push_str(&format!("\n  - Missing env. var.: {}", name));
    }

    #[inline]
    fn _invalid(error: &mut String, name: &str, value: &str) {
        error.push_str(&format!("\n  - Invalid env. var.: {} ('{}')", name, value));
    }

    let mut error = String::new();

    // Check API configuration
    if config.api.driver == ApiDriver::GitHub && scope != ValidationScope::Contributors {
        if config.api.github.token.is_empty() {
            _missing(&mut error, "GITHUB_TOKEN");
        }
        if config.api.github.root_url.is_empty() {
            _missing(&mut error, "CONTRIBOT_API_GITHUB_ROOT_URL");
        }
    }

    match scope {
        ValidationScope::LabelEvent => {
            if config.event.path.is_empty() {
                _missing(&mut error, "GITHUB_EVENT_PATH");
            }

            if config.event.repository.is_empty() {
                _missing(&mut error, "GITHUB_REPOSITORY");
            } else if RepositoryPath::try_from(config.event.repository.as_str()).is_err() {
                _invalid(&mut error, "GITHUB_REPOSITORY", &config.event.repository);
            }
        }
        ValidationScope::CommunityIssues => {
            if config.report.organization.is_empty() {
                _missing(&mut error, "CONTRIBOT_REPORT_ORGANIZATION");
            }
            if config.report.repositories.is_empty() {
                _missing(&mut error, "CONTRIBOT_REPORT_REPOSITORIES");
            }
        }
        ValidationScope::Contributors => (),
    }

    if error.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::EnvVarsError { errors: error })
    }
}

/// Validate configuration.
pub(crate) fn validate_configuration(
    config: &Config,
    scope: ValidationScope,
) -> Result<(), ValidationError> {
    validate_env_vars(config, scope)
}
