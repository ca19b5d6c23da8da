//! Config module.

mod drivers;

use std::{env, str::FromStr};

pub use drivers::{ApiDriver, DriverError};

const DEFAULT_REPORT_ORGANIZATION: &str = "learningequality";
const DEFAULT_REPORT_REPOSITORIES: &str =
    "kolibri,studio,kolibri-design-system,le-utils,.github,ricecooker";
const DEFAULT_BOT_USERNAMES: &str = "learning-equality-bot[bot],sentry-io[bot]";
const DEFAULT_CLOSE_CONTRIBUTORS: &str = concat!(
    "AadarshM07,Abhishek-Punhani,BabyElias,Dimi20cen,EshaanAgg,GarvitSinghal47,",
    "habibayman,iamshobhraj,indirectlylit,Jakoma02,KshitijThareja,muditchoudhary,",
    "nathanaelg16,nikkuAg,Sahil-Sinha-11,shivam-daksh,shruti862,thesujai,",
    "WinnyChang,yeshwanth235"
);

#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// API driver.
    pub driver: ApiDriver,
    /// GitHub options.
    pub github: ApiGitHubConfig,
}

#[derive(Debug, Clone)]
pub struct ApiGitHubConfig {
    /// GitHub API connect timeout (in milliseconds).
    pub connect_timeout: u64,
    /// GitHub API root URL.
    pub root_url: String,
    /// GitHub API token.
    pub token: String,
}

#[derive(Debug, Clone)]
pub struct ContributorsConfig {
    /// Bot accounts, never considered as contributors.
    pub bot_usernames: Vec<String>,
    /// Close contributors, still considered as contributors when org members.
    pub close_contributors: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct EventConfig {
    /// Path of the step outputs file, when running in a workflow.
    pub output_path: String,
    /// Path to the JSON payload of the triggering event.
    pub path: String,
    /// Repository slug, as `owner/name`.
    pub repository: String,
}

#[derive(Debug, Clone)]
pub struct ReportConfig {
    /// Organization whose members are considered part of the team.
    pub organization: String,
    /// Repositories scanned for open issues.
    pub repositories: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Running as a GitHub Actions step.
    pub github_actions: bool,
    /// Use bunyan logging.
    pub use_bunyan: bool,
}

/// Bot configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// API options.
    pub api: ApiConfig,
    /// Contributors options.
    pub contributors: ContributorsConfig,
    /// Event options.
    pub event: EventConfig,
    /// Logging options.
    pub logging: LoggingConfig,
    /// Report options.
    pub report: ReportConfig,
    /// App version
    pub version: String,
}

impl Config {
    /// Create configuration from environment.
    pub fn from_env(version: String) -> Result<Config, DriverError> {
        Ok(Config {
            api: ApiConfig {
                driver: ApiDriver::from_str(&env_to_str("CONTRIBOT_API_DRIVER", "github"))?,
                github: ApiGitHubConfig {
                    connect_timeout: env_to_u64("CONTRIBOT_API_GITHUB_CONNECT_TIMEOUT", 5000),
                    root_url: env_to_str(
                        "CONTRIBOT_API_GITHUB_ROOT_URL",
                        "https://api.github.com",
                    ),
                    // Workflows expose the token as `token`, and map missing secrets to "".
                    token: env_to_non_empty_str("GITHUB_TOKEN")
                        .or_else(|| env_to_non_empty_str("token"))
                        .unwrap_or_default(),
                },
            },
            contributors: ContributorsConfig {
                bot_usernames: parse_list(&env_to_str(
                    "CONTRIBOT_BOT_USERNAMES",
                    DEFAULT_BOT_USERNAMES,
                )),
                close_contributors: parse_list(&env_to_str(
                    "CONTRIBOT_CLOSE_CONTRIBUTORS",
                    DEFAULT_CLOSE_CONTRIBUTORS,
                )),
            },
            event: EventConfig {
                output_path: env_to_str("GITHUB_OUTPUT", ""),
                path: env_to_str("GITHUB_EVENT_PATH", ""),
                repository: env_to_str("GITHUB_REPOSITORY", ""),
            },
            logging: LoggingConfig {
                github_actions: env_to_bool("GITHUB_ACTIONS", false),
                use_bunyan: env_to_bool("CONTRIBOT_LOGGING_USE_BUNYAN", false),
            },
            report: ReportConfig {
                organization: env_to_str(
                    "CONTRIBOT_REPORT_ORGANIZATION",
                    DEFAULT_REPORT_ORGANIZATION,
                ),
                repositories: parse_list(&env_to_str(
                    "CONTRIBOT_REPORT_REPOSITORIES",
                    DEFAULT_REPORT_REPOSITORIES,
                )),
            },
            version,
        })
    }

    pub fn from_env_no_version() -> Result<Self, DriverError> {
        Self::from_env("0.0.0".into())
    }
}

/// Split a comma-separated list, dropping blank entries.
fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|e| !e.is_empty())
        .map(String::from)
        .collect()
}

fn env_to_u64(name: &str, default: u64) -> u64 {
    env::var(name)
        .map(|e| e.parse().unwrap_or(default))
        .unwrap_or(default)
}

fn env_to_bool(name: &str, default: bool) -> bool {
    env::var(name).map(|e| !e.is_empty()).unwrap_or(default)
}

fn env_to_str(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_e| default.to_string())
}

fn env_to_non_empty_str(name: &str) -> Option<String> {
    env::var(name).ok().filter(|e| !e.is_empty())
}
