//! Run configuration. Every option can come from a command line flag or from the environment,
//! which is how the tool is normally driven from a CI workflow. The options are resolved exactly
//! once into a [Config] that the rest of the application borrows.

use std::{convert::Infallible, path::PathBuf, time::Duration};

use clap::ArgAction;

use crate::{
    error::{Error, Result},
    render::{
        layout::LayoutConfig,
        theme::{Theme, ThemeMode},
        RenderConfig,
    },
};

pub const DEFAULT_OUTPUT: &str = "activity-graph.svg";
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com/graphql";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct SnapshotConfig {
    pub enabled: bool,
    /// Explicit destination. `{year}` and `{month}` are replaced with the current UTC date.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub token: String,
    pub username: String,
    pub output: PathBuf,
    pub snapshot: SnapshotConfig,
    pub endpoint: String,
    pub timeout: Duration,
    pub render: RenderConfig,
}

/// Parses boolean-like strings such as `true`, `1`, `yes` or `on`. Anything else is false.
pub fn parse_flag(value: &str) -> std::result::Result<bool, Infallible> {
    Ok(matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "y" | "on"
    ))
}

#[derive(Debug, Clone, clap::Args)]
pub struct ConfigArgs {
    #[arg(long, env = "GITHUB_TOKEN", hide_env_values = true, help = "Token used to query the GitHub API")]
    pub token: Option<String>,
    #[arg(
        long = "user",
        env = "GITHUB_USERNAME",
        help = "User whose activity is rendered. Falls back to $GITHUB_ACTOR and then $GITHUB_REPOSITORY_OWNER"
    )]
    pub username: Option<String>,
    #[arg(long, env = "GITHUB_ACTOR", hide = true)]
    pub actor: Option<String>,
    #[arg(long, env = "GITHUB_REPOSITORY_OWNER", hide = true)]
    pub repository_owner: Option<String>,
    #[arg(long, short, env = "OUTPUT_PATH", default_value = DEFAULT_OUTPUT, help = "Where the graph is written")]
    pub output: PathBuf,
    #[arg(
        long,
        env = "MONTHLY_SNAPSHOT",
        action = ArgAction::Set,
        num_args = 0..=1,
        default_value = "false",
        default_missing_value = "true",
        value_parser = parse_flag,
        help = "Also keep a dated copy of the graph when running on the first day of a month (UTC)"
    )]
    pub monthly_snapshot: bool,
    #[arg(
        long,
        env = "SNAPSHOT_PATH",
        help = "Path of the monthly copy. {year} and {month} are substituted. Defaults to activity-<YYYY>-<MM>.svg next to the output"
    )]
    pub snapshot_path: Option<PathBuf>,
    #[arg(long, env = "GITHUB_GRAPHQL_URL", default_value = DEFAULT_ENDPOINT, help = "GraphQL endpoint")]
    pub endpoint: String,
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = DEFAULT_TIMEOUT_SECS, help = "Request timeout in seconds")]
    pub timeout: u64,
    #[arg(long, env = "GRAPH_THEME", default_value_t = ThemeMode::Auto, help = "Color scheme of the graph")]
    pub theme: ThemeMode,
    #[arg(long, env = "GRAPH_TITLE", help = "Header text. Defaults to the contribution total")]
    pub title: Option<String>,
    #[arg(long, help = "Don't render the header")]
    pub no_header: bool,
    #[arg(long, help = "Don't render the legend")]
    pub no_legend: bool,
    #[arg(long, help = "Don't render weekday labels")]
    pub no_weekdays: bool,
    #[arg(long, help = "Don't render the card background")]
    pub no_card: bool,
}

impl Default for ConfigArgs {
    fn default() -> Self {
        Self {
            token: None,
            username: None,
            actor: None,
            repository_owner: None,
            output: PathBuf::from(DEFAULT_OUTPUT),
            monthly_snapshot: false,
            snapshot_path: None,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: DEFAULT_TIMEOUT_SECS,
            theme: ThemeMode::Auto,
            title: None,
            no_header: false,
            no_legend: false,
            no_weekdays: false,
            no_card: false,
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl ConfigArgs {
    pub fn resolve(self) -> Result<Config> {
        let token = non_empty(self.token)
            .ok_or_else(|| Error::configuration("GITHUB_TOKEN must be set"))?;
        let username = non_empty(self.username)
            .or_else(|| non_empty(self.actor))
            .or_else(|| non_empty(self.repository_owner))
            .ok_or_else(|| {
                Error::configuration(
                    "a username must be set through GITHUB_USERNAME, GITHUB_ACTOR or GITHUB_REPOSITORY_OWNER",
                )
            })?;
        if self.output.as_os_str().is_empty() {
            return Err(Error::configuration("output path can't be empty"));
        }
        if self.timeout == 0 {
            return Err(Error::configuration("request timeout must be at least 1 second"));
        }

        Ok(Config {
            token,
            username,
            output: self.output,
            snapshot: SnapshotConfig {
                enabled: self.monthly_snapshot,
                path: self.snapshot_path.filter(|p| !p.as_os_str().is_empty()),
            },
            endpoint: self.endpoint,
            timeout: Duration::from_secs(self.timeout),
            render: RenderConfig {
                layout: LayoutConfig::default(),
                theme: Theme::new(self.theme),
                title: non_empty(self.title),
                show_header: !self.no_header,
                show_weekdays: !self.no_weekdays,
                show_legend: !self.no_legend,
                show_card: !self.no_card,
            },
        })
    }
}
