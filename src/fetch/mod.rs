//! Retrieves the contribution calendar. [GithubSource] is the production implementation of
//! [ContributionSource]; it performs exactly one request per call and never retries.

pub mod entities;

use std::time::Duration;

use async_trait::async_trait;
use entities::{GraphQlResponse, UserData};
use serde_json::json;
use tracing::{debug, info, instrument, warn};

use crate::{
    calendar::{last_weeks, Calendar, WINDOW_WEEKS},
    error::{Error, Result},
};

const CALENDAR_QUERY: &str = "query($login: String!) {
  user(login: $login) {
    contributionsCollection {
      contributionCalendar {
        totalContributions
        weeks {
          firstDay
          contributionDays {
            date
            contributionCount
          }
        }
      }
    }
  }
}";

/// Anything that can provide the last year of contributions for a user.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContributionSource: Send + Sync {
    /// Returns at most [WINDOW_WEEKS] weeks, oldest first.
    async fn fetch_calendar(&self, login: &str) -> Result<Calendar>;
}

pub struct GithubSource {
    client: reqwest::Client,
    endpoint: String,
    token: String,
}

impl GithubSource {
    pub fn new(endpoint: impl Into<String>, token: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
            token: token.into(),
        })
    }
}

#[async_trait]
impl ContributionSource for GithubSource {
    #[instrument(skip(self))]
    async fn fetch_calendar(&self, login: &str) -> Result<Calendar> {
        debug!("Requesting contribution calendar from {}", self.endpoint);
        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.token)
            .json(&json!({
                "query": CALENDAR_QUERY,
                "variables": { "login": login },
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        debug!("Received {} bytes with status {status}", body.len());
        if !status.is_success() {
            return Err(Error::Status { status, body });
        }

        let calendar = parse_calendar(&body, login)?;
        info!(
            "Fetched {} weeks with {} contributions",
            calendar.weeks.len(),
            calendar.total
        );
        Ok(calendar)
    }
}

/// Decodes a GraphQL response body into a [Calendar] trimmed to the last [WINDOW_WEEKS] weeks.
pub fn parse_calendar(body: &str, login: &str) -> Result<Calendar> {
    let response: GraphQlResponse<UserData> = serde_json::from_str(body)?;

    if let Some(errors) = response.errors.filter(|e| !e.is_empty()) {
        let payload = serde_json::to_string(&errors)?;
        warn!("Api responded with errors {payload}");
        return Err(Error::response(payload));
    }

    let user = response
        .data
        .and_then(|data| data.user)
        .ok_or_else(|| Error::response(format!("no user named '{login}' was found")))?;

    let mut calendar: Calendar = user.contributions_collection.contribution_calendar.into();
    calendar.weeks = last_weeks(calendar.weeks, WINDOW_WEEKS);
    Ok(calendar)
}
