//! Shape of the GraphQL response. Only the fields the graph needs are deserialized.

use chrono::NaiveDate;
use serde::Deserialize;
use serde_json::Value;

use crate::calendar::{Calendar, DayRecord, WeekRecord};

#[derive(Debug, Deserialize)]
pub struct GraphQlResponse<T> {
    pub data: Option<T>,
    /// GraphQL reports failures in-band, usually with a 200 status.
    pub errors: Option<Vec<Value>>,
}

#[derive(Debug, Deserialize)]
pub struct UserData {
    pub user: Option<UserEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserEntity {
    pub contributions_collection: ContributionsCollectionEntity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionsCollectionEntity {
    pub contribution_calendar: ContributionCalendarEntity,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionCalendarEntity {
    pub total_contributions: u64,
    pub weeks: Vec<ContributionWeekEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionWeekEntity {
    pub first_day: NaiveDate,
    pub contribution_days: Vec<ContributionDayEntity>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContributionDayEntity {
    pub date: NaiveDate,
    pub contribution_count: u32,
}

impl From<ContributionDayEntity> for DayRecord {
    fn from(
        ContributionDayEntity {
            date,
            contribution_count,
        }: ContributionDayEntity,
    ) -> Self {
        DayRecord {
            date,
            count: contribution_count,
        }
    }
}

impl From<ContributionWeekEntity> for WeekRecord {
    fn from(week: ContributionWeekEntity) -> Self {
        WeekRecord::from_partial(
            week.first_day,
            week.contribution_days.into_iter().map(DayRecord::from),
        )
    }
}

impl From<ContributionCalendarEntity> for Calendar {
    fn from(calendar: ContributionCalendarEntity) -> Self {
        Calendar {
            total: calendar.total_contributions,
            weeks: calendar.weeks.into_iter().map(WeekRecord::from).collect(),
        }
    }
}
