//! Contribution data as it flows through the application. Everything here is built fresh for
//! every run from the fetched response and is thrown away once the image is written.

use chrono::{Datelike, NaiveDate};

/// Number of weeks shown in the graph.
pub const WINDOW_WEEKS: usize = 52;

pub const DAYS_IN_WEEK: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayRecord {
    pub date: NaiveDate,
    pub count: u32,
}

/// A single column of the graph. Days are ordered Sunday to Saturday.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WeekRecord {
    /// Used for placing month labels.
    pub first_day: NaiveDate,
    pub days: [DayRecord; DAYS_IN_WEEK],
}

impl WeekRecord {
    /// Builds a full week out of the days the api returned for it. The api omits days outside
    /// of the calendar range (the start of the first week, the future part of the last one), so
    /// any missing weekday slot is filled with an empty day.
    pub fn from_partial(first_day: NaiveDate, known: impl IntoIterator<Item = DayRecord>) -> Self {
        let sunday = first_day
            - chrono::Duration::days(first_day.weekday().num_days_from_sunday() as i64);
        let mut days: [DayRecord; DAYS_IN_WEEK] = std::array::from_fn(|i| DayRecord {
            date: sunday + chrono::Duration::days(i as i64),
            count: 0,
        });
        for day in known {
            let slot = day.date.weekday().num_days_from_sunday() as usize;
            days[slot] = day;
        }
        Self { first_day, days }
    }

    pub fn max_count(&self) -> u32 {
        self.days.iter().map(|d| d.count).max().unwrap_or(0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Calendar {
    /// Total reported by the api. This covers the full range the api looked at, which may be
    /// slightly larger than the weeks kept after truncation.
    pub total: u64,
    pub weeks: Vec<WeekRecord>,
}

impl Calendar {
    /// Largest single-day count across the whole window.
    pub fn window_max(&self) -> u32 {
        self.weeks.iter().map(WeekRecord::max_count).max().unwrap_or(0)
    }

    /// Sum of every day kept in the window.
    pub fn window_total(&self) -> u64 {
        self.weeks
            .iter()
            .flat_map(|w| w.days.iter())
            .map(|d| d.count as u64)
            .sum()
    }
}

/// Keeps only the most recent `count` weeks. Weeks are expected in chronological order.
pub fn last_weeks(mut weeks: Vec<WeekRecord>, count: usize) -> Vec<WeekRecord> {
    let excess = weeks.len().saturating_sub(count);
    weeks.drain(..excess);
    weeks
}

#[cfg(test)]
pub(crate) mod test_data {
    use chrono::{Duration, NaiveDate};

    use super::{Calendar, DayRecord, WeekRecord};

    /// Builds `weeks` full weeks starting at `start` (a Sunday). Counts come from `count_for`,
    /// which receives the day index since `start`.
    pub fn calendar(start: NaiveDate, weeks: usize, count_for: impl Fn(usize) -> u32) -> Calendar {
        let weeks = (0..weeks)
            .map(|w| {
                let first_day = start + Duration::weeks(w as i64);
                WeekRecord::from_partial(
                    first_day,
                    (0..7).map(|d| DayRecord {
                        date: first_day + Duration::days(d),
                        count: count_for(w * 7 + d as usize),
                    }),
                )
            })
            .collect::<Vec<_>>();
        let mut calendar = Calendar { total: 0, weeks };
        calendar.total = calendar.window_total();
        calendar
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::{last_weeks, test_data, DayRecord, WeekRecord};

    const SUNDAY: NaiveDate = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();

    #[test]
    fn test_partial_week_is_padded() {
        let wednesday = SUNDAY + chrono::Duration::days(3);
        let week = WeekRecord::from_partial(
            wednesday,
            [DayRecord {
                date: wednesday,
                count: 5,
            }],
        );

        assert_eq!(week.first_day, wednesday);
        assert_eq!(week.days.len(), 7);
        assert_eq!(week.days[0].date, SUNDAY);
        assert_eq!(week.days[3].count, 5);
        assert_eq!(week.days.iter().map(|d| d.count).sum::<u32>(), 5);
    }

    #[test]
    fn test_last_weeks_truncates_oldest() {
        let calendar = test_data::calendar(SUNDAY, 60, |_| 1);
        let newest = calendar.weeks.last().cloned();

        let weeks = last_weeks(calendar.weeks, 52);

        assert_eq!(weeks.len(), 52);
        assert_eq!(weeks.last().cloned(), newest);
        assert_eq!(weeks[0].first_day, SUNDAY + chrono::Duration::weeks(8));
    }

    #[test]
    fn test_last_weeks_keeps_short_window() {
        let calendar = test_data::calendar(SUNDAY, 10, |_| 1);
        assert_eq!(last_weeks(calendar.weeks, 52).len(), 10);
    }

    #[test]
    fn test_window_max_and_total() {
        let calendar = test_data::calendar(SUNDAY, 3, |i| i as u32);
        assert_eq!(calendar.window_max(), 20);
        assert_eq!(calendar.window_total(), (0..21).sum::<u64>());
    }
}
