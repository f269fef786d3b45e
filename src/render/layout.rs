use std::collections::HashSet;

use chrono::Datelike;

use crate::{calendar::WeekRecord, utils::time::short_month_name};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
    pub left: u32,
}

/// Pixel sizes the grid is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutConfig {
    pub cell: u32,
    pub gap: u32,
    pub padding: Padding,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell: 11,
            gap: 3,
            padding: Padding {
                top: 44,
                right: 16,
                bottom: 34,
                left: 36,
            },
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLabel {
    pub column: usize,
    pub x: u32,
    pub text: &'static str,
}

/// Geometry of a grid with a fixed number of columns and rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    config: LayoutConfig,
    columns: usize,
    rows: usize,
}

impl Layout {
    pub fn new(config: LayoutConfig, columns: usize, rows: usize) -> Self {
        Self {
            config,
            columns,
            rows,
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Distance between the origins of two neighbouring cells.
    pub fn step(&self) -> u32 {
        self.config.cell + self.config.gap
    }

    fn span(&self, cells: usize) -> u32 {
        match cells {
            0 => 0,
            n => n as u32 * self.config.cell + (n as u32 - 1) * self.config.gap,
        }
    }

    pub fn grid_width(&self) -> u32 {
        self.span(self.columns)
    }

    pub fn grid_height(&self) -> u32 {
        self.span(self.rows)
    }

    pub fn width(&self) -> u32 {
        self.config.padding.left + self.grid_width() + self.config.padding.right
    }

    pub fn height(&self) -> u32 {
        self.config.padding.top + self.grid_height() + self.config.padding.bottom
    }

    /// Top-left corner of the cell in `column` and `row`.
    pub fn cell_origin(&self, column: usize, row: usize) -> (u32, u32) {
        (
            self.config.padding.left + column as u32 * self.step(),
            self.config.padding.top + row as u32 * self.step(),
        )
    }

    /// One label for every (year, month) pair, placed above the first week that starts in it.
    ///
    /// A pair that was already labeled is never labeled again, even if it shows up again further
    /// to the right.
    pub fn month_labels(&self, weeks: &[WeekRecord]) -> Vec<MonthLabel> {
        let mut seen = HashSet::new();
        let mut labels = vec![];
        for (column, week) in weeks.iter().enumerate().take(self.columns) {
            let key = (week.first_day.year(), week.first_day.month());
            if !seen.insert(key) {
                continue;
            }
            labels.push(MonthLabel {
                column,
                x: self.cell_origin(column, 0).0,
                text: short_month_name(key.1),
            });
        }
        labels
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::{Duration, NaiveDate};

    use crate::calendar::{test_data, DayRecord, WeekRecord};

    use super::{Layout, LayoutConfig, Padding};

    fn config() -> LayoutConfig {
        LayoutConfig {
            cell: 10,
            gap: 2,
            padding: Padding {
                top: 20,
                right: 5,
                bottom: 7,
                left: 30,
            },
        }
    }

    #[test]
    fn test_canvas_size() {
        let layout = Layout::new(config(), 52, 7);
        assert_eq!(layout.width(), 30 + 52 * 10 + 51 * 2 + 5);
        assert_eq!(layout.height(), 20 + 7 * 10 + 6 * 2 + 7);
    }

    #[test]
    fn test_canvas_size_without_columns() {
        let layout = Layout::new(config(), 0, 7);
        assert_eq!(layout.width(), 35);
    }

    #[test]
    fn test_cell_origins_are_unique() {
        let layout = Layout::new(config(), 52, 7);
        let mut origins = HashSet::new();
        for column in 0..52 {
            for row in 0..7 {
                assert!(origins.insert(layout.cell_origin(column, row)));
            }
        }
        assert_eq!(layout.cell_origin(0, 0), (30, 20));
        assert_eq!(layout.cell_origin(2, 3), (30 + 24, 20 + 36));
    }

    #[test]
    fn test_cells_fit_in_canvas() {
        let layout = Layout::new(config(), 52, 7);
        let (x, y) = layout.cell_origin(51, 6);
        assert_eq!(x + 10 + 5, layout.width());
        assert_eq!(y + 10 + 7, layout.height());
    }

    #[test]
    fn test_month_labels_once_per_month() {
        let start = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();
        let calendar = test_data::calendar(start, 52, |_| 0);
        let layout = Layout::new(config(), calendar.weeks.len(), 7);

        let labels = layout.month_labels(&calendar.weeks);

        let texts = labels.iter().map(|l| l.text).collect::<Vec<_>>();
        assert_eq!(
            texts,
            vec![
                "Oct", "Nov", "Dec", "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug",
                "Sep", "Oct"
            ]
        );
        assert_eq!(labels[0].column, 0);
        // 2023-11-05 is the first week starting in November.
        assert_eq!(labels[1].column, 3);
        assert_eq!(labels[1].x, layout.cell_origin(3, 0).0);
    }

    #[test]
    fn test_repeated_month_is_not_labeled_twice() {
        let jan = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
        let feb = NaiveDate::from_ymd_opt(2024, 2, 4).unwrap();
        let weeks = [jan, feb, jan + Duration::weeks(1)]
            .into_iter()
            .map(|day| WeekRecord::from_partial(day, std::iter::empty::<DayRecord>()))
            .collect::<Vec<_>>();
        let layout = Layout::new(config(), weeks.len(), 7);

        let labels = layout.month_labels(&weeks);

        assert_eq!(
            labels.iter().map(|l| (l.column, l.text)).collect::<Vec<_>>(),
            vec![(0, "Jan"), (1, "Feb")]
        );
    }
}
