use std::fmt::Write;

use crate::{
    calendar::{Calendar, DAYS_IN_WEEK},
    utils::time::iso_date,
};

use super::{
    layout::{Layout, LayoutConfig},
    level::{LevelScale, MAX_LEVEL},
    theme::Theme,
};

/// Rows that get a weekday label, counted from Sunday.
const WEEKDAY_LABELS: [(usize, &str); 3] = [(1, "Mon"), (3, "Wed"), (5, "Fri")];

const CORNER_RADIUS: u32 = 2;
const CARD_INSET: u32 = 1;
const CARD_RADIUS: u32 = 6;

/// Everything that changes how the document looks. Two renders with the same config and
/// calendar are byte-identical.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderConfig {
    pub layout: LayoutConfig,
    pub theme: Theme,
    /// Overrides the default "<N> contributions in the last year" header.
    pub title: Option<String>,
    pub show_header: bool,
    pub show_weekdays: bool,
    pub show_legend: bool,
    pub show_card: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            layout: LayoutConfig::default(),
            theme: Theme::default(),
            title: None,
            show_header: true,
            show_weekdays: true,
            show_legend: true,
            show_card: true,
        }
    }
}

/// Renders the calendar into a standalone SVG document.
pub fn render_svg(calendar: &Calendar, config: &RenderConfig) -> String {
    let layout = Layout::new(config.layout, calendar.weeks.len(), DAYS_IN_WEEK);
    let scale = LevelScale::new(calendar.window_max());
    let header = config
        .title
        .clone()
        .unwrap_or_else(|| default_header(calendar.window_total()));

    let mut svg = SvgBuilder::new(layout);
    svg.open(&header, &config.theme);
    if config.show_card {
        svg.card();
    }
    if config.show_header {
        svg.header(&header);
    }
    if config.show_weekdays {
        svg.weekday_labels();
    }
    svg.month_labels(calendar);
    svg.cells(calendar, &scale);
    if config.show_legend {
        svg.legend();
    }
    svg.close()
}

fn default_header(total: u64) -> String {
    match total {
        1 => "1 contribution in the last year".to_string(),
        n => format!("{n} contributions in the last year"),
    }
}

/// Escapes text placed inside XML elements and attributes.
pub fn escape_xml(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&apos;"),
            c => escaped.push(c),
        }
    }
    escaped
}

struct SvgBuilder {
    layout: Layout,
    out: String,
}

impl SvgBuilder {
    fn new(layout: Layout) -> Self {
        Self {
            layout,
            out: String::new(),
        }
    }

    fn line(&mut self, args: std::fmt::Arguments<'_>) {
        // Writing into a String can't fail.
        let _ = self.out.write_fmt(args);
        self.out.push('\n');
    }

    fn padding(&self) -> super::layout::Padding {
        self.layout.config().padding
    }

    fn open(&mut self, header: &str, theme: &Theme) {
        let (width, height) = (self.layout.width(), self.layout.height());
        let label = escape_xml(header);
        self.line(format_args!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{width}" height="{height}" viewBox="0 0 {width} {height}" role="img" aria-label="{label}">"#
        ));
        self.line(format_args!("<title>{label}</title>"));
        self.line(format_args!("<style>{}</style>", theme.style_block()));
    }

    fn card(&mut self) {
        let width = self.layout.width().saturating_sub(CARD_INSET * 2);
        let height = self.layout.height().saturating_sub(CARD_INSET * 2);
        self.line(format_args!(
            r#"<rect class="card" x="{CARD_INSET}" y="{CARD_INSET}" width="{width}" height="{height}" rx="{CARD_RADIUS}" ry="{CARD_RADIUS}"/>"#
        ));
    }

    fn header(&mut self, header: &str) {
        let x = self.padding().left;
        let text = escape_xml(header);
        self.line(format_args!(
            r#"<text class="t" x="{x}" y="18" font-weight="600">{text}</text>"#
        ));
    }

    fn weekday_labels(&mut self) {
        let x = self.padding().left.saturating_sub(6);
        let cell = self.layout.config().cell;
        for (row, name) in WEEKDAY_LABELS {
            let (_, y) = self.layout.cell_origin(0, row);
            // Baseline roughly centered on the row.
            let baseline = y + cell - 2;
            self.line(format_args!(
                r#"<text class="t" x="{x}" y="{baseline}" text-anchor="end">{name}</text>"#
            ));
        }
    }

    fn month_labels(&mut self, calendar: &Calendar) {
        let y = self.padding().top.saturating_sub(6);
        for label in self.layout.month_labels(&calendar.weeks) {
            self.line(format_args!(
                r#"<text class="t" x="{}" y="{y}">{}</text>"#,
                label.x, label.text
            ));
        }
    }

    fn cells(&mut self, calendar: &Calendar, scale: &LevelScale) {
        let cell = self.layout.config().cell;
        self.line(format_args!("<g>"));
        for (column, week) in calendar.weeks.iter().enumerate() {
            for (row, day) in week.days.iter().enumerate() {
                let (x, y) = self.layout.cell_origin(column, row);
                let level = scale.level(day.count);
                self.line(format_args!(
                    r#"<rect class="l{level}" x="{x}" y="{y}" width="{cell}" height="{cell}" rx="{CORNER_RADIUS}" ry="{CORNER_RADIUS}"><title>{}: {} contributions</title></rect>"#,
                    iso_date(day.date),
                    day.count
                ));
            }
        }
        self.line(format_args!("</g>"));
    }

    /// "Less" followed by one swatch per level and "More", aligned to the right edge of the grid.
    fn legend(&mut self) {
        let cell = self.layout.config().cell;
        let step = self.layout.step();
        let padding = self.padding();
        let grid_bottom = padding.top + self.layout.grid_height();
        let y = grid_bottom + 10;
        let baseline = y + cell - 1;
        let grid_right = padding.left + self.layout.grid_width();

        let more_width = 28;
        let swatches_end = grid_right.saturating_sub(more_width);
        let swatches_start = swatches_end.saturating_sub((MAX_LEVEL as u32 + 1) * step);

        self.line(format_args!(
            r#"<text class="t" x="{}" y="{baseline}" text-anchor="end">Less</text>"#,
            swatches_start.saturating_sub(4)
        ));
        for level in 0..=MAX_LEVEL {
            let x = swatches_start + level as u32 * step;
            self.line(format_args!(
                r#"<rect class="l{level}" x="{x}" y="{y}" width="{cell}" height="{cell}" rx="{CORNER_RADIUS}" ry="{CORNER_RADIUS}"/>"#
            ));
        }
        self.line(format_args!(
            r#"<text class="t" x="{}" y="{baseline}">More</text>"#,
            swatches_end + 2
        ));
    }

    fn close(mut self) -> String {
        self.out.push_str("</svg>\n");
        self.out
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use crate::{
        calendar::{test_data, Calendar},
        render::theme::{Theme, ThemeMode},
    };

    use super::{escape_xml, render_svg, RenderConfig};

    const START: NaiveDate = NaiveDate::from_ymd_opt(2023, 10, 15).unwrap();

    fn sample() -> Calendar {
        test_data::calendar(START, 52, |i| (i % 13) as u32)
    }

    #[test]
    fn test_render_is_idempotent() {
        let calendar = sample();
        let config = RenderConfig::default();
        assert_eq!(render_svg(&calendar, &config), render_svg(&calendar, &config));
    }

    #[test]
    fn test_one_rect_per_day_with_tooltip() {
        let calendar = sample();
        let svg = render_svg(&calendar, &RenderConfig::default());

        assert_eq!(svg.matches("contributions</title></rect>").count(), 52 * 7);
        assert!(svg.contains("<title>2023-10-15: 0 contributions</title>"));
        assert!(svg.contains("<title>2023-10-16: 1 contributions</title>"));
        assert!(svg.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\""));
        assert!(svg.ends_with("</svg>\n"));
    }

    #[test]
    fn test_levels_use_window_maximum() {
        let calendar = sample();
        let svg = render_svg(&calendar, &RenderConfig::default());
        // Max is 12, so the busiest days land on the top level and empty days on level 0.
        assert!(svg.contains(r#"<rect class="l0" x="36" y="44""#));
        // Day 12 sits in the second column, sixth row.
        assert!(svg.contains(r#"<rect class="l4" x="50" y="114""#));
    }

    #[test]
    fn test_size_follows_layout() {
        let calendar = sample();
        let svg = render_svg(&calendar, &RenderConfig::default());
        // 36 + 52 * 11 + 51 * 3 + 16 by 44 + 7 * 11 + 6 * 3 + 34
        assert!(svg.contains(r#"width="777" height="173" viewBox="0 0 777 173""#));
    }

    #[test]
    fn test_optional_parts() {
        let calendar = sample();
        let bare = RenderConfig {
            show_header: false,
            show_weekdays: false,
            show_legend: false,
            show_card: false,
            ..RenderConfig::default()
        };
        let svg = render_svg(&calendar, &bare);
        assert!(!svg.contains(">Less<"));
        assert!(!svg.contains(">Mon<"));
        assert!(!svg.contains("class=\"card\" x="));

        let full = render_svg(&calendar, &RenderConfig::default());
        assert!(full.contains(">Less<"));
        assert!(full.contains(">More<"));
        assert!(full.contains(">Wed<"));
        assert!(full.contains(">Oct<"));
        assert!(full.contains("class=\"card\" x="));
    }

    #[test]
    fn test_header_text() {
        let calendar = sample();
        let total = calendar.window_total();
        let svg = render_svg(&calendar, &RenderConfig::default());
        assert!(svg.contains(&format!(">{total} contributions in the last year</text>")));

        let titled = RenderConfig {
            title: Some("<octocat> & friends".into()),
            ..RenderConfig::default()
        };
        let svg = render_svg(&calendar, &titled);
        assert!(svg.contains(">&lt;octocat&gt; &amp; friends</text>"));
        assert!(!svg.contains("<octocat>"));
    }

    #[test]
    fn test_dark_theme_variant() {
        let calendar = sample();
        let auto = render_svg(&calendar, &RenderConfig::default());
        assert!(auto.contains("prefers-color-scheme: dark"));

        let dark = RenderConfig {
            theme: Theme::new(ThemeMode::Dark),
            ..RenderConfig::default()
        };
        assert!(!render_svg(&calendar, &dark).contains("prefers-color-scheme"));
    }

    #[test]
    fn test_empty_calendar_renders() {
        let svg = render_svg(&Calendar::default(), &RenderConfig::default());
        assert!(svg.contains("0 contributions in the last year"));
        assert!(!svg.contains("contributions</title></rect>"));
    }

    #[test]
    fn test_escape_xml() {
        assert_eq!(escape_xml(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&apos;");
    }
}
