use std::fmt::{self, Display, Write};

use clap::ValueEnum;

use super::level::MAX_LEVEL;

/// Colors for one appearance of the graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Fill for levels 0..=4.
    pub levels: [&'static str; MAX_LEVEL as usize + 1],
    pub text: &'static str,
    pub card: &'static str,
    pub card_border: &'static str,
}

pub const LIGHT: Palette = Palette {
    levels: ["#ebedf0", "#9be9a8", "#40c463", "#30a14e", "#216e39"],
    text: "#57606a",
    card: "#ffffff",
    card_border: "#d0d7de",
};

pub const DARK: Palette = Palette {
    levels: ["#161b22", "#0e4429", "#006d32", "#26a641", "#39d353"],
    text: "#8b949e",
    card: "#0d1117",
    card_border: "#30363d",
};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ThemeMode {
    /// Light colors, switching to dark ones when the viewer prefers a dark color scheme.
    #[default]
    Auto,
    Light,
    Dark,
}

impl Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ThemeMode::Auto => write!(f, "auto"),
            ThemeMode::Light => write!(f, "light"),
            ThemeMode::Dark => write!(f, "dark"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Theme {
    pub mode: ThemeMode,
    pub light: Palette,
    pub dark: Palette,
    pub font_family: &'static str,
    pub font_size: u32,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl Theme {
    pub fn new(mode: ThemeMode) -> Self {
        Self {
            mode,
            light: LIGHT,
            dark: DARK,
            font_family: "-apple-system,BlinkMacSystemFont,'Segoe UI',Helvetica,Arial,sans-serif",
            font_size: 10,
        }
    }

    /// Contents of the `<style>` element: one fill class per level plus text and card classes.
    pub fn style_block(&self) -> String {
        let mut css = String::new();
        let _ = write!(
            css,
            "text{{font-family:{};font-size:{}px}}",
            self.font_family, self.font_size
        );
        match self.mode {
            ThemeMode::Auto => {
                push_palette(&mut css, &self.light);
                css.push_str("@media (prefers-color-scheme: dark){");
                push_palette(&mut css, &self.dark);
                css.push('}');
            }
            ThemeMode::Light => push_palette(&mut css, &self.light),
            ThemeMode::Dark => push_palette(&mut css, &self.dark),
        }
        css
    }
}

fn push_palette(css: &mut String, palette: &Palette) {
    for (level, color) in palette.levels.iter().enumerate() {
        let _ = write!(css, ".l{level}{{fill:{color}}}");
    }
    let _ = write!(
        css,
        ".t{{fill:{}}}.card{{fill:{};stroke:{}}}",
        palette.text, palette.card, palette.card_border
    );
}

#[cfg(test)]
mod tests {
    use super::{Theme, ThemeMode, DARK, LIGHT};

    #[test]
    fn test_auto_has_both_variants() {
        let css = Theme::new(ThemeMode::Auto).style_block();
        assert!(css.contains("@media (prefers-color-scheme: dark)"));
        for level in 0..5 {
            assert!(css.contains(&format!(".l{level}{{fill:{}}}", LIGHT.levels[level])));
            assert!(css.contains(&format!(".l{level}{{fill:{}}}", DARK.levels[level])));
        }
    }

    #[test]
    fn test_fixed_modes_have_one_variant() {
        let light = Theme::new(ThemeMode::Light).style_block();
        assert!(!light.contains("@media"));
        assert!(light.contains(LIGHT.levels[4]));
        assert!(!light.contains(DARK.levels[4]));

        let dark = Theme::new(ThemeMode::Dark).style_block();
        assert!(!dark.contains("@media"));
        assert!(dark.contains(DARK.levels[4]));
    }
}
