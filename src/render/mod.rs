//! Turns a [Calendar](crate::calendar::Calendar) into an SVG heatmap.
//!  - [level] quantizes daily counts into five intensity levels.
//!  - [layout] computes where every cell and month label goes.
//!  - [theme] holds the palettes and produces the style block.
//!  - [svg] assembles the final document.

pub mod layout;
pub mod level;
pub mod svg;
pub mod theme;

pub use svg::{render_svg, RenderConfig};
