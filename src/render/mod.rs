//! SVG renderer for composed scenes
//!
//! This module takes a `Scene` of device-space primitives and produces an
//! SVG string with CSS classes for styling.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::render_svg;
