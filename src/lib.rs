//! Pivotbox - rotate a unit square about an arbitrary pivot and see the result
//!
//! This library computes the four corner coordinates of a 100x100 rectangle
//! rotated about a pivot point, and renders the scene (axes, rotated square,
//! origin and pivot markers) as SVG.
//!
//! # Example
//!
//! ```rust
//! use pivotbox::{render, CornerReport, Figure};
//!
//! let figure = Figure::default();
//! let svg = render(&figure);
//! assert!(svg.contains("<svg"));
//!
//! let report = CornerReport::for_figure(&figure);
//! assert_eq!(report.to_string().lines().count(), 4);
//! ```

pub mod geometry;
pub mod render;
pub mod report;
pub mod scene;
pub mod theme;

pub use geometry::{
    rotated_corners, Corner, Figure, PivotOffset, PivotRotation, Point, RectangleState, Viewport,
};
pub use render::{render_svg, SvgConfig};
pub use report::CornerReport;
pub use scene::{build_scene, Primitive, Scene};
pub use theme::{Theme, ThemeError};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Placement of the logical origin within the canvas
    pub viewport: Viewport,
    /// Color theme for the scene
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the viewport
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Set the color theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Render a figure to SVG with default configuration
///
/// This is the main entry point for the library. It computes the rotated
/// corners, composes the scene, and generates SVG output.
///
/// # Example
///
/// ```rust
/// use pivotbox::{render, Figure, PivotOffset, RectangleState};
///
/// let figure = Figure::new(
///     RectangleState::new(0.0, 0.0),
///     PivotOffset::new(50.0, 50.0),
///     45.0,
/// );
/// let svg = render(&figure);
/// assert!(svg.contains("<polygon"));
/// ```
pub fn render(figure: &Figure) -> String {
    render_with_config(figure, RenderConfig::default())
}

/// Render a figure to SVG with custom configuration
///
/// # Example
///
/// ```rust
/// use pivotbox::{render_with_config, Figure, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new().with_svg(SvgConfig::default().with_pretty_print(false));
/// let svg = render_with_config(&Figure::default(), config);
/// assert!(svg.contains("<svg"));
/// ```
pub fn render_with_config(figure: &Figure, config: RenderConfig) -> String {
    let scene = build_scene(figure, &config.viewport, &config.theme);
    render_svg(&scene, &config.viewport, &config.svg)
}
