//! SVG generation from composed scenes

use crate::geometry::{Point, Viewport};
use crate::scene::{Primitive, Scene};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> &str {
        if self.config.pretty_print {
            "  "
        } else {
            ""
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a line element
    pub fn add_line(&mut self, from: Point, to: Point, stroke: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<line class="{}axis" x1="{}" y1="{}" x2="{}" y2="{}" stroke="{}"/>"#,
            self.indent_str(),
            prefix,
            from.x,
            from.y,
            to.x,
            to.y,
            stroke
        ));
    }

    /// Add a filled circle element
    pub fn add_circle(&mut self, center: Point, radius: f64, fill: &str) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<circle class="{}marker" cx="{}" cy="{}" r="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            center.x,
            center.y,
            radius,
            fill
        ));
    }

    /// Add a filled polygon element
    pub fn add_polygon(&mut self, points: &[Point], fill: &str) {
        let prefix = self.prefix();
        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon class="{}shape" points="{}" fill="{}"/>"#,
            self.indent_str(),
            prefix,
            points_str,
            fill
        ));
    }

    /// Build the final SVG string
    pub fn build(self, extent: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 {} {}">"#,
            extent, extent
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a composed scene to an SVG string
pub fn render_svg(scene: &Scene, viewport: &Viewport, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());

    for primitive in &scene.primitives {
        match primitive {
            Primitive::Line { from, to, stroke } => builder.add_line(*from, *to, stroke),
            Primitive::Circle {
                center,
                radius,
                fill,
            } => builder.add_circle(*center, *radius, fill),
            Primitive::Polygon { points, fill } => builder.add_polygon(points, fill),
        }
    }

    builder.build(viewport.extent())
}
