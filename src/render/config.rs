//! Output options for the SVG writer

/// Options controlling how the SVG string is written.
///
/// The defaults produce a standalone, indented file with `pb-` CSS classes,
/// ready to open in a browser. Compact single-line output (no declaration,
/// no newlines) is useful when the SVG is embedded in another document.
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Emit the `<?xml ...?>` declaration so the file stands alone
    pub standalone: bool,

    /// One element per line, indented; disable for compact output
    pub pretty_print: bool,

    /// Prefix for CSS class names; `None` leaves classes unprefixed
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pb-".to_string()),
        }
    }
}

impl SvgConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to emit the XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to indent the output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Emit classes without a prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}
