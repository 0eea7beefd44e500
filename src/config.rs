//! Options for feature reporting.

/// Report options controlling how strictly outline data is validated.
///
/// # Example
///
/// ```
/// use pdf_features::config::ReportOptions;
///
/// // Colors must be in [0, 1] (default)
/// let strict = ReportOptions::strict();
///
/// // Accept any finite color components, stop descending at depth 64
/// let lenient = ReportOptions::lenient().with_max_depth(64);
/// assert!(!lenient.strict_color_range);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// Require every color component to lie in `[0, 1]`
    ///
    /// PDF Spec: ISO 32000-1:2008, Table 153 - `/C` is an array of three
    /// numbers in the range 0.0 to 1.0 in DeviceRGB.
    pub strict_color_range: bool,

    /// Maximum outline nesting depth to descend into (0 = unlimited)
    ///
    /// Items at depth 1 are the children of the outline root. Deeper items
    /// are left out of the report; this is logged, not recorded as an error.
    pub max_depth: usize,
}

impl Default for ReportOptions {
    fn default() -> Self {
        Self::strict()
    }
}

impl ReportOptions {
    /// Strict mode: colors outside `[0, 1]` are recorded as errors.
    pub fn strict() -> Self {
        Self {
            strict_color_range: true,
            max_depth: 0,
        }
    }

    /// Lenient mode: any three finite components are reported as given.
    pub fn lenient() -> Self {
        Self {
            strict_color_range: false,
            max_depth: 0,
        }
    }

    /// Set the color range check.
    pub fn with_strict_color_range(mut self, enable: bool) -> Self {
        self.strict_color_range = enable;
        self
    }

    /// Set the maximum nesting depth (0 = unlimited).
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check if items at `depth` should be reported.
    pub(crate) fn allows_depth(&self, depth: usize) -> bool {
        self.max_depth == 0 || depth <= self.max_depth
    }
}
