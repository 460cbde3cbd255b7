/// Options describing how a frame is turned into SVG markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Add newlines and indentation to the markup.
    pub pretty: bool,
    /// Embed a `<metadata>` element naming the generator.
    pub include_metadata: bool,
    /// Trim fully transparent rows and columns from the edges.
    pub trim_alpha: bool,
    /// Upper bound on columns trimmed from the left edge (`None` = unbounded).
    pub max_left_trim: Option<usize>,
    /// Upper bound on columns trimmed from the right edge (`None` = unbounded).
    pub max_right_trim: Option<usize>,
    /// Upper bound on rows trimmed from the top edge (`None` = unbounded).
    pub max_top_trim: Option<usize>,
    /// Upper bound on rows trimmed from the bottom edge (`None` = unbounded).
    pub max_bottom_trim: Option<usize>,
    /// Trimming never narrows the output below this width.
    pub min_width: usize,
    /// Trimming never shortens the output below this height.
    pub min_height: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        Self {
            pretty: false,
            include_metadata: true,
            trim_alpha: false,
            max_left_trim: None,
            max_right_trim: None,
            max_top_trim: None,
            max_bottom_trim: None,
            min_width: 0,
            min_height: 0,
        }
    }
}

impl EncodeOptions {
    /// Enable or disable pretty-printing.
    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// Enable or disable the generator metadata element.
    pub fn with_metadata(mut self, include_metadata: bool) -> Self {
        self.include_metadata = include_metadata;
        self
    }

    /// Enable or disable edge trimming of transparent lines.
    pub fn with_trim_alpha(mut self, trim_alpha: bool) -> Self {
        self.trim_alpha = trim_alpha;
        self
    }

    /// Set the per-edge trim caps as `(left, right, top, bottom)`.
    pub fn with_max_trims(
        mut self,
        left: Option<usize>,
        right: Option<usize>,
        top: Option<usize>,
        bottom: Option<usize>,
    ) -> Self {
        self.max_left_trim = left;
        self.max_right_trim = right;
        self.max_top_trim = top;
        self.max_bottom_trim = bottom;
        self
    }

    /// Set the minimum output dimensions kept when trimming.
    pub fn with_min_size(mut self, min_width: usize, min_height: usize) -> Self {
        self.min_width = min_width;
        self.min_height = min_height;
        self
    }
}
