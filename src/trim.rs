use crate::config::EncodeOptions;
use crate::pixel::Pixel;

/// Number of blank lines removed from each edge of a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Trim {
    pub left: usize,
    pub right: usize,
    pub top: usize,
    pub bottom: usize,
}

impl Trim {
    /// Work out the trim for `frame` under the caps and minimum size in `options`.
    ///
    /// Returns no trim unless `options.trim_alpha` is set. The right and
    /// bottom trims only get whatever budget the left and top trims leave,
    /// so the minimum size holds for the combined result.
    pub fn compute(frame: &[Vec<Pixel>], options: &EncodeOptions) -> Self {
        if !options.trim_alpha {
            return Self::default();
        }
        let max_horizontal = frame_width(frame).saturating_sub(options.min_width);
        let max_vertical = frame.len().saturating_sub(options.min_height);

        let left = capped(options.max_left_trim, num_blank_left(frame)).min(max_horizontal);
        let right =
            capped(options.max_right_trim, num_blank_right(frame)).min(max_horizontal - left);
        let top = capped(options.max_top_trim, num_blank_top(frame)).min(max_vertical);
        let bottom =
            capped(options.max_bottom_trim, num_blank_bottom(frame)).min(max_vertical - top);

        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Output `(width, height)` once this trim is applied to `frame`.
    pub fn apply_to(&self, frame: &[Vec<Pixel>]) -> (usize, usize) {
        (
            frame_width(frame) - self.left - self.right,
            frame.len() - self.top - self.bottom,
        )
    }
}

fn capped(cap: Option<usize>, blank: usize) -> usize {
    cap.map_or(blank, |cap| cap.min(blank))
}

/// Width of the first row, or 0 for a frame without rows.
pub fn frame_width(frame: &[Vec<Pixel>]) -> usize {
    frame.first().map_or(0, Vec::len)
}

fn column_is_blank(frame: &[Vec<Pixel>], x: usize) -> bool {
    frame
        .iter()
        .all(|row| row.get(x).is_none_or(Pixel::is_transparent))
}

fn row_is_blank(row: &[Pixel]) -> bool {
    row.iter().all(Pixel::is_transparent)
}

/// Count of fully transparent columns at the left edge.
pub fn num_blank_left(frame: &[Vec<Pixel>]) -> usize {
    (0..frame_width(frame))
        .take_while(|&x| column_is_blank(frame, x))
        .count()
}

/// Count of fully transparent columns at the right edge.
pub fn num_blank_right(frame: &[Vec<Pixel>]) -> usize {
    (0..frame_width(frame))
        .rev()
        .take_while(|&x| column_is_blank(frame, x))
        .count()
}

/// Count of fully transparent rows at the top edge.
pub fn num_blank_top(frame: &[Vec<Pixel>]) -> usize {
    frame.iter().take_while(|row| row_is_blank(row)).count()
}

/// Count of fully transparent rows at the bottom edge.
pub fn num_blank_bottom(frame: &[Vec<Pixel>]) -> usize {
    frame.iter().rev().take_while(|row| row_is_blank(row)).count()
}
