use std::collections::HashMap;

use crate::config::EncodeOptions;
use crate::pixel::Pixel;
use crate::trim::{Trim, frame_width};
use crate::{PixelSvgError, PixelSvgResult};

use super::FrameVectorizer;

const SVG_NAMESPACE: &str = "http://www.w3.org/2000/svg";
const GENERATOR: &str = "Generated with pixelsvg";
/// Pretty output starts a new line before a run once the current one is this long.
const PRETTY_LINE_WIDTH: usize = 80;
const INDENT: &str = "  ";

/// Vectorizer that draws each distinct color as one `<path>` of horizontal runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct RunLengthSvg;

impl FrameVectorizer for RunLengthSvg {
    type Options = EncodeOptions;
    type Output = String;

    fn vectorize(
        &self,
        frame: &[Vec<Pixel>],
        options: &Self::Options,
        progress: &mut dyn FnMut(&str),
    ) -> PixelSvgResult<Self::Output> {
        encode(frame, options, progress)
    }
}

/// A pixel position within a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Coord {
    pub x: usize,
    pub y: usize,
}

/// Visible pixels grouped by exact color, in first-seen order.
#[derive(Debug, Clone, Default)]
pub struct ColorGroups {
    groups: Vec<(Pixel, Vec<Coord>)>,
    index: HashMap<Pixel, usize>,
}

impl ColorGroups {
    /// Scan `frame` row by row, collecting the coordinates of every pixel with nonzero alpha.
    pub fn collect(frame: &[Vec<Pixel>]) -> Self {
        let mut groups = Self::default();
        for (y, row) in frame.iter().enumerate() {
            for (x, px) in row.iter().enumerate() {
                if !px.is_transparent() {
                    groups.push(*px, Coord { x, y });
                }
            }
        }
        groups
    }

    fn push(&mut self, color: Pixel, coord: Coord) {
        match self.index.get(&color) {
            Some(&slot) => self.groups[slot].1.push(coord),
            None => {
                self.index.insert(color, self.groups.len());
                self.groups.push((color, vec![coord]));
            }
        }
    }

    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Pixel, &[Coord])> {
        self.groups
            .iter()
            .map(|(color, coords)| (color, coords.as_slice()))
    }
}

/// Encode one frame as a pixel perfect SVG document.
///
/// Every row must be as long as the first. A frame without rows or columns
/// yields an empty `<svg>` of size 0x0. Otherwise the size is the trimmed
/// size, which never drops below the minimum width and height even when
/// nothing in the frame is visible.
pub fn encode<F>(frame: &[Vec<Pixel>], options: &EncodeOptions, mut progress: F) -> PixelSvgResult<String>
where
    F: FnMut(&str),
{
    check_rectangular(frame)?;

    let groups = ColorGroups::collect(frame);
    progress(&format!("input image has {} distinct colors", groups.len()));

    let trim = Trim::compute(frame, options);
    if !trim.is_empty() {
        progress(&format!(
            "output image will trim (left: {} right: {} top: {} bottom: {}) blank lines",
            trim.left, trim.right, trim.top, trim.bottom
        ));
    }
    let (width, height) = if frame.is_empty() || frame_width(frame) == 0 {
        (0, 0)
    } else {
        trim.apply_to(frame)
    };

    let mut svg = Markup::new(options.pretty);
    svg.push(&format!(
        "<svg xmlns=\"{SVG_NAMESPACE}\" shape-rendering=\"crispEdges\" \
         viewBox=\"0 -0.5 {width} {height}\" width=\"{width}\" height=\"{height}\">"
    ));
    svg.newline();
    if options.include_metadata {
        svg.push(&format!("<metadata>{GENERATOR}</metadata>"));
        svg.newline();
    }

    let mut longest = 0;
    for (color, coords) in groups.iter() {
        if color.opacity() == 0.0 {
            continue;
        }
        svg.indent(1);
        svg.push(&format!("<path stroke=\"{}\" ", color.rgb_hex()));
        if color.a < u8::MAX {
            svg.push(&format!("opacity=\"{}\" ", color.opacity()));
        }
        svg.push("d=\"");
        longest = longest.max(write_runs(&mut svg, coords, &trim));
        svg.push("\"/>");
        svg.newline();
    }
    svg.push("</svg>\n");

    progress(&format!(
        "output image longest continuous color section: {longest}"
    ));
    Ok(svg.finish())
}

/// Append `M{x},{y}h{n}` commands for the runs in `coords`, returning the longest run.
fn write_runs(svg: &mut Markup, coords: &[Coord], trim: &Trim) -> usize {
    let mut longest = 0;
    let mut run_len = 0;
    for (idx, coord) in coords.iter().enumerate() {
        if run_len == 0 {
            if svg.line_len() >= PRETTY_LINE_WIDTH {
                svg.newline();
                svg.indent(2);
            }
            svg.push(&format!("M{},{}", coord.x - trim.left, coord.y - trim.top));
            svg.space();
        }
        run_len += 1;

        let next = coords.get(idx + 1);
        let continues = next.is_some_and(|next| next.y == coord.y && next.x == coord.x + 1);
        if !continues {
            svg.push(&format!("h{run_len}"));
            longest = longest.max(run_len);
            run_len = 0;
            if next.is_some() {
                svg.space();
            }
        }
    }
    longest
}

fn check_rectangular(frame: &[Vec<Pixel>]) -> PixelSvgResult<()> {
    let expected = frame_width(frame);
    match frame.iter().position(|row| row.len() != expected) {
        Some(row) => Err(PixelSvgError::MalformedFrame {
            row,
            expected,
            found: frame[row].len(),
        }),
        None => Ok(()),
    }
}

/// SVG text under construction; whitespace helpers are no-ops unless pretty.
struct Markup {
    out: String,
    pretty: bool,
}

impl Markup {
    fn new(pretty: bool) -> Self {
        Self {
            out: String::new(),
            pretty,
        }
    }

    fn push(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn newline(&mut self) {
        if self.pretty {
            self.out.push('\n');
        }
    }

    fn space(&mut self) {
        if self.pretty {
            self.out.push(' ');
        }
    }

    fn indent(&mut self, levels: usize) {
        if self.pretty {
            self.out.push_str(&INDENT.repeat(levels));
        }
    }

    /// Characters since the last line break, counting the break itself.
    fn line_len(&self) -> usize {
        match self.out.rfind('\n') {
            Some(at) => self.out.len() - at,
            None => self.out.len() + 1,
        }
    }

    fn finish(self) -> String {
        self.out
    }
}
