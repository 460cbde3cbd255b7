use thiserror::Error;

/// Result type alias for operations that may fail with [`PixelSvgError`].
pub type PixelSvgResult<T> = std::result::Result<T, PixelSvgError>;

/// Error types that can occur while turning an image into an SVG.
///
/// This enum covers errors from image loading, sample decoding, frame
/// selection, and SVG encoding.
#[derive(Debug, Error)]
pub enum PixelSvgError {
    /// The last shape dimension is not a supported channel count.
    #[error("unexpected number of channels: {channels}")]
    InvalidChannelCount { channels: usize },
    /// The shape descriptor has neither 3 nor 4 dimensions.
    #[error("unexpected sample shape {dims:?}; expected [width, height, channels] or [frames, width, height, channels]")]
    InvalidShape { dims: Vec<usize> },
    /// The sample buffer length disagrees with its shape.
    #[error("sample buffer holds {found} samples but its shape requires {expected}")]
    SampleCountMismatch { expected: usize, found: usize },
    /// A frame row differs in length from the first row.
    #[error("malformed frame: row {row} has {found} pixels, expected {expected}")]
    MalformedFrame {
        row: usize,
        expected: usize,
        found: usize,
    },
    /// The input is not a PNG, GIF, or JPEG image.
    #[error("unsupported input file type {format}")]
    UnsupportedFormat { format: String },
    /// The requested frame does not exist in the image.
    #[error("frame {index} is out of range; image has {frames} frame(s)")]
    FrameOutOfRange { index: usize, frames: usize },
    /// Image decoding error.
    #[error("Image processing failed: {0}")]
    Image(#[from] image::ImageError),
    /// File system I/O error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
