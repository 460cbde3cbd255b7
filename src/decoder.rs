use crate::pixel::Pixel;
use crate::{PixelSvgError, PixelSvgResult};

/// One image frame, addressed as `frame[y][x]`.
pub type Frame = Vec<Vec<Pixel>>;

/// All frames of an image, addressed as `pixels[frame][y][x]`.
pub type PixelArray = Vec<Frame>;

/// Dimensions read from a sample shape descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SampleShape {
    /// Whether the descriptor carried a leading frame dimension.
    pub animated: bool,
    pub frames: usize,
    pub width: usize,
    pub height: usize,
    pub channels: usize,
}

impl SampleShape {
    /// Interpret `[width, height, channels]` or `[frames, width, height, channels]`.
    pub fn from_dims(dims: &[usize]) -> PixelSvgResult<Self> {
        let (animated, frames, width, height, channels) = match *dims {
            [width, height, channels] => (false, 1, width, height, channels),
            [frames, width, height, channels] => (true, frames, width, height, channels),
            _ => {
                return Err(PixelSvgError::InvalidShape {
                    dims: dims.to_vec(),
                });
            }
        };
        Ok(Self {
            animated,
            frames,
            width,
            height,
            channels,
        })
    }

    /// Total number of samples a dense buffer of this shape holds, if it fits in `usize`.
    pub fn sample_count(&self) -> Option<usize> {
        self.frames
            .checked_mul(self.width)?
            .checked_mul(self.height)?
            .checked_mul(self.channels)
    }
}

/// Decode a flat, interleaved sample buffer into a `[frame][y][x]` pixel array.
///
/// `shape` is `[width, height, channels]` for a single frame or
/// `[frames, width, height, channels]`. Samples are frame-major, then
/// row-major. An empty buffer decodes to an empty array; any other buffer
/// must match the shape exactly.
pub fn decode<F>(samples: &[u8], shape: &[usize], mut progress: F) -> PixelSvgResult<PixelArray>
where
    F: FnMut(&str),
{
    let shape = SampleShape::from_dims(shape)?;
    if shape.animated {
        progress(&format!("image has multiple ({}) frames", shape.frames));
    }
    progress(&format!(
        "input image dimensions: {}x{}",
        shape.width, shape.height
    ));
    progress(&format!("input image has {} color channels", shape.channels));
    if !(1..=4).contains(&shape.channels) {
        return Err(PixelSvgError::InvalidChannelCount {
            channels: shape.channels,
        });
    }

    if samples.is_empty() {
        return Ok(Vec::new());
    }
    let expected = shape.sample_count();
    if expected != Some(samples.len()) {
        return Err(PixelSvgError::SampleCountMismatch {
            expected: expected.unwrap_or(usize::MAX),
            found: samples.len(),
        });
    }

    let mut output: PixelArray =
        vec![vec![vec![Pixel::default(); shape.width]; shape.height]; shape.frames];
    for (index, chunk) in samples.chunks_exact(shape.channels).enumerate() {
        let (frame, y, x) = locate(index, shape.width, shape.height);
        output[frame][y][x] =
            Pixel::from_channels(chunk).ok_or(PixelSvgError::InvalidChannelCount {
                channels: chunk.len(),
            })?;
    }
    Ok(output)
}

/// Position of the `index`-th pixel as `(frame, y, x)`.
fn locate(index: usize, width: usize, height: usize) -> (usize, usize, usize) {
    let frame = index / (width * height);
    let x = index % width;
    let y = index / width - frame * height;
    (frame, y, x)
}
