use std::io::Cursor;

use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage, ImageFormat};

use crate::decoder::{PixelArray, decode};
use crate::{PixelSvgError, PixelSvgResult};

/// Input formats accepted for conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Gif,
    Jpeg,
}

impl ImageKind {
    /// Detect the format from the leading bytes, rejecting anything but PNG, GIF, or JPEG.
    pub fn sniff(bytes: &[u8]) -> PixelSvgResult<Self> {
        match image::guess_format(bytes) {
            Ok(ImageFormat::Png) => Ok(Self::Png),
            Ok(ImageFormat::Gif) => Ok(Self::Gif),
            Ok(ImageFormat::Jpeg) => Ok(Self::Jpeg),
            Ok(other) => Err(PixelSvgError::UnsupportedFormat {
                format: other.to_mime_type().to_string(),
            }),
            Err(_) => Err(PixelSvgError::UnsupportedFormat {
                format: "unknown".to_string(),
            }),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Gif => "image/gif",
            Self::Jpeg => "image/jpeg",
        }
    }

    fn format(&self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Gif => ImageFormat::Gif,
            Self::Jpeg => ImageFormat::Jpeg,
        }
    }
}

/// Flat interleaved samples plus the shape descriptor [`decode`] expects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampleBuffer {
    pub samples: Vec<u8>,
    pub shape: Vec<usize>,
}

impl SampleBuffer {
    /// Decode the samples into a `[frame][y][x]` pixel array.
    pub fn decode<F>(&self, progress: F) -> PixelSvgResult<PixelArray>
    where
        F: FnMut(&str),
    {
        decode(&self.samples, &self.shape, progress)
    }
}

/// Read PNG, GIF, or JPEG bytes into a sample buffer.
///
/// GIFs keep every frame with shape `[frames, width, height, 4]`. PNG and
/// JPEG images produce a single frame whose channel count follows the
/// decoded color type, converted to 8 bits per channel.
pub fn load_samples<F>(bytes: &[u8], mut progress: F) -> PixelSvgResult<SampleBuffer>
where
    F: FnMut(&str),
{
    let kind = ImageKind::sniff(bytes)?;
    progress(&format!("input image type is {}", kind.mime_type()));
    match kind {
        ImageKind::Gif => load_animation(bytes),
        still => {
            let image = image::load_from_memory_with_format(bytes, still.format())?;
            Ok(still_samples(image))
        }
    }
}

fn load_animation(bytes: &[u8]) -> PixelSvgResult<SampleBuffer> {
    let decoder = GifDecoder::new(Cursor::new(bytes))?;
    let frames = decoder.into_frames().collect_frames()?;
    let (width, height) = frames
        .first()
        .map_or((0, 0), |frame| frame.buffer().dimensions());

    let mut samples = Vec::with_capacity(frames.len() * width as usize * height as usize * 4);
    for frame in &frames {
        samples.extend_from_slice(frame.buffer().as_raw());
    }
    Ok(SampleBuffer {
        samples,
        shape: vec![frames.len(), width as usize, height as usize, 4],
    })
}

fn still_samples(image: DynamicImage) -> SampleBuffer {
    let (width, height) = (image.width() as usize, image.height() as usize);
    let channels = image.color().channel_count();
    let samples = match channels {
        1 => image.into_luma8().into_raw(),
        2 => image.into_luma_alpha8().into_raw(),
        3 => image.into_rgb8().into_raw(),
        _ => image.into_rgba8().into_raw(),
    };
    SampleBuffer {
        samples,
        shape: vec![width, height, usize::from(channels.min(4))],
    }
}
