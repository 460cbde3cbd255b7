pub mod config;
pub mod decoder;
pub mod error;
pub mod loader;
pub mod pixel;
pub mod trim;
pub mod vectorizer;

pub use config::EncodeOptions;
pub use decoder::{Frame, PixelArray, SampleShape, decode};
pub use error::{PixelSvgError, PixelSvgResult};
pub use loader::{ImageKind, SampleBuffer, load_samples};
pub use pixel::Pixel;
pub use trim::Trim;
pub use vectorizer::FrameVectorizer;
pub use vectorizer::run_length::{RunLengthSvg, encode};

/// Decoded frames of an image, ready to be converted frame by frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    frames: PixelArray,
}

impl Raster {
    /// Sniff, load, and decode PNG, GIF, or JPEG bytes.
    pub fn from_bytes<F>(bytes: &[u8], mut progress: F) -> PixelSvgResult<Self>
    where
        F: FnMut(&str),
    {
        let buffer = load_samples(bytes, &mut progress)?;
        let frames = buffer.decode(&mut progress)?;
        Ok(Self { frames })
    }

    /// Wrap an already decoded pixel array.
    pub fn from_pixels(frames: PixelArray) -> Self {
        Self { frames }
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Get the frame at `index`.
    pub fn frame(&self, index: usize) -> PixelSvgResult<&Frame> {
        self.frames
            .get(index)
            .ok_or(PixelSvgError::FrameOutOfRange {
                index,
                frames: self.frames.len(),
            })
    }

    /// Encode the frame at `index` as SVG.
    pub fn to_svg<F>(&self, index: usize, options: &EncodeOptions, progress: F) -> PixelSvgResult<String>
    where
        F: FnMut(&str),
    {
        encode(self.frame(index)?, options, progress)
    }

    /// Encode the frame at `index` with any vectorizer.
    pub fn vectorize<V>(
        &self,
        index: usize,
        vectorizer: &V,
        options: &V::Options,
        progress: &mut dyn FnMut(&str),
    ) -> PixelSvgResult<V::Output>
    where
        V: FrameVectorizer,
    {
        vectorizer.vectorize(self.frame(index)?, options, progress)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_frames() -> Raster {
        let samples = [255, 0, 0, 255, 0, 0, 0, 0, 0, 0, 255, 255, 0, 0, 255, 255];
        Raster::from_pixels(decode(&samples, &[2, 2, 1, 4], |_| {}).unwrap())
    }

    #[test]
    fn frame_selection_is_checked() {
        let raster = two_frames();
        assert_eq!(raster.frame_count(), 2);
        assert!(raster.frame(1).is_ok());
        match raster.frame(2).unwrap_err() {
            PixelSvgError::FrameOutOfRange { index, frames } => assert_eq!((index, frames), (2, 2)),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn to_svg_encodes_selected_frame() {
        let raster = two_frames();
        let options = EncodeOptions::default().with_metadata(false).with_trim_alpha(true);
        let first = raster.to_svg(0, &options, |_| {}).unwrap();
        let second = raster.to_svg(1, &options, |_| {}).unwrap();
        assert!(first.contains("stroke=\"#ff0000\" d=\"M0,0h1\""));
        assert!(first.contains("width=\"1\""));
        assert!(second.contains("stroke=\"#0000ff\" d=\"M0,0h2\""));
        assert!(second.contains("width=\"2\""));
    }

    #[test]
    fn vectorize_uses_given_vectorizer() {
        let raster = two_frames();
        let options = EncodeOptions::default();
        let svg = raster
            .vectorize(1, &RunLengthSvg, &options, &mut |_| {})
            .unwrap();
        assert_eq!(svg, raster.to_svg(1, &options, |_| {}).unwrap());
    }
}
