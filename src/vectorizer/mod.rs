use crate::PixelSvgResult;
use crate::pixel::Pixel;

/// A trait representing an algorithm that can turn one frame of pixels into a vector representation.
pub trait FrameVectorizer {
    type Options;
    type Output;

    fn vectorize(
        &self,
        frame: &[Vec<Pixel>],
        options: &Self::Options,
        progress: &mut dyn FnMut(&str),
    ) -> PixelSvgResult<Self::Output>;
}

pub mod run_length;
