use std::io::Cursor;

use image::{DynamicImage, ImageFormat, Rgba, RgbaImage};
use pixelsvg::{EncodeOptions, Pixel, PixelSvgError, Raster, decode, encode, load_samples};

fn png_bytes(image: RgbaImage) -> Vec<u8> {
    let mut bytes = Vec::new();
    DynamicImage::ImageRgba8(image)
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
        .expect("failed to encode test png");
    bytes
}

/// A 4x3 sprite: transparent border column on the left, a red bar and a translucent blue dot.
fn sprite() -> RgbaImage {
    let mut image = RgbaImage::new(4, 3);
    for x in 1..4 {
        image.put_pixel(x, 1, Rgba([255, 0, 0, 255]));
    }
    image.put_pixel(2, 2, Rgba([0, 0, 255, 128]));
    image
}

#[test]
fn png_converts_to_trimmed_svg() {
    let raster = Raster::from_bytes(&png_bytes(sprite()), |_| {}).expect("png should load");
    let options = EncodeOptions::default()
        .with_metadata(false)
        .with_trim_alpha(true);

    let svg = raster.to_svg(0, &options, |_| {}).expect("frame should encode");
    assert_eq!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" shape-rendering=\"crispEdges\" \
         viewBox=\"0 -0.5 3 2\" width=\"3\" height=\"2\">\
         <path stroke=\"#ff0000\" d=\"M0,0h3\"/>\
         <path stroke=\"#0000ff\" opacity=\"0.5019607843137255\" d=\"M1,1h1\"/>\
         </svg>\n"
    );
}

#[test]
fn trim_caps_and_minimum_size_are_honoured() {
    let raster = Raster::from_bytes(&png_bytes(sprite()), |_| {}).expect("png should load");
    let options = EncodeOptions::default()
        .with_trim_alpha(true)
        .with_max_trims(Some(0), None, None, None)
        .with_min_size(0, 3);

    let svg = raster.to_svg(0, &options, |_| {}).expect("frame should encode");
    assert!(svg.contains("viewBox=\"0 -0.5 4 3\""));
    assert!(svg.contains("d=\"M1,1h3\""));
}

#[test]
fn progress_messages_cover_every_stage() {
    let mut messages = Vec::new();
    let raster = Raster::from_bytes(&png_bytes(sprite()), |msg| messages.push(msg.to_string()))
        .expect("png should load");
    raster
        .to_svg(0, &EncodeOptions::default(), |msg| messages.push(msg.to_string()))
        .expect("frame should encode");

    assert_eq!(
        messages,
        vec![
            "input image type is image/png",
            "input image dimensions: 4x3",
            "input image has 4 color channels",
            "input image has 2 distinct colors",
            "output image longest continuous color section: 3",
        ]
    );
}

#[test]
fn decode_then_encode_from_raw_samples() {
    let samples = [0, 255, 0, 255];
    let pixels = decode(&samples, &[2, 2, 1], |_| {}).expect("samples should decode");
    assert_eq!(pixels[0][0], vec![Pixel::gray(0), Pixel::gray(255)]);

    let svg = encode(&pixels[0], &EncodeOptions::default().with_metadata(false), |_| {})
        .expect("frame should encode");
    assert!(svg.contains("<path stroke=\"#000000\" d=\"M0,0h1M0,1h1\"/>"));
    assert!(svg.contains("<path stroke=\"#ffffff\" d=\"M1,0h1M1,1h1\"/>"));
}

#[test]
fn missing_frame_is_reported() {
    let buffer = load_samples(&png_bytes(sprite()), |_| {}).expect("png should load");
    let raster = Raster::from_pixels(buffer.decode(|_| {}).expect("samples should decode"));

    let err = raster
        .to_svg(3, &EncodeOptions::default(), |_| {})
        .expect_err("frame 3 does not exist");
    assert!(matches!(
        err,
        PixelSvgError::FrameOutOfRange {
            index: 3,
            frames: 1
        }
    ));
}
