use pixelsvg::{EncodeOptions, PixelSvgResult, Raster};

use crate::cli::Cli;
use crate::report::Status;

use super::utils::{read_input, write_output};

/// Read the input image, convert the selected frame, and write the SVG.
pub fn run(cli: &Cli, status: &Status) -> PixelSvgResult<()> {
    status.step("reading input");
    let bytes = read_input(cli.input.as_deref())?;

    status.step("parsing image");
    let raster = Raster::from_bytes(&bytes, |msg| status.detail(msg))?;

    status.step("generating SVG");
    let options = EncodeOptions::from(&cli.encode);
    let svg = raster.to_svg(cli.frame, &options, |msg| status.detail(msg))?;

    match cli.output.as_deref() {
        Some(path) => {
            status.step("writing file");
            write_output(Some(path), &svg)?;
            tracing::debug!(path = %path.display(), "SVG written");
        }
        None => {
            status.clear();
            write_output(None, &svg)?;
        }
    }
    Ok(())
}
