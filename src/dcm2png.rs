// Copyright (c) 2023 Jean-Daniel Michaud
//
// Permission is hereby granted, free of charge, to any person obtaining a copy
// of this software and associated documentation files (the "Software"), to deal
// in the Software without restriction, including without limitation the rights
// to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
// copies of the Software, and to permit persons to whom the Software is
// furnished to do so, subject to the following conditions:
//
// The above copyright notice and this permission notice shall be included in all
// copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
// IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
// FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
// AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
// LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
// OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
// SOFTWARE.

use std::error::Error;
use std::path::PathBuf;

use log::info;
use structopt::StructOpt;

use dicomslice::error::DicomError;
use dicomslice::misc::is_dicom;
use dicomslice::{decode_buffer, WindowOptions};

mod logging;

#[derive(Debug, StructOpt)]
/// Decode a DICOM slice and save it as a windowed grayscale PNG
struct Opt {
  /// DICOM input file
  filepath: PathBuf,
  /// PNG output file (defaults to the input path with a .png extension)
  #[structopt(short, long)]
  output: Option<PathBuf>,
  /// Percentile of the pixel values mapped to black
  #[structopt(long, default_value = "0.05")]
  low_percentile: f64,
  /// Percentile of the pixel values mapped to white
  #[structopt(long, default_value = "0.95")]
  high_percentile: f64,
  /// Log the parsing and windowing decisions
  #[structopt(short, long)]
  verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
  let opt = Opt::from_args();
  logging::init(if opt.verbose { "debug" } else { "info" })?;

  let options = WindowOptions {
    low_percentile: opt.low_percentile,
    high_percentile: opt.high_percentile,
  };
  options.validate()?;

  let buffer = std::fs::read(&opt.filepath)?;
  if !is_dicom(&buffer) {
    return Err(Box::new(DicomError::new(&format!(
      "{} is not a dicom file",
      opt.filepath.display()
    ))));
  }
  let (bitmap, metadata) = decode_buffer(buffer, &options)?;
  if bitmap.is_empty() {
    return Err(format!("{} has no displayable image ({}x{})",
      opt.filepath.display(), metadata.cols, metadata.rows).into());
  }

  let output = opt.output.unwrap_or_else(|| opt.filepath.with_extension("png"));
  let image = image::RgbaImage::from_raw(bitmap.width, bitmap.height, bitmap.data)
    .ok_or("bitmap buffer does not match its dimensions")?;
  image.save(&output)?;
  info!("wrote {}", output.display());

  println!("SOPInstanceUID: {}", metadata.sop_instance_uid);
  println!("Rows: {}", metadata.rows);
  println!("Columns: {}", metadata.cols);
  Ok(())
}
