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
use std::fs::{create_dir_all, metadata, File};
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::Serialize;
use structopt::StructOpt;

use dicomslice::{collect_dicom_files, load_stack, SliceStack};

mod config;
mod config_file;
mod logging;

use crate::config::Config;
use crate::config_file::{get_config, ConfigProvenance};

const DEFAULT_CONFIG: &str = include_str!("../config.yaml");

fn path_is_folder(path: &str) -> Result<PathBuf, Box<dyn Error>> {
  let path_buf = PathBuf::from(path);
  if !path_buf.exists() {
    return Err(format!("{} does not exists", path).into());
  }
  if !metadata(path)?.is_dir() {
    return Err(format!("{} is not a folder", path).into());
  }
  Ok(path_buf)
}

#[derive(Debug, StructOpt)]
/// Decode a sampled stack of DICOM slices from a folder into PNG files
struct Opt {
  /// YAML configuration (sample_rate, window, log_level)
  #[structopt(short, long)]
  config: Option<PathBuf>,
  /// Folder containing the .dcm files
  #[structopt(parse(try_from_str = path_is_folder))]
  input_path: PathBuf,
  /// Where to write the PNG files and the manifest
  #[structopt(short, long, default_value = "slices")]
  output_path: PathBuf,
  /// Override the configured sample rate
  #[structopt(short, long)]
  sample_rate: Option<usize>,
}

#[derive(Serialize)]
struct ManifestSlice {
  index: usize,
  image: String,
  source: String,
  sop_instance_uid: String,
  rows: u16,
  cols: u16,
}

#[derive(Serialize)]
struct ManifestSkipped {
  source: String,
  error: String,
}

#[derive(Serialize)]
struct Manifest {
  slices: Vec<ManifestSlice>,
  skipped: Vec<ManifestSkipped>,
}

fn write_stack(stack: SliceStack, output_path: &Path) -> Result<Manifest, Box<dyn Error>> {
  let mut manifest = Manifest { slices: vec![], skipped: vec![] };
  for slice in stack.slices {
    let source = slice.path.to_string_lossy().to_string();
    if slice.bitmap.is_empty() {
      warn!("{} has no displayable image, skipping", slice.path.display());
      manifest.skipped.push(ManifestSkipped {
        source,
        error: format!("no displayable image ({}x{})", slice.metadata.cols, slice.metadata.rows),
      });
      continue;
    }
    // Images are numbered contiguously, in stack order
    let index = manifest.slices.len();
    let image_name = format!("{:04}.png", index);
    let image = image::RgbaImage::from_raw(slice.bitmap.width, slice.bitmap.height, slice.bitmap.data)
      .ok_or("bitmap buffer does not match its dimensions")?;
    image.save(output_path.join(&image_name))?;
    manifest.slices.push(ManifestSlice {
      index,
      image: image_name,
      source,
      sop_instance_uid: slice.metadata.sop_instance_uid,
      rows: slice.metadata.rows,
      cols: slice.metadata.cols,
    });
  }
  manifest.skipped.extend(stack.skipped.into_iter()
    .map(|skipped| ManifestSkipped {
      source: skipped.path.to_string_lossy().to_string(),
      error: skipped.error.to_string(),
    }));
  Ok(manifest)
}

fn main() -> Result<(), Box<dyn Error>> {
  // Retrieve options
  let opt = Opt::from_args();
  // Load the config
  let config_access = get_config(&opt.config, DEFAULT_CONFIG)?;
  let config: Config = serde_yaml::from_str(&config_access.content)?;
  logging::init(&config.log_level)?;
  match &config_access.provenance {
    ConfigProvenance::Default => info!("using the embedded default configuration"),
    ConfigProvenance::XdgPath(path) | ConfigProvenance::CustomPath(path) => {
      info!("using configuration from {}", path.display())
    }
  }

  let mut options = config.stack_options()?;
  if let Some(sample_rate) = opt.sample_rate {
    options.sample_rate = sample_rate;
  }

  let files = collect_dicom_files(&opt.input_path)?;
  info!("{} DICOM files found in {}", files.len(), opt.input_path.display());
  let stack = load_stack(&files, &options);

  create_dir_all(&opt.output_path)?;
  let manifest = write_stack(stack, &opt.output_path)?;
  let manifest_path = opt.output_path.join("manifest.json");
  serde_json::to_writer_pretty(File::create(&manifest_path)?, &manifest)?;
  println!("{} slices written to {} ({} files skipped)",
    manifest.slices.len(), opt.output_path.display(), manifest.skipped.len());
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;
  use dicomslice::{Bitmap, LoadError, Metadata, DecodeError};
  use dicomslice::stack::{SkippedFile, Slice};

  fn slice(name: &str, width: u32, height: u32) -> Slice {
    Slice {
      path: PathBuf::from(name),
      bitmap: Bitmap::new(width, height).unwrap(),
      metadata: Metadata { sop_instance_uid: name.to_string(), rows: height as u16, cols: width as u16 },
    }
  }

  #[test]
  fn empty_slices_are_skipped_without_gaps_in_the_numbering() {
    let output = tempfile::tempdir().unwrap();
    let stack = SliceStack {
      slices: vec![slice("a.dcm", 2, 2), slice("b.dcm", 0, 0), slice("c.dcm", 1, 3)],
      skipped: vec![SkippedFile {
        path: PathBuf::from("d.dcm"),
        error: LoadError::Decode(DecodeError::MissingPixelData),
      }],
    };

    let manifest = write_stack(stack, output.path()).unwrap();

    let images: Vec<_> = manifest.slices.iter().map(|s| (s.index, s.image.as_str())).collect();
    assert_eq!(images, vec![(0, "0000.png"), (1, "0001.png")]);
    assert_eq!(manifest.slices[1].source, "c.dcm");
    assert!(output.path().join("0000.png").exists());
    assert!(output.path().join("0001.png").exists());
    assert!(!output.path().join("0002.png").exists());
    let skipped: Vec<_> = manifest.skipped.iter().map(|s| s.source.as_str()).collect();
    assert_eq!(skipped, vec!["b.dcm", "d.dcm"]);
    assert_eq!(manifest.skipped[0].error, "no displayable image (0x0)");
  }
}
