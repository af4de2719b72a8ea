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

//! Load an ordered stack of slices from a folder of DICOM files.
//!
//! Only every `sample_rate`-th file is decoded. Files that cannot be read or
//! decoded are logged and skipped, the remaining slices keep their order.

use std::path::{Path, PathBuf};

use log::{error, info};
use walkdir::WalkDir;

use crate::bitmap::{Bitmap, Metadata};
use crate::decoder::decode_buffer;
use crate::error::LoadError;
use crate::window::WindowOptions;

pub const DEFAULT_SAMPLE_RATE: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StackOptions {
  /// Keep one file out of `sample_rate`. 0 is treated as 1.
  pub sample_rate: usize,
  pub window: WindowOptions,
}

impl Default for StackOptions {
  fn default() -> Self {
    StackOptions { sample_rate: DEFAULT_SAMPLE_RATE, window: WindowOptions::default() }
  }
}

#[derive(Debug)]
pub struct Slice {
  pub path: PathBuf,
  pub bitmap: Bitmap,
  pub metadata: Metadata,
}

#[derive(Debug)]
pub struct SkippedFile {
  pub path: PathBuf,
  pub error: LoadError,
}

#[derive(Debug, Default)]
pub struct SliceStack {
  /// Decoded slices, in the order of the input paths
  pub slices: Vec<Slice>,
  pub skipped: Vec<SkippedFile>,
}

/// Keep the paths whose index is a multiple of `sample_rate`.
pub fn sample_paths<P: AsRef<Path>>(paths: &[P], sample_rate: usize) -> Vec<&Path> {
  let sample_rate = sample_rate.max(1);
  paths.iter()
    .enumerate()
    .filter(|(index, _)| index % sample_rate == 0)
    .map(|(_, path)| path.as_ref())
    .collect()
}

fn load_slice(path: &Path, window: &WindowOptions) -> Result<(Bitmap, Metadata), LoadError> {
  let buffer = std::fs::read(path)?;
  Ok(decode_buffer(buffer, window)?)
}

pub fn load_stack<P: AsRef<Path>>(paths: &[P], options: &StackOptions) -> SliceStack {
  let sampled = sample_paths(paths, options.sample_rate);
  let mut stack = SliceStack::default();
  for path in sampled.iter() {
    match load_slice(path, &options.window) {
      Ok((bitmap, metadata)) => stack.slices.push(Slice { path: path.to_path_buf(), bitmap, metadata }),
      Err(err) => {
        error!("Error loading DICOM {}: {}", path.display(), err);
        stack.skipped.push(SkippedFile { path: path.to_path_buf(), error: err });
      }
    }
  }
  info!("loaded {} slices out of {} sampled files ({} in total)",
    stack.slices.len(), sampled.len(), paths.len());
  stack
}

fn has_dcm_extension(path: &Path) -> bool {
  path.extension()
    .map(|extension| extension.eq_ignore_ascii_case("dcm"))
    .unwrap_or(false)
}

/// List the `.dcm` files directly inside `folder`, sorted by file name.
pub fn collect_dicom_files<P: AsRef<Path>>(folder: P) -> Result<Vec<PathBuf>, walkdir::Error> {
  let mut files = vec![];
  for entry in WalkDir::new(folder).min_depth(1).max_depth(1).sort_by_file_name() {
    let entry = entry?;
    if entry.file_type().is_file() && has_dcm_extension(entry.path()) {
      files.push(entry.into_path());
    }
  }
  Ok(files)
}
