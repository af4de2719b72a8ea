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

//! Decode a single frame DICOM file into a displayable grayscale bitmap.

use log::debug;

use crate::bitmap::{Bitmap, Metadata};
use crate::dataset::SliceFields;
use crate::error::{DecodeError, DicomError};
use crate::instance::Instance;
use crate::window::{Window, WindowOptions};

/// Largest image, in pixels, that is padded with transparent pixels when the
/// pixel data holds fewer samples than Rows x Columns.
pub const MAX_PADDED_PIXELS: usize = 1 << 26;

/// Decode with the default 5th/95th percentile window.
pub fn decode(bytes: &[u8]) -> Result<(Bitmap, Metadata), DecodeError> {
  decode_with(bytes, &WindowOptions::default())
}

/// Parse `bytes`, window the 16 bits pixel data on the percentiles given by
/// `options` and return an RGBA bitmap of `columns x rows` pixels.
///
/// Missing Rows, Columns or SOP Instance UID are not errors: they default to
/// 0, 0 and "". A 0x0 result means there is nothing to display.
pub fn decode_with(bytes: &[u8], options: &WindowOptions) -> Result<(Bitmap, Metadata), DecodeError> {
  decode_buffer(bytes.to_vec(), options)
}

/// Same as [`decode_with`] for callers that already own the file content.
pub fn decode_buffer(buffer: Vec<u8>, options: &WindowOptions) -> Result<(Bitmap, Metadata), DecodeError> {
  let instance = Instance::from(buffer)?;
  if !instance.transfer_syntax.has_native_pixel_data() {
    return Err(DecodeError::UnsupportedTransferSyntax(instance.transfer_syntax.to_string()));
  }

  let fields = SliceFields::collect(&instance)?;
  let pixel_data = fields.pixel_data.ok_or(DecodeError::MissingPixelData)?;
  let samples = pixel_data.samples(&instance)?;

  // Rows and Columns are not trusted to size a buffer the samples cannot fill
  let pixel_count = fields.rows as usize * fields.columns as usize;
  if pixel_count > samples.len() && pixel_count > MAX_PADDED_PIXELS {
    return Err(DecodeError::MalformedInput(DicomError::new(&format!(
      "{}x{} image declared for {} samples", fields.columns, fields.rows, samples.len()))));
  }

  let window = Window::from_samples(&samples, options);
  let bitmap = Bitmap::from_gray_samples(
    fields.columns as u32,
    fields.rows as u32,
    &samples,
    |sample| window.gray(sample),
  ).map_err(|err| DicomError::new(&format!(
    "cannot allocate a {}x{} image: {}", fields.columns, fields.rows, err)))?;
  if samples.len() != bitmap.pixel_count() {
    debug!("{} samples for a {}x{} image", samples.len(), fields.columns, fields.rows);
  }

  let metadata = Metadata {
    sop_instance_uid: fields.sop_instance_uid,
    rows: fields.rows,
    cols: fields.columns,
  };
  Ok((bitmap, metadata))
}
