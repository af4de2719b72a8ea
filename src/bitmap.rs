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

use std::collections::TryReserveError;

/// 8 bits RGBA image, row-major, 4 bytes per pixel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bitmap {
  pub width: u32,
  pub height: u32,
  pub data: Vec<u8>,
}

impl Bitmap {
  /// A fully transparent black bitmap. The buffer is reserved up front so an
  /// oversized request fails instead of aborting.
  pub fn new(width: u32, height: u32) -> Result<Bitmap, TryReserveError> {
    let size = width as usize * height as usize * 4;
    let mut data = Vec::new();
    data.try_reserve_exact(size)?;
    data.resize(size, 0);
    Ok(Bitmap { width, height, data })
  }

  /// Build a grayscale bitmap from raster ordered samples. Samples beyond
  /// `width * height` are ignored, missing ones leave the pixel transparent.
  pub fn from_gray_samples<F>(width: u32, height: u32, samples: &[u16], to_gray: F)
    -> Result<Bitmap, TryReserveError>
    where F: Fn(u16) -> u8 {
    let mut bitmap = Bitmap::new(width, height)?;
    for (pixel, &sample) in bitmap.data.chunks_exact_mut(4).zip(samples) {
      let gray = to_gray(sample);
      pixel.copy_from_slice(&[gray, gray, gray, 255]);
    }
    Ok(bitmap)
  }

  pub fn pixel_count(&self) -> usize {
    self.width as usize * self.height as usize
  }

  pub fn is_empty(&self) -> bool {
    self.pixel_count() == 0
  }

  pub fn pixel(&self, x: u32, y: u32) -> Option<[u8; 4]> {
    if x >= self.width || y >= self.height {
      return None;
    }
    let index = (y as usize * self.width as usize + x as usize) * 4;
    self.data[index..index + 4].try_into().ok()
  }

  /// Red channel of every pixel, which is the gray level for decoded slices.
  pub fn gray_levels(&self) -> impl Iterator<Item = u8> + '_ {
    self.data.chunks_exact(4).map(|pixel| pixel[0])
  }
}

/// Identifying information returned alongside a decoded bitmap.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Metadata {
  /// SOP Instance UID, empty when the file has none
  pub sop_instance_uid: String,
  pub rows: u16,
  pub cols: u16,
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn replicates_gray_and_sets_alpha() {
    let bitmap = Bitmap::from_gray_samples(2, 1, &[1, 2], |v| (v * 10) as u8).unwrap();
    assert_eq!(bitmap.data, vec![10, 10, 10, 255, 20, 20, 20, 255]);
    assert_eq!(bitmap.pixel(1, 0), Some([20, 20, 20, 255]));
    assert_eq!(bitmap.pixel(2, 0), None);
  }

  #[test]
  fn missing_samples_stay_transparent() {
    let bitmap = Bitmap::from_gray_samples(2, 2, &[5], |v| v as u8).unwrap();
    assert_eq!(bitmap.pixel(0, 0), Some([5, 5, 5, 255]));
    assert_eq!(bitmap.pixel(1, 1), Some([0, 0, 0, 0]));
  }

  #[test]
  fn extra_samples_are_dropped() {
    let bitmap = Bitmap::from_gray_samples(1, 1, &[1, 2, 3], |v| v as u8).unwrap();
    assert_eq!(bitmap.data.len(), 4);
    assert_eq!(bitmap.gray_levels().collect::<Vec<_>>(), vec![1]);
  }

  #[test]
  fn zero_sized_bitmap_is_empty() {
    assert!(Bitmap::from_gray_samples(0, 0, &[1, 2], |v| v as u8).unwrap().is_empty());
  }

  #[test]
  fn new_bitmap_is_transparent_black() {
    let bitmap = Bitmap::new(3, 2).unwrap();
    assert_eq!(bitmap.data, vec![0; 24]);
  }
}
