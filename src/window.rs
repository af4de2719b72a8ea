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

//! Percentile based window/level.
//!
//! The window bounds are taken from the distribution of the samples rather
//! than from fixed presets so that a few saturated or noisy pixels do not
//! squash the rest of the image toward black or white.

use log::debug;

/// Which percentiles of the sample distribution delimit the window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowOptions {
  pub low_percentile: f64,
  pub high_percentile: f64,
}

impl Default for WindowOptions {
  fn default() -> Self {
    WindowOptions { low_percentile: 0.05, high_percentile: 0.95 }
  }
}

impl WindowOptions {
  pub fn validate(&self) -> Result<(), String> {
    let in_range = |p: f64| (0.0..=1.0).contains(&p);
    if !in_range(self.low_percentile) || !in_range(self.high_percentile) {
      return Err(format!("percentiles must be within [0, 1] (got {} and {})",
        self.low_percentile, self.high_percentile));
    }
    if self.low_percentile > self.high_percentile {
      return Err(format!("low percentile {} is above high percentile {}",
        self.low_percentile, self.high_percentile));
    }
    Ok(())
  }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Window {
  pub center: f64,
  /// Always >= 1
  pub width: f64,
}

impl Default for Window {
  fn default() -> Self {
    Window { center: 0.0, width: 1.0 }
  }
}

// Value at floor(p * N) in an ascending slice, clamped to the last index.
fn percentile(sorted: &[u16], p: f64) -> u16 {
  let index = (p.clamp(0.0, 1.0) * sorted.len() as f64).floor() as usize;
  sorted[index.min(sorted.len() - 1)]
}

impl Window {
  pub fn from_samples(samples: &[u16], options: &WindowOptions) -> Window {
    if samples.is_empty() {
      return Window::default();
    }
    let mut sorted = samples.to_vec();
    sorted.sort_unstable();
    let low = percentile(&sorted, options.low_percentile) as f64;
    let high = percentile(&sorted, options.high_percentile) as f64;
    let window = Window {
      center: (high + low) / 2.0,
      width: (high - low).max(1.0),
    };
    debug!("window from {} samples: p{}={} p{}={} center={} width={}",
      samples.len(), options.low_percentile * 100.0, low, options.high_percentile * 100.0, high,
      window.center, window.width);
    window
  }

  /// Linear window/level mapping to an 8 bits gray level.
  ///
  /// `((value - (center - 0.5)) / (width - 1) + 0.5) * 255`, clamped to
  /// [0, 255]. A width of 1 degenerates to a threshold at `center - 0.5`.
  pub fn gray(&self, value: u16) -> u8 {
    let value = value as f64;
    if self.width <= 1.0 {
      return if value <= self.center - 0.5 { 0 } else { 255 };
    }
    let gray = ((value - (self.center - 0.5)) / (self.width - 1.0) + 0.5) * 255.0;
    gray.clamp(0.0, 255.0).round_ties_even() as u8
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn percentiles_follow_floor_index() {
    let samples: Vec<u16> = (0..100).rev().collect();
    let window = Window::from_samples(&samples, &WindowOptions::default());
    // floor(0.05 * 100) = 5, floor(0.95 * 100) = 95
    assert_eq!(window.center, 50.0);
    assert_eq!(window.width, 90.0);
  }

  #[test]
  fn flat_image_gets_a_unit_width() {
    let window = Window::from_samples(&[42; 64], &WindowOptions::default());
    assert_eq!(window, Window { center: 42.0, width: 1.0 });
    assert_eq!(window.gray(42), 255);
    assert_eq!(window.gray(41), 0);
  }

  #[test]
  fn empty_samples_give_the_default_window() {
    assert_eq!(Window::from_samples(&[], &WindowOptions::default()), Window::default());
  }

  #[test]
  fn single_sample_uses_it_for_both_bounds() {
    let window = Window::from_samples(&[7], &WindowOptions::default());
    assert_eq!(window.center, 7.0);
    assert_eq!(window.width, 1.0);
  }

  #[test]
  fn full_range_percentile_is_clamped() {
    let options = WindowOptions { low_percentile: 0.0, high_percentile: 1.0 };
    let window = Window::from_samples(&[10, 20, 30], &options);
    assert_eq!(window.center, 20.0);
    assert_eq!(window.width, 20.0);
  }

  #[test]
  fn gray_clamps_outside_the_window() {
    let window = Window { center: 500.0, width: 800.0 };
    assert_eq!(window.gray(0), 0);
    assert_eq!(window.gray(100), 0);
    assert_eq!(window.gray(900), 255);
    assert_eq!(window.gray(u16::MAX), 255);
  }

  #[test]
  fn gray_is_monotonic_inside_the_window() {
    let window = Window { center: 1000.0, width: 300.0 };
    let mut previous = 0;
    for value in 850..=1150 {
      let gray = window.gray(value);
      assert!(gray >= previous, "gray({}) = {} < {}", value, gray, previous);
      previous = gray;
    }
  }

  #[test]
  fn gray_hits_mid_level_at_the_center() {
    let window = Window { center: 128.0, width: 256.0 };
    // ((128 - 127.5) / 255 + 0.5) * 255 = 128
    assert_eq!(window.gray(128), 128);
  }

  #[test]
  fn validate_rejects_inverted_or_out_of_range_percentiles() {
    assert!(WindowOptions::default().validate().is_ok());
    assert!(WindowOptions { low_percentile: 0.9, high_percentile: 0.1 }.validate().is_err());
    assert!(WindowOptions { low_percentile: -0.1, high_percentile: 0.5 }.validate().is_err());
    assert!(WindowOptions { low_percentile: 0.1, high_percentile: 1.5 }.validate().is_err());
  }
}
