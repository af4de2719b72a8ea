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

use serde::Deserialize;

use dicomslice::{StackOptions, WindowOptions};

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Window {
  pub low_percentile: f64,
  pub high_percentile: f64,
}

impl Default for Window {
  fn default() -> Self {
    let options = WindowOptions::default();
    Window { low_percentile: options.low_percentile, high_percentile: options.high_percentile }
  }
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default)]
pub struct Config {
  pub sample_rate: usize,
  pub window: Window,
  pub log_level: String,
}

impl Default for Config {
  fn default() -> Self {
    Config {
      sample_rate: dicomslice::stack::DEFAULT_SAMPLE_RATE,
      window: Window::default(),
      log_level: String::from("info"),
    }
  }
}

impl Config {
  pub fn stack_options(&self) -> Result<StackOptions, String> {
    let window = WindowOptions {
      low_percentile: self.window.low_percentile,
      high_percentile: self.window.high_percentile,
    };
    window.validate()?;
    Ok(StackOptions { sample_rate: self.sample_rate, window })
  }
}
