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

use core::array::TryFromSliceError;
use core::str::Utf8Error;
use std::error::Error;
use std::fmt;

/// Error raised by the parser while walking the elements of a DICOM buffer.
#[derive(Debug)]
pub struct DicomError {
  pub details: String,
}

impl DicomError {
  pub fn new(msg: &str) -> DicomError {
    DicomError {
      details: msg.to_string(),
    }
  }
}

impl fmt::Display for DicomError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    write!(f, "{}", self.details)
  }
}

impl Error for DicomError {}

impl From<Utf8Error> for DicomError {
  fn from(err: Utf8Error) -> Self {
    match err.error_len() {
      Some(l) => DicomError::new(&format!(
        "UTF8 error: an unexpected byte was encountered at {}",
        l
      )),
      None => DicomError::new("UTF8 error: the end of the input was reached unexpectedly"),
    }
  }
}

impl From<TryFromSliceError> for DicomError {
  fn from(err: TryFromSliceError) -> Self {
    DicomError::new(&format!("{}", err))
  }
}

impl From<&str> for DicomError {
  fn from(err: &str) -> Self {
    DicomError::new(err)
  }
}

/// Error returned by [`crate::decoder::decode`]. Every variant is terminal
/// for the call: no partial bitmap is produced.
#[derive(Debug)]
pub enum DecodeError {
  /// The buffer is not a structurally valid DICOM file.
  MalformedInput(DicomError),
  /// The dataset parsed but has no top level Pixel Data (7FE0,0010) element.
  MissingPixelData,
  /// The transfer syntax stores pixels in a form that cannot be read as raw
  /// 16 bits samples (deflated dataset, JPEG, RLE, ...).
  UnsupportedTransferSyntax(String),
}

impl fmt::Display for DecodeError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      DecodeError::MalformedInput(err) => write!(f, "malformed DICOM input: {}", err),
      DecodeError::MissingPixelData => write!(f, "no pixel data found in DICOM file"),
      DecodeError::UnsupportedTransferSyntax(uid) => {
        write!(f, "unsupported transfer syntax: {}", uid)
      }
    }
  }
}

impl Error for DecodeError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      DecodeError::MalformedInput(err) => Some(err),
      _ => None,
    }
  }
}

impl From<DicomError> for DecodeError {
  fn from(err: DicomError) -> Self {
    DecodeError::MalformedInput(err)
  }
}

/// Error recorded for a file the slice stack loader had to skip.
#[derive(Debug)]
pub enum LoadError {
  Io(std::io::Error),
  Decode(DecodeError),
}

impl fmt::Display for LoadError {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      LoadError::Io(err) => write!(f, "{}", err),
      LoadError::Decode(err) => write!(f, "{}", err),
    }
  }
}

impl Error for LoadError {
  fn source(&self) -> Option<&(dyn Error + 'static)> {
    match self {
      LoadError::Io(err) => Some(err),
      LoadError::Decode(err) => Some(err),
    }
  }
}

impl From<std::io::Error> for LoadError {
  fn from(err: std::io::Error) -> Self {
    LoadError::Io(err)
  }
}

impl From<DecodeError> for LoadError {
  fn from(err: DecodeError) -> Self {
    LoadError::Decode(err)
  }
}
