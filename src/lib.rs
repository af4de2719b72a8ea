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

//! Decode single frame DICOM slices into 8 bits grayscale RGBA bitmaps with a
//! contrast window taken from the 5th and 95th percentiles of the pixel data.
//!
//! ```no_run
//! let bytes = std::fs::read("slice.dcm").unwrap();
//! let (bitmap, metadata) = dicomslice::decode(&bytes).unwrap();
//! println!("{} {}x{} ({} bytes)", metadata.sop_instance_uid, metadata.cols, metadata.rows,
//!   bitmap.data.len());
//! ```

pub mod bitmap;
pub mod dataset;
pub mod decoder;
pub mod dicom_tags;
pub mod error;
pub mod instance;
pub mod misc;
pub mod stack;
pub mod tags;
pub mod window;

pub use bitmap::{Bitmap, Metadata};
pub use decoder::{decode, decode_buffer, decode_with};
pub use error::{DecodeError, DicomError, LoadError};
pub use stack::{collect_dicom_files, load_stack, SliceStack, StackOptions};
pub use window::{Window, WindowOptions};
