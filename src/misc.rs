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

use core::str::from_utf8;

/// Length of the Part 10 preamble (128 bytes) followed by the "DICM" magic.
pub const PREAMBLE_LENGTH: usize = 128 + 4;

pub fn has_dicom_header(buffer: &[u8]) -> bool {
  buffer.len() >= PREAMBLE_LENGTH && from_utf8(&buffer[0x80..PREAMBLE_LENGTH]) == Ok("DICM")
}

/**
 * Check if a file content is a DICOM file.
 * Imperfect heuristic for now.
 */
pub fn is_dicom(buffer: &[u8]) -> bool {
  has_dicom_header(buffer)
}
