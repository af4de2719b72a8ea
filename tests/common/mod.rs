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

#![allow(dead_code)]

//! Writes small synthetic Part 10 files for the tests.

pub const IMPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2";
pub const EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1";
pub const EXPLICIT_VR_BIG_ENDIAN: &str = "1.2.840.10008.1.2.2";
pub const DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN: &str = "1.2.840.10008.1.2.1.99";
pub const JPEG_BASELINE: &str = "1.2.840.10008.1.2.4.50";

const LONG_LENGTH_VRS: [&str; 6] = ["OB", "OW", "SQ", "UN", "UT", "UC"];

pub struct DicomBuilder {
  transfer_syntax: Option<String>,
  implicit: bool,
  big_endian: bool,
  body: Vec<u8>,
}

fn pad(value: &[u8], with: u8) -> Vec<u8> {
  let mut value = value.to_vec();
  if value.len() % 2 == 1 {
    value.push(with);
  }
  value
}

impl DicomBuilder {
  pub fn new(transfer_syntax: &str) -> Self {
    DicomBuilder {
      transfer_syntax: Some(transfer_syntax.to_string()),
      implicit: transfer_syntax == IMPLICIT_VR_LITTLE_ENDIAN,
      big_endian: transfer_syntax == EXPLICIT_VR_BIG_ENDIAN,
      body: vec![],
    }
  }

  pub fn explicit_little_endian() -> Self {
    DicomBuilder::new(EXPLICIT_VR_LITTLE_ENDIAN)
  }

  pub fn without_transfer_syntax(mut self) -> Self {
    self.transfer_syntax = None;
    self
  }

  fn u16(&self, value: u16) -> [u8; 2] {
    if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() }
  }

  fn u32(&self, value: u32) -> [u8; 4] {
    if self.big_endian { value.to_be_bytes() } else { value.to_le_bytes() }
  }

  fn tag(&self, out: &mut Vec<u8>, group: u16, element: u16) {
    out.extend_from_slice(&self.u16(group));
    out.extend_from_slice(&self.u16(element));
  }

  fn header(&self, out: &mut Vec<u8>, group: u16, element: u16, vr: &str, length: u32) {
    self.tag(out, group, element);
    if self.implicit {
      out.extend_from_slice(&self.u32(length));
    } else if LONG_LENGTH_VRS.contains(&vr) {
      out.extend_from_slice(vr.as_bytes());
      out.extend_from_slice(&[0, 0]);
      out.extend_from_slice(&self.u32(length));
    } else {
      out.extend_from_slice(vr.as_bytes());
      out.extend_from_slice(&self.u16(length as u16));
    }
  }

  /// Encoded bytes of a single element, padded to an even length.
  pub fn encode(&self, group: u16, element: u16, vr: &str, value: &[u8]) -> Vec<u8> {
    let value = pad(value, 0);
    let mut out = vec![];
    self.header(&mut out, group, element, vr, value.len() as u32);
    out.extend_from_slice(&value);
    out
  }

  pub fn element(mut self, group: u16, element: u16, vr: &str, value: &[u8]) -> Self {
    let encoded = self.encode(group, element, vr, value);
    self.body.extend_from_slice(&encoded);
    self
  }

  pub fn us(self, group: u16, element: u16, value: u16) -> Self {
    let bytes = self.u16(value);
    self.element(group, element, "US", &bytes)
  }

  pub fn rows(self, rows: u16) -> Self {
    self.us(0x0028, 0x0010, rows)
  }

  pub fn columns(self, columns: u16) -> Self {
    self.us(0x0028, 0x0011, columns)
  }

  pub fn sop_instance_uid(self, uid: &str) -> Self {
    self.element(0x0008, 0x0018, "UI", uid.as_bytes())
  }

  pub fn patient_name(self, name: &str) -> Self {
    let value = pad(name.as_bytes(), b' ');
    self.element(0x0010, 0x0010, "PN", &value)
  }

  pub fn pixel_data(self, samples: &[u16]) -> Self {
    let bytes: Vec<u8> = samples.iter().flat_map(|sample| self.u16(*sample)).collect();
    self.element(0x7FE0, 0x0010, "OW", &bytes)
  }

  /// A sequence of undefined length whose items are also of undefined length.
  pub fn sequence(mut self, group: u16, element: u16, items: &[Vec<u8>]) -> Self {
    let mut out = vec![];
    self.header(&mut out, group, element, "SQ", 0xFFFFFFFF);
    for item in items {
      self.tag(&mut out, 0xFFFE, 0xE000);
      out.extend_from_slice(&self.u32(0xFFFFFFFF));
      out.extend_from_slice(item);
      self.tag(&mut out, 0xFFFE, 0xE00D);
      out.extend_from_slice(&self.u32(0));
    }
    self.tag(&mut out, 0xFFFE, 0xE0DD);
    out.extend_from_slice(&self.u32(0));
    self.body.extend_from_slice(&out);
    self
  }

  pub fn raw(mut self, bytes: &[u8]) -> Self {
    self.body.extend_from_slice(bytes);
    self
  }

  pub fn build(&self) -> Vec<u8> {
    // The file meta information is always explicit VR little endian
    let mut meta = vec![];
    if let Some(transfer_syntax) = &self.transfer_syntax {
      let uid = pad(transfer_syntax.as_bytes(), 0);
      meta.extend_from_slice(&[0x02, 0x00, 0x10, 0x00]);
      meta.extend_from_slice(b"UI");
      meta.extend_from_slice(&(uid.len() as u16).to_le_bytes());
      meta.extend_from_slice(&uid);
    }
    let mut out = vec![0u8; 128];
    out.extend_from_slice(b"DICM");
    out.extend_from_slice(&[0x02, 0x00, 0x00, 0x00]);
    out.extend_from_slice(b"UL");
    out.extend_from_slice(&4u16.to_le_bytes());
    out.extend_from_slice(&(meta.len() as u32).to_le_bytes());
    out.extend_from_slice(&meta);
    out.extend_from_slice(&self.body);
    out
  }
}

/// A complete `rows x columns` slice with the given samples.
pub fn slice(transfer_syntax: &str, rows: u16, columns: u16, uid: &str, samples: &[u16]) -> Vec<u8> {
  DicomBuilder::new(transfer_syntax)
    .sop_instance_uid(uid)
    .rows(rows)
    .columns(columns)
    .pixel_data(samples)
    .build()
}
