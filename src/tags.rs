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

use crate::error::DicomError;

#[derive(Debug, Clone, PartialEq)]
pub struct Tag {
  pub group: u16,
  pub element: u16,
  pub name: &'static str,
  pub vr: &'static str,
  pub vm: std::ops::Range<u16>,
  pub description: &'static str,
}

impl Tag {
  /// Synthetic entry for a group/element pair absent from the dictionary.
  pub fn unknown(group: u16, element: u16) -> Tag {
    Tag {
      group,
      element,
      name: "Unknown Tag & Data",
      vr: "UN",
      vm: std::ops::Range { start: 0, end: 0 },
      description: "Unknown Tag & Data",
    }
  }

  /// The tag as a 32 bits identifier (e.g.: 0x7FE00010)
  pub fn id(&self) -> u32 {
    ((self.group as u32) << 16) | self.element as u32
  }

  pub fn matches(&self, group: u16, element: u16) -> bool {
    self.group == group && self.element == element
  }
}

impl TryFrom<u32> for Tag {
  type Error = DicomError;

  fn try_from(id: u32) -> Result<Self, Self::Error> {
    let group = (id >> 16) as u16;
    let element = (id & 0xFFFF) as u16;
    crate::dicom_tags::DICTIONARY
      .iter()
      .find(|tag| tag.matches(group, element))
      .cloned()
      .ok_or_else(|| DicomError::new(&format!("Unknown tag ({:04x},{:04x})", group, element)))
  }
}
