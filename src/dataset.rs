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

//! The handful of fields the slice decoder needs, collected in a single walk
//! over the top level elements of an [`Instance`].

use crate::dicom_tags::{Columns, PixelData, Rows, SOPInstanceUID};
use crate::error::DicomError;
use crate::instance::{ByteOrder, DicomAttribute, DicomValue, Instance, UNDEFINED_LENGTH};

/// Location of the native pixel data inside the instance buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelDataRange {
  pub offset: usize,
  pub length: usize,
  pub byte_order: ByteOrder,
}

impl PixelDataRange {
  /// Number of 16 bits samples. A trailing odd byte is ignored.
  pub fn sample_count(&self) -> usize {
    self.length / 2
  }

  /// Reinterpret the pixel bytes as unsigned 16 bits samples.
  pub fn samples(&self, instance: &Instance) -> Result<Vec<u16>, DicomError> {
    let bytes = instance.slice(self.offset, self.sample_count() * 2)?;
    Ok(bytes.chunks_exact(2)
      .map(|pair| self.byte_order.u16_from([pair[0], pair[1]]))
      .collect())
  }
}

#[derive(Debug, Default, Clone, PartialEq)]
pub struct SliceFields {
  /// Rows (0028,0010), 0 when absent
  pub rows: u16,
  /// Columns (0028,0011), 0 when absent
  pub columns: u16,
  /// SOP Instance UID (0008,0018), empty when absent
  pub sop_instance_uid: String,
  pub pixel_data: Option<PixelDataRange>,
}

impl SliceFields {
  pub fn collect(instance: &Instance) -> Result<SliceFields, DicomError> {
    let mut fields = SliceFields::default();
    for attribute in instance.iter() {
      let attribute = attribute?;
      if attribute.is(&Rows) {
        fields.rows = read_u16(instance, &attribute)?;
      } else if attribute.is(&Columns) {
        fields.columns = read_u16(instance, &attribute)?;
      } else if attribute.is(&SOPInstanceUID) {
        fields.sop_instance_uid = DicomValue::from_dicom_attribute(&attribute, instance)?.to_string();
      } else if attribute.is(&PixelData) {
        if attribute.length == UNDEFINED_LENGTH {
          return Err(DicomError::new(&format!(
            "Encapsulated pixel data in a {} dataset", instance.transfer_syntax)));
        }
        fields.pixel_data = Some(PixelDataRange {
          offset: attribute.data_offset,
          length: attribute.data_length,
          byte_order: instance.byte_order_at(attribute.data_offset),
        });
      }
    }
    Ok(fields)
  }
}

// An empty value counts as absent.
fn read_u16(instance: &Instance, attribute: &DicomAttribute) -> Result<u16, DicomError> {
  if attribute.data_length < 2 {
    return Ok(0);
  }
  match DicomValue::from_dicom_attribute(attribute, instance)? {
    DicomValue::US(value) => Ok(value),
    DicomValue::SS(value) => Ok(value as u16),
    // Unknown VR, e.g. private implicit dictionaries
    DicomValue::UN(_) | DicomValue::OB(_) | DicomValue::OW(_) => {
      instance.read_u16(attribute.data_offset, instance.byte_order_at(attribute.data_offset))
    },
    value => Err(DicomError::new(&format!(
      "Unexpected value for ({:04x},{:04x}): {:?}", attribute.group, attribute.element, value))),
  }
}
