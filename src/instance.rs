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

use core::str::Utf8Error;
use std::borrow::Cow;
use std::fmt;
use std::str::from_utf8;

use log::debug;

use crate::dicom_tags::{
  Item, ItemDelimitationItem, PixelData, SequenceDelimitationItem, TransferSyntaxUID,
};
use crate::error::DicomError;
use crate::misc::{has_dicom_header, PREAMBLE_LENGTH};
use crate::tags::Tag;

pub const UNDEFINED_LENGTH: usize = 0xFFFFFFFF;

// Sequences and items count as one level each.
pub const MAX_NESTING_DEPTH: usize = 64;

// VRs encoded with 2 reserved bytes and a 32 bits length in explicit VR.
// https://dicom.nema.org/medical/dicom/current/output/chtml/part05/chapter_7.html#sect_7.1.2
const LONG_LENGTH_VRS: [&str; 13] = [
  "OB", "OD", "OF", "OL", "OV", "OW", "SQ", "SV", "UC", "UR", "UT", "UN", "UV",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ByteOrder {
  LittleEndian,
  BigEndian,
}

impl ByteOrder {
  pub fn u16_from(self, bytes: [u8; 2]) -> u16 {
    match self {
      ByteOrder::LittleEndian => u16::from_le_bytes(bytes),
      ByteOrder::BigEndian => u16::from_be_bytes(bytes),
    }
  }

  pub fn u32_from(self, bytes: [u8; 4]) -> u32 {
    match self {
      ByteOrder::LittleEndian => u32::from_le_bytes(bytes),
      ByteOrder::BigEndian => u32::from_be_bytes(bytes),
    }
  }
}

/// Encoding of the dataset following the file meta information, as announced
/// by the Transfer Syntax UID (0002,0010).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransferSyntax {
  ImplicitVRLittleEndian,
  ExplicitVRLittleEndian,
  ExplicitVRBigEndian,
  DeflatedExplicitVRLittleEndian,
  /// Compressed pixel data (JPEG, RLE, ...). The dataset itself is explicit VR
  /// little endian but the pixel data is a sequence of fragments.
  Encapsulated(String),
}

impl TransferSyntax {
  pub fn from_uid(uid: &str) -> TransferSyntax {
    match uid {
      "1.2.840.10008.1.2" => TransferSyntax::ImplicitVRLittleEndian,
      "1.2.840.10008.1.2.1" => TransferSyntax::ExplicitVRLittleEndian,
      "1.2.840.10008.1.2.2" => TransferSyntax::ExplicitVRBigEndian,
      "1.2.840.10008.1.2.1.99" => TransferSyntax::DeflatedExplicitVRLittleEndian,
      _ => TransferSyntax::Encapsulated(uid.to_string()),
    }
  }

  pub fn uid(&self) -> &str {
    match self {
      TransferSyntax::ImplicitVRLittleEndian => "1.2.840.10008.1.2",
      TransferSyntax::ExplicitVRLittleEndian => "1.2.840.10008.1.2.1",
      TransferSyntax::ExplicitVRBigEndian => "1.2.840.10008.1.2.2",
      TransferSyntax::DeflatedExplicitVRLittleEndian => "1.2.840.10008.1.2.1.99",
      TransferSyntax::Encapsulated(uid) => uid,
    }
  }

  pub fn is_implicit(&self) -> bool {
    *self == TransferSyntax::ImplicitVRLittleEndian
  }

  pub fn byte_order(&self) -> ByteOrder {
    match self {
      TransferSyntax::ExplicitVRBigEndian => ByteOrder::BigEndian,
      _ => ByteOrder::LittleEndian,
    }
  }

  /// True when the pixel data is stored as plain samples that can be read
  /// directly from the buffer.
  pub fn has_native_pixel_data(&self) -> bool {
    matches!(
      self,
      TransferSyntax::ImplicitVRLittleEndian
        | TransferSyntax::ExplicitVRLittleEndian
        | TransferSyntax::ExplicitVRBigEndian
    )
  }
}

impl fmt::Display for TransferSyntax {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match get_transfer_syntax_uid_label(self.uid()) {
      Some(label) => write!(f, "{} ({})", self.uid(), label),
      None => write!(f, "{}", self.uid()),
    }
  }
}

#[derive(Debug)]
pub struct Instance {
  pub buffer: Vec<u8>,
  pub transfer_syntax: TransferSyntax,
  // Offset of the first element after the file meta information group
  pub dataset_offset: usize,
}

#[derive(Debug, PartialEq)]
pub enum DicomValue<'a> {
  AE(String),
  AS(String),
  AT(u32),
  CS(String),
  DA(String),
  DS(String),
  DT(String),
  FD(f64),
  FL(f32),
  IS(String),
  LO(String),
  LT(String),
  OB(&'a [u8]),
  // Raw bytes in the dataset byte order
  OW(&'a [u8]),
  PN(String),
  SeqEnd,
  SeqItem(Vec<DicomValue<'a>>),
  SeqItemEnd,
  SH(String),
  SL(i32),
  SQ(Vec<DicomValue<'a>>),
  SS(i16),
  ST(String),
  TM(String),
  UC(String),
  UI(String),
  UL(u32),
  UR(String),
  US(u16),
  UT(String),
  UN(&'a [u8]),
}

// Convert Utf8Error to DicomError with a nice error message.
fn utf8_error_to_dicom_error(err: Utf8Error, vr: &str, offset: usize) -> DicomError {
  match err.error_len() {
    Some(l) => DicomError::new(&format!("UTF8 error: an unexpected byte was encountered while \
      decoding an {} tag at {:#x} + {}", vr, offset, l)),
    None => DicomError::new(&format!("UTF8 error: the end of the input was reached unexpectedly \
      while decoding an {} tag at {:#x}", vr, offset)),
  }
}

fn hex_preview<I: Iterator<Item = String>>(it: I) -> String {
  let mut result = String::with_capacity(40);
  let mut it = it.peekable();
  while let Some(n) = it.next() {
    result.push_str(&n);
    if result.len() >= 64 {
      result.replace_range(64.., "...");
      break;
    }
    if it.peek().is_some() {
      result.push('\\');
    }
  }
  result
}

impl<'a> fmt::Display for DicomValue<'a> {
  fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
    match self {
      DicomValue::AE(value) |
      DicomValue::AS(value) |
      DicomValue::CS(value) |
      DicomValue::DA(value) |
      DicomValue::DS(value) |
      DicomValue::DT(value) |
      DicomValue::IS(value) |
      DicomValue::LO(value) |
      DicomValue::LT(value) |
      DicomValue::PN(value) |
      DicomValue::SH(value) |
      DicomValue::ST(value) |
      DicomValue::TM(value) |
      DicomValue::UC(value) |
      DicomValue::UI(value) |
      DicomValue::UR(value) |
      DicomValue::UT(value) => write!(f, "{}", value),
      DicomValue::AT(value) => write!(f, "({:04x},{:04x})", value >> 16, value & 0xFFFF),
      DicomValue::FD(value) => write!(f, "{}", value),
      DicomValue::FL(value) => write!(f, "{}", value),
      DicomValue::SL(value) => write!(f, "{}", value),
      DicomValue::SS(value) => write!(f, "{}", value),
      DicomValue::UL(value) => write!(f, "{}", value),
      DicomValue::US(value) => write!(f, "{}", value),
      DicomValue::OB(value) |
      DicomValue::OW(value) |
      DicomValue::UN(value) => {
        write!(f, "{}", hex_preview(value.iter().map(|n| format!("{:02x}", n))))
      }
      DicomValue::SQ(values) => write!(f, "(Sequence #={})", values.len()),
      DicomValue::SeqItem(values) => write!(f, "(Item #={})", values.len()),
      DicomValue::SeqItemEnd => write!(f, "(ItemDelimitationItem)"),
      DicomValue::SeqEnd => write!(f, "(SequenceDelimitationItem)"),
    }
  }
}

impl<'a> DicomValue<'a> {
  pub fn from_dicom_attribute<'b>(attribute: &DicomAttribute<'b>, instance: &'b Instance)
    -> Result<DicomValue<'b>, DicomError> {
    Ok(match attribute.vr.as_ref() {
      "SQ" => {
        let values: Result<Vec<_>, _> = attribute.subattributes.iter()
          .map(|attribute| DicomValue::from_dicom_attribute(attribute, instance))
          .collect();
        DicomValue::SQ(values?)
      },
      _ => match (attribute.group, attribute.element) {
        (0xFFFE, 0xE000) => {
          let values: Result<Vec<_>, _> = attribute.subattributes.iter()
            .map(|attribute| DicomValue::from_dicom_attribute(attribute, instance))
            .collect();
          DicomValue::SeqItem(values?)
        },
        (0xFFFE, 0xE00D) => DicomValue::SeqItemEnd,
        (0xFFFE, 0xE0DD) => DicomValue::SeqEnd,
        _ => DicomValue::new(
          &attribute.vr,
          instance.slice(attribute.data_offset, attribute.data_length)?,
          attribute.data_offset,
          instance.byte_order_at(attribute.data_offset),
        )?,
      }
    })
  }

  fn new<'b>(vr: &str, data: &'b [u8], offset: usize, byte_order: ByteOrder)
    -> Result<DicomValue<'b>, DicomError> {
    let string = || -> Result<String, DicomError> {
      Ok(from_utf8(data)
        .map_err(|err| utf8_error_to_dicom_error(err, vr, offset))?
        .trim_matches(char::from(0))
        .trim()
        .to_string())
    };
    let word = || -> Result<[u8; 2], DicomError> {
      data.get(0..2).ok_or_else(|| too_short(vr, offset, data.len()))?.try_into().map_err(DicomError::from)
    };
    let dword = || -> Result<[u8; 4], DicomError> {
      data.get(0..4).ok_or_else(|| too_short(vr, offset, data.len()))?.try_into().map_err(DicomError::from)
    };
    let qword = || -> Result<[u8; 8], DicomError> {
      data.get(0..8).ok_or_else(|| too_short(vr, offset, data.len()))?.try_into().map_err(DicomError::from)
    };
    Ok(match vr {
      "AE" => DicomValue::AE(string()?),
      "AS" => DicomValue::AS(string()?),
      "AT" => {
        // A pair of 16 bits values: group then element
        let bytes = dword()?;
        let group = byte_order.u16_from([bytes[0], bytes[1]]) as u32;
        let element = byte_order.u16_from([bytes[2], bytes[3]]) as u32;
        DicomValue::AT(group << 16 | element)
      },
      "CS" => DicomValue::CS(string()?),
      "DA" => DicomValue::DA(string()?),
      "DS" => DicomValue::DS(string()?),
      "DT" => DicomValue::DT(string()?),
      "FD" => {
        let bytes = qword()?;
        DicomValue::FD(match byte_order {
          ByteOrder::LittleEndian => f64::from_le_bytes(bytes),
          ByteOrder::BigEndian => f64::from_be_bytes(bytes),
        })
      },
      "FL" => {
        let bits = byte_order.u32_from(dword()?);
        DicomValue::FL(f32::from_bits(bits))
      },
      "IS" => DicomValue::IS(string()?),
      "LO" => DicomValue::LO(string()?),
      "LT" => DicomValue::LT(string()?),
      "OB" => DicomValue::OB(data),
      "OW" => DicomValue::OW(data),
      "PN" => DicomValue::PN(string()?),
      "SH" => DicomValue::SH(string()?),
      "SL" => DicomValue::SL(byte_order.u32_from(dword()?) as i32),
      "SS" => DicomValue::SS(byte_order.u16_from(word()?) as i16),
      "ST" => DicomValue::ST(string()?),
      "TM" => DicomValue::TM(string()?),
      "UC" => DicomValue::UC(string()?),
      "UI" => DicomValue::UI(string()?),
      "UL" => DicomValue::UL(byte_order.u32_from(dword()?)),
      "UR" => DicomValue::UR(string()?),
      "US" => DicomValue::US(byte_order.u16_from(word()?)),
      "UT" => DicomValue::UT(string()?),
      // OD, OF, OL, OV, SV, UV and anything unknown are kept as raw bytes
      _ => DicomValue::UN(data),
    })
  }
}

fn too_short(vr: &str, offset: usize, length: usize) -> DicomError {
  DicomError::new(&format!("{} value at {:#x} is too short ({} bytes)", vr, offset, length))
}

#[derive(Debug)]
pub struct DicomAttribute<'a> {
  pub group: u16,
  pub element: u16,
  pub vr: Cow<'a, str>,
  // Position of the tag content in the buffer after the VR and length
  pub data_offset: usize,
  // Length of the data field. For sequences and items of undefined length,
  // this covers everything up to and including the delimitation item.
  pub data_length: usize,
  // Length as read on the file
  pub length: usize,
  pub tag: Tag,
  pub subattributes: Vec<DicomAttribute<'a>>,
}

impl<'a> DicomAttribute<'a> {
  pub fn new<S>(group: u16, element: u16, vr: S, data_offset: usize, data_length: usize,
    length: usize, tag: Tag) -> DicomAttribute<'a>
    where S: Into<Cow<'a, str>> {
    Self::new_with_subattributes(group, element, vr, data_offset, data_length, length, tag, vec![])
  }

  #[allow(clippy::too_many_arguments)]
  pub fn new_with_subattributes<S>(group: u16, element: u16, vr: S, data_offset: usize, data_length: usize,
    length: usize, tag: Tag, subattributes: Vec<DicomAttribute<'a>>) -> DicomAttribute<'a>
    where S: Into<Cow<'a, str>> {
    DicomAttribute { group, element, vr: vr.into(), data_offset, data_length, length, tag, subattributes }
  }

  /// Offset of the element following this one.
  pub fn next_offset(&self) -> usize {
    self.data_offset + self.data_length
  }

  pub fn is(&self, tag: &Tag) -> bool {
    tag.matches(self.group, self.element)
  }
}

impl Instance {
  pub fn from(buffer: Vec<u8>) -> Result<Self, DicomError> {
    // Check it's a DICOM file
    // TODO: Manage headerless DICOM files (no preamble, dataset starts at 0)
    if !has_dicom_header(&buffer) {
      return Err(DicomError::new("Not a DICOM file"));
    }

    // The file meta information is always explicit VR little endian. Every
    // offset is considered part of it until the end of group 0002 is found.
    let mut instance = Instance {
      buffer,
      transfer_syntax: TransferSyntax::ExplicitVRLittleEndian,
      dataset_offset: usize::MAX,
    };
    let (transfer_syntax_uid, dataset_offset) = instance.read_file_meta()?;
    instance.transfer_syntax = TransferSyntax::from_uid(&transfer_syntax_uid);
    instance.dataset_offset = dataset_offset;
    debug!("transfer syntax {}, dataset starts at {:#x}", instance.transfer_syntax, dataset_offset);
    Ok(instance)
  }

  // Walk group 0002 and return the transfer syntax uid along with the offset
  // of the first dataset element.
  fn read_file_meta(&self) -> Result<(String, usize), DicomError> {
    let mut offset = PREAMBLE_LENGTH;
    let mut transfer_syntax_uid = None;
    while offset < self.buffer.len() && self.read_u16(offset, ByteOrder::LittleEndian)? == 0x0002 {
      let attribute = self.next_attribute(offset)?;
      if attribute.is(&TransferSyntaxUID) {
        match DicomValue::from_dicom_attribute(&attribute, self)? {
          DicomValue::UI(uid) => transfer_syntax_uid = Some(uid),
          value => return Err(DicomError::new(
            &format!("Unexpected Transfer Syntax UID value: {:?}", value))),
        }
      }
      offset = attribute.next_offset();
    }
    match transfer_syntax_uid {
      Some(uid) => Ok((uid, offset)),
      None => Err(DicomError::new("Transfer Syntax UID not found")),
    }
  }

  /// Fails on transfer syntaxes whose dataset cannot be walked.
  pub fn is_supported_type(&self) -> Result<(), DicomError> {
    match self.transfer_syntax {
      TransferSyntax::DeflatedExplicitVRLittleEndian => Err(DicomError::new(
        &format!("Unsupported Transfer Syntax UID: {}", self.transfer_syntax))),
      _ => Ok(()),
    }
  }

  fn is_file_meta(&self, offset: usize) -> bool {
    offset < self.dataset_offset
  }

  pub fn byte_order_at(&self, offset: usize) -> ByteOrder {
    if self.is_file_meta(offset) {
      ByteOrder::LittleEndian
    } else {
      self.transfer_syntax.byte_order()
    }
  }

  /// Bounds checked view into the buffer.
  pub fn slice(&self, offset: usize, length: usize) -> Result<&[u8], DicomError> {
    offset.checked_add(length)
      .and_then(|end| self.buffer.get(offset..end))
      .ok_or_else(|| DicomError::new(&format!(
        "Trying to read out of file bound (offset: {:#x}, length: {}, file size: {})",
        offset, length, self.buffer.len())))
  }

  pub fn read_u16(&self, offset: usize, byte_order: ByteOrder) -> Result<u16, DicomError> {
    Ok(byte_order.u16_from(self.slice(offset, 2)?.try_into()?))
  }

  pub fn read_u32(&self, offset: usize, byte_order: ByteOrder) -> Result<u32, DicomError> {
    Ok(byte_order.u32_from(self.slice(offset, 4)?.try_into()?))
  }

  pub fn get_value(&self, tag: &Tag) -> Result<Option<DicomValue<'_>>, DicomError> {
    for attribute in self.iter() {
      let attribute = attribute?;
      if attribute.is(tag) {
        return Ok(Some(DicomValue::from_dicom_attribute(&attribute, self)?));
      }
    }
    Ok(None)
  }

  pub fn iter(&self) -> InstanceIter<'_> {
    InstanceIter::new(self)
  }

  // Finding the implicit VR is not straightforward. The dictionary gives most
  // of them, the rest is patched here based on what is observed in the wild.
  // https://dicom.nema.org/medical/dicom/2017a/output/chtml/part05/chapter_A.html
  fn get_implicit_vr(tag: &mut Tag) {
    if tag.matches(PixelData.group, PixelData.element) {
      tag.vr = "OW";
    }
    if tag.element == 0x0000 {
      // All tags with element = 0 are group lengths.
      tag.vr = "UL";
      tag.name = "GenericGroupLength";
    }
  }

  pub fn next_attribute(&self, offset: usize) -> Result<DicomAttribute<'_>, DicomError> {
    self.read_attribute(offset, 0)
  }

  // `depth` is the number of sequences and items enclosing `offset`.
  fn read_attribute(&self, offset: usize, depth: usize) -> Result<DicomAttribute<'_>, DicomError> {
    if !self.is_file_meta(offset) {
      self.is_supported_type()?;
    }
    let original_offset = offset;
    let byte_order = self.byte_order_at(offset);
    let group = self.read_u16(offset, byte_order)?;
    let element = self.read_u16(offset + 2, byte_order)?;
    let mut offset = offset + 4; // Skip group and element

    // Sequence related data elements have no VR, only a 32 bits length
    if group == 0xFFFE {
      let length = self.read_u32(offset, byte_order)? as usize; // Can be equal to 0xFFFFFFFF
      offset += 4;
      return match element {
        0xE000 => self.read_item(offset, length, depth),
        0xE00D => Ok(DicomAttribute::new(group, element, "", offset, 0, length, ItemDelimitationItem)),
        0xE0DD => Ok(DicomAttribute::new(group, element, "", offset, 0, length, SequenceDelimitationItem)),
        _ => Err(DicomError::new(&format!(
          "unknown sequence related data element (fffe,{:04x}) at {:#x}", element, original_offset))),
      };
    }

    // Create tag based on group and element or generate a synthetic "unknown" tag
    let mut tag = Tag::try_from((group as u32) << 16 | element as u32)
      .unwrap_or_else(|_| Tag::unknown(group, element));
    let explicit = self.is_file_meta(original_offset) || !self.transfer_syntax.is_implicit();
    let vr: Cow<'_, str> = if explicit {
      let bytes = self.slice(offset, 2)?;
      if !bytes.iter().all(|b| b.is_ascii_uppercase()) {
        return Err(DicomError::new(&format!(
          "Invalid value representation {:02x?} for ({:04x},{:04x}) at {:#x}",
          bytes, group, element, offset)));
      }
      offset += 2; // Skip VR
      Cow::Borrowed(from_utf8(bytes).map_err(|err| utf8_error_to_dicom_error(err, "tag", offset - 2))?)
    } else {
      Instance::get_implicit_vr(&mut tag);
      Cow::Borrowed(tag.vr)
    };

    let length = if !explicit {
      offset += 4;
      self.read_u32(offset - 4, byte_order)? as usize
    } else if LONG_LENGTH_VRS.contains(&vr.as_ref()) {
      offset += 2; // Skip reserved bytes
      offset += 4;
      self.read_u32(offset - 4, byte_order)? as usize
    } else {
      offset += 2;
      self.read_u16(offset - 2, byte_order)? as usize
    };

    if vr == "SQ" || length == UNDEFINED_LENGTH { // https://github.com/pydicom/pydicom/issues/1140
      if length == UNDEFINED_LENGTH && tag.matches(PixelData.group, PixelData.element) {
        return self.read_fragments(vr, offset, tag);
      }
      return self.read_sequence(vr, offset, length, tag, depth);
    }

    // Make sure the value is actually there
    self.slice(offset, length).map_err(|_| DicomError::new(&format!(
      "Element ({:04x},{:04x}) at {:#x} with length {} runs past the end of the file ({} bytes)",
      group, element, original_offset, length, self.buffer.len())))?;
    Ok(DicomAttribute::new(group, element, vr, offset, length, length, tag))
  }

  // Returns the offset at which a container of the given length starting at
  // offset ends. Undefined lengths run until their delimitation item, which
  // can be anywhere up to the end of the buffer.
  fn container_end(&self, offset: usize, length: usize) -> Result<usize, DicomError> {
    if length == UNDEFINED_LENGTH {
      return Ok(self.buffer.len());
    }
    self.slice(offset, length)?;
    Ok(offset + length)
  }

  // Walk the children of a sequence or an item until the end of the container
  // or until the delimiter is reached.
  fn read_children(&self, offset: usize, length: usize, delimiter: &Tag, depth: usize)
    -> Result<(Vec<DicomAttribute<'_>>, usize), DicomError> {
    if depth >= MAX_NESTING_DEPTH {
      return Err(DicomError::new(&format!(
        "Sequences nested deeper than {} levels at {:#x}", MAX_NESTING_DEPTH, offset)));
    }
    let end = self.container_end(offset, length)?;
    let mut children = vec![];
    let mut suboffset = offset;
    let mut delimited = false;
    while suboffset < end {
      let child = self.read_attribute(suboffset, depth + 1)?;
      suboffset = child.next_offset();
      if child.is(delimiter) {
        delimited = true;
        break;
      }
      children.push(child);
    }
    if length == UNDEFINED_LENGTH {
      if !delimited {
        return Err(DicomError::new(&format!(
          "Missing {} for container starting at {:#x}", delimiter.name, offset)));
      }
      Ok((children, suboffset - offset))
    } else if suboffset > end {
      Err(DicomError::new(&format!(
        "Content overflows its container starting at {:#x} (length: {})", offset, length)))
    } else {
      Ok((children, length))
    }
  }

  // See http://dicom.nema.org/dicom/2013/output/chtml/part05/sect_7.5.html
  // on what a sequence look like in a DICOM file.
  fn read_sequence<'a>(&'a self, vr: Cow<'a, str>, offset: usize, length: usize, tag: Tag, depth: usize)
    -> Result<DicomAttribute<'a>, DicomError> {
    let (items, data_length) = self.read_children(offset, length, &SequenceDelimitationItem, depth)?;
    Ok(DicomAttribute::new_with_subattributes(
      tag.group, tag.element, vr, offset, data_length, length, tag, items,
    ))
  }

  fn read_item(&self, offset: usize, length: usize, depth: usize) -> Result<DicomAttribute<'_>, DicomError> {
    let (subattributes, data_length) = self.read_children(offset, length, &ItemDelimitationItem, depth)?;
    Ok(DicomAttribute::new_with_subattributes(
      Item.group, Item.element, "", offset, data_length, length, Item, subattributes,
    ))
  }

  // Encapsulated pixel data: a basic offset table item followed by fragment
  // items and a sequence delimitation item.
  // https://dicom.nema.org/medical/dicom/current/output/chtml/part05/sect_A.4.html
  fn read_fragments<'a>(&'a self, vr: Cow<'a, str>, offset: usize, tag: Tag)
    -> Result<DicomAttribute<'a>, DicomError> {
    let byte_order = self.byte_order_at(offset);
    let mut fragments = vec![];
    let mut suboffset = offset;
    loop {
      let group = self.read_u16(suboffset, byte_order)?;
      let element = self.read_u16(suboffset + 2, byte_order)?;
      let length = self.read_u32(suboffset + 4, byte_order)? as usize;
      suboffset += 8;
      match (group, element) {
        (0xFFFE, 0xE000) => {
          self.slice(suboffset, length)?;
          fragments.push(DicomAttribute::new(group, element, "OB", suboffset, length, length, Item));
          suboffset += length;
        }
        (0xFFFE, 0xE0DD) => break,
        _ => return Err(DicomError::new(&format!(
          "Expecting sequence items in an encapsulated pixel data field at {:#x}", suboffset - 8))),
      }
    }
    Ok(DicomAttribute::new_with_subattributes(
      tag.group, tag.element, vr, offset, suboffset - offset, UNDEFINED_LENGTH, tag, fragments,
    ))
  }
}

fn get_transfer_syntax_uid_label(transfer_syntax_uid: &str) -> Option<&'static str> {
  match transfer_syntax_uid {
    "1.2.840.10008.1.2" => Some("Implicit VR Little Endian: Default Transfer Syntax for DICOM"),
    "1.2.840.10008.1.2.1" => Some("Explicit VR Little Endian"),
    "1.2.840.10008.1.2.1.99" => Some("Deflated Explicit VR Little Endian"),
    "1.2.840.10008.1.2.2" => Some("Explicit VR Big Endian"),
    "1.2.840.10008.1.2.4.50" => Some("JPEG Baseline (Process 1)"),
    "1.2.840.10008.1.2.4.51" => Some("JPEG Baseline (Processes 2 & 4)"),
    "1.2.840.10008.1.2.4.57" => Some("JPEG Lossless, Nonhierarchical (Processes 14)"),
    "1.2.840.10008.1.2.4.70" => Some("JPEG Lossless, Nonhierarchical, First- Order Prediction (Processes 14 [Selection Value 1])"),
    "1.2.840.10008.1.2.4.80" => Some("JPEG-LS Lossless Image Compression"),
    "1.2.840.10008.1.2.4.81" => Some("JPEG-LS Lossy (Near- Lossless) Image Compression"),
    "1.2.840.10008.1.2.4.90" => Some("JPEG 2000 Image Compression (Lossless Only)"),
    "1.2.840.10008.1.2.4.91" => Some("JPEG 2000 Image Compression"),
    "1.2.840.10008.1.2.5" => Some("RLE Lossless"),
    _ => None,
  }
}

pub struct InstanceIter<'a> {
  instance: &'a Instance,
  offset: usize,
}

impl<'a> InstanceIter<'a> {
  fn new(instance: &'a Instance) -> Self {
    InstanceIter { instance, offset: PREAMBLE_LENGTH }
  }
}

impl<'a> Iterator for InstanceIter<'a> {
  type Item = Result<DicomAttribute<'a>, DicomError>;

  fn next(&mut self) -> Option<Self::Item> {
    if self.offset >= self.instance.buffer.len() {
      return None;
    }
    match self.instance.next_attribute(self.offset) {
      Ok(attribute) => {
        self.offset = attribute.next_offset();
        Some(Ok(attribute))
      },
      Err(e) => {
        // Nothing sensible can be read after a broken element
        self.offset = self.instance.buffer.len();
        Some(Err(e))
      },
    }
  }
}
