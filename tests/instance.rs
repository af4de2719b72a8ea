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

mod common;

use common::*;
use dicomslice::dicom_tags::{PatientName, PixelData, Rows, SOPInstanceUID, TransferSyntaxUID};
use dicomslice::instance::{ByteOrder, DicomValue, Instance, TransferSyntax};
use dicomslice::tags::Tag;

#[test]
fn reads_the_transfer_syntax_from_the_file_meta() {
  let cases = [
    (IMPLICIT_VR_LITTLE_ENDIAN, TransferSyntax::ImplicitVRLittleEndian, ByteOrder::LittleEndian),
    (EXPLICIT_VR_LITTLE_ENDIAN, TransferSyntax::ExplicitVRLittleEndian, ByteOrder::LittleEndian),
    (EXPLICIT_VR_BIG_ENDIAN, TransferSyntax::ExplicitVRBigEndian, ByteOrder::BigEndian),
  ];
  for (uid, transfer_syntax, byte_order) in cases {
    let instance = Instance::from(slice(uid, 1, 1, "1.2", &[1])).unwrap();
    assert_eq!(instance.transfer_syntax, transfer_syntax);
    assert_eq!(instance.transfer_syntax.byte_order(), byte_order);
    assert!(instance.transfer_syntax.has_native_pixel_data());
  }
}

#[test]
fn get_value_finds_meta_and_dataset_elements() {
  let bytes = DicomBuilder::new(EXPLICIT_VR_BIG_ENDIAN)
    .sop_instance_uid("1.2.840.99")
    .patient_name("Doe^Jane")
    .rows(512)
    .pixel_data(&[1, 2])
    .build();
  let instance = Instance::from(bytes).unwrap();

  assert_eq!(
    instance.get_value(&TransferSyntaxUID).unwrap(),
    Some(DicomValue::UI(EXPLICIT_VR_BIG_ENDIAN.to_string())),
  );
  assert_eq!(instance.get_value(&Rows).unwrap(), Some(DicomValue::US(512)));
  assert_eq!(instance.get_value(&PatientName).unwrap(), Some(DicomValue::PN("Doe^Jane".to_string())));
  assert_eq!(instance.get_value(&SOPInstanceUID).unwrap().unwrap().to_string(), "1.2.840.99");
  assert_eq!(instance.get_value(&0x00280011u32.try_into().unwrap()).unwrap(), None);
}

#[test]
fn pixel_data_is_kept_as_raw_bytes() {
  let instance = Instance::from(slice(EXPLICIT_VR_BIG_ENDIAN, 1, 2, "1.2", &[0x0102, 0x0304])).unwrap();

  let value = instance.get_value(&PixelData).unwrap().unwrap();

  assert_eq!(value, DicomValue::OW(&[0x01, 0x02, 0x03, 0x04]));
  assert_eq!(value.to_string(), "01\\02\\03\\04");
}

#[test]
fn iterates_top_level_elements_in_order() {
  let instance = Instance::from(slice(IMPLICIT_VR_LITTLE_ENDIAN, 1, 1, "1.2", &[1])).unwrap();

  let tags: Vec<(u16, u16)> = instance.iter()
    .map(|attribute| attribute.map(|attribute| (attribute.group, attribute.element)))
    .collect::<Result<_, _>>()
    .unwrap();

  assert_eq!(tags, vec![
    (0x0002, 0x0000),
    (0x0002, 0x0010),
    (0x0008, 0x0018),
    (0x0028, 0x0010),
    (0x0028, 0x0011),
    (0x7FE0, 0x0010),
  ]);
}

#[test]
fn sequences_carry_their_items() {
  let builder = DicomBuilder::explicit_little_endian();
  let item = builder.encode(0x0008, 0x1155, "UI", b"1.2.3");
  let bytes = builder
    .sequence(0x0008, 0x1140, &[item.clone(), item])
    .pixel_data(&[1])
    .build();
  let instance = Instance::from(bytes).unwrap();

  let sequence = instance.iter()
    .map(Result::unwrap)
    .find(|attribute| attribute.group == 0x0008 && attribute.element == 0x1140)
    .unwrap();

  assert_eq!(sequence.vr, "SQ");
  assert_eq!(sequence.subattributes.len(), 2);
  let value = DicomValue::from_dicom_attribute(&sequence, &instance).unwrap();
  assert_eq!(value, DicomValue::SQ(vec![
    DicomValue::SeqItem(vec![DicomValue::UI("1.2.3".to_string())]),
    DicomValue::SeqItem(vec![DicomValue::UI("1.2.3".to_string())]),
  ]));
}

#[test]
fn unterminated_sequences_are_errors() {
  let builder = DicomBuilder::explicit_little_endian();
  // SQ of undefined length followed by nothing
  let bytes = builder
    .raw(&[0x08, 0x00, 0x40, 0x11, b'S', b'Q', 0, 0, 0xFF, 0xFF, 0xFF, 0xFF])
    .build();
  let instance = Instance::from(bytes).unwrap();

  assert!(instance.iter().any(|attribute| attribute.is_err()));
}

#[test]
fn rejects_files_without_the_dicm_magic() {
  let mut bytes = slice(EXPLICIT_VR_LITTLE_ENDIAN, 1, 1, "1.2", &[1]);
  bytes[128] = b'X';

  let err = Instance::from(bytes).unwrap_err();

  assert_eq!(err.to_string(), "Not a DICOM file");
}

#[test]
fn deflated_datasets_cannot_be_walked() {
  let instance = Instance::from(slice(DEFLATED_EXPLICIT_VR_LITTLE_ENDIAN, 1, 1, "1.2", &[1])).unwrap();

  assert!(instance.is_supported_type().is_err());
  assert!(instance.get_value(&Rows).is_err());
}

#[test]
fn transfer_syntax_display_includes_its_label() {
  assert_eq!(
    TransferSyntax::from_uid(EXPLICIT_VR_BIG_ENDIAN).to_string(),
    "1.2.840.10008.1.2.2 (Explicit VR Big Endian)",
  );
  assert_eq!(TransferSyntax::from_uid("1.2.3.4").to_string(), "1.2.3.4");
}

#[test]
fn tags_are_looked_up_by_identifier() {
  let tag: Tag = 0x7FE00010u32.try_into().unwrap();
  assert_eq!(tag.name, "PixelData");
  assert_eq!(tag.id(), 0x7FE00010);
  assert!(Tag::try_from(0x00091234u32).is_err());
}
