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

// Subset of the DICOM data dictionary (PS3.6) used by the parser and the
// slice decoder.

#![allow(non_upper_case_globals)]

use crate::tags::Tag;

pub const FileMetaInformationGroupLength: Tag = Tag {
  group: 0x0002,
  element: 0x0000,
  name: "FileMetaInformationGroupLength",
  vr: "UL",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "File Meta Information Group Length",
};

pub const FileMetaInformationVersion: Tag = Tag {
  group: 0x0002,
  element: 0x0001,
  name: "FileMetaInformationVersion",
  vr: "OB",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "File Meta Information Version",
};

pub const MediaStorageSOPClassUID: Tag = Tag {
  group: 0x0002,
  element: 0x0002,
  name: "MediaStorageSOPClassUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Media Storage SOP Class UID",
};

pub const MediaStorageSOPInstanceUID: Tag = Tag {
  group: 0x0002,
  element: 0x0003,
  name: "MediaStorageSOPInstanceUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Media Storage SOP Instance UID",
};

pub const TransferSyntaxUID: Tag = Tag {
  group: 0x0002,
  element: 0x0010,
  name: "TransferSyntaxUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Transfer Syntax UID",
};

pub const ImplementationClassUID: Tag = Tag {
  group: 0x0002,
  element: 0x0012,
  name: "ImplementationClassUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Implementation Class UID",
};

pub const ImplementationVersionName: Tag = Tag {
  group: 0x0002,
  element: 0x0013,
  name: "ImplementationVersionName",
  vr: "SH",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Implementation Version Name",
};

pub const ImageType: Tag = Tag {
  group: 0x0008,
  element: 0x0008,
  name: "ImageType",
  vr: "CS",
  vm: std::ops::Range { start: 2, end: 65535 },
  description: "Image Type",
};

pub const SOPClassUID: Tag = Tag {
  group: 0x0008,
  element: 0x0016,
  name: "SOPClassUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "SOP Class UID",
};

pub const SOPInstanceUID: Tag = Tag {
  group: 0x0008,
  element: 0x0018,
  name: "SOPInstanceUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "SOP Instance UID",
};

pub const Modality: Tag = Tag {
  group: 0x0008,
  element: 0x0060,
  name: "Modality",
  vr: "CS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Modality",
};

pub const PatientName: Tag = Tag {
  group: 0x0010,
  element: 0x0010,
  name: "PatientName",
  vr: "PN",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Patient's Name",
};

pub const PatientID: Tag = Tag {
  group: 0x0010,
  element: 0x0020,
  name: "PatientID",
  vr: "LO",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Patient ID",
};

pub const StudyInstanceUID: Tag = Tag {
  group: 0x0020,
  element: 0x000D,
  name: "StudyInstanceUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Study Instance UID",
};

pub const SeriesInstanceUID: Tag = Tag {
  group: 0x0020,
  element: 0x000E,
  name: "SeriesInstanceUID",
  vr: "UI",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Series Instance UID",
};

pub const InstanceNumber: Tag = Tag {
  group: 0x0020,
  element: 0x0013,
  name: "InstanceNumber",
  vr: "IS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Instance Number",
};

pub const ImagePositionPatient: Tag = Tag {
  group: 0x0020,
  element: 0x0032,
  name: "ImagePositionPatient",
  vr: "DS",
  vm: std::ops::Range { start: 3, end: 3 },
  description: "Image Position (Patient)",
};

pub const SamplesPerPixel: Tag = Tag {
  group: 0x0028,
  element: 0x0002,
  name: "SamplesPerPixel",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Samples per Pixel",
};

pub const PhotometricInterpretation: Tag = Tag {
  group: 0x0028,
  element: 0x0004,
  name: "PhotometricInterpretation",
  vr: "CS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Photometric Interpretation",
};

pub const Rows: Tag = Tag {
  group: 0x0028,
  element: 0x0010,
  name: "Rows",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Rows",
};

pub const Columns: Tag = Tag {
  group: 0x0028,
  element: 0x0011,
  name: "Columns",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Columns",
};

pub const PixelSpacing: Tag = Tag {
  group: 0x0028,
  element: 0x0030,
  name: "PixelSpacing",
  vr: "DS",
  vm: std::ops::Range { start: 2, end: 2 },
  description: "Pixel Spacing",
};

pub const BitsAllocated: Tag = Tag {
  group: 0x0028,
  element: 0x0100,
  name: "BitsAllocated",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Bits Allocated",
};

pub const BitsStored: Tag = Tag {
  group: 0x0028,
  element: 0x0101,
  name: "BitsStored",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Bits Stored",
};

pub const HighBit: Tag = Tag {
  group: 0x0028,
  element: 0x0102,
  name: "HighBit",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "High Bit",
};

pub const PixelRepresentation: Tag = Tag {
  group: 0x0028,
  element: 0x0103,
  name: "PixelRepresentation",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Pixel Representation",
};

pub const SmallestImagePixelValue: Tag = Tag {
  group: 0x0028,
  element: 0x0106,
  name: "SmallestImagePixelValue",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Smallest Image Pixel Value",
};

pub const LargestImagePixelValue: Tag = Tag {
  group: 0x0028,
  element: 0x0107,
  name: "LargestImagePixelValue",
  vr: "US",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Largest Image Pixel Value",
};

pub const WindowCenter: Tag = Tag {
  group: 0x0028,
  element: 0x1050,
  name: "WindowCenter",
  vr: "DS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Window Center",
};

pub const WindowWidth: Tag = Tag {
  group: 0x0028,
  element: 0x1051,
  name: "WindowWidth",
  vr: "DS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Window Width",
};

pub const RescaleIntercept: Tag = Tag {
  group: 0x0028,
  element: 0x1052,
  name: "RescaleIntercept",
  vr: "DS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Rescale Intercept",
};

pub const RescaleSlope: Tag = Tag {
  group: 0x0028,
  element: 0x1053,
  name: "RescaleSlope",
  vr: "DS",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Rescale Slope",
};

pub const PixelData: Tag = Tag {
  group: 0x7FE0,
  element: 0x0010,
  name: "PixelData",
  vr: "OW",
  vm: std::ops::Range { start: 1, end: 1 },
  description: "Pixel Data",
};

pub const Item: Tag = Tag {
  group: 0xFFFE,
  element: 0xE000,
  name: "Item",
  vr: "",
  vm: std::ops::Range { start: 0, end: 0 },
  description: "Item",
};

pub const ItemDelimitationItem: Tag = Tag {
  group: 0xFFFE,
  element: 0xE00D,
  name: "ItemDelimitationItem",
  vr: "",
  vm: std::ops::Range { start: 0, end: 0 },
  description: "Item Delimitation Item",
};

pub const SequenceDelimitationItem: Tag = Tag {
  group: 0xFFFE,
  element: 0xE0DD,
  name: "SequenceDelimitationItem",
  vr: "",
  vm: std::ops::Range { start: 0, end: 0 },
  description: "Sequence Delimitation Item",
};

pub static DICTIONARY: &[Tag] = &[
  FileMetaInformationGroupLength,
  FileMetaInformationVersion,
  MediaStorageSOPClassUID,
  MediaStorageSOPInstanceUID,
  TransferSyntaxUID,
  ImplementationClassUID,
  ImplementationVersionName,
  ImageType,
  SOPClassUID,
  SOPInstanceUID,
  Modality,
  PatientName,
  PatientID,
  StudyInstanceUID,
  SeriesInstanceUID,
  InstanceNumber,
  ImagePositionPatient,
  SamplesPerPixel,
  PhotometricInterpretation,
  Rows,
  Columns,
  PixelSpacing,
  BitsAllocated,
  BitsStored,
  HighBit,
  PixelRepresentation,
  SmallestImagePixelValue,
  LargestImagePixelValue,
  WindowCenter,
  WindowWidth,
  RescaleIntercept,
  RescaleSlope,
  PixelData,
  Item,
  ItemDelimitationItem,
  SequenceDelimitationItem,
];
