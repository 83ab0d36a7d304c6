use std::fmt;

use crate::id3v2::tools::{decode_size, encode_size};
use crate::Error;

pub const MAGIC: &[u8; 3] = b"ID3";
pub const SUPPORTED_VERSION: u8 = 3;

pub const HEADER_LEN: usize = 10;
pub const FRAME_HEADER_LEN: usize = 10;

// encoding marker at the start of every text frame we write
pub const ISO_8859_1: u8 = 0x00;

/// The fixed 10 byte region at the start of the file.
///
/// Only the version is kept. A new tag gets zero flags and tag size.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct TagHeader {
    pub version: u8,
    pub revision: u8,
}

impl Default for TagHeader {
    fn default() -> TagHeader {
        TagHeader {
            version: SUPPORTED_VERSION,
            revision: 0,
        }
    }
}

impl TagHeader {
    /// Validates the identifier and version at the start of `input`.
    ///
    /// Only the first five bytes are looked at, so a prefix is enough.
    pub fn parse(input: &[u8]) -> Result<TagHeader, Error> {
        // ID3v2/file identifier      "ID3"
        if input.len() < 5 || &input[0..3] != MAGIC {
            return Err(Error::NotAnId3File);
        }

        // ID3v2 version              $03 00
        let header = TagHeader {
            version: input[3],
            revision: input[4],
        };
        if header.version != SUPPORTED_VERSION {
            return Err(Error::UnsupportedVersion(header.version, header.revision));
        }
        Ok(header)
    }

    pub fn as_bytes(&self) -> [u8; HEADER_LEN] {
        let mut arr = [0; HEADER_LEN];
        arr[0..3].copy_from_slice(MAGIC);
        arr[3] = self.version;
        arr[4] = self.revision;
        arr
    }
}

/// 4: Frame ID  $xx xx xx xx
/// 4: Size      $xx xx xx xx
/// 2: Flags     $xx xx
///
/// The ID is kept as raw bytes: frames we don't understand get written back untouched.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameHeader {
    pub id: [u8; 4],
    pub size: u32,
    pub flags: [u8; 2],
}

impl FrameHeader {
    pub fn parse(input: &[u8; FRAME_HEADER_LEN]) -> FrameHeader {
        let mut id = [0; 4];
        id.copy_from_slice(&input[0..4]);
        let mut size = [0; 4];
        size.copy_from_slice(&input[4..8]);

        FrameHeader {
            id,
            size: decode_size(&size),
            flags: [input[8], input[9]],
        }
    }

    pub fn as_bytes(&self) -> [u8; FRAME_HEADER_LEN] {
        let mut arr = [0; FRAME_HEADER_LEN];
        arr[0..4].copy_from_slice(&self.id);
        arr[4..8].copy_from_slice(&encode_size(self.size));
        arr[8..10].copy_from_slice(&self.flags);
        arr
    }
}

impl fmt::Debug for FrameHeader {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("FrameHeader")
            .field("id", &String::from_utf8_lossy(&self.id))
            .field("size", &self.size)
            .field("flags", &self.flags)
            .finish()
    }
}

/// A complete frame as it sits in the file.
#[derive(Debug, PartialEq, Eq)]
pub struct Frame {
    pub header: FrameHeader,
    pub payload: Vec<u8>,
}
