use byteorder::{BigEndian, ByteOrder};

use crate::TagField;

// ID3v2.3 frame sizes are plain big-endian integers,
// not the synchsafe 7-bit packing of v2.4
pub fn decode_size(input: &[u8; 4]) -> u32 {
    BigEndian::read_u32(input)
}

pub fn encode_size(input: u32) -> [u8; 4] {
    let mut result = [0; 4];
    BigEndian::write_u32(&mut result, input);
    result
}

pub fn is_recognized(frame_id: &[u8]) -> bool {
    TagField::from_frame_id(frame_id).is_some()
}

// size field of a text frame: encoding byte + text
pub fn text_frame_size(text: &[u8]) -> u32 {
    (text.len() as u32).wrapping_add(1)
}
