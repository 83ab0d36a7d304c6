extern crate encoding;
use self::encoding::all::ISO_8859_1;
use self::encoding::{DecoderTrap, EncoderTrap, Encoding};

use crate::Error;

/// Encodes frame text for writing.
///
/// Fails with [`Error::InvalidArguments`] if `input` holds a character
/// outside latin-1, or a null byte the reader would stop at.
pub fn encode_iso_8859_1(input: &str) -> Result<Vec<u8>, Error> {
    if input.contains('\0') {
        return Err(Error::InvalidArguments(format!(
            "{:?} contains a null byte",
            input
        )));
    }
    ISO_8859_1
        .encode(input, EncoderTrap::Strict)
        .map_err(|_| Error::InvalidArguments(format!("{:?} is not ISO-8859-1 text", input)))
}

// text ends at the first null byte, like a C string
pub fn decode_iso_8859_1(input: &[u8]) -> String {
    let end = input.iter().position(|&b| b == 0x00).unwrap_or(input.len());
    ISO_8859_1
        .decode(&input[..end], DecoderTrap::Replace)
        .unwrap_or_default()
}
