use std::io::prelude::*;
use std::io::SeekFrom;

use crate::Error;
use crate::TagRecord;
use crate::WriteOptions;

pub mod read;
mod rewrite;
mod scan;
pub mod structure;
pub mod tools;

pub use self::rewrite::edit;
pub use self::rewrite::EditOutcome;

use self::structure::{FrameHeader, TagHeader, HEADER_LEN, ISO_8859_1, MAGIC};
use crate::tools::copy_chunked;
use crate::tools::encoding::encode_iso_8859_1;
use crate::tools::read_up_to;

/// Reads the text frames of an ID3v2.3 tag.
///
/// The header is checked first, then every frame after it is visited until
/// the input runs out.
pub fn get<T: Read + Seek>(input: &mut T) -> Result<TagRecord, Error> {
    let header = read::header(input)?;
    log::debug!("Reading ID3v2.{}.{} frames", header.version, header.revision);
    scan::tags(input)
}

pub(crate) fn write_text_frame<W: Write>(
    output: &mut W,
    id: &[u8; 4],
    flags: [u8; 2],
    text: &[u8],
) -> Result<(), Error> {
    let header = FrameHeader {
        id: *id,
        // encoding byte + text, no null terminator
        size: tools::text_frame_size(text),
        flags,
    };
    output.write_all(&header.as_bytes())?;
    output.write_all(&[ISO_8859_1])?;
    output.write_all(text)?;
    Ok(())
}

/// Writes a new tag followed by everything after the input's header.
///
/// Frames already in the input are not skipped, they get copied after the
/// new ones. Use [`edit`] to change a file that has frames.
pub fn set<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    new: &TagRecord,
    options: WriteOptions,
) -> Result<(), Error> {
    // nothing is written unless every value encodes
    let frames = new
        .iter()
        .map(|(field, value)| encode_iso_8859_1(value).map(|text| (field, text)))
        .collect::<Result<Vec<_>, Error>>()?;

    input.seek(SeekFrom::Start(0))?;
    let mut arr = [0; HEADER_LEN];
    let n = read_up_to(input, &mut arr)?;

    let (header, copy_from) = if n == HEADER_LEN && &arr[0..3] == MAGIC {
        // existing tag: keep its revision, refuse other versions
        let header = TagHeader::parse(&arr)?;
        if !options.allow_duplicate_frames && scan::has_recognized_frames(input)? {
            return Err(Error::AlreadyTagged);
        }
        (header, HEADER_LEN as u64)
    } else {
        // no tag at all, so every byte of the input is audio
        log::debug!("No ID3 header found, writing a fresh one");
        (TagHeader::default(), 0)
    };

    output.write_all(&header.as_bytes())?;
    for (field, text) in frames {
        log::trace!("Writing {} ({} bytes)", field, text.len());
        write_text_frame(output, &field.frame_id(), [0; 2], &text)?;
    }

    input.seek(SeekFrom::Start(copy_from))?;
    let copied = copy_chunked(input, output, options.copy_buffer_size)?;
    log::debug!("Copied {} bytes after the new tag", copied);

    output.flush()?;
    Ok(())
}
