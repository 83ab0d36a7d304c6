use std::io::prelude::*;
use std::io::SeekFrom;

use crate::id3v2::read::{self, Frames, Item};
use crate::id3v2::structure::HEADER_LEN;
use crate::id3v2::write_text_frame;
use crate::tools::copy_chunked;
use crate::tools::encoding::encode_iso_8859_1;
use crate::tools::read_up_to;
use crate::Error;
use crate::WriteOptions;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum EditOutcome {
    Modified,
    /// No frame had the requested id; the output is a plain copy.
    NotFound,
}

/// Copies the tag frame by frame, replacing the text of the first frame
/// whose id is `frame_id`.
///
/// The tag header, every other frame (including later ones with the same
/// id) and the bytes after the last whole frame are written back byte for
/// byte.
pub fn edit<R: Read + Seek, W: Write>(
    input: &mut R,
    output: &mut W,
    frame_id: &[u8; 4],
    value: &str,
) -> Result<EditOutcome, Error> {
    let text = encode_iso_8859_1(value)?;
    read::header(input)?;

    // flags and tag size stay as they were
    input.seek(SeekFrom::Start(0))?;
    let mut arr = [0; HEADER_LEN];
    let n = read_up_to(input, &mut arr)?;
    output.write_all(&arr[..n])?;

    let mut modified = false;
    let mut frames = Frames::new(input)?;

    let trailing = loop {
        let frame = match frames.next_item()? {
            Some(Item::Frame(f)) => f,
            Some(Item::Truncated(bytes)) => break Some(bytes),
            None => break None,
        };

        if !modified && frame.header.id == *frame_id {
            log::debug!(
                "Replacing {} ({} bytes -> {} bytes)",
                String::from_utf8_lossy(frame_id),
                frame.header.size,
                text.len() + 1
            );
            write_text_frame(output, frame_id, frame.header.flags, &text)?;
            modified = true;
        } else {
            output.write_all(&frame.header.as_bytes())?;
            output.write_all(&frame.payload)?;
        }
    };

    if let Some(bytes) = trailing {
        output.write_all(&bytes)?;
        copy_chunked(
            frames.into_inner(),
            output,
            WriteOptions::DEFAULT_COPY_BUFFER_SIZE,
        )?;
    }
    output.flush()?;

    Ok(match modified {
        true => EditOutcome::Modified,
        false => EditOutcome::NotFound,
    })
}
