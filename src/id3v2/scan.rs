use std::io::prelude::*;

use crate::id3v2::read::{Frames, Item};
use crate::id3v2::structure::{Frame, FrameHeader, FRAME_HEADER_LEN};
use crate::id3v2::tools::is_recognized;
use crate::tools::encoding::decode_iso_8859_1;
use crate::Error;
use crate::TagField;
use crate::TagRecord;

// text starts after the encoding byte; an empty frame is an empty string
pub fn text(frame: &Frame) -> String {
    match frame.payload.split_first() {
        Some((_, text)) => decode_iso_8859_1(text),
        None => String::new(),
    }
}

// a recognized frame cut off by the end of the file keeps the text it has
fn partial_frame<T: Read + Seek>(
    bytes: &[u8],
    frames: &mut Frames<T>,
) -> Result<Option<Frame>, Error> {
    if bytes.len() < FRAME_HEADER_LEN || !is_recognized(&bytes[0..4]) {
        return Ok(None);
    }
    let mut arr = [0; FRAME_HEADER_LEN];
    arr.copy_from_slice(&bytes[..FRAME_HEADER_LEN]);
    let header = FrameHeader::parse(&arr);

    let mut payload = bytes[FRAME_HEADER_LEN..].to_vec();
    let missing = u64::from(header.size).saturating_sub(payload.len() as u64);
    payload.append(&mut frames.read_rest(missing)?);

    // not even the encoding byte
    if payload.is_empty() {
        return Ok(None);
    }
    Ok(Some(Frame { header, payload }))
}

pub fn tags<T: Read + Seek>(input: &mut T) -> Result<TagRecord, Error> {
    let mut t = TagRecord::default();
    let mut frames = Frames::new(input)?;

    while let Some(item) = frames.next_item()? {
        let frame = match item {
            Item::Frame(f) => f,
            Item::Truncated(bytes) => match partial_frame(&bytes, &mut frames)? {
                Some(f) => f,
                None => break,
            },
        };

        // later frames with the same id win
        match TagField::from_frame_id(&frame.header.id) {
            Some(field) => *t.slot_mut(field) = Some(text(&frame)),
            None => log::trace!(
                "Skipping frame {}",
                String::from_utf8_lossy(&frame.header.id)
            ),
        }
    }

    Ok(t)
}

/// True if any frame after the header is one of the text frames we write.
pub fn has_recognized_frames<T: Read + Seek>(input: &mut T) -> Result<bool, Error> {
    let mut frames = Frames::new(input)?;

    while let Some(item) = frames.next_item()? {
        match item {
            Item::Frame(f) if is_recognized(&f.header.id) => return Ok(true),
            Item::Frame(_) => (),
            Item::Truncated(bytes) => {
                return Ok(bytes.len() >= FRAME_HEADER_LEN && is_recognized(&bytes[0..4]))
            }
        }
    }
    Ok(false)
}
