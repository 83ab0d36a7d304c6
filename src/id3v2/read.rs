use std::io::prelude::*;
use std::io::SeekFrom;

use crate::id3v2::structure::{Frame, FrameHeader, TagHeader, FRAME_HEADER_LEN, HEADER_LEN};
use crate::tools::read_up_to;
use crate::Error;

pub fn header<T: Read + Seek>(input: &mut T) -> Result<TagHeader, Error> {
    input.seek(SeekFrom::Start(0))?;

    // identifier + version is all that gets checked
    let mut arr = [0; 5];
    let n = read_up_to(input, &mut arr)?;
    TagHeader::parse(&arr[..n])
}

/// What the frame stream yields.
#[derive(Debug, PartialEq, Eq)]
pub enum Item {
    Frame(Frame),
    /// Bytes that could not form a whole frame before the end of the file.
    /// Whatever follows them in the input has not been read.
    Truncated(Vec<u8>),
}

/// Walks the frames that follow the tag header.
///
/// ID3v2.3 as used here carries no frame count or end marker,
/// so the walk only stops at the end of the input.
pub struct Frames<'a, T> {
    input: &'a mut T,
    remaining: u64,
}

impl<'a, T: Read + Seek> Frames<'a, T> {
    pub fn new(input: &'a mut T) -> Result<Frames<'a, T>, Error> {
        let len = input.seek(SeekFrom::End(0))?;
        input.seek(SeekFrom::Start(HEADER_LEN as u64))?;

        Ok(Frames {
            input,
            remaining: len.saturating_sub(HEADER_LEN as u64),
        })
    }

    pub fn next_item(&mut self) -> Result<Option<Item>, Error> {
        let mut arr = [0; FRAME_HEADER_LEN];
        let n = read_up_to(&mut *self.input, &mut arr)?;
        self.remaining = self.remaining.saturating_sub(n as u64);

        match n {
            0 => return Ok(None),
            // not even a whole frame id, this is the regular way out
            1..=3 => {
                log::trace!("{} trailing bytes after the last frame", n);
                return Ok(Some(Item::Truncated(arr[..n].to_vec())));
            }
            FRAME_HEADER_LEN => (),
            _ => {
                log::warn!("Frame header cut short after {} bytes", n);
                return Ok(Some(Item::Truncated(arr[..n].to_vec())));
            }
        }

        let header = FrameHeader::parse(&arr);
        log::trace!("Read frame header {:?}", header);

        // don't trust the size enough to allocate for it
        if u64::from(header.size) > self.remaining {
            log::warn!(
                "Frame {} claims {} bytes, only {} left",
                String::from_utf8_lossy(&header.id),
                header.size,
                self.remaining
            );
            return Ok(Some(Item::Truncated(arr.to_vec())));
        }

        let mut payload = Vec::new();
        if payload.try_reserve_exact(header.size as usize).is_err() {
            return Err(Error::OutOfMemory(header.size));
        }
        self.input
            .by_ref()
            .take(u64::from(header.size))
            .read_to_end(&mut payload)?;
        self.remaining -= payload.len() as u64;

        // the file shrank under us
        if payload.len() != header.size as usize {
            log::warn!("Frame payload cut short after {} bytes", payload.len());
            let mut bytes = arr.to_vec();
            bytes.append(&mut payload);
            return Ok(Some(Item::Truncated(bytes)));
        }

        Ok(Some(Item::Frame(Frame { header, payload })))
    }

    /// Reads at most `limit` more bytes, stopping at the end of the input.
    pub fn read_rest(&mut self, limit: u64) -> Result<Vec<u8>, Error> {
        let mut bytes = Vec::new();
        self.input
            .by_ref()
            .take(limit.min(self.remaining))
            .read_to_end(&mut bytes)?;
        self.remaining -= bytes.len() as u64;
        Ok(bytes)
    }

    /// Gives back the input, positioned after the last item read.
    pub fn into_inner(self) -> &'a mut T {
        self.input
    }
}
