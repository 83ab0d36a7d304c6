mod types;
pub use crate::types::TagField;
pub use crate::types::TagRecord;

mod config;
pub use crate::config::WriteOptions;

mod id3v2;
pub use crate::id3v2::structure::FrameHeader;
pub use crate::id3v2::structure::TagHeader;
pub use crate::id3v2::tools::{decode_size, encode_size, is_recognized};
pub use crate::id3v2::EditOutcome;

// stream-level access, for callers that already hold the bytes
pub use crate::id3v2::edit as edit_stream;
pub use crate::id3v2::get as read_from;
pub use crate::id3v2::set as write_to;

mod dispatch;
mod tools;


pub use crate::dispatch::edit;
pub use crate::dispatch::read;
pub use crate::dispatch::write;
pub use crate::dispatch::write_with_options;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Could not open file {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("File is not an ID3v2 MP3 file")]
    NotAnId3File,

    #[error("Unsupported ID3 version: {0}.{1}")]
    UnsupportedVersion(u8, u8),

    #[error("File extension is not .mp3: {}", .0.display())]
    WrongExtension(PathBuf),

    #[error("Memory allocation failed for {0} bytes of frame data")]
    OutOfMemory(u32),

    #[error(
        "Failed to replace {} with the updated file (kept at {}): {}",
        .target.display(),
        .temp.display(),
        .source
    )]
    ReplaceFailed {
        temp: PathBuf,
        target: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    // writing on top of existing text frames would duplicate them
    #[error("File already carries recognized ID3 frames, edit them instead")]
    AlreadyTagged,

    #[error("IO error: {0}")]
    IOError(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
