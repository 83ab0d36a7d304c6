use std::fs::File;
use std::io::prelude::*;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use tempfile::{NamedTempFile, PersistError};

use crate::id3v2;
use crate::id3v2::EditOutcome;
use crate::tools::encoding::encode_iso_8859_1;
use crate::Error;
use crate::TagRecord;
use crate::WriteOptions;

fn open(path: &Path) -> Result<BufReader<File>, Error> {
    match File::open(path) {
        Ok(file) => Ok(BufReader::new(file)),
        Err(e) => {
            log::debug!("Could not open {}: {}", path.display(), e);
            Err(Error::FileNotFound(path.to_path_buf()))
        }
    }
}

// case sensitive, ".MP3" does not count
fn has_mp3_extension(path: &Path) -> bool {
    path.to_string_lossy().ends_with(".mp3")
}

fn check_extension(path: &Path) -> Result<(), Error> {
    match has_mp3_extension(path) {
        true => Ok(()),
        false => Err(Error::WrongExtension(path.to_path_buf())),
    }
}

// the same checks `read` makes before it walks the frames
fn preflight(path: &Path) -> Result<BufReader<File>, Error> {
    let mut file = open(path)?;
    id3v2::read::header(&mut file)?;
    check_extension(path)?;
    Ok(file)
}

// randomly named sibling, so the final rename stays on one file system
fn temp_file_for(path: &Path) -> Result<BufWriter<NamedTempFile>, Error> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let tmp = tempfile::Builder::new()
        .prefix(".mp3tagreader-")
        .suffix(".tmp")
        .tempfile_in(dir)?;
    log::trace!("Writing to temporary file {}", tmp.path().display());
    Ok(BufWriter::new(tmp))
}

// replace original file
fn commit(tmp: BufWriter<NamedTempFile>, path: &Path) -> Result<(), Error> {
    let tmp = tmp.into_inner().map_err(|e| e.into_error())?;
    // temporary files are created 0600
    if let Ok(meta) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(meta.permissions())?;
    }
    tmp.as_file().sync_all()?;

    match tmp.persist(path) {
        Ok(_) => Ok(()),
        Err(PersistError { error, file }) => {
            // leave both files around for manual recovery
            let temp = match file.keep() {
                Ok((_, p)) => p,
                Err(e) => e.file.path().to_path_buf(),
            };
            Err(Error::ReplaceFailed {
                temp,
                target: path.to_path_buf(),
                source: error,
            })
        }
    }
}

/// Reads the recognized text frames of an ID3v2.3 tagged `.mp3` file.
///
/// # Errors
///
/// * [`Error::FileNotFound`] if the file can't be opened
/// * [`Error::NotAnId3File`] if it doesn't start with `ID3`
/// * [`Error::UnsupportedVersion`] for anything but ID3v2.3
/// * [`Error::WrongExtension`] if the path doesn't end in `.mp3`
/// * [`Error::OutOfMemory`] if a frame's payload can't be allocated
pub fn read<P: AsRef<Path>>(path: P) -> Result<TagRecord, Error> {
    let path = path.as_ref();
    let mut file = preflight(path)?;
    id3v2::get(&mut file)
}

/// Writes `tags` as a new tag in front of the file's contents, with the default [`WriteOptions`].
pub fn write<P: AsRef<Path>>(path: P, tags: &TagRecord) -> Result<(), Error> {
    write_with_options(path, tags, WriteOptions::default())
}

/// Writes `tags` as a new tag in front of the file's contents.
///
/// Absent fields produce no frame. A value that isn't ISO-8859-1 text, or
/// holds a null byte, is [`Error::InvalidArguments`] and the file is left
/// alone. The file is rewritten through a temporary
/// file in the same directory, which replaces the original once complete.
pub fn write_with_options<P: AsRef<Path>>(
    path: P,
    tags: &TagRecord,
    options: WriteOptions,
) -> Result<(), Error> {
    let path = path.as_ref();

    for (_, value) in tags.iter() {
        encode_iso_8859_1(value)?;
    }

    let mut tmp = {
        let mut file = open(path)?;
        let mut tmp = temp_file_for(path)?;
        // on failure the temporary file is removed when dropped
        id3v2::set(&mut file, &mut tmp, tags, options)?;
        tmp
    };
    tmp.flush()?;

    commit(tmp, path)
}

/// Replaces the text of the first frame with id `frame_id`, keeping every other frame as is.
///
/// The file is rewritten even if no frame matched, in which case
/// [`EditOutcome::NotFound`] is returned.
pub fn edit<P: AsRef<Path>>(path: P, frame_id: &str, value: &str) -> Result<EditOutcome, Error> {
    let path = path.as_ref();

    let id = frame_id_bytes(frame_id)?;
    encode_iso_8859_1(value)?;

    let (mut tmp, outcome) = {
        // fail before a temporary file exists
        let mut file = preflight(path)?;
        let mut tmp = temp_file_for(path)?;
        let outcome = id3v2::edit(&mut file, &mut tmp, &id, value)?;
        (tmp, outcome)
    };
    tmp.flush()?;

    // a copy without changes still replaces the original
    commit(tmp, path)?;
    if outcome == EditOutcome::NotFound {
        log::debug!("Frame {} not found in {}", frame_id, path.display());
    }
    Ok(outcome)
}

fn frame_id_bytes(frame_id: &str) -> Result<[u8; 4], Error> {
    let bytes = frame_id.as_bytes();
    if bytes.len() != 4 {
        return Err(Error::InvalidArguments(format!(
            "frame id must be 4 bytes, got \"{}\"",
            frame_id
        )));
    }
    let mut id = [0; 4];
    id.copy_from_slice(bytes);
    Ok(id)
}
