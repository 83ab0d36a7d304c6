pub mod encoding;

use std::io;
use std::io::prelude::*;

/// Fills as much of `buf` as the input still has, returning the byte count.
/// Unlike `read_exact`, running into the end of the input is not an error.
pub fn read_up_to<R: Read>(input: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut filled = 0;
    while filled < buf.len() {
        match input.read(&mut buf[filled..]) {
            Ok(0) => break,
            Ok(n) => filled += n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(filled)
}

/// Copies the rest of `input` into `output` through a buffer of `chunk_size` bytes.
pub fn copy_chunked<R: Read, W: Write>(
    input: &mut R,
    output: &mut W,
    chunk_size: usize,
) -> io::Result<u64> {
    let mut buffer = vec![0; chunk_size.max(1)];
    let mut copied = 0;
    loop {
        let n = match input.read(&mut buffer) {
            Ok(0) => return Ok(copied),
            Ok(n) => n,
            Err(ref e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        };
        output.write_all(&buffer[..n])?;
        copied += n as u64;
    }
}
