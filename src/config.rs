/// Options to control how tags get written with [`write_with_options`](crate::write_with_options)
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct WriteOptions {
    pub(crate) allow_duplicate_frames: bool,
    pub(crate) copy_buffer_size: usize,
}

impl WriteOptions {
    /// Default size of the chunks used to copy the audio after the new tag
    pub const DEFAULT_COPY_BUFFER_SIZE: usize = 1024;

    /// Creates a new `WriteOptions`, alias for `Default` implementation
    pub const fn new() -> Self {
        Self {
            allow_duplicate_frames: false,
            copy_buffer_size: Self::DEFAULT_COPY_BUFFER_SIZE,
        }
    }

    /// Whether to write into a file that already has TIT2/TPE1/TALB/TYER/TCON/COMM frames
    ///
    /// The writer puts the new frames in front of everything that follows the old header, so the
    /// old frames stay in the file and shadow the new ones on the next read. With this left at
    /// `false` such a write fails with [`Error::AlreadyTagged`](crate::Error::AlreadyTagged).
    ///
    /// # Examples
    ///
    /// ```rust
    /// use mp3tagreader::WriteOptions;
    ///
    /// let options = WriteOptions::new().allow_duplicate_frames(true);
    /// ```
    pub fn allow_duplicate_frames(mut self, allow_duplicate_frames: bool) -> Self {
        self.allow_duplicate_frames = allow_duplicate_frames;
        self
    }

    /// Set the chunk size in bytes used when copying the rest of the file
    ///
    /// A size of 0 is treated as 1.
    pub fn copy_buffer_size(mut self, copy_buffer_size: usize) -> Self {
        self.copy_buffer_size = copy_buffer_size.max(1);
        self
    }
}

impl Default for WriteOptions {
    /// The default implementation for `WriteOptions`
    ///
    /// The defaults are as follows:
    ///
    /// ```rust,ignore
    /// WriteOptions {
    ///     allow_duplicate_frames: false,
    ///     copy_buffer_size: 1024,
    /// }
    /// ```
    fn default() -> Self {
        Self::new()
    }
}
