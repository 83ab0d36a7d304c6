use std::fmt;

/// The six text frames this crate understands, in the order they get written.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum TagField {
    Title,
    Artist,
    Album,
    Year,
    Genre,
    Comment,
}

impl TagField {
    pub const ALL: [TagField; 6] = [
        TagField::Title,
        TagField::Artist,
        TagField::Album,
        TagField::Year,
        TagField::Genre,
        TagField::Comment,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TagField::Title => "TIT2",
            TagField::Artist => "TPE1",
            TagField::Album => "TALB",
            TagField::Year => "TYER",
            TagField::Genre => "TCON",
            TagField::Comment => "COMM",
        }
    }

    pub fn frame_id(self) -> [u8; 4] {
        let mut id = [0; 4];
        id.copy_from_slice(self.as_str().as_bytes());
        id
    }

    pub fn from_frame_id(id: &[u8]) -> Option<TagField> {
        TagField::ALL
            .iter()
            .copied()
            .find(|field| field.as_str().as_bytes() == id)
    }

    pub fn label(self) -> &'static str {
        match self {
            TagField::Title => "Title",
            TagField::Artist => "Artist",
            TagField::Album => "Album",
            TagField::Year => "Year",
            TagField::Genre => "Genre",
            TagField::Comment => "Comment",
        }
    }
}

impl fmt::Display for TagField {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded text frames of a single file.
///
/// A field is `None` when the file has no frame for it. A frame that is
/// present but empty reads back as `Some("")`.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct TagRecord {
    pub title: Option<String>,
    pub artist: Option<String>,
    pub album: Option<String>,
    pub year: Option<String>,
    pub genre: Option<String>,
    pub comment: Option<String>,
}

impl TagRecord {
    pub fn get(&self, field: TagField) -> Option<&str> {
        match field {
            TagField::Title => self.title.as_deref(),
            TagField::Artist => self.artist.as_deref(),
            TagField::Album => self.album.as_deref(),
            TagField::Year => self.year.as_deref(),
            TagField::Genre => self.genre.as_deref(),
            TagField::Comment => self.comment.as_deref(),
        }
    }

    pub(crate) fn slot_mut(&mut self, field: TagField) -> &mut Option<String> {
        match field {
            TagField::Title => &mut self.title,
            TagField::Artist => &mut self.artist,
            TagField::Album => &mut self.album,
            TagField::Year => &mut self.year,
            TagField::Genre => &mut self.genre,
            TagField::Comment => &mut self.comment,
        }
    }

    pub fn is_empty(&self) -> bool {
        TagField::ALL.iter().all(|f| self.get(*f).is_none())
    }

    /// Present fields in write order.
    pub fn iter(&self) -> impl Iterator<Item = (TagField, &str)> {
        TagField::ALL
            .iter()
            .filter_map(move |f| self.get(*f).map(|v| (*f, v)))
    }
}

// one "Label: value" line per field, Unknown when absent
impl fmt::Display for TagRecord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for field in TagField::ALL.iter() {
            writeln!(
                f,
                "{}: {}",
                field.label(),
                self.get(*field).unwrap_or("Unknown")
            )?;
        }
        Ok(())
    }
}
