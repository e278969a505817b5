#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Photo,
    Polaroid,
    Thought,
}

/// A single archive file with the metadata inferred from its path.
///
/// `content` is only set for thoughts, and only when the text file is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchiveEntry {
    pub kind: EntryKind,
    /// Slash-normalized path relative to the base directory
    pub path: String,
    pub folder_label: String,
    pub year: Option<i32>,
    pub month: Option<u8>,
    pub folder_order: i64,
    pub file_order: i64,
    /// Modification time in seconds since the Unix epoch, 0.0 when unknown
    pub mtime: f64,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ArchiveIndex {
    pub photos: Vec<ArchiveEntry>,
    pub polaroids: Vec<ArchiveEntry>,
    pub thoughts: Vec<ArchiveEntry>,
}

impl ArchiveIndex {
    pub fn is_empty(&self) -> bool {
        self.photos.is_empty() && self.polaroids.is_empty() && self.thoughts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.photos.len() + self.polaroids.len() + self.thoughts.len()
    }

    /// Route an entry to the collection matching its kind
    pub fn push(&mut self, entry: ArchiveEntry) {
        match entry.kind {
            EntryKind::Photo => self.photos.push(entry),
            EntryKind::Polaroid => self.polaroids.push(entry),
            EntryKind::Thought => self.thoughts.push(entry),
        }
    }
}
