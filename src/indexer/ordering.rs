use std::cmp::Reverse;

use crate::models::{ArchiveEntry, ArchiveIndex};

/// Sort entries by folder order (highest first), then file order (lowest first)
///
/// The sort is stable: entries with equal keys keep their walk order, so repeated runs
/// over an unchanged tree give the same sequence.
pub fn sort_entries(entries: &mut [ArchiveEntry]) {
    entries.sort_by_key(|entry| (Reverse(entry.folder_order), entry.file_order));
}

/// Sort each collection of the index independently
pub fn sort_index(index: &mut ArchiveIndex) {
    sort_entries(&mut index.photos);
    sort_entries(&mut index.polaroids);
    sort_entries(&mut index.thoughts);
}
