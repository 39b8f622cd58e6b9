//! Search results types.

use dialpad_core::types::Record;

/// Visible records, borrowed from the [`SearchEngine`](crate::SearchEngine).
///
/// Iterates in load order without copying records.
pub struct SearchResults<'a> {
    pub(crate) records: &'a [Record],
    pub(crate) visible: &'a [usize],
}

impl<'a> SearchResults<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> {
        let records = self.records;
        self.visible.iter().map(move |&index| &records[index])
    }

    pub fn len(&self) -> usize {
        self.visible.len()
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Display names of the visible records, one per result row.
    pub fn display_names(&self) -> Vec<String> {
        self.iter().map(Record::display_name).collect()
    }
}
