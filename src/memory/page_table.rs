use super::frame::FrameId;
use crate::errors::TranslationError;

/// A process's page table: virtual page number to physical frame id.
/// Unmapped pages hold None, there is no sentinel arithmetic.
pub struct PageTable {
    entries: Vec<Option<FrameId>>,
}

impl PageTable {
    /// Creates a table of `num_pages` entries, all unmapped.
    pub fn new(num_pages: usize) -> Self {
        assert!(num_pages > 0, "a page table needs at least one page");
        PageTable {
            entries: vec![None; num_pages],
        }
    }

    /// The number of virtual pages this table covers.
    pub fn num_pages(&self) -> usize {
        self.entries.len()
    }

    /// Looks up `page`. Err for a page outside the table, Ok(None) for a
    /// valid page with no mapping yet.
    pub fn lookup(&self, page: usize) -> Result<Option<FrameId>, TranslationError> {
        self.entries
            .get(page)
            .copied()
            .ok_or(TranslationError::PageOutOfRange)
    }

    /// Records that `page` is now backed by `frame`. Mappings are permanent:
    /// remapping an already-mapped page is a bug in the caller.
    pub(super) fn map(&mut self, page: usize, frame: FrameId) {
        assert!(page < self.entries.len(), "page number out of bounds");
        assert!(
            self.entries[page].is_none(),
            "page {page} is already mapped",
        );
        self.entries[page] = Some(frame);
    }

    pub fn mapped_count(&self) -> usize {
        self.entries.iter().filter(|entry| entry.is_some()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_table_is_entirely_unmapped() {
        let table = PageTable::new(8);
        assert_eq!(table.num_pages(), 8);
        assert_eq!(table.mapped_count(), 0);
        for page in 0..8 {
            assert_eq!(table.lookup(page), Ok(None));
        }
    }

    #[test]
    fn map_then_lookup() {
        let mut table = PageTable::new(4);
        table.map(2, 5);
        assert_eq!(table.lookup(2), Ok(Some(5)));
        assert_eq!(table.lookup(3), Ok(None));
        assert_eq!(table.mapped_count(), 1);
    }

    #[test]
    fn lookup_out_of_range_is_an_error() {
        let table = PageTable::new(4);
        assert_eq!(table.lookup(4), Err(TranslationError::PageOutOfRange));
        assert_eq!(table.lookup(100), Err(TranslationError::PageOutOfRange));
    }

    #[test]
    #[should_panic(expected = "already mapped")]
    fn remapping_a_page_panics() {
        let mut table = PageTable::new(4);
        table.map(1, 0);
        table.map(1, 2);
    }
}
