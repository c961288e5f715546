use std::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TranslationError {
    /// Every frame in physical memory is claimed, so the page fault cannot
    /// be serviced. There is no eviction: the access fails.
    NoFreeFrame,
    /// The virtual page number falls outside the process's page table.
    PageOutOfRange,
}

impl std::fmt::Display for TranslationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TranslationError::NoFreeFrame => write!(f, "No free frame in physical memory"),
            TranslationError::PageOutOfRange => {
                write!(f, "Virtual page number is outside the page table")
            }
        }
    }
}

impl Error for TranslationError {}
