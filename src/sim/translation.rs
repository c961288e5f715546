use log::debug;

use super::process::Process;
use crate::config::PAGE_SIZE;
use crate::errors::TranslationError;
use crate::memory::{allocator, FrameId, FramePool};

/// The outcome of one successful translation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Translation {
    pub physical_address: usize,
    pub frame: FrameId,
    pub page_number: usize,
    pub offset: usize,
    /// Whether this access page-faulted and a frame was allocated for it.
    pub faulted: bool,
}

/// Splits a virtual address into (page number, offset within the page).
pub fn decompose(virtual_address: usize) -> (usize, usize) {
    (virtual_address / PAGE_SIZE, virtual_address % PAGE_SIZE)
}

/// Translates `virtual_address` for `process`.
///
/// A mapped page resolves without touching the pool. An unmapped page is a
/// page fault and goes through the allocator; if that fails the address
/// stays unmapped and the same access would fault again. The physical
/// address is the claimed frame's base plus the in-page offset.
pub fn translate(
    process: &mut Process,
    pool: &mut FramePool,
    virtual_address: usize,
) -> Result<Translation, TranslationError> {
    let (page_number, offset) = decompose(virtual_address);

    let (frame, faulted) = match process.page_table().lookup(page_number)? {
        Some(frame) => (frame, false),
        None => {
            debug!(
                "page fault: virtual page {page_number} of process {} is unmapped",
                process.id(),
            );
            let process_id = process.id();
            let frame =
                allocator::allocate_frame(pool, process.page_table_mut(), process_id, page_number)?;
            (frame, true)
        }
    };

    Ok(Translation {
        physical_address: frame as usize * PAGE_SIZE + offset,
        frame,
        page_number,
        offset,
        faulted,
    })
}
