use log::{debug, info, warn};

use super::frame::{FrameId, FrameOwner};
use super::frame_pool::FramePool;
use super::page_table::PageTable;
use crate::errors::TranslationError;
use crate::sim::ProcessId;

/// Services a page fault: picks the first free frame in pool order and binds
/// it to `(process, page)` on both sides, the frame's owner and the page
/// table entry. Both writes happen before returning so the pool and the
/// table never disagree.
///
/// Fails with [`TranslationError::NoFreeFrame`] when the pool is exhausted,
/// leaving the pool and the table untouched.
pub fn allocate_frame(
    pool: &mut FramePool,
    table: &mut PageTable,
    process: ProcessId,
    page: usize,
) -> Result<FrameId, TranslationError> {
    debug_assert!(
        matches!(table.lookup(page), Ok(None)),
        "allocation is only requested for valid unmapped pages",
    );

    let frame_id = match pool.first_free() {
        Some(frame_id) => frame_id,
        None => {
            warn!("out of frames: virtual page {page} of process {process} cannot be mapped");
            return Err(TranslationError::NoFreeFrame);
        }
    };

    pool.claim(frame_id, FrameOwner { process, page });
    table.map(page, frame_id);

    info!("allocating virtual page {page} of process {process} to physical frame {frame_id}");
    debug!(
        "pool occupancy after allocation: {}/{}",
        pool.occupied_count(),
        pool.capacity(),
    );

    Ok(frame_id)
}
