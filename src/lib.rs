pub mod config;
pub mod errors;
mod macros;

// For submodules I only expose the public API to the parent module

pub mod shared {
    pub mod logger;
}

pub mod memory {
    pub mod allocator;
    mod frame;
    mod frame_pool;
    mod page_table;

    pub use frame::{Frame, FrameId, FrameOwner};
    pub use frame_pool::FramePool;
    pub use page_table::PageTable;
}

pub mod sim {
    mod process;
    mod translation;

    pub use process::{Process, ProcessId};
    pub use translation::{decompose, translate, Translation};
}
