use crate::macros::static_assert;

pub const CARGO_PKG_NAME: &str = env!("CARGO_PKG_NAME");

/// The size (in bytes) of a virtual page, and therefore of a physical frame.
pub const PAGE_SIZE: usize = 4096;

/// The number of frames in physical memory.
/// The more frames, the more pages can be resident at once. Once every frame
/// is claimed, further page faults cannot be serviced (there is no eviction).
pub const NUM_FRAMES: usize = 16;

/// The number of virtual pages in each process's address space.
pub const PAGES_PER_PROCESS: usize = 32;

/// How many processes the demo driver simulates.
pub const NUM_PROCESSES: usize = 2;

/// How many virtual addresses each demo process accesses.
pub const ACCESSES_PER_PROCESS: usize = 5;

static_assert!(PAGE_SIZE.is_power_of_two());
static_assert!(NUM_FRAMES > 0, "physical memory needs at least one frame");
static_assert!(PAGES_PER_PROCESS > 0);
