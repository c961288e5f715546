use super::frame::{Frame, FrameId, FrameOwner};

/// The pool of physical memory frames shared by every simulated process.
///
/// The pool is created once with every frame free and lives for the whole
/// run. Frames move from free to claimed one at a time and never back: this
/// design has no deallocation and no replacement, so a full pool stays full.
pub struct FramePool {
    frames: Vec<Frame>,
}

impl FramePool {
    /// Creates a pool with `capacity` free frames.
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "frame pool capacity must be non-zero");
        assert!(
            capacity <= FrameId::MAX as usize + 1,
            "frame pool capacity out of FrameId range",
        );

        let mut frames = Vec::with_capacity(capacity);
        for _ in 0..capacity {
            frames.push(Frame::default());
        }

        FramePool { frames }
    }

    pub fn capacity(&self) -> usize {
        self.frames.len()
    }

    pub fn get(&self, frame_id: FrameId) -> &Frame {
        assert!(
            (frame_id as usize) < self.frames.len(),
            "frame id out of bounds",
        );
        &self.frames[frame_id as usize]
    }

    /// First-fit scan: the lowest-indexed free frame, or None when the pool
    /// is exhausted.
    pub fn first_free(&self) -> Option<FrameId> {
        self.frames
            .iter()
            .position(Frame::is_free)
            .map(|index| index as FrameId)
    }

    /// Hands `frame_id` to `owner`. Panics if the frame is already claimed;
    /// callers pick the frame with [`FramePool::first_free`] first.
    pub(super) fn claim(&mut self, frame_id: FrameId, owner: FrameOwner) {
        assert!(
            (frame_id as usize) < self.frames.len(),
            "frame id out of bounds",
        );
        self.frames[frame_id as usize].claim(owner);
    }

    /// The number of claimed frames, in O(capacity).
    pub fn occupied_count(&self) -> usize {
        self.frames.iter().filter(|frame| !frame.is_free()).count()
    }

    pub fn is_full(&self) -> bool {
        self.occupied_count() == self.capacity()
    }
}
