//! Configuration constants for pagesim.

/// Number of physical frames used when none is given.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// The textbook reference string.
///
/// With 3 frames it produces 15 faults under FIFO, 12 under LRU
/// and 9 under Optimal.
pub const DEFAULT_TRACE: [u32; 22] = [
    7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1,
];
