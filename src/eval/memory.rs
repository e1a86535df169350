//! Heap usage tracking.
//!
//! [`TrackingAllocator`] forwards to the system allocator while keeping
//! process-wide counters of live and peak heap bytes. It only takes effect
//! when a binary installs it:
//!
//! ```ignore
//! #[global_allocator]
//! static ALLOC: u_loadbal::eval::TrackingAllocator = u_loadbal::eval::TrackingAllocator::new();
//! ```
//!
//! Without it, every reading is 0.

use std::alloc::{GlobalAlloc, Layout, System};
use std::sync::atomic::{AtomicUsize, Ordering};

static CURRENT: AtomicUsize = AtomicUsize::new(0);
static PEAK: AtomicUsize = AtomicUsize::new(0);

/// System allocator wrapper that records live and peak heap bytes.
#[derive(Debug, Default, Clone, Copy)]
pub struct TrackingAllocator;

impl TrackingAllocator {
    /// Creates the allocator (usable in a `static`).
    pub const fn new() -> Self {
        Self
    }
}

fn record_growth(bytes: usize) {
    let now = CURRENT.fetch_add(bytes, Ordering::Relaxed) + bytes;
    PEAK.fetch_max(now, Ordering::Relaxed);
}

fn record_shrink(bytes: usize) {
    CURRENT.fetch_sub(bytes, Ordering::Relaxed);
}

// SAFETY: every method forwards to `System` with the caller's pointer and
// layout unchanged; the counters are plain atomics and never allocate.
unsafe impl GlobalAlloc for TrackingAllocator {
    unsafe fn alloc(&self, layout: Layout) -> *mut u8 {
        // SAFETY: the caller upholds `GlobalAlloc::alloc`'s contract for `layout`.
        let ptr = System.alloc(layout);
        if !ptr.is_null() {
            record_growth(layout.size());
        }
        ptr
    }

    unsafe fn alloc_zeroed(&self, layout: Layout) -> *mut u8 {
        // SAFETY: as for `alloc`.
        let ptr = System.alloc_zeroed(layout);
        if !ptr.is_null() {
            record_growth(layout.size());
        }
        ptr
    }

    unsafe fn dealloc(&self, ptr: *mut u8, layout: Layout) {
        // SAFETY: `ptr` was returned by this allocator, hence by `System`, for `layout`.
        System.dealloc(ptr, layout);
        record_shrink(layout.size());
    }

    unsafe fn realloc(&self, ptr: *mut u8, layout: Layout, new_size: usize) -> *mut u8 {
        // SAFETY: `ptr` and `layout` come from a prior `System` allocation.
        let new_ptr = System.realloc(ptr, layout, new_size);
        if !new_ptr.is_null() {
            let old_size = layout.size();
            if new_size > old_size {
                record_growth(new_size - old_size);
            } else {
                record_shrink(old_size - new_size);
            }
        }
        new_ptr
    }
}

/// Live heap bytes.
pub fn current_bytes() -> usize {
    CURRENT.load(Ordering::Relaxed)
}

/// Highest live heap bytes since the last [`MemoryWindow::open`].
pub fn peak_bytes() -> usize {
    PEAK.load(Ordering::Relaxed)
}

/// Measures the peak heap growth over a span of execution.
///
/// Opening a window lowers the recorded peak to the current level; the
/// window then reports how far above that baseline the peak rose. Counters
/// are process-wide, so allocations by other threads are included, and
/// opening a second window while one is live resets the first one's peak.
#[derive(Debug, Clone, Copy)]
pub struct MemoryWindow {
    baseline: usize,
}

impl MemoryWindow {
    /// Starts a measurement window.
    pub fn open() -> Self {
        let baseline = current_bytes();
        PEAK.store(baseline, Ordering::Relaxed);
        Self { baseline }
    }

    /// Peak bytes allocated above the baseline so far.
    pub fn peak(&self) -> usize {
        peak_bytes().saturating_sub(self.baseline)
    }
}
