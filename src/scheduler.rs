//! Next-frame callback scheduling.
//!
//! The momentum animation is a chain of one-shot frame callbacks: each tick
//! decides whether to request another. A [`FrameScheduler`] hands out an
//! opaque [`FrameHandle`] per request and later reports which handles are due.
//! Cancelling a handle that is unknown or already delivered does nothing.

/// Opaque identifier for one scheduled frame callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameHandle(u64);

impl FrameHandle {
    pub fn id(self) -> u64 {
        self.0
    }
}

/// Schedules callbacks for the next display refresh.
pub trait FrameScheduler {
    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> FrameHandle;

    /// Cancels a pending request. Idempotent.
    fn cancel_frame(&mut self, handle: FrameHandle);

    /// Removes and returns every handle due on this frame, in request order.
    ///
    /// Handles requested while the returned handles are being processed
    /// belong to the following frame.
    fn take_due(&mut self) -> Vec<FrameHandle>;
}

/// In-memory scheduler where every outstanding request is due on the next
/// call to [`FrameScheduler::take_due`].
#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    pending: Vec<FrameHandle>,
}

impl FrameQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame.
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_pending(&self, handle: FrameHandle) -> bool {
        self.pending.contains(&handle)
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let handle = FrameHandle(self.next_id);
        self.pending.push(handle);
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.pending.retain(|&h| h != handle);
    }

    fn take_due(&mut self) -> Vec<FrameHandle> {
        std::mem::take(&mut self.pending)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handles_are_unique() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        assert_ne!(a, b);
        assert_eq!(queue.pending_count(), 2);
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();

        queue.cancel_frame(a);
        queue.cancel_frame(a);
        assert!(!queue.is_pending(a));
        assert_eq!(queue.take_due(), vec![b]);

        // Delivered handles can still be cancelled safely
        queue.cancel_frame(b);
        assert_eq!(queue.pending_count(), 0);
    }

    #[test]
    fn test_requests_during_delivery_go_to_next_frame() {
        let mut queue = FrameQueue::new();
        let first = queue.request_frame();

        let due = queue.take_due();
        assert_eq!(due, vec![first]);

        let second = queue.request_frame();
        assert_eq!(queue.take_due(), vec![second]);
        assert!(queue.take_due().is_empty());
    }
}
