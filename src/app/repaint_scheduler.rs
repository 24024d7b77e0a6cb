//! Frame scheduling driven by egui repaints.
//!
//! egui only redraws when something asks for it. Requesting a frame here
//! queues the handle and asks the context for a repaint, so the next
//! `update` call delivers it.

use bloomgrid::{FrameHandle, FrameQueue, FrameScheduler};

/// [`FrameScheduler`] that wakes the egui event loop for every request.
pub struct RepaintScheduler {
    ctx: egui::Context,
    queue: FrameQueue,
}

impl RepaintScheduler {
    pub fn new(ctx: egui::Context) -> Self {
        Self {
            ctx,
            queue: FrameQueue::new(),
        }
    }
}

impl std::fmt::Debug for RepaintScheduler {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RepaintScheduler")
            .field("pending", &self.queue.pending_count())
            .finish_non_exhaustive()
    }
}

impl FrameScheduler for RepaintScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        let handle = self.queue.request_frame();
        self.ctx.request_repaint();
        handle
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        self.queue.cancel_frame(handle);
    }

    fn take_due(&mut self) -> Vec<FrameHandle> {
        self.queue.take_due()
    }
}
