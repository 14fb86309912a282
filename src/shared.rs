//! [`BufferSet`] shared between the transport handler and the renderer.
//!
//! Both sides go through `critical-section`, so a frame published by the
//! producer is seen by the renderer as a whole.

use core::cell::RefCell;

use critical_section::Mutex;

use crate::buffer_set::{BufferSet, Roles};
use crate::color_lut::ActiveLut;
use crate::framebuffer::Framebuffer;
use crate::packet::PacketPool;

/// Read-only view handed to the renderer
pub struct FrameView<'a, 'p, P: PacketPool> {
    /// Frame to interpolate from
    pub previous: &'a Framebuffer<'p, P>,
    /// Frame to interpolate to
    pub next: &'a Framebuffer<'p, P>,
    /// LUT to apply
    pub lut: &'a ActiveLut,
}

/// Buffer set guarded by a critical section
pub struct SharedBufferSet<'p, P: PacketPool> {
    inner: Mutex<RefCell<BufferSet<'p, P>>>,
}

impl<'p, P: PacketPool> SharedBufferSet<'p, P> {
    pub const fn new(buffers: BufferSet<'p, P>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(buffers)),
        }
    }

    /// Run `f` with exclusive access, e.g. to ingest packets or finalize.
    pub fn with_producer<R>(&self, f: impl FnOnce(&mut BufferSet<'p, P>) -> R) -> R {
        critical_section::with(|cs| f(&mut *self.inner.borrow(cs).borrow_mut()))
    }

    /// Run `f` with the frames and LUT currently published for rendering.
    ///
    /// Interrupts stay masked while `f` runs, so it should copy out what it
    /// needs and return.
    pub fn with_frames<R>(&self, f: impl FnOnce(FrameView<'_, 'p, P>) -> R) -> R {
        critical_section::with(|cs| {
            let buffers = self.inner.borrow(cs).borrow();
            f(FrameView {
                previous: buffers.previous(),
                next: buffers.next(),
                lut: buffers.active_lut(),
            })
        })
    }

    /// Snapshot of the current role assignment
    pub fn roles(&self) -> Roles {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().roles())
    }

    /// Take the buffer set back out
    pub fn into_inner(self) -> BufferSet<'p, P> {
        self.inner.into_inner().into_inner()
    }
}
