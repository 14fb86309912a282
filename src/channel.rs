//! Packet queue between the transport interrupt and the main loop.
//!
//! A bounded queue built on `critical-section` and `heapless::Deque`. The
//! transport pushes received packets from interrupt context, the main loop
//! drains them into a [`BufferSet`](crate::BufferSet). Packets the queue
//! cannot take, or still holds when dropped, go back to its pool.

use core::cell::RefCell;

use critical_section::Mutex;
use heapless::Deque;

use crate::packet::{Packet, PacketPool};

/// Error returned when the queue is full. Carries the rejected packet.
#[derive(Debug, PartialEq, Eq)]
pub struct TrySendError(pub Packet);

/// Error returned when the queue is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TryReceiveError;

/// Bounded queue of received packets
pub struct PacketQueue<'p, P: PacketPool, const SIZE: usize> {
    pool: &'p P,
    inner: Mutex<RefCell<Deque<Packet, SIZE>>>,
}

impl<'p, P: PacketPool, const SIZE: usize> PacketQueue<'p, P, SIZE> {
    /// Create a new empty queue returning packets to `pool`.
    pub const fn new(pool: &'p P) -> Self {
        Self {
            pool,
            inner: Mutex::new(RefCell::new(Deque::new())),
        }
    }

    /// Get a sender handle for this queue.
    pub const fn sender(&self) -> PacketSender<'_, P, SIZE> {
        PacketSender { queue: self }
    }

    /// Get a receiver handle for this queue.
    ///
    /// Only one receiver should drain the queue, packets must reach the
    /// buffers in arrival order.
    pub const fn receiver(&self) -> PacketReceiver<'_, P, SIZE> {
        PacketReceiver { queue: self }
    }

    /// Try to enqueue a packet.
    ///
    /// Returns `Err(TrySendError(packet))` if the queue is full.
    pub fn try_send(&self, packet: Packet) -> Result<(), TrySendError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.push_back(packet).map_err(TrySendError)
        })
    }

    /// Enqueue a packet, releasing it to the pool if the queue is full.
    ///
    /// Returns `false` when the packet was dropped.
    pub fn deliver(&self, packet: Packet) -> bool {
        match self.try_send(packet) {
            Ok(()) => true,
            Err(TrySendError(packet)) => {
                self.pool.release(packet);
                false
            }
        }
    }

    /// Try to dequeue the oldest packet.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<Packet, TryReceiveError> {
        critical_section::with(|cs| {
            let mut queue = self.inner.borrow(cs).borrow_mut();
            queue.pop_front().ok_or(TryReceiveError)
        })
    }

    /// Release every queued packet to the pool
    pub fn clear(&self) {
        while let Ok(packet) = self.try_receive() {
            self.pool.release(packet);
        }
    }

    /// Number of queued packets
    pub fn len(&self) -> usize {
        critical_section::with(|cs| self.inner.borrow(cs).borrow().len())
    }

    /// Whether no packet is queued
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<P: PacketPool, const SIZE: usize> Drop for PacketQueue<'_, P, SIZE> {
    fn drop(&mut self) {
        self.clear();
    }
}

/// Transport side of a [`PacketQueue`].
pub struct PacketSender<'a, P: PacketPool, const SIZE: usize> {
    queue: &'a PacketQueue<'a, P, SIZE>,
}

impl<P: PacketPool, const SIZE: usize> Clone for PacketSender<'_, P, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PacketPool, const SIZE: usize> Copy for PacketSender<'_, P, SIZE> {}

impl<P: PacketPool, const SIZE: usize> PacketSender<'_, P, SIZE> {
    /// Try to enqueue a packet.
    ///
    /// Returns `Err(TrySendError(packet))` if the queue is full.
    pub fn try_send(&self, packet: Packet) -> Result<(), TrySendError> {
        self.queue.try_send(packet)
    }

    /// Enqueue a packet, releasing it to the pool if the queue is full.
    ///
    /// Returns `false` when the packet was dropped.
    pub fn deliver(&self, packet: Packet) -> bool {
        self.queue.deliver(packet)
    }
}

/// Main loop side of a [`PacketQueue`].
pub struct PacketReceiver<'a, P: PacketPool, const SIZE: usize> {
    queue: &'a PacketQueue<'a, P, SIZE>,
}

impl<P: PacketPool, const SIZE: usize> Clone for PacketReceiver<'_, P, SIZE> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: PacketPool, const SIZE: usize> Copy for PacketReceiver<'_, P, SIZE> {}

impl<P: PacketPool, const SIZE: usize> PacketReceiver<'_, P, SIZE> {
    /// Try to dequeue the oldest packet.
    ///
    /// Returns `Err(TryReceiveError)` if the queue is empty.
    pub fn try_receive(&self) -> Result<Packet, TryReceiveError> {
        self.queue.try_receive()
    }
}
