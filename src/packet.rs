//! Transport packets and the pool they are borrowed from.
//!
//! A [`Packet`] is an owned, non-cloneable 64-byte buffer. Moving it is the
//! only way to hand it over, so a packet can never be released twice or read
//! after it went back to the pool.

use core::cell::Cell;
use core::ops::{Deref, DerefMut};

use critical_section::Mutex;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::layout::PACKET_SIZE;

/// Fixed-size transport packet
#[derive(Debug, PartialEq, Eq)]
pub struct Packet {
    buf: [u8; PACKET_SIZE],
}

impl Packet {
    /// Create a packet with all bytes cleared.
    ///
    /// Intended for [`PacketPool`] implementations; buffers should obtain
    /// packets through a pool so that accounting stays balanced.
    pub const fn zeroed() -> Self {
        Self {
            buf: [0; PACKET_SIZE],
        }
    }

    /// Create a packet from received bytes
    pub const fn from_bytes(buf: [u8; PACKET_SIZE]) -> Self {
        Self { buf }
    }

    /// Control byte of the packet
    pub const fn control(&self) -> u8 {
        self.buf[0]
    }
}

impl Deref for Packet {
    type Target = [u8; PACKET_SIZE];

    fn deref(&self) -> &Self::Target {
        &self.buf
    }
}

impl DerefMut for Packet {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.buf
    }
}

/// Source and sink of packets.
///
/// Both operations must be non-blocking and callable from interrupt context.
pub trait PacketPool {
    /// Take a cleared packet out of the pool
    fn acquire_zeroed(&self) -> Packet;

    /// Return a packet to the pool
    fn release(&self, packet: Packet);

    /// Number of packets that can still be acquired without over-committing
    fn available(&self) -> usize;
}

/// Returned when a pool is too small for the buffers built on top of it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PoolExhausted {
    /// Packets the caller needs
    pub required: usize,
    /// Packets the pool could provide
    pub available: usize,
}

/// Acquire/release counters of a [`CountingPool`]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PoolStats {
    pub acquired: usize,
    pub released: usize,
    /// Acquisitions that went past the pool capacity
    pub overcommits: usize,
}

impl PoolStats {
    /// Packets currently owned outside the pool
    pub const fn in_flight(self) -> usize {
        self.acquired.saturating_sub(self.released)
    }
}

/// Pool that hands out packets by value and keeps count of them.
///
/// `CAPACITY` is the number of packets the pool is sized for. Going past it
/// never fails, it is recorded in [`PoolStats::overcommits`] instead.
pub struct CountingPool<const CAPACITY: usize> {
    stats: Mutex<Cell<PoolStats>>,
}

impl<const CAPACITY: usize> CountingPool<CAPACITY> {
    /// Create a new pool with nothing acquired
    pub const fn new() -> Self {
        Self {
            stats: Mutex::new(Cell::new(PoolStats {
                acquired: 0,
                released: 0,
                overcommits: 0,
            })),
        }
    }

    /// Snapshot of the pool counters
    pub fn stats(&self) -> PoolStats {
        critical_section::with(|cs| self.stats.borrow(cs).get())
    }

    fn update(&self, f: impl FnOnce(&mut PoolStats)) {
        critical_section::with(|cs| {
            let cell = self.stats.borrow(cs);
            let mut stats = cell.get();
            f(&mut stats);
            cell.set(stats);
        });
    }
}

impl<const CAPACITY: usize> Default for CountingPool<CAPACITY> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const CAPACITY: usize> PacketPool for CountingPool<CAPACITY> {
    fn acquire_zeroed(&self) -> Packet {
        self.update(|stats| {
            stats.acquired += 1;
            if stats.in_flight() > CAPACITY {
                stats.overcommits += 1;
                #[cfg(feature = "esp32-log")]
                println!(
                    "[CountingPool.acquire_zeroed] over capacity: {} in flight, capacity {}",
                    stats.in_flight(),
                    CAPACITY
                );
            }
        });
        Packet::zeroed()
    }

    fn release(&self, _packet: Packet) {
        self.update(|stats| stats.released += 1);
    }

    fn available(&self) -> usize {
        CAPACITY.saturating_sub(self.stats().in_flight())
    }
}
