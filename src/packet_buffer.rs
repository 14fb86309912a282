//! Fixed array of owned packets.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::packet::{Packet, PacketPool};

/// A buffer of `N` packets, each slot always holding exactly one packet.
///
/// Slots are filled with zeroed packets on creation. The only way to change a
/// slot is [`PacketBuffer::store`], which hands the previous occupant back to
/// the pool.
pub struct PacketBuffer<'p, P: PacketPool, const N: usize> {
    pool: &'p P,
    packets: [Packet; N],
}

impl<'p, P: PacketPool, const N: usize> PacketBuffer<'p, P, N> {
    /// Create a buffer, acquiring `N` zeroed packets from `pool`
    pub fn new(pool: &'p P) -> Self {
        Self {
            pool,
            packets: core::array::from_fn(|_| pool.acquire_zeroed()),
        }
    }

    /// Store a packet at `index`, releasing whatever was there before.
    ///
    /// Out-of-range indices come from malformed transport framing: the
    /// packet is released and no slot changes. Either way exactly one packet
    /// goes back to the pool.
    ///
    /// Returns `false` if the packet was dropped.
    pub fn store(&mut self, index: usize, packet: Packet) -> bool {
        match self.packets.get_mut(index) {
            Some(slot) => {
                let previous = core::mem::replace(slot, packet);
                self.pool.release(previous);
                true
            }
            None => {
                #[cfg(feature = "esp32-log")]
                println!("[PacketBuffer.store] slot {} out of range (0..{}), dropping packet", index, N);
                self.pool.release(packet);
                false
            }
        }
    }

    /// Packet held by slot `index`
    ///
    /// Panics if `index >= N`.
    #[inline]
    pub fn packet(&self, index: usize) -> &Packet {
        &self.packets[index]
    }

    /// All slots in order
    pub fn packets(&self) -> &[Packet; N] {
        &self.packets
    }

    /// Number of slots
    pub const fn len(&self) -> usize {
        N
    }

    /// Whether the buffer has no slots
    pub const fn is_empty(&self) -> bool {
        N == 0
    }
}

impl<P: PacketPool, const N: usize> Drop for PacketBuffer<'_, P, N> {
    fn drop(&mut self) {
        for slot in &mut self.packets {
            self.pool.release(core::mem::replace(slot, Packet::zeroed()));
        }
    }
}
