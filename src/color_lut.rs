//! Color correction lookup table.
//!
//! The table arrives as packets ([`ColorLut`]) and is flattened into an
//! [`ActiveLut`] once complete, so that rendering reads plain array slots.

use crate::layout::{
    BYTES_PER_LUT_ENTRY, LUT_CHANNEL_SIZE, LUT_CHANNELS, LUT_ENTRIES_PER_PACKET, LUT_HEADER_SIZE,
    LUT_SIZE, PACKETS_PER_LUT,
};
use crate::packet::{Packet, PacketPool};
use crate::packet_buffer::PacketBuffer;

/// Packet buffer holding a LUT in transport form
pub struct ColorLut<'p, P: PacketPool> {
    packets: PacketBuffer<'p, P, PACKETS_PER_LUT>,
}

impl<'p, P: PacketPool> ColorLut<'p, P> {
    /// Create a LUT with every entry set to zero
    pub fn new(pool: &'p P) -> Self {
        Self {
            packets: PacketBuffer::new(pool),
        }
    }

    /// Store a LUT packet into `index`
    ///
    /// See [`PacketBuffer::store`].
    pub fn store(&mut self, index: usize, packet: Packet) -> bool {
        self.packets.store(index, packet)
    }

    /// Entry `index`, decoded little-endian.
    ///
    /// Callers validate `index` against [`LUT_SIZE`]; the padding entry at
    /// `LUT_SIZE` is still addressable. Panics past the last packet.
    #[inline]
    pub fn entry_at(&self, index: usize) -> u16 {
        let packet = self.packets.packet(index / LUT_ENTRIES_PER_PACKET);
        let offset = LUT_HEADER_SIZE + (index % LUT_ENTRIES_PER_PACKET) * BYTES_PER_LUT_ENTRY;
        u16::from_le_bytes([packet[offset], packet[offset + 1]])
    }

    /// Underlying packet buffer
    pub fn packets(&self) -> &PacketBuffer<'p, P, PACKETS_PER_LUT> {
        &self.packets
    }
}

/// Flattened LUT used for rendering.
///
/// Holds `LUT_SIZE + 1` entries; the last one pads the table so that
/// interpolation may read one entry past the last valid index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveLut {
    entries: [u16; LUT_SIZE + 1],
}

impl ActiveLut {
    /// Create a table with every entry set to zero
    pub const fn new() -> Self {
        Self {
            entries: [0; LUT_SIZE + 1],
        }
    }

    /// Overwrite every entry, including the padding one, from `lut`
    pub fn load<P: PacketPool>(&mut self, lut: &ColorLut<'_, P>) {
        for (index, entry) in self.entries.iter_mut().enumerate() {
            *entry = lut.entry_at(index);
        }
    }

    /// Entry `index`
    #[inline]
    pub fn entry(&self, index: usize) -> u16 {
        self.entries[index]
    }

    /// Entries of color channel `channel` (0 = red, 1 = green, 2 = blue).
    ///
    /// The slice is one entry longer than [`LUT_CHANNEL_SIZE`] so that the
    /// entry after the last one can be read for interpolation. For the last
    /// channel that extra entry is the padding slot.
    pub fn channel(&self, channel: usize) -> &[u16] {
        assert!(channel < LUT_CHANNELS, "LUT channel out of range");
        let start = channel * LUT_CHANNEL_SIZE;
        &self.entries[start..=start + LUT_CHANNEL_SIZE]
    }

    /// Whole table, padding included
    pub fn as_slice(&self) -> &[u16] {
        &self.entries
    }
}

impl Default for ActiveLut {
    fn default() -> Self {
        Self::new()
    }
}
