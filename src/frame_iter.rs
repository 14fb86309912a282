//! Cursor over the LEDs of a packet-backed frame.
//!
//! LED `n` lives in packet `n / 21`, starting at byte `1 + (n % 21) * 3`.
//! Since a packet holds exactly 21 pixels after its control byte, stepping
//! past the last pixel of a packet lands on byte 64, which is folded back to
//! byte 1 of the following packet.

use crate::layout::{BYTES_PER_PIXEL, FRAME_HEADER_SIZE, PACKET_SIZE, PIXELS_PER_PACKET};

const OFFSET_MASK: usize = PACKET_SIZE - 1;
const OFFSET_SHIFT: u32 = PACKET_SIZE.trailing_zeros();

/// Position of one LED inside a framebuffer.
///
/// * `packet` - slot of the packet holding the LED
/// * `offset` - byte offset of the first color component inside that packet
/// * `component` - flat index of the first color component over the whole
///   frame (`led * 3`), independent of packet layout
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameIterator {
    packet: usize,
    offset: usize,
    component: usize,
}

impl FrameIterator {
    /// Cursor that reaches LED 0 after one [`advance`](Self::advance)
    pub const fn before_first() -> Self {
        Self {
            packet: 0,
            offset: FRAME_HEADER_SIZE.wrapping_sub(BYTES_PER_PIXEL),
            component: 0usize.wrapping_sub(BYTES_PER_PIXEL),
        }
    }

    /// Cursor pointing at `led`
    pub const fn at(led: usize) -> Self {
        Self {
            packet: led / PIXELS_PER_PACKET,
            offset: FRAME_HEADER_SIZE + (led % PIXELS_PER_PACKET) * BYTES_PER_PIXEL,
            component: led * BYTES_PER_PIXEL,
        }
    }

    /// Reset to the position just before LED 0
    pub fn set_before_first(&mut self) {
        *self = Self::before_first();
    }

    /// Jump to `led`
    pub fn set(&mut self, led: usize) {
        *self = Self::at(led);
    }

    /// Move to the following LED
    #[inline]
    pub fn advance(&mut self) {
        *self = self.successor();
    }

    /// Position of the following LED
    #[inline]
    #[must_use]
    pub const fn successor(self) -> Self {
        let offset = self.offset.wrapping_add(BYTES_PER_PIXEL);
        let overflow = offset >> OFFSET_SHIFT;
        Self {
            packet: self.packet + overflow,
            // Skip the control byte of the next packet on overflow
            offset: (offset + overflow) & OFFSET_MASK,
            component: self.component.wrapping_add(BYTES_PER_PIXEL),
        }
    }

    /// Packet slot of the current LED
    pub const fn packet(self) -> usize {
        self.packet
    }

    /// Byte offset of the current LED inside its packet
    pub const fn offset(self) -> usize {
        self.offset
    }

    /// Flat component index of the current LED
    pub const fn component(self) -> usize {
        self.component
    }

    /// LED index of the current position
    pub const fn led(self) -> usize {
        self.component / BYTES_PER_PIXEL
    }
}

impl Default for FrameIterator {
    fn default() -> Self {
        Self::before_first()
    }
}
