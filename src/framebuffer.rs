//! One frame of pixel data, stored as transport packets.

use crate::color::Rgb;
use crate::frame_iter::FrameIterator;
use crate::layout::{BYTES_PER_PIXEL, LED_COUNT, PACKETS_PER_FRAME};
use crate::packet::{Packet, PacketPool};
use crate::packet_buffer::PacketBuffer;

const BLACK: [u8; BYTES_PER_PIXEL] = [0; BYTES_PER_PIXEL];

/// Packet buffer holding exactly one frame
pub struct Framebuffer<'p, P: PacketPool> {
    packets: PacketBuffer<'p, P, PACKETS_PER_FRAME>,
}

impl<'p, P: PacketPool> Framebuffer<'p, P> {
    /// Create a black frame
    pub fn new(pool: &'p P) -> Self {
        Self {
            packets: PacketBuffer::new(pool),
        }
    }

    /// Store a frame packet into `index`
    ///
    /// See [`PacketBuffer::store`].
    pub fn store(&mut self, index: usize, packet: Packet) -> bool {
        self.packets.store(index, packet)
    }

    /// Color components of the LED under `iter`, in wire order
    #[inline]
    pub fn pixel_at(&self, iter: FrameIterator) -> &[u8; BYTES_PER_PIXEL] {
        let offset = iter.offset();
        let bytes = &self.packets.packet(iter.packet())[offset..offset + BYTES_PER_PIXEL];
        // The range above is exactly one pixel long, so the conversion holds
        bytes.try_into().unwrap_or(&BLACK)
    }

    /// Color of the LED under `iter`
    #[inline]
    pub fn rgb_at(&self, iter: FrameIterator) -> Rgb {
        let packet = self.packets.packet(iter.packet());
        let offset = iter.offset();
        Rgb::new(packet[offset], packet[offset + 1], packet[offset + 2])
    }

    /// Color of LED `led`
    pub fn pixel(&self, led: usize) -> Rgb {
        self.rgb_at(FrameIterator::at(led))
    }

    /// Iterate over the colors of every LED in the frame
    pub fn pixels(&self) -> Pixels<'_, 'p, P> {
        Pixels {
            frame: self,
            iter: FrameIterator::before_first(),
            remaining: LED_COUNT,
        }
    }

    /// Underlying packet buffer
    pub fn packets(&self) -> &PacketBuffer<'p, P, PACKETS_PER_FRAME> {
        &self.packets
    }
}

/// Iterator over the LED colors of a [`Framebuffer`]
pub struct Pixels<'a, 'p, P: PacketPool> {
    frame: &'a Framebuffer<'p, P>,
    iter: FrameIterator,
    remaining: usize,
}

impl<P: PacketPool> Iterator for Pixels<'_, '_, P> {
    type Item = Rgb;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        self.iter.advance();
        Some(self.frame.rgb_at(self.iter))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<P: PacketPool> ExactSizeIterator for Pixels<'_, '_, P> {}
