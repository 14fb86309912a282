//! Buffer geometry.
//!
//! Every packet is a fixed 64-byte transport unit. Framebuffer packets carry
//! one control byte followed by 21 RGB pixels, LUT packets carry two header
//! bytes followed by 31 little-endian 16-bit entries.

/// Size of one transport packet in bytes.
pub const PACKET_SIZE: usize = 64;

/// Bytes per pixel (one per color component).
pub const BYTES_PER_PIXEL: usize = 3;

/// Header bytes preceding pixel data in a framebuffer packet.
pub const FRAME_HEADER_SIZE: usize = 1;

/// Pixels carried by one framebuffer packet.
pub const PIXELS_PER_PACKET: usize = 21;

/// LEDs driven by each output strip.
pub const LEDS_PER_STRIP: usize = 64;

/// Number of output strips.
pub const STRIP_COUNT: usize = 8;

/// Total LEDs in one frame.
pub const LED_COUNT: usize = LEDS_PER_STRIP * STRIP_COUNT;

/// Packets needed to hold one full frame.
pub const PACKETS_PER_FRAME: usize = LED_COUNT.div_ceil(PIXELS_PER_PACKET);

/// Header bytes preceding entries in a LUT packet.
pub const LUT_HEADER_SIZE: usize = 2;

/// Bytes per LUT entry.
pub const BYTES_PER_LUT_ENTRY: usize = 2;

/// LUT entries carried by one LUT packet.
pub const LUT_ENTRIES_PER_PACKET: usize = 31;

/// LUT entries per color channel.
pub const LUT_CHANNEL_SIZE: usize = 257;

/// Color channels covered by the LUT.
pub const LUT_CHANNELS: usize = 3;

/// Total LUT entries.
pub const LUT_SIZE: usize = LUT_CHANNEL_SIZE * LUT_CHANNELS;

/// Packets needed to hold the LUT.
pub const PACKETS_PER_LUT: usize = LUT_SIZE.div_ceil(LUT_ENTRIES_PER_PACKET);

/// Packets the transport may hold outside the buffers at any time.
pub const PACKETS_IN_FLIGHT: usize = 1;

/// Minimum pool capacity for a [`BufferSet`](crate::BufferSet).
pub const REQUIRED_POOL_CAPACITY: usize =
    3 * PACKETS_PER_FRAME + PACKETS_PER_LUT + PACKETS_IN_FLIGHT;

const _: () = assert!(FRAME_HEADER_SIZE + PIXELS_PER_PACKET * BYTES_PER_PIXEL == PACKET_SIZE);
const _: () = assert!(PACKET_SIZE.is_power_of_two());
const _: () = assert!(
    LUT_HEADER_SIZE + LUT_ENTRIES_PER_PACKET * BYTES_PER_LUT_ENTRY == PACKET_SIZE
);
// The padding entry at index LUT_SIZE must still live inside a packet.
const _: () = assert!(LUT_SIZE < PACKETS_PER_LUT * LUT_ENTRIES_PER_PACKET);
