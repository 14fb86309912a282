#![no_std]

pub mod buffer_set;
pub mod channel;
pub mod color;
pub mod color_lut;
pub mod frame_iter;
pub mod framebuffer;
pub mod header;
pub mod layout;
pub mod packet;
pub mod packet_buffer;
pub mod shared;

pub use buffer_set::{BufferSet, DrainReport, Ingested, Roles};
pub use channel::{PacketQueue, PacketReceiver, PacketSender, TryReceiveError, TrySendError};
pub use color_lut::{ActiveLut, ColorLut};
pub use frame_iter::FrameIterator;
pub use framebuffer::{Framebuffer, Pixels};
pub use header::{Destination, PacketHeader, PacketKind};
pub use packet::{CountingPool, Packet, PacketPool, PoolExhausted, PoolStats};
pub use packet_buffer::PacketBuffer;
pub use shared::{FrameView, SharedBufferSet};

pub use color::Rgb;
