//! Packet control byte.
//!
//! ```text
//!  7   6   5   4   3   2   1   0
//! [ type ][fin][     slot index    ]
//! ```

const TYPE_MASK: u8 = 0xC0;
const TYPE_FRAMEBUFFER: u8 = 0x00;
const TYPE_LUT: u8 = 0x40;
const TYPE_CONFIG: u8 = 0x80;
const FINAL_BIT: u8 = 0x20;
const INDEX_MASK: u8 = 0x1F;

/// Kind of data a packet carries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketKind {
    /// Chunk of the next frame
    Framebuffer,
    /// Chunk of the next color LUT
    Lut,
    /// Device configuration, handled outside the buffer layer
    Config,
    /// Reserved type
    Reserved,
}

impl PacketKind {
    /// Buffer that receives packets of this kind, if any
    pub const fn destination(self) -> Option<Destination> {
        match self {
            Self::Framebuffer => Some(Destination::Framebuffer),
            Self::Lut => Some(Destination::Lut),
            Self::Config | Self::Reserved => None,
        }
    }
}

/// Buffer an incoming packet is stored into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    /// The framebuffer being assembled
    Framebuffer,
    /// The LUT being assembled
    Lut,
}

/// Decoded control byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PacketHeader {
    pub kind: PacketKind,
    /// Slot the packet belongs to
    pub index: u8,
    /// Set on the last packet of a frame or LUT update
    pub is_final: bool,
}

impl PacketHeader {
    /// Decode a control byte
    pub const fn parse(control: u8) -> Self {
        let kind = match control & TYPE_MASK {
            TYPE_FRAMEBUFFER => PacketKind::Framebuffer,
            TYPE_LUT => PacketKind::Lut,
            TYPE_CONFIG => PacketKind::Config,
            _ => PacketKind::Reserved,
        };
        Self {
            kind,
            index: control & INDEX_MASK,
            is_final: control & FINAL_BIT != 0,
        }
    }

    /// Encode back into a control byte
    pub const fn to_control(self) -> u8 {
        let kind = match self.kind {
            PacketKind::Framebuffer => TYPE_FRAMEBUFFER,
            PacketKind::Lut => TYPE_LUT,
            PacketKind::Config => TYPE_CONFIG,
            PacketKind::Reserved => TYPE_MASK,
        };
        let fin = if self.is_final { FINAL_BIT } else { 0 };
        kind | fin | (self.index & INDEX_MASK)
    }
}
