//! All transport-writable buffers.
//!
//! Three framebuffers rotate between the `previous`, `next` and `assembling`
//! roles. Rendering interpolates from `previous` to `next` while the
//! transport fills `assembling`. Finalizing a frame only reassigns the roles,
//! no pixel data is copied.
//!
//! The LUT is double-buffered: packets land in a [`ColorLut`] and are
//! flattened into the [`ActiveLut`] when the update is complete.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::channel::PacketReceiver;
use crate::color_lut::{ActiveLut, ColorLut};
use crate::framebuffer::Framebuffer;
use crate::header::{Destination, PacketHeader};
use crate::layout::REQUIRED_POOL_CAPACITY;
use crate::packet::{Packet, PacketPool, PoolExhausted};

/// Number of framebuffers in rotation
pub const FRAMEBUFFER_COUNT: usize = 3;

/// Assignment of framebuffer slots to roles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Roles {
    /// Frame interpolated from
    pub previous: usize,
    /// Frame interpolated to
    pub next: usize,
    /// Partial frame, filled by incoming packets
    pub assembling: usize,
}

impl Roles {
    pub const fn new() -> Self {
        Self {
            previous: 0,
            next: 1,
            assembling: 2,
        }
    }

    /// Roles after publishing the assembled frame
    #[must_use]
    pub const fn rotated(self) -> Self {
        Self {
            previous: self.next,
            next: self.assembling,
            assembling: self.previous,
        }
    }
}

impl Default for Roles {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of ingesting one packet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ingested {
    /// Stored into a partial frame or LUT
    Stored(Destination),
    /// Addressed to a slot the buffer does not have, released
    Dropped(Destination),
    /// Stored and the frame was published
    FrameFinalized,
    /// Stored and the LUT was activated
    LutFinalized,
    /// Not addressed to a buffer, released
    Ignored,
}

/// Counters from one [`BufferSet::drain`] call
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DrainReport {
    pub packets: usize,
    pub frames: usize,
    pub luts: usize,
    pub ignored: usize,
    /// Packets with an out-of-range slot
    pub dropped: usize,
}

/// Framebuffers and LUTs fed by the transport
pub struct BufferSet<'p, P: PacketPool> {
    pool: &'p P,
    framebuffers: [Framebuffer<'p, P>; FRAMEBUFFER_COUNT],
    roles: Roles,
    lut_in_progress: ColorLut<'p, P>,
    active_lut: ActiveLut,
}

impl<'p, P: PacketPool> BufferSet<'p, P> {
    /// Create the buffer set, acquiring every packet it needs from `pool`.
    ///
    /// Fails if the pool cannot cover all slots plus the packet the
    /// transport holds while receiving.
    pub fn new(pool: &'p P) -> Result<Self, PoolExhausted> {
        let available = pool.available();
        if available < REQUIRED_POOL_CAPACITY {
            return Err(PoolExhausted {
                required: REQUIRED_POOL_CAPACITY,
                available,
            });
        }

        Ok(Self {
            pool,
            framebuffers: core::array::from_fn(|_| Framebuffer::new(pool)),
            roles: Roles::new(),
            lut_in_progress: ColorLut::new(pool),
            active_lut: ActiveLut::new(),
        })
    }

    /// Store a packet into the buffer addressed by `destination`.
    ///
    /// This is the routing step only; the caller decides when an update is
    /// complete. Returns `false` if `index` was out of range and the packet
    /// was released instead.
    pub fn handle_incoming_packet(
        &mut self,
        packet: Packet,
        destination: Destination,
        index: usize,
    ) -> bool {
        match destination {
            Destination::Framebuffer => {
                self.framebuffers[self.roles.assembling].store(index, packet)
            }
            Destination::Lut => self.lut_in_progress.store(index, packet),
        }
    }

    /// Route a packet by its control byte, finalizing on the final flag.
    ///
    /// A dropped packet never finalizes, even with the final flag set.
    pub fn ingest(&mut self, packet: Packet) -> Ingested {
        let header = PacketHeader::parse(packet.control());
        let Some(destination) = header.kind.destination() else {
            #[cfg(feature = "esp32-log")]
            println!("[BufferSet.ingest] ignoring {:?} packet", header.kind);
            self.pool.release(packet);
            return Ingested::Ignored;
        };

        if !self.handle_incoming_packet(packet, destination, usize::from(header.index)) {
            return Ingested::Dropped(destination);
        }
        if !header.is_final {
            return Ingested::Stored(destination);
        }

        match destination {
            Destination::Framebuffer => {
                self.finalize_framebuffer();
                Ingested::FrameFinalized
            }
            Destination::Lut => {
                self.finalize_lut();
                Ingested::LutFinalized
            }
        }
    }

    /// Ingest every queued packet
    pub fn drain<Q: PacketPool, const SIZE: usize>(
        &mut self,
        receiver: &PacketReceiver<'_, Q, SIZE>,
    ) -> DrainReport {
        let mut report = DrainReport::default();
        while let Ok(packet) = receiver.try_receive() {
            report.packets += 1;
            match self.ingest(packet) {
                Ingested::Stored(_) => {}
                Ingested::FrameFinalized => report.frames += 1,
                Ingested::LutFinalized => report.luts += 1,
                Ingested::Ignored => report.ignored += 1,
                Ingested::Dropped(_) => report.dropped += 1,
            }
        }
        report
    }

    /// Publish the assembled frame.
    ///
    /// `assembling` becomes `next`, `next` becomes `previous` and the old
    /// `previous` is recycled for assembling. Readers sharing the set through
    /// [`SharedBufferSet`](crate::SharedBufferSet) observe either the old or
    /// the new roles, never a mix.
    pub fn finalize_framebuffer(&mut self) {
        self.roles = self.roles.rotated();
        #[cfg(feature = "esp32-log")]
        println!("[BufferSet.finalize_framebuffer] roles {:?}", self.roles);
    }

    /// Flatten the LUT in progress into the active LUT
    pub fn finalize_lut(&mut self) {
        self.active_lut.load(&self.lut_in_progress);
        #[cfg(feature = "esp32-log")]
        println!("[BufferSet.finalize_lut] LUT activated");
    }

    /// Current role assignment
    pub const fn roles(&self) -> Roles {
        self.roles
    }

    /// Frame to interpolate from
    pub fn previous(&self) -> &Framebuffer<'p, P> {
        &self.framebuffers[self.roles.previous]
    }

    /// Frame to interpolate to
    pub fn next(&self) -> &Framebuffer<'p, P> {
        &self.framebuffers[self.roles.next]
    }

    /// Partial frame
    pub fn assembling(&self) -> &Framebuffer<'p, P> {
        &self.framebuffers[self.roles.assembling]
    }

    /// Framebuffer in rotation slot `slot`, regardless of its role
    pub fn framebuffer(&self, slot: usize) -> &Framebuffer<'p, P> {
        &self.framebuffers[slot]
    }

    /// LUT being assembled
    pub fn lut_in_progress(&self) -> &ColorLut<'p, P> {
        &self.lut_in_progress
    }

    /// LUT used for rendering
    pub const fn active_lut(&self) -> &ActiveLut {
        &self.active_lut
    }
}
