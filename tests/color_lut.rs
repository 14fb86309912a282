mod tests {
    use myrtio_frame_buffers::layout::{LUT_CHANNEL_SIZE, LUT_ENTRIES_PER_PACKET, LUT_SIZE, PACKETS_PER_LUT};
    use myrtio_frame_buffers::{ActiveLut, ColorLut, CountingPool, PacketPool};

    type Pool = CountingPool<64>;

    /// Fill packet `slot` so that entry `i` holds `i * 7`
    fn lut_packet(pool: &Pool, slot: usize) -> myrtio_frame_buffers::Packet {
        let mut packet = pool.acquire_zeroed();
        packet[0] = 0x40;
        for i in 0..LUT_ENTRIES_PER_PACKET {
            let entry = slot * LUT_ENTRIES_PER_PACKET + i;
            let value = u16::try_from(entry * 7).unwrap();
            packet[2 + i * 2..4 + i * 2].copy_from_slice(&value.to_le_bytes());
        }
        packet
    }

    #[test]
    fn test_entry_at_reads_little_endian() {
        let pool = Pool::new();
        let mut lut = ColorLut::new(&pool);
        let mut packet = pool.acquire_zeroed();
        packet[12] = 0x34;
        packet[13] = 0x12;
        lut.store(1, packet);

        assert_eq!(lut.entry_at(LUT_ENTRIES_PER_PACKET + 5), 0x1234);
        assert_eq!(lut.entry_at(LUT_ENTRIES_PER_PACKET + 4), 0);
        assert_eq!(lut.entry_at(5), 0);
    }

    #[test]
    fn test_entry_at_packet_boundaries() {
        let pool = Pool::new();
        let mut lut = ColorLut::new(&pool);
        for slot in 0..PACKETS_PER_LUT {
            lut.store(slot, lut_packet(&pool, slot));
        }

        for index in 0..=LUT_SIZE {
            assert_eq!(usize::from(lut.entry_at(index)), index * 7);
        }
    }

    #[test]
    fn test_active_lut_load_includes_padding() {
        let pool = Pool::new();
        let mut lut = ColorLut::new(&pool);
        for slot in 0..PACKETS_PER_LUT {
            lut.store(slot, lut_packet(&pool, slot));
        }

        let mut active = ActiveLut::new();
        active.load(&lut);

        assert_eq!(active.as_slice().len(), LUT_SIZE + 1);
        for index in 0..=LUT_SIZE {
            assert_eq!(active.entry(index), lut.entry_at(index));
        }
    }

    #[test]
    fn test_active_lut_channels() {
        let pool = Pool::new();
        let mut lut = ColorLut::new(&pool);
        for slot in 0..PACKETS_PER_LUT {
            lut.store(slot, lut_packet(&pool, slot));
        }
        let mut active = ActiveLut::default();
        active.load(&lut);

        let green = active.channel(1);
        assert_eq!(green.len(), LUT_CHANNEL_SIZE + 1);
        assert_eq!(usize::from(green[0]), LUT_CHANNEL_SIZE * 7);
        assert_eq!(green[LUT_CHANNEL_SIZE], active.channel(2)[0]);
        assert_eq!(active.channel(2)[LUT_CHANNEL_SIZE], active.entry(LUT_SIZE));
    }
}
