mod tests {
    use myrtio_frame_buffers::{CountingPool, Packet, PacketBuffer, PacketPool};

    type Pool = CountingPool<16>;

    fn marked(pool: &Pool, marker: u8) -> Packet {
        let mut packet = pool.acquire_zeroed();
        packet.fill(marker);
        packet
    }

    fn snapshot<const N: usize>(buffer: &PacketBuffer<'_, Pool, N>) -> Vec<[u8; 64]> {
        buffer.packets().iter().map(|packet| **packet).collect()
    }

    #[test]
    fn test_new_acquires_zeroed_packets() {
        let pool = Pool::new();
        let buffer: PacketBuffer<'_, Pool, 4> = PacketBuffer::new(&pool);

        assert_eq!(buffer.len(), 4);
        assert_eq!(pool.stats().acquired, 4);
        assert_eq!(pool.stats().released, 0);
        assert!(buffer.packets().iter().all(|packet| packet.iter().all(|b| *b == 0)));
    }

    #[test]
    fn test_store_replaces_slot_and_releases_previous() {
        let pool = Pool::new();
        let mut buffer: PacketBuffer<'_, Pool, 4> = PacketBuffer::new(&pool);
        let packet = marked(&pool, 0xAB);
        let before = pool.stats();

        assert!(buffer.store(1, packet));

        let after = pool.stats();
        assert_eq!(after.acquired, before.acquired);
        assert_eq!(after.released, before.released + 1);
        assert!(buffer.packet(1).iter().all(|b| *b == 0xAB));
        assert!(buffer.packet(0).iter().all(|b| *b == 0));
        assert!(buffer.packet(2).iter().all(|b| *b == 0));
    }

    #[test]
    fn test_store_out_of_range_drops_packet() {
        let pool = Pool::new();
        let mut buffer: PacketBuffer<'_, Pool, 4> = PacketBuffer::new(&pool);
        buffer.store(0, marked(&pool, 0x11));
        let slots = snapshot(&buffer);

        for index in [4, 5, usize::MAX] {
            let packet = marked(&pool, 0xEE);
            let before = pool.stats();

            assert!(!buffer.store(index, packet));

            assert_eq!(pool.stats().released, before.released + 1);
            assert_eq!(snapshot(&buffer), slots);
        }
    }

    #[test]
    fn test_store_same_slot_twice() {
        let pool = Pool::new();
        let mut buffer: PacketBuffer<'_, Pool, 4> = PacketBuffer::new(&pool);
        let p = marked(&pool, 0x50);
        let q = marked(&pool, 0x51);
        let before = pool.stats();

        buffer.store(2, p);
        buffer.store(2, q);

        // The initial zeroed packet and then P went back, nothing else
        assert_eq!(pool.stats().released, before.released + 2);
        assert_eq!(pool.stats().in_flight(), 4);
        assert!(buffer.packet(2).iter().all(|b| *b == 0x51));
    }

    #[test]
    fn test_drop_returns_all_packets() {
        let pool = Pool::new();
        {
            let mut buffer: PacketBuffer<'_, Pool, 4> = PacketBuffer::new(&pool);
            buffer.store(3, marked(&pool, 0x01));
            buffer.store(9, marked(&pool, 0x02));
        }
        let stats = pool.stats();
        assert_eq!(stats.in_flight(), 0);
        assert_eq!(stats.acquired, 6);
        assert_eq!(stats.released, 6);
    }

    #[test]
    fn test_pool_overcommit_is_counted() {
        let pool = CountingPool::<2>::new();
        assert_eq!(pool.available(), 2);

        let buffer: PacketBuffer<'_, CountingPool<2>, 3> = PacketBuffer::new(&pool);

        assert_eq!(buffer.len(), 3);
        assert_eq!(pool.available(), 0);
        assert_eq!(pool.stats().overcommits, 1);
    }
}
