use super::*;

#[test]
fn fnv_matches_reference_vectors() {
    assert_eq!(hash_str(""), Fnv1a32::OFFSET_BASIS);
    assert_eq!(hash_str("a"), 0xE40C_292C);
    assert_eq!(hash_str("foobar"), 0xBF9C_F968);
}

#[test]
fn fnv_hashes_utf16_code_units() {
    let mut e = Fnv1a32::new_default();
    e.write_unit(0x00E9);
    assert_eq!(hash_str("é"), e.finish());

    let mut emoji = Fnv1a32::new_default();
    emoji.write_unit(0xD83D);
    emoji.write_unit(0xDE00);
    assert_eq!(hash_str("😀"), emoji.finish());
}

#[test]
fn xorshift_sequence_is_canonical() {
    let mut rng = XorShift32::new(1);
    assert_eq!(rng.next_u32(), 270_369);

    let mut rng = XorShift32::new(hash_str("p1"));
    assert_eq!(rng.next_u32(), 716_491_898);
    assert_eq!(rng.next_u32(), 3_561_056_519);
}

#[test]
fn unit_interval_draws_stay_in_range() {
    let mut rng = XorShift32::new(hash_str("range"));
    for _ in 0..10_000 {
        let v = rng.next_f64_01();
        assert!((0.0..1.0).contains(&v));
    }
    for bound in 1..20 {
        assert!(rng.next_index(bound) < bound);
    }
}

#[test]
fn shuffle_is_a_deterministic_permutation() {
    let mut a: Vec<u32> = (0..5).collect();
    shuffle(&mut a, &mut XorShift32::new(hash_str("p1")));
    assert_eq!(a, vec![4, 1, 2, 3, 0]);

    let mut b: Vec<u32> = (0..40).collect();
    let mut c = b.clone();
    shuffle(&mut b, &mut XorShift32::new(7));
    shuffle(&mut c, &mut XorShift32::new(7));
    assert_eq!(b, c);
    let mut sorted = b.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, (0..40).collect::<Vec<_>>());
}

#[test]
fn shuffle_handles_trivial_slices() {
    let mut empty: Vec<u8> = Vec::new();
    shuffle(&mut empty, &mut XorShift32::new(3));
    let mut one = vec![9u8];
    shuffle(&mut one, &mut XorShift32::new(3));
    assert_eq!(one, vec![9]);
}
