use dial_core::fixed::bounded14::Bounded14;
use dial_core::fixed::fast_mod::{reduce, reduce_traced, MAX_CORRECTIONS, MU};
use dial_core::fixed::sweep::sweep_fast_mod;

#[test]
fn barrett_constant_is_163() {
    assert_eq!(MU, 163);
}

#[test]
fn reduce_matches_rem_for_every_14_bit_input() {
    let mut max_c = 0u8;
    for x in 0u32..(1 << 14) {
        let (r, c) = reduce_traced(Bounded14::new(x).unwrap());
        assert_eq!(u32::from(r), x % 100, "x={x}");
        assert!(c <= MAX_CORRECTIONS, "x={x} needed {c} corrections");
        max_c = max_c.max(c);
    }
    // The two-correction bound is tight over this domain.
    assert_eq!(max_c, 2);
}

#[test]
fn reduce_edges() {
    assert_eq!(reduce(Bounded14::new(0).unwrap()), 0);
    assert_eq!(reduce(Bounded14::new(99).unwrap()), 99);
    assert_eq!(reduce(Bounded14::new(100).unwrap()), 0);
    assert_eq!(reduce(Bounded14::new(16383).unwrap()), 83);
    assert_eq!(reduce(Bounded14::MAX), 83);
}

#[test]
fn bounded14_rejects_wide_values() {
    assert!(Bounded14::new(0x3FFF).is_some());
    assert!(Bounded14::new(0x4000).is_none());
    assert!(Bounded14::new(u32::MAX).is_none());
    assert_eq!(Bounded14::from_low_bits(0x4000 + 7).get(), 7);
    assert_eq!(Bounded14::from_low_bits(u32::MAX).get(), 0x3FFF);
}

#[test]
fn sweep_reports_full_domain() {
    let rep = sweep_fast_mod().expect("no counterexample");
    assert_eq!(rep.checked, 16384);
    assert_eq!(rep.max_corrections, 2);
}
