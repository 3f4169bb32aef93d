use std::error::Error;
use std::io;

use randpick::error::RandomError;
use randpick::rng::{EntropySource, OsEntropy, ReplayEntropy, generate, random_int, reduce, span};

struct BrokenPool;

impl EntropySource for BrokenPool {
    fn fill_bytes(&mut self, _buf: &mut [u8]) -> io::Result<()> {
        Err(io::Error::other("entropy pool unavailable"))
    }
}

#[test]
fn results_stay_within_bounds() {
    let ranges = [
        (0, 0),
        (5, 5),
        (1, 6),
        (-10, -1),
        (-7, 7),
        (-1, 0),
        (0, 1),
        (i64::MIN, -1),
        (0, i64::MAX),
        (i64::MAX - 3, i64::MAX),
        (i64::MIN, i64::MIN + 2),
    ];

    for (min, max) in ranges {
        for _ in 0..200 {
            let v = random_int(min, max).unwrap();
            assert!(min <= v && v <= max, "{v} outside [{min}, {max}]");
        }
    }
}

#[test]
fn max_below_min_is_invalid_range() {
    for (min, max) in [(1, 0), (10, 1), (-1, -2), (0, -1), (i64::MAX, i64::MIN)] {
        let err = random_int(min, max).unwrap_err();
        assert!(matches!(err, RandomError::InvalidRange { .. }), "({min}, {max})");
    }
}

#[test]
fn span_wider_than_i64_is_invalid_range() {
    assert!(matches!(
        span(i64::MIN, i64::MAX),
        Err(RandomError::InvalidRange { .. })
    ));
    assert!(matches!(
        random_int(-1, i64::MAX),
        Err(RandomError::InvalidRange { .. })
    ));

    assert_eq!(span(i64::MIN, -1).unwrap(), i64::MAX as u64);
    assert_eq!(span(0, i64::MAX).unwrap(), i64::MAX as u64);
}

#[test]
fn degenerate_ranges_return_the_bound() {
    for _ in 0..100 {
        assert_eq!(random_int(0, 0).unwrap(), 0);
        assert_eq!(random_int(5, 5).unwrap(), 5);
    }
}

#[test]
fn die_rolls_cover_every_face() {
    let mut seen = [0u32; 6];

    for _ in 0..10_000 {
        let v = random_int(1, 6).unwrap();
        assert!((1..=6).contains(&v));
        seen[(v - 1) as usize] += 1;
    }

    assert!(seen.iter().all(|&n| n > 0), "{seen:?}");
}

#[test]
fn bytes_are_read_little_endian() {
    assert_eq!(reduce([1, 0, 0, 0], 0, 9).unwrap(), 1);
    assert_eq!(reduce([0, 0, 0, 1], 0, 9).unwrap(), 6);
}

#[test]
fn sign_bit_is_cleared() {
    assert_eq!(reduce([0, 0, 0, 0x80], 3, 9).unwrap(), 3);
    assert_eq!(reduce([0xFF; 4], 1, 6).unwrap(), 2);
}

#[test]
fn replayed_words_map_exactly() {
    let mut source = ReplayEntropy::from_words(&[7, 25, 0, u32::MAX]);

    assert_eq!(generate(&mut source, -3, 3).unwrap(), -3);
    assert_eq!(generate(&mut source, -10, 10).unwrap(), -6);
    assert_eq!(generate(&mut source, 100, 200).unwrap(), 100);
    assert_eq!(generate(&mut source, 0, i64::MAX).unwrap(), 0x7FFF_FFFF);
    assert_eq!(source.remaining(), 0);
}

#[test]
fn widest_negative_range_offsets_from_min() {
    let mut source = ReplayEntropy::new([5, 0, 0, 0]);

    assert_eq!(generate(&mut source, i64::MIN, -1).unwrap(), i64::MIN + 5);
}

#[test]
fn each_draw_consumes_four_bytes() {
    let mut source = ReplayEntropy::new(vec![0u8; 10]);

    generate(&mut source, 0, 9).unwrap();
    assert_eq!(source.remaining(), 6);

    generate(&mut source, 0, 9).unwrap();
    assert_eq!(source.remaining(), 2);
}

#[test]
fn invalid_range_consumes_no_entropy() {
    let mut source = ReplayEntropy::from_words(&[1, 2]);

    assert!(generate(&mut source, 10, 1).is_err());
    assert_eq!(source.remaining(), 8);
}

#[test]
fn exhausted_replay_is_entropy_error() {
    let mut source = ReplayEntropy::new([1, 2, 3]);

    let err = generate(&mut source, 0, 10).unwrap_err();
    let RandomError::EntropySource(inner) = &err else {
        panic!("expected entropy error, got {err:?}");
    };

    assert_eq!(inner.kind(), io::ErrorKind::UnexpectedEof);
    assert_eq!(source.remaining(), 3);
}

#[test]
fn failing_source_is_entropy_error_with_cause() {
    let err = generate(&mut BrokenPool, 1, 6).unwrap_err();

    assert!(matches!(err, RandomError::EntropySource(_)));
    assert_eq!(err.to_string(), "Unable to generate random bytes");

    let cause = err
        .source()
        .and_then(|e| e.downcast_ref::<io::Error>())
        .unwrap();
    assert_eq!(cause.to_string(), "entropy pool unavailable");
}

#[test]
fn invalid_range_wins_over_broken_source() {
    let err = generate(&mut BrokenPool, 6, 1).unwrap_err();

    assert!(matches!(err, RandomError::InvalidRange { min: 6, max: 1 }));
    assert_eq!(err.to_string(), "Invalid range");
}

#[test]
fn os_entropy_fills_buffers() {
    let mut a = [0u8; 64];
    let mut b = [0u8; 64];

    OsEntropy::new().fill_bytes(&mut a).unwrap();
    OsEntropy::new().fill_bytes(&mut b).unwrap();

    assert_ne!(a, b);
}
