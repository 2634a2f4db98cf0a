use fieldshare::Error;
use fieldshare::field::{FieldElement, PrimeField};
use fieldshare::recovery::Polynomial;
use fieldshare::recovery::shamirsecretsharing::{
    Share, SharingSession, reconstruct, refresh, split,
};
use fieldshare::rng::Csprng;

fn field() -> PrimeField {
    PrimeField::new(2089).unwrap()
}

fn rng() -> Csprng {
    Csprng::from_seed([0x5au8; 32])
}

/// All subsets of `items` with exactly `k` elements.
fn subsets(items: &[Share], k: usize) -> Vec<Vec<Share>> {
    if k == 0 {
        return vec![Vec::new()];
    }
    if items.len() < k {
        return Vec::new();
    }

    let mut with_first: Vec<Vec<Share>> = subsets(&items[1..], k - 1)
        .into_iter()
        .map(|mut rest| {
            rest.insert(0, items[0]);
            rest
        })
        .collect();
    with_first.extend(subsets(&items[1..], k));
    with_first
}

#[test]
fn split_and_reconstruct_roundtrip() {
    let f = field();
    let secret = f.element(1234);

    let (_, shares) = split(&f, secret, 5, 3, &mut rng()).unwrap();
    let recovered = reconstruct(&f, &shares[..3]).unwrap();

    assert_eq!(recovered, secret);
}

#[test]
fn shares_use_indices_one_to_n() {
    let f = field();

    let (poly, shares) = split(&f, f.element(1234), 5, 3, &mut rng()).unwrap();

    assert_eq!(shares.iter().map(|s| s.index).collect::<Vec<_>>(), [1, 2, 3, 4, 5]);
    for s in &shares {
        assert_eq!(s.value, poly.evaluate(f.element(s.index)));
    }
}

#[test]
fn every_threshold_subset_recovers_the_secret() {
    let f = field();
    let secret = f.element(1234);

    let (_, shares) = split(&f, secret, 5, 3, &mut rng()).unwrap();

    for subset in subsets(&shares, 3) {
        assert_eq!(reconstruct(&f, &subset).unwrap(), secret, "{subset:?}");
    }
}

#[test]
fn reconstruct_order_independent() {
    let f = field();
    let secret = f.element(777);

    let (_, shares) = split(&f, secret, 5, 3, &mut rng()).unwrap();

    let recovered = reconstruct(&f, &[shares[4], shares[1], shares[3]]).unwrap();
    assert_eq!(recovered, secret);
}

#[test]
fn over_threshold_reconstruction_is_still_correct() {
    let f = field();
    let secret = f.element(99);

    let (_, shares) = split(&f, secret, 7, 3, &mut rng()).unwrap();

    for k in 3..=7 {
        for subset in subsets(&shares, k) {
            assert_eq!(reconstruct(&f, &subset).unwrap(), secret);
        }
    }
}

#[test]
fn under_threshold_reconstruction_does_not_fail() {
    let f = field();

    let (_, shares) = split(&f, f.element(1234), 5, 3, &mut rng()).unwrap();

    // The value carries no meaning, but the call succeeds.
    assert!(reconstruct(&f, &shares[..2]).is_ok());
}

#[test]
fn threshold_one() {
    let f = field();
    let secret = f.element(42);

    let (_, shares) = split(&f, secret, 5, 1, &mut rng()).unwrap();

    for s in &shares {
        assert_eq!(s.value, secret);
        assert_eq!(reconstruct(&f, &[*s]).unwrap(), secret);
    }
}

#[test]
fn threshold_equal_to_share_count() {
    let f = field();
    let secret = f.element(2000);

    let (_, shares) = split(&f, secret, 4, 4, &mut rng()).unwrap();

    assert_eq!(reconstruct(&f, &shares).unwrap(), secret);
}

#[test]
fn n_minus_one_shares_leave_every_secret_possible() {
    // Over GF(11) with t = n = 3: for two fixed shares, every candidate
    // secret is consistent with exactly one polynomial.
    let f = PrimeField::new(11).unwrap();

    let (_, shares) = split(&f, f.element(6), 3, 3, &mut rng()).unwrap();
    let known = &shares[..2];

    for candidate in 0..11 {
        let mut consistent = 0;
        for a1 in 0..11 {
            for a2 in 0..11 {
                let poly = Polynomial::from_coefficients(&f, &[candidate, a1, a2]);
                if known.iter().all(|s| poly.evaluate(f.element(s.index)) == s.value) {
                    consistent += 1;
                }
            }
        }
        assert_eq!(consistent, 1, "candidate secret {candidate}");
    }
}

#[test]
fn split_rejects_invalid_thresholds() {
    let f = field();

    for (n, t) in [(5, 0), (5, 6), (0, 0), (0, 1)] {
        assert_eq!(
            split(&f, FieldElement::ONE, n, t, &mut rng()).err(),
            Some(Error::InvalidThreshold {
                threshold: t,
                share_count: n
            })
        );
    }
}

#[test]
fn split_rejects_more_shares_than_field_points() {
    let f = PrimeField::new(7).unwrap();

    assert_eq!(
        split(&f, FieldElement::ONE, 7, 2, &mut rng()).err(),
        Some(Error::InvalidShareCount {
            share_count: 7,
            modulus: 7
        })
    );
    assert!(split(&f, FieldElement::ONE, 6, 2, &mut rng()).is_ok());
}

#[test]
fn reconstruct_fails_with_duplicate_indices() {
    let f = field();

    let (_, mut shares) = split(&f, f.element(5), 5, 3, &mut rng()).unwrap();
    shares[1].index = shares[0].index;

    assert!(matches!(
        reconstruct(&f, &shares[..3]),
        Err(Error::DuplicateShareIndex { index: 1 })
    ));
}

#[test]
fn reconstruct_rejects_zero_index_and_empty_input() {
    let f = field();

    let zero = Share {
        index: 2089,
        value: FieldElement::ONE,
    };
    assert_eq!(
        reconstruct(&f, &[zero]),
        Err(Error::InvalidShareIndex { index: 2089 })
    );
    assert_eq!(reconstruct(&f, &[]), Err(Error::NoShares));
}

#[test]
fn refresh_preserves_secret() {
    let f = field();
    let secret = f.element(1500);

    let (_, shares) = split(&f, secret, 5, 3, &mut rng()).unwrap();
    let refreshed = refresh(&f, &shares, 3, &mut Csprng::from_seed([1u8; 32])).unwrap();

    assert_ne!(refreshed, shares);
    assert_eq!(reconstruct(&f, &refreshed[2..]).unwrap(), secret);
}

#[test]
fn old_and_new_shares_cannot_mix() {
    let f = field();
    let secret = f.element(321);

    let (_, shares) = split(&f, secret, 5, 3, &mut rng()).unwrap();
    let refreshed = refresh(&f, &shares, 3, &mut Csprng::from_seed([9u8; 32])).unwrap();

    let mixed = [shares[0], refreshed[1], refreshed[2]];
    let result = reconstruct(&f, &mixed).unwrap();

    // Equal only if the blinding polynomial happens to vanish at x = 1.
    let blinding_at_one = f.sub(refreshed[0].value, shares[0].value);
    assert_eq!(result == secret, blinding_at_one.is_zero());
}

#[test]
fn refresh_rejects_malformed_share_sets() {
    let f = field();

    let (_, mut shares) = split(&f, f.element(5), 5, 3, &mut rng()).unwrap();

    assert_eq!(refresh(&f, &[], 1, &mut rng()), Err(Error::NoShares));
    assert!(matches!(
        refresh(&f, &shares, 6, &mut rng()),
        Err(Error::InvalidThreshold { .. })
    ));

    shares[4].index = 2;
    assert_eq!(
        refresh(&f, &shares, 3, &mut rng()),
        Err(Error::DuplicateShareIndex { index: 2 })
    );
}

#[test]
fn session_keeps_shares_and_threshold() {
    let f = field();
    let secret = f.element(1234);

    let mut session = SharingSession::deal(&f, secret, 5, 3, &mut rng()).unwrap();

    assert_eq!(session.share_count(), 5);
    assert_eq!(session.threshold(), 3);
    assert_eq!(session.share(4).map(|s| s.index), Some(4));
    assert!(session.share(6).is_none());
    assert_eq!(session.reconstruct().unwrap(), secret);

    session.refresh(&mut Csprng::from_seed([3u8; 32])).unwrap();
    assert_eq!(reconstruct(session.field(), &session.shares()[1..4]).unwrap(), secret);
}

#[test]
fn session_reconstruction_uses_every_share() {
    let f = field();
    let secret = f.element(777);

    let session = SharingSession::deal(&f, secret, 6, 4, &mut rng()).unwrap();

    assert_eq!(
        session.reconstruct().unwrap(),
        reconstruct(session.field(), session.shares()).unwrap()
    );
    // Below the threshold the free function still answers without an error.
    assert!(reconstruct(session.field(), &session.shares()[..3]).is_ok());
}
