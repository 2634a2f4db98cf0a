use proptest::prelude::*;

use fieldshare::agreement::{CircularAgreement, DhParams, Participant, SequentialAgreement};
use fieldshare::config::FieldParams;
use fieldshare::field::PrimeField;
use fieldshare::recovery::shamirsecretsharing::{Share, reconstruct, split};
use fieldshare::rng::Csprng;

fn sharing_case() -> impl Strategy<Value = (u64, usize, usize, Vec<usize>)> {
    (0u64..2089, 1usize..=8)
        .prop_flat_map(|(secret, n)| (Just(secret), Just(n), 1..=n))
        .prop_flat_map(|(secret, n, t)| {
            let positions: Vec<usize> = (0..n).collect();
            (
                Just(secret),
                Just(n),
                Just(t),
                prop::sample::subsequence(positions, t..=n),
            )
        })
}

fn participants(params: DhParams, exponents: &[u64]) -> Vec<Participant> {
    exponents
        .iter()
        .enumerate()
        .map(|(id, &e)| Participant::with_private(id, params, e).unwrap())
        .collect()
}

proptest! {
    #[test]
    fn any_threshold_subset_reconstructs(
        (secret, n, t, picked) in sharing_case(),
        seed in any::<[u8; 32]>(),
    ) {
        let field = PrimeField::new(2089).unwrap();
        let secret = field.element(secret);

        let (poly, shares) = split(&field, secret, n, t, &mut Csprng::from_seed(seed)).unwrap();
        prop_assert_eq!(poly.evaluate(field.element(0)), poly.coefficients()[0]);

        let subset: Vec<Share> = picked.iter().map(|&i| shares[i]).collect();
        prop_assert_eq!(reconstruct(&field, &subset).unwrap(), secret);
    }

    #[test]
    fn topologies_agree_with_exponent_product(
        exponents in prop::collection::vec(2u64..=2355, 2..7),
    ) {
        let params = FieldParams::default().build().unwrap();
        let field = *params.field();

        let sequential = SequentialAgreement::new(params, participants(params, &exponents))
            .unwrap()
            .run()
            .unwrap();
        let circular = CircularAgreement::new(params, participants(params, &exponents))
            .unwrap()
            .run()
            .unwrap();

        // g^(p-1) = 1, so the exponent product may be taken mod p - 1.
        let order = field.modulus() - 1;
        let product = exponents.iter().fold(1u64, |acc, &e| acc * e % order);

        prop_assert_eq!(sequential, field.pow(params.generator(), product));
        prop_assert_eq!(circular, sequential);
    }
}
