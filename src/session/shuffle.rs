use rand::Rng;

use crate::models::AnswerOption;

/// Return the options in a uniformly random order, leaving the input as-is.
///
/// Fisher–Yates over a fresh copy: walk from the last index down, swapping
/// each position with a uniformly chosen index in `[0, i]`.
pub fn shuffled(options: &[AnswerOption], rng: &mut impl Rng) -> Vec<AnswerOption> {
    let mut out = options.to_vec();
    for i in (1..out.len()).rev() {
        let j = rng.random_range(0..=i);
        out.swap(i, j);
    }
    out
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn option(id: u32) -> AnswerOption {
        AnswerOption {
            id,
            text: format!("option {id}"),
            is_correct: id == 0,
        }
    }

    proptest! {
        #[test]
        fn shuffled_is_a_permutation(
            ids in proptest::collection::vec(any::<u32>(), 1..12),
            seed in any::<u64>(),
        ) {
            let options: Vec<AnswerOption> = ids.iter().copied().map(option).collect();
            let mut rng = StdRng::seed_from_u64(seed);

            let out = shuffled(&options, &mut rng);

            prop_assert_eq!(out.len(), options.len());
            let mut before: Vec<u32> = options.iter().map(|o| o.id).collect();
            let mut after: Vec<u32> = out.iter().map(|o| o.id).collect();
            before.sort_unstable();
            after.sort_unstable();
            prop_assert_eq!(before, after);
        }
    }

    #[test]
    fn same_seed_gives_same_order() {
        let options: Vec<AnswerOption> = (0..6).map(option).collect();

        let a = shuffled(&options, &mut StdRng::seed_from_u64(17));
        let b = shuffled(&options, &mut StdRng::seed_from_u64(17));

        let a_ids: Vec<u32> = a.iter().map(|o| o.id).collect();
        let b_ids: Vec<u32> = b.iter().map(|o| o.id).collect();
        assert_eq!(a_ids, b_ids);
    }

    #[test]
    fn input_is_not_mutated() {
        let options: Vec<AnswerOption> = (0..6).map(option).collect();
        let ids_before: Vec<u32> = options.iter().map(|o| o.id).collect();

        let _ = shuffled(&options, &mut StdRng::seed_from_u64(3));

        let ids_after: Vec<u32> = options.iter().map(|o| o.id).collect();
        assert_eq!(ids_before, ids_after);
    }

    #[test]
    fn repeated_shuffles_produce_different_orders() {
        let options: Vec<AnswerOption> = (0..6).map(option).collect();
        let mut rng = StdRng::seed_from_u64(99);

        let orders: std::collections::HashSet<Vec<u32>> = (0..20)
            .map(|_| shuffled(&options, &mut rng).iter().map(|o| o.id).collect())
            .collect();

        assert!(orders.len() > 1);
    }

    #[test]
    fn single_option_is_untouched() {
        let options = vec![option(5)];
        let out = shuffled(&options, &mut StdRng::seed_from_u64(0));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].id, 5);
    }
}
