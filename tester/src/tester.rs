use std::fmt::{self, Debug, Formatter};

use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

mod traits;
pub use traits::*;

/// Runs `ops` generated operations against a fresh target and checks every
/// result against the generator's reference impl. A missing seed is drawn from
/// the thread rng.
pub fn test_list<G, R>(seed: Option<R::Seed>, ops: usize) -> Result<(), OperationFailure<G, R>>
where
    G: OperationGenerator<R> + Iterator<Item = (OperationOf<G, R>, OutcomeOf<G, R>)>,
    TargetOf<G, R>: Default,
    OutcomeOf<G, R>: Eq,
    R: SeedableRng + Rng,
    R::Seed: Clone + Debug,
    Standard: Distribution<R::Seed>,
{
    let seed: R::Seed = seed.unwrap_or_else(|| rand::thread_rng().gen());
    log::debug!("testing {ops} operations with seed {seed:?}");
    let mut target: TargetOf<G, R> = Default::default();

    let mut generator = G::from_seed(seed.clone());
    for (op_num, (op, expected)) in (&mut generator).take(ops).enumerate() {
        let actual = op.apply(&mut target);
        if actual != expected {
            let mut replay = G::from_seed(seed.clone());
            let operations: Vec<_> = (&mut replay).take(op_num + 1).collect();
            return Err(OperationFailure {
                seed,
                target,
                op_num,
                operations,
                actual,
                data: replay.data(),
            });
        }
    }
    Ok(())
}

/// The first operation whose result disagreed with the reference impl, with
/// everything needed to replay up to it.
pub struct OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    R: SeedableRng + Rng,
{
    pub seed: R::Seed,
    pub target: TargetOf<G, R>,
    pub data: G::ReferenceImpl,
    pub operations: Vec<(OperationOf<G, R>, OutcomeOf<G, R>)>,
    pub actual: OutcomeOf<G, R>,
    pub op_num: usize,
}

impl<G, R> OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    OperationOf<G, R>: Debug,
    OutcomeOf<G, R>: Debug,
    TargetOf<G, R>: Debug + Default,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    /// Replays the recorded operations on a fresh target, logging the last few.
    pub fn playback(&self) {
        log::error!("running playback of seed {:?}", self.seed);
        let mut target: TargetOf<G, R> = Default::default();

        let lower = self.op_num.saturating_sub(5);
        for (ind, (op, expected)) in self.operations.iter().enumerate() {
            let r = op.apply(&mut target);
            if ind >= lower {
                log::error!("--------- operation {ind} ----------");
                log::error!("operation: {op:?}");
                log::error!("list_state: {target:?}");
                log::error!("expected / actual : {expected:?}, {r:?}");
            }
        }
    }
}

impl<G, R> Debug for OperationFailure<G, R>
where
    G: OperationGenerator<R>,
    G::ReferenceImpl: Debug,
    OperationOf<G, R>: Debug,
    OutcomeOf<G, R>: Debug,
    TargetOf<G, R>: Debug,
    R: SeedableRng + Rng,
    R::Seed: Debug,
{
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperationFailure")
            .field("seed", &self.seed)
            .field("op_num", &self.op_num)
            .field("operation", &self.operations.last())
            .field("actual", &self.actual)
            .field("target", &self.target)
            .field("data", &self.data)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use recursive_list::SinglyLinkedList;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn check(seed: Option<[u8; 32]>, ops: usize) {
        init_logger();
        if let Err(failure) = test_list::<ListOperationGenerator<StdRng>, StdRng>(seed, ops) {
            failure.playback();
            panic!("{failure:?}");
        }
    }

    #[test]
    fn fixed_seed() {
        check(Some([7; 32]), 2_000);
    }

    #[test]
    fn random_seeds() {
        for _ in 0..20 {
            check(None, 1_000);
        }
    }

    #[test]
    fn generator_is_deterministic() {
        let seed = [3; 32];
        let a: Vec<_> =
            <ListOperationGenerator<StdRng> as OperationGenerator<StdRng>>::from_seed(seed)
                .take(200)
                .collect();
        let b: Vec<_> =
            <ListOperationGenerator<StdRng> as OperationGenerator<StdRng>>::from_seed(seed)
                .take(200)
                .collect();
        assert_eq!(a, b);
    }

    #[test]
    fn inserts_until_min_values() {
        for seed in 0..16u8 {
            let generator =
                <ListOperationGenerator<StdRng> as OperationGenerator<StdRng>>::from_seed([seed; 32]);
            for (op, outcome) in generator.take(crate::MIN_VALUES) {
                assert!(matches!(
                    op,
                    ListOperation::InsertAtFront(_) | ListOperation::InsertAtEnd(_)
                ));
                assert_eq!(outcome, ListOutcome::Inserted);
            }
        }
    }

    #[test]
    fn reference_matches_final_list() {
        let mut generator =
            <ListOperationGenerator<StdRng> as RandomOperationGenerator<StdRng>>::random();
        let mut lst = SinglyLinkedList::new();
        for (op, expected) in (&mut generator).take(500) {
            assert_eq!(op.apply(&mut lst), expected);
        }
        let data = <ListOperationGenerator<StdRng> as OperationGenerator<StdRng>>::data(generator);
        assert_eq!(lst.display(), data.into_iter().collect::<Vec<_>>());
    }
}
