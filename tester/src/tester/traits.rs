use rand::{
    distributions::{Distribution, Standard},
    Rng, SeedableRng,
};

/// deterministically applies an operation to a T returning the result
pub trait Operation {
    type Result: Sized;
    type Target;
    fn apply(&self, target: &mut Self::Target) -> Self::Result;
}

// deterministically generates a sequence of valid operations, each paired with
// the result the reference impl gave for it
pub trait OperationGenerator<R>: Sized
where
    R: Rng + SeedableRng,
{
    type Operation: Operation;
    type ReferenceImpl;
    fn from_seed(seed: R::Seed) -> Self;
    fn data(self) -> Self::ReferenceImpl;
}

pub type OperationOf<G, R> = <G as OperationGenerator<R>>::Operation;
pub type TargetOf<G, R> = <OperationOf<G, R> as Operation>::Target;
pub type OutcomeOf<G, R> = <OperationOf<G, R> as Operation>::Result;

// extends operation generator so that it can be created from a random seed if the seed can be randomly generated.
pub trait RandomOperationGenerator<R: SeedableRng + Rng>: OperationGenerator<R>
where
    Standard: Distribution<R::Seed>,
{
    fn random() -> Self {
        let seed: R::Seed = rand::thread_rng().gen();
        <Self as OperationGenerator<R>>::from_seed(seed)
    }
}

impl<R, G: OperationGenerator<R>> RandomOperationGenerator<R> for G
where
    R: SeedableRng + Rng,
    Standard: Distribution<R::Seed>,
{
}

pub use impls::*;
mod impls {
    use super::*;
    use crate::{MIN_VALUES, VALUE_RANGE};
    use rand::rngs::StdRng;
    use recursive_list::SinglyLinkedList;
    use std::collections::VecDeque;

    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum ListOperation {
        InsertAtFront(i64),
        InsertAtEnd(i64),
        Sum,
        Search(i64),
        Reverse,
        Display,
    }

    impl ListOperation {
        const VARIANTS: usize = 6;
    }

    #[derive(Clone, Debug, PartialEq, Eq)]
    pub enum ListOutcome {
        Inserted,
        Sum(i64),
        Found(bool),
        Reversed,
        Rendering(Vec<i64>),
    }

    impl Operation for ListOperation {
        type Result = ListOutcome;
        type Target = SinglyLinkedList;

        fn apply(&self, lst: &mut Self::Target) -> Self::Result {
            match *self {
                Self::InsertAtFront(value) => {
                    lst.insert_at_front(value);
                    ListOutcome::Inserted
                }
                Self::InsertAtEnd(value) => {
                    lst.insert_at_end(value);
                    ListOutcome::Inserted
                }
                Self::Sum => ListOutcome::Sum(lst.sum()),
                Self::Search(target) => ListOutcome::Found(lst.search(target)),
                Self::Reverse => {
                    lst.reverse();
                    ListOutcome::Reversed
                }
                Self::Display => ListOutcome::Rendering(lst.display()),
            }
        }
    }

    #[derive(Debug)]
    pub struct ListOperationGenerator<R = StdRng> {
        rng: R,
        data: VecDeque<i64>,
    }

    impl<R> OperationGenerator<R> for ListOperationGenerator<R>
    where
        R: Rng + SeedableRng,
    {
        type Operation = ListOperation;
        type ReferenceImpl = VecDeque<i64>;
        fn from_seed(seed: R::Seed) -> Self {
            Self {
                rng: R::from_seed(seed),
                data: VecDeque::new(),
            }
        }
        fn data(self) -> Self::ReferenceImpl {
            self.data
        }
    }

    impl<R: Rng> ListOperationGenerator<R> {
        // searches mostly go for values that are present
        fn search_target(&mut self) -> i64 {
            if !self.data.is_empty() && self.rng.gen_bool(0.75) {
                let ind = self.rng.gen_range(0..self.data.len());
                self.data[ind]
            } else {
                self.rng.gen_range(VALUE_RANGE)
            }
        }
    }

    impl<R: Rng> Iterator for ListOperationGenerator<R> {
        type Item = (ListOperation, ListOutcome);

        fn next(&mut self) -> Option<Self::Item> {
            //  only inserts until there are enough values
            let range = if self.data.len() >= MIN_VALUES {
                0..ListOperation::VARIANTS
            } else {
                0..2
            };

            let item = match self.rng.gen_range(range) {
                0 => {
                    let value = self.rng.gen_range(VALUE_RANGE);
                    self.data.push_front(value);
                    (ListOperation::InsertAtFront(value), ListOutcome::Inserted)
                }
                1 => {
                    let value = self.rng.gen_range(VALUE_RANGE);
                    self.data.push_back(value);
                    (ListOperation::InsertAtEnd(value), ListOutcome::Inserted)
                }
                2 => (ListOperation::Sum, ListOutcome::Sum(self.data.iter().sum())),
                3 => {
                    let target = self.search_target();
                    let found = self.data.contains(&target);
                    (ListOperation::Search(target), ListOutcome::Found(found))
                }
                4 => {
                    let reversed = self.data.iter().rev().copied().collect();
                    self.data = reversed;
                    (ListOperation::Reverse, ListOutcome::Reversed)
                }
                5 => {
                    let rendering = self.data.iter().copied().collect();
                    (ListOperation::Display, ListOutcome::Rendering(rendering))
                }
                _ => unreachable!(),
            };
            Some(item)
        }
    }
}
