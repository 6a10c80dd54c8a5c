pub mod tester;

pub use tester::{test_list, OperationFailure};

/// Below this many values the generator only inserts, so that searches and
/// reversals run against lists with something in them.
pub const MIN_VALUES: usize = 8;

/// Generated values stay inside this range so long runs can't overflow a sum.
pub const VALUE_RANGE: core::ops::Range<i64> = -10_000..10_000;
