use std::error::Error;
use std::fmt;

/// InputValueError is used if some client option or parameter does not fulfill the posed
/// requirements, e.g., by exceeding the allowed poll interval range.
#[derive(Debug, Clone)]
pub struct InputValueError;

impl fmt::Display for InputValueError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Invalid input value")
    }
}

impl Error for InputValueError {}

pub enum SortOrder {
    Ascending,
    Descending,
}

/// argsort returns the indices that sort the array x (unstable sort). Used to rank leaderboard
/// entries by their progress metric without reordering the array itself.
pub fn argsort<T: std::cmp::PartialOrd>(x: &[T], order: SortOrder) -> Vec<usize> {
    let mut idxs: Vec<usize> = (0..x.len()).collect();

    match order {
        SortOrder::Ascending => idxs.sort_unstable_by(|&a, &b| x[a].partial_cmp(&x[b]).unwrap()),
        SortOrder::Descending => idxs.sort_unstable_by(|&a, &b| x[b].partial_cmp(&x[a]).unwrap()),
    };

    idxs
}

/// max returns the maximum value in the array x.
pub fn max<T: std::cmp::PartialOrd + std::marker::Copy>(x: &[T]) -> T {
    let &max_val = x.iter().fold(
        &x[0],
        |val_max, val| {
            if val_max > val {
                val_max
            } else {
                val
            }
        },
    );
    max_val
}
