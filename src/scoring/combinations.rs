use crate::error::{CommitteeError, Result};

/// Lexicographic k-subsets of `0..n`, yielded as sorted index vectors.
///
/// For `n = 4, k = 2` the order is `[0,1] [0,2] [0,3] [1,2] [1,3] [2,3]`,
/// which is stable across runs and is what ties fall back on when ranking.
#[derive(Debug, Clone)]
pub struct Combinations {
    n: usize,
    k: usize,
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl Combinations {
    pub fn new(n: usize, k: usize) -> Result<Self> {
        if k == 0 || k > n {
            return Err(CommitteeError::TeamSize {
                team_size: k,
                roster_size: n,
            });
        }
        Ok(Self {
            n,
            k,
            indices: (0..k).collect(),
            started: false,
            done: false,
        })
    }
}

impl Iterator for Combinations {
    type Item = Vec<usize>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if !self.started {
            self.started = true;
            return Some(self.indices.clone());
        }

        // rightmost slot that can still advance
        let pivot = (0..self.k)
            .rev()
            .find(|&slot| self.indices[slot] != slot + self.n - self.k);
        let Some(pivot) = pivot else {
            self.done = true;
            return None;
        };

        self.indices[pivot] += 1;
        for slot in pivot + 1..self.k {
            self.indices[slot] = self.indices[slot - 1] + 1;
        }
        Some(self.indices.clone())
    }
}

/// C(n, k), or `None` if it does not fit in a u128.
pub fn combination_count(n: usize, k: usize) -> Option<u128> {
    if k > n {
        return Some(0);
    }
    let k = k.min(n - k);
    let mut count: u128 = 1;
    for i in 0..k {
        count = count.checked_mul((n - i) as u128)? / (i as u128 + 1);
    }
    Some(count)
}
