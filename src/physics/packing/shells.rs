// src/physics/packing/shells.rs

/// Number of atoms of each element type in a coordination shell.
pub type ShellComposition = Vec<usize>;

/// Lazy enumeration of every way to place `size` shell atoms among `types`
/// element types, i.e. every non-negative integer vector of length `types`
/// summing to `size`.
///
/// Each call to [`shell_compositions`] starts a fresh sequence. Order runs
/// from `[size, 0, .., 0]` to `[0, .., 0, size]`, e.g. for size 2 and
/// 3 types: `(2 0 0) (1 1 0) (1 0 1) (0 2 0) (0 1 1) (0 0 2)`.
#[derive(Debug, Clone)]
pub struct ShellCompositions {
    size: usize,
    next: Option<ShellComposition>,
    remaining: usize,
}

pub fn shell_compositions(size: usize, types: usize) -> ShellCompositions {
    let next = if types == 0 {
        None
    } else {
        let mut start = vec![0; types];
        start[0] = size;
        Some(start)
    };

    ShellCompositions {
        size,
        next,
        remaining: count_shell_compositions(size, types),
    }
}

/// Number of shell compositions: C(size + types - 1, types - 1)
pub fn count_shell_compositions(size: usize, types: usize) -> usize {
    if types == 0 {
        return 0;
    }
    let n = (size + types - 1) as u128;
    let k = (types - 1).min(size) as u128;

    // Multiplicative form keeps every intermediate an exact integer
    let mut count: u128 = 1;
    for i in 0..k {
        count = count * (n - i) / (i + 1);
    }
    count as usize
}

impl Iterator for ShellCompositions {
    type Item = ShellComposition;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next.take()?;

        let mut following = current.clone();
        advance(&mut following);
        // Counter wraps back to [size, 0, ..] after the last vector
        if following[0] != self.size {
            self.next = Some(following);
        }

        self.remaining = self.remaining.saturating_sub(1);
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ShellCompositions {}

/// Step the counter to the next vector with the same sum.
fn advance(counter: &mut [usize]) {
    for pos in (0..counter.len().saturating_sub(1)).rev() {
        if counter[pos] > 0 {
            counter[pos] -= 1;
            counter[pos + 1] += 1;
            return;
        }
        counter[pos] = counter[pos + 1];
        counter[pos + 1] = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_enumeration_order() {
        let all: Vec<_> = shell_compositions(2, 3).collect();
        assert_eq!(
            all,
            vec![
                vec![2, 0, 0],
                vec![1, 1, 0],
                vec![1, 0, 1],
                vec![0, 2, 0],
                vec![0, 1, 1],
                vec![0, 0, 2],
            ]
        );
    }

    #[test]
    fn test_exhaustive_and_unique() {
        for types in 1..=5 {
            for size in 0..=14 {
                let all: Vec<_> = shell_compositions(size, types).collect();
                let unique: HashSet<_> = all.iter().cloned().collect();

                assert_eq!(all.len(), count_shell_compositions(size, types));
                assert_eq!(unique.len(), all.len(), "duplicates for z={} k={}", size, types);
                for shell in &all {
                    assert_eq!(shell.len(), types);
                    assert_eq!(shell.iter().sum::<usize>(), size);
                }
            }
        }
    }

    #[test]
    fn test_binomial_counts() {
        assert_eq!(count_shell_compositions(12, 3), 91);
        assert_eq!(count_shell_compositions(24, 5), 20475);
        assert_eq!(count_shell_compositions(7, 1), 1);
        assert_eq!(count_shell_compositions(0, 4), 1);
        assert_eq!(count_shell_compositions(5, 0), 0);
    }

    #[test]
    fn test_fresh_sequence_per_call() {
        let mut first = shell_compositions(3, 2);
        first.next();
        first.next();
        let second: Vec<_> = shell_compositions(3, 2).collect();
        assert_eq!(second.len(), 4);
        assert_eq!(second[0], vec![3, 0]);
        assert_eq!(first.len(), 2);
        assert_eq!(shell_compositions(4, 0).count(), 0);
    }
}
