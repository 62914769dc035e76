//! Lazy k-subset enumeration.

/// Iterator over all `k`-element subsets of a slice.
///
/// Subsets keep the relative order of the input and are produced in
/// lexicographic order of their indices, so `[a, b, c]` with `k = 2` yields
/// `[a, b]`, `[a, c]`, `[b, c]`.
#[derive(Debug, Clone)]
pub struct Combinations<'a, T> {
    items: &'a [T],
    indices: Vec<usize>,
    started: bool,
    done: bool,
}

impl<'a, T: Copy> Combinations<'a, T> {
    /// Enumerate the `k`-subsets of `items`.
    pub fn new(items: &'a [T], k: usize) -> Self {
        Self {
            items,
            indices: (0..k).collect(),
            started: false,
            done: k > items.len(),
        }
    }

    /// Move `indices` to the next subset. Returns false when exhausted.
    fn advance(&mut self) -> bool {
        let n = self.items.len();
        let k = self.indices.len();

        // Rightmost index that still has room to move.
        let Some(i) = (0..k).rev().find(|&i| self.indices[i] < n - k + i) else {
            return false;
        };

        self.indices[i] += 1;
        for j in i + 1..k {
            self.indices[j] = self.indices[j - 1] + 1;
        }
        true
    }
}

impl<'a, T: Copy> Iterator for Combinations<'a, T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        if self.started {
            if !self.advance() {
                self.done = true;
                return None;
            }
        } else {
            self.started = true;
        }
        Some(self.indices.iter().map(|&i| self.items[i]).collect())
    }
}

/// Number of `k`-subsets of an `n`-set.
pub fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1, |acc, i| acc * (n - i) / (i + 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::card::parse_cards;
    use std::collections::HashSet;

    #[test]
    fn test_small_lexicographic() {
        let combos: Vec<Vec<char>> = Combinations::new(&['a', 'b', 'c', 'd'], 2).collect();
        assert_eq!(
            combos,
            vec![
                vec!['a', 'b'],
                vec!['a', 'c'],
                vec!['a', 'd'],
                vec!['b', 'c'],
                vec!['b', 'd'],
                vec!['c', 'd'],
            ]
        );
    }

    #[test]
    fn test_seven_choose_five() {
        let pool = parse_cards("As Ks Qs Js Ts 2h 3d").unwrap();
        let combos: Vec<_> = Combinations::new(&pool, 5).collect();
        assert_eq!(combos.len(), 21);
        assert_eq!(combos.len(), binomial(7, 5));

        let unique: HashSet<_> = combos.iter().cloned().collect();
        assert_eq!(unique.len(), 21);
        assert!(combos.iter().all(|c| c.len() == 5));
        assert_eq!(combos[0], pool[..5].to_vec());
    }

    #[test]
    fn test_edge_sizes() {
        let items = [1, 2, 3];
        assert_eq!(Combinations::new(&items, 0).collect::<Vec<_>>(), vec![Vec::<i32>::new()]);
        assert_eq!(Combinations::new(&items, 3).collect::<Vec<_>>(), vec![vec![1, 2, 3]]);
        assert_eq!(Combinations::new(&items, 4).count(), 0);
        assert_eq!(binomial(3, 4), 0);
        assert_eq!(binomial(52, 2), 1326);
    }

    #[test]
    fn test_restartable() {
        let items = [1, 2, 3, 4, 5];
        let first: Vec<_> = Combinations::new(&items, 3).collect();
        let second: Vec<_> = Combinations::new(&items, 3).collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 10);
    }
}
