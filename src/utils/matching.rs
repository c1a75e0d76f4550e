//! This module contains functions for comparing unordered collections by
//! value, where elements of one collection must be paired one-to-one with
//! equal elements of the other.

/// Determines whether there is a perfect matching between two collections of
/// `n` elements each, where element `i` of the first collection may be paired
/// with element `j` of the second only if `compatible(i, j)` holds.
///
/// Pairings are revised along augmenting paths when a later element finds its
/// only counterparts already taken.
pub fn has_perfect_matching(n: usize, mut compatible: impl FnMut(usize, usize) -> bool) -> bool {
    let mut candidates: Vec<Vec<usize>> = Vec::with_capacity(n);
    for i in 0..n {
        let row: Vec<usize> = (0..n)
            .filter(|&j| compatible(i, j))
            .collect();
        if row.is_empty() { return false; }
        candidates.push(row);
    }

    let mut owner: Vec<Option<usize>> = vec![None; n];
    for i in 0..n {
        let mut visited = vec![false; n];
        if !augment(i, &candidates, &mut owner, &mut visited) {
            return false;
        }
    }
    true
}

fn augment(i: usize, candidates: &[Vec<usize>], owner: &mut [Option<usize>], visited: &mut [bool]) -> bool {
    for &j in candidates[i].iter() {
        if visited[j] { continue; }
        visited[j] = true;

        let free = match owner[j] {
            None => true,
            Some(k) => augment(k, candidates, owner, visited),
        };
        if free {
            owner[j] = Some(i);
            return true;
        }
    }
    false
}
