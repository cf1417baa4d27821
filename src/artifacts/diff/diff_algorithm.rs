use derive_new::new;
use std::ops::{Index, IndexMut, Range};

/// One step of an edit script turning `old` into `new`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Edit<'d, T> {
    /// Present only in `old`.
    Delete(&'d T),
    /// Present only in `new`.
    Insert(&'d T),
    Equal(&'d T),
}

impl<T> Edit<'_, T> {
    pub fn is_change(&self) -> bool {
        !matches!(self, Edit::Equal(_))
    }
}

/// Furthest reaching `x` per diagonal, addressed by the signed diagonal `k`
struct Frontier {
    offset: isize,
    v: Vec<usize>,
}

impl Frontier {
    fn new(max_d: usize) -> Self {
        Frontier {
            offset: max_d as isize,
            v: vec![0; 2 * max_d + 1],
        }
    }
}

impl Index<isize> for Frontier {
    type Output = usize;

    fn index(&self, k: isize) -> &usize {
        &self.v[(self.offset + k) as usize]
    }
}

impl IndexMut<isize> for Frontier {
    fn index_mut(&mut self, k: isize) -> &mut usize {
        &mut self.v[(self.offset + k) as usize]
    }
}

/// Half of the worst-case edit distance, which bounds both searches.
fn max_d(old_len: usize, new_len: usize) -> usize {
    (old_len + new_len).div_ceil(2) + 1
}

/// Myers' O(ND) shortest edit script over two record sequences
///
/// Uses the linear space refinement: the middle snake of the edit graph is
/// searched from both ends and the two halves are solved recursively, so
/// memory stays proportional to `old.len() + new.len()` whatever the number
/// of differences.
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct MyersDiff<'d, T> {
    old: &'d [T],
    new: &'d [T],
}

impl<'d, T: Eq> MyersDiff<'d, T> {
    pub fn diff(&self) -> Vec<Edit<'d, T>> {
        let max_d = max_d(self.old.len(), self.new.len());
        let mut forward = Frontier::new(max_d);
        let mut backward = Frontier::new(max_d);
        let mut edits = Vec::with_capacity(self.old.len().max(self.new.len()));

        self.conquer(
            0..self.old.len(),
            0..self.new.len(),
            &mut forward,
            &mut backward,
            &mut edits,
        );

        edits
    }

    /// Edits without the common records.
    pub fn changes(&self) -> Vec<Edit<'d, T>> {
        self.diff()
            .into_iter()
            .filter(|edit| edit.is_change())
            .collect()
    }

    fn conquer(
        &self,
        mut old: Range<usize>,
        mut new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
        edits: &mut Vec<Edit<'d, T>>,
    ) {
        let (old_records, new_records): (&'d [T], &'d [T]) = (self.old, self.new);

        let prefix = self.common_prefix(old.clone(), new.clone());
        edits.extend(old_records[old.start..old.start + prefix].iter().map(Edit::Equal));
        old.start += prefix;
        new.start += prefix;

        let suffix = self.common_suffix(old.clone(), new.clone());
        old.end -= suffix;
        new.end -= suffix;
        let common_suffix = old.end..old.end + suffix;

        if old.is_empty() {
            edits.extend(new_records[new].iter().map(Edit::Insert));
        } else if new.is_empty() {
            edits.extend(old_records[old].iter().map(Edit::Delete));
        } else if let Some((x, y)) = self.middle_snake(old.clone(), new.clone(), forward, backward)
        {
            self.conquer(old.start..x, new.start..y, forward, backward, edits);
            self.conquer(x..old.end, y..new.end, forward, backward, edits);
        } else {
            edits.extend(old_records[old].iter().map(Edit::Delete));
            edits.extend(new_records[new].iter().map(Edit::Insert));
        }

        edits.extend(old_records[common_suffix].iter().map(Edit::Equal));
    }

    /// A point on an optimal path through the sub-graph `old x new`, found
    /// where the forward and the backward searches overlap.
    fn middle_snake(
        &self,
        old: Range<usize>,
        new: Range<usize>,
        forward: &mut Frontier,
        backward: &mut Frontier,
    ) -> Option<(usize, usize)> {
        let (n, m) = (old.len(), new.len());
        let delta = n as isize - m as isize;
        let odd = delta & 1 == 1;

        forward[1] = 0;
        backward[1] = 0;

        for d in 0..max_d(n, m) as isize {
            for k in (-d..=d).rev().step_by(2) {
                // k == -d can only be reached by an insertion, k == d by a deletion
                let mut x = if k == -d || (k != d && forward[k - 1] < forward[k + 1]) {
                    forward[k + 1]
                } else {
                    forward[k - 1] + 1
                };
                let y = (x as isize - k) as usize;
                let (x0, y0) = (x, y);

                if x < n && y < m {
                    x += self.common_prefix(old.start + x..old.end, new.start + y..new.end);
                }
                forward[k] = x;

                if odd && (k - delta).abs() < d && forward[k] + backward[delta - k] >= n {
                    return Some((old.start + x0, new.start + y0));
                }
            }

            for k in (-d..=d).rev().step_by(2) {
                let mut x = if k == -d || (k != d && backward[k - 1] < backward[k + 1]) {
                    backward[k + 1]
                } else {
                    backward[k - 1] + 1
                };
                let mut y = (x as isize - k) as usize;

                if x < n && y < m {
                    let advance = self.common_suffix(
                        old.start..old.start + n - x,
                        new.start..new.start + m - y,
                    );
                    x += advance;
                    y += advance;
                }
                backward[k] = x;

                if !odd && (k - delta).abs() <= d && backward[k] + forward[delta - k] >= n {
                    return Some((old.start + n - x, new.start + m - y));
                }
            }
        }

        None
    }

    fn common_prefix(&self, old: Range<usize>, new: Range<usize>) -> usize {
        self.old[old]
            .iter()
            .zip(&self.new[new])
            .take_while(|(a, b)| a == b)
            .count()
    }

    fn common_suffix(&self, old: Range<usize>, new: Range<usize>) -> usize {
        self.old[old]
            .iter()
            .rev()
            .zip(self.new[new].iter().rev())
            .take_while(|(a, b)| a == b)
            .count()
    }
}
