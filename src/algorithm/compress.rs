use num_traits::PrimInt;

/// Result of compressing one line toward index 0
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressed<T> {
    /// The packed, merged, and padded line
    pub line: Vec<T>,
    /// Sum of the values created by merges
    pub points: T,
}

impl<T: PrimInt> Compressed<T> {
    /// Whether compression changed the line
    pub fn changed_from(&self, original: &[T]) -> bool {
        self.line.as_slice() != original
    }
}

/// Pack, merge, and pad a single line toward index 0
///
/// Zeros are removed, then one left-to-right pass doubles each tile equal to
/// its right neighbour and clears that neighbour, so a tile merges at most
/// once. A pair whose sum does not fit in `T` stays unmerged, and points
/// saturate. The result is packed again and padded with zeros to the original
/// length.
pub fn compress<T: PrimInt>(line: &[T]) -> Compressed<T> {
    let mut packed: Vec<T> = line.iter().copied().filter(|v| !v.is_zero()).collect();
    let mut points = T::zero();

    for i in 1..packed.len() {
        let (head, tail) = packed.split_at_mut(i);
        if let (Some(left), Some(right)) = (head.last_mut(), tail.first_mut()) {
            if left.is_zero() || *left != *right {
                continue;
            }
            if let Some(sum) = left.checked_add(right) {
                *left = sum;
                points = points.saturating_add(sum);
                *right = T::zero();
            }
        }
    }

    let mut merged: Vec<T> = packed.into_iter().filter(|v| !v.is_zero()).collect();
    merged.resize(line.len(), T::zero());

    Compressed {
        line: merged,
        points,
    }
}
