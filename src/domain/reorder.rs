use crate::error::{BoardflowError, Result};

/// Elements that carry a positional sort key
pub trait Sequenced {
    fn order(&self) -> u32;
    fn set_order(&mut self, order: u32);
}

/// Moves one element of a sequence from `source` to `destination`.
///
/// Returns a fresh sequence; the input is never mutated, so callers holding
/// references to the old sequence stay valid. Elements between the two
/// indices shift by one position, everything else keeps its relative order.
/// `source == destination` still returns a fresh copy.
///
/// Both indices must address an existing element; an out-of-bounds index is
/// rejected with `InvalidIndex` rather than clamped.
///
/// # Examples
/// ```
/// use boardflow_core::domain::reorder::shift;
///
/// let moved = shift(&['a', 'b', 'c'], 0, 2).unwrap();
/// assert_eq!(moved, vec!['b', 'c', 'a']);
/// ```
pub fn shift<T: Clone>(seq: &[T], source: usize, destination: usize) -> Result<Vec<T>> {
    let len = seq.len();
    if source >= len {
        return Err(BoardflowError::InvalidIndex { index: source, len });
    }
    if destination >= len {
        return Err(BoardflowError::InvalidIndex {
            index: destination,
            len,
        });
    }

    let mut result = seq.to_vec();
    let moved = result.remove(source);
    result.insert(destination, moved);
    Ok(result)
}

/// Reassigns contiguous 0-based sort keys by position.
///
/// Returns a fresh sequence where every element's `order` equals its index;
/// no other field is touched. Idempotent: renumbering a renumbered sequence
/// is a no-op.
pub fn renumber<T: Sequenced + Clone>(seq: &[T]) -> Vec<T> {
    seq.iter()
        .enumerate()
        .map(|(index, element)| {
            let mut element = element.clone();
            element.set_order(index as u32);
            element
        })
        .collect()
}
