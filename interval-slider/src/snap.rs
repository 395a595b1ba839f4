//! Nearest-neighbour snapping of raw positions onto stop positions.

/// Returns the index of the candidate closest to `raw`.
///
/// Candidates are scanned in order and a later candidate only replaces the
/// current best when it is strictly closer, so exact ties resolve to the
/// earliest candidate. A NaN `raw` is never strictly closer to anything and
/// resolves to the first candidate. Returns `None` for an empty sequence.
///
/// ```
/// use interval_slider::snap::nearest_index;
///
/// let stops = [0.0, 50.0, 100.0];
/// assert_eq!(nearest_index(stops, 24.0), Some(0));
/// assert_eq!(nearest_index(stops, 25.0), Some(0));
/// assert_eq!(nearest_index(stops, 26.0), Some(1));
/// ```
pub fn nearest_index<I>(candidates: I, raw: f32) -> Option<usize>
where
    I: IntoIterator<Item = f32>,
{
    let mut best: Option<(usize, f32)> = None;
    for (index, candidate) in candidates.into_iter().enumerate() {
        let difference = (candidate - raw).abs();
        if best.is_none_or(|(_, least)| difference < least) {
            best = Some((index, difference));
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn picks_minimal_distance() {
        let stops = [10.0, 30.0, 70.0, 90.0];
        assert_eq!(nearest_index(stops, -100.0), Some(0));
        assert_eq!(nearest_index(stops, 35.0), Some(1));
        assert_eq!(nearest_index(stops, 60.0), Some(2));
        assert_eq!(nearest_index(stops, 1000.0), Some(3));
    }

    #[test]
    fn ties_resolve_to_first_candidate() {
        assert_eq!(nearest_index([0.0, 50.0, 100.0], 25.0), Some(0));
        assert_eq!(nearest_index([0.0, 50.0, 100.0], 75.0), Some(1));
        // Order, not magnitude, decides.
        assert_eq!(nearest_index([100.0, 50.0, 0.0], 25.0), Some(1));
    }

    #[test]
    fn single_candidate_always_wins() {
        assert_eq!(nearest_index([42.0], -1.0e9), Some(0));
        assert_eq!(nearest_index([42.0], 1.0e9), Some(0));
    }

    #[test]
    fn empty_has_no_nearest() {
        assert_eq!(nearest_index(std::iter::empty(), 3.0), None);
    }

    #[test]
    fn nan_resolves_to_first() {
        assert_eq!(nearest_index([5.0, 6.0], f32::NAN), Some(0));
    }
}
