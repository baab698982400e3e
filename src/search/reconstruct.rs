/// Walk predecessor links from `dst` back to `src` and return the route in
/// forward order, both endpoints included. An empty vector means no path.
///
/// `src == dst` always succeeds as the one-element path `[src]`, whatever the
/// predecessor array holds. The walk is bounded by the array length, so a
/// malformed array (a cycle, or a link pointing out of bounds) yields an
/// empty path instead of looping or panicking.
pub fn reconstruct_path(parent: &[Option<usize>], src: usize, dst: usize) -> Vec<usize> {
    if src == dst {
        return vec![src];
    }

    let mut path = Vec::new();
    let mut current = dst;

    // A simple path visits at most parent.len() nodes; one step beyond that
    // means the links loop
    for _ in 0..=parent.len() {
        path.push(current);
        if current == src {
            path.reverse();
            return path;
        }
        match parent.get(current).copied().flatten() {
            Some(prev) => current = prev,
            None => return Vec::new(), // chain broke before reaching the source
        }
    }

    Vec::new()
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reconstruct_simple_chain() {
        // 0 -> 2 -> 1 -> 3
        let parent = vec![None, Some(2), Some(0), Some(1)];

        assert_eq!(reconstruct_path(&parent, 0, 3), vec![0, 2, 1, 3]);
        assert_eq!(reconstruct_path(&parent, 0, 1), vec![0, 2, 1]);
    }

    #[test]
    fn test_reconstruct_source_equals_destination() {
        // succeeds no matter what the predecessor array looks like
        let garbage = vec![Some(9), Some(9), Some(9)];
        assert_eq!(reconstruct_path(&garbage, 1, 1), vec![1]);
        assert_eq!(reconstruct_path(&[], 0, 0), vec![0]);
    }

    #[test]
    fn test_reconstruct_no_predecessor_assigned() {
        // destination was never reached by the search
        let parent = vec![None, Some(0), None];
        assert_eq!(reconstruct_path(&parent, 0, 2), Vec::<usize>::new());
    }

    #[test]
    fn test_reconstruct_chain_misses_source() {
        // 3 -> 2 -> 1 terminates at 1, which is not the requested source
        let parent = vec![None, None, Some(1), Some(2)];
        assert_eq!(reconstruct_path(&parent, 0, 3), Vec::<usize>::new());
    }

    #[test]
    fn test_reconstruct_fails_closed_on_cycle() {
        // 3 -> 2 -> 1 -> 2 -> ... never reaches 0
        let parent = vec![None, Some(2), Some(1), Some(2)];
        assert_eq!(reconstruct_path(&parent, 0, 3), Vec::<usize>::new());
    }

    #[test]
    fn test_reconstruct_out_of_bounds_link() {
        let parent = vec![None, Some(7)];
        assert_eq!(reconstruct_path(&parent, 0, 1), Vec::<usize>::new());
    }
}
