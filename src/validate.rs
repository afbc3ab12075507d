pub fn is_ordered(arr: &[i32]) -> bool {
    first_inversion(arr).is_none()
}

/// Index `i` of the first element with `arr[i] < arr[i - 1]`.
pub fn first_inversion(arr: &[i32]) -> Option<usize> {
    (1..arr.len()).find(|&i| arr[i] < arr[i - 1])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trivial_inputs_are_ordered() {
        assert!(is_ordered(&[]));
        assert!(is_ordered(&[42]));
    }

    #[test]
    fn equal_neighbours_are_ordered() {
        assert!(is_ordered(&[1, 1, 2, 2, 2, 3]));
    }

    #[test]
    fn finds_first_inversion() {
        assert!(!is_ordered(&[1, 3, 2, 0]));
        assert_eq!(first_inversion(&[1, 3, 2, 0]), Some(2));
        assert_eq!(first_inversion(&[5, 4]), Some(1));
    }
}
