//! Quadratic comparison sorts. Every function returns the number of element comparisons it made.

pub fn bubble_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    let n = arr.len();
    for i in 0..n {
        for j in (i + 1..n).rev() {
            comparisons += 1;
            if arr[j - 1] > arr[j] {
                arr.swap(j - 1, j);
            }
        }
    }
    comparisons
}

pub fn selection_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    let n = arr.len();
    for i in 0..n.saturating_sub(1) {
        let mut min_pos = i;
        for j in i + 1..n {
            comparisons += 1;
            if arr[j] < arr[min_pos] {
                min_pos = j;
            }
        }
        if min_pos != i {
            arr.swap(i, min_pos);
        }
    }
    comparisons
}

pub fn insertion_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 {
            comparisons += 1;
            if arr[j - 1] <= key {
                break;
            }
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bubble_small() {
        let mut arr = [5, 1, 4, 2, 8];
        assert_eq!(bubble_sort(&mut arr), 10);
        assert_eq!(arr, [1, 2, 4, 5, 8]);
    }

    #[test]
    fn selection_handles_empty_and_single() {
        let mut empty: [i32; 0] = [];
        assert_eq!(selection_sort(&mut empty), 0);
        let mut one = [7];
        assert_eq!(selection_sort(&mut one), 0);
        assert_eq!(one, [7]);
    }

    #[test]
    fn selection_with_duplicates() {
        let mut arr = [3, 1, 3, 1, 2];
        assert_eq!(selection_sort(&mut arr), 10);
        assert_eq!(arr, [1, 1, 2, 3, 3]);
    }

    #[test]
    fn insertion_counts_inversions() {
        // no stopping comparison once an element reaches the front
        let mut arr = [2, 1, 3];
        assert_eq!(insertion_sort(&mut arr), 2);
        assert_eq!(arr, [1, 2, 3]);

        let mut arr = [3, 2, 1];
        assert_eq!(insertion_sort(&mut arr), 3);
        assert_eq!(arr, [1, 2, 3]);
    }
}
