use crate::config::COMB_SHRINK;

/// Next comb sort gap: `floor(gap / 1.24733)`, never below 1.
pub fn next_comb_gap(gap: usize) -> usize {
    ((gap as f64 / COMB_SHRINK) as usize).max(1)
}

/// Shell sort gaps `n/2, n/4, ..., 1`.
pub fn shell_gaps(n: usize) -> impl Iterator<Item = usize> {
    std::iter::successors(Some(n / 2), |&gap| Some(gap / 2)).take_while(|&gap| gap > 0)
}

pub fn comb_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    let n = arr.len();
    let mut gap = n;
    loop {
        gap = next_comb_gap(gap);
        let mut swapped = false;
        for i in 0..n.saturating_sub(gap) {
            comparisons += 1;
            if arr[i] > arr[i + gap] {
                arr.swap(i, i + gap);
                swapped = true;
            }
        }
        if gap == 1 && !swapped {
            break;
        }
    }
    comparisons
}

pub fn shell_sort(arr: &mut [i32]) -> u64 {
    let mut comparisons = 0;
    for gap in shell_gaps(arr.len()) {
        for i in gap..arr.len() {
            let key = arr[i];
            let mut j = i;
            while j >= gap {
                comparisons += 1;
                if arr[j - gap] <= key {
                    break;
                }
                arr[j] = arr[j - gap];
                j -= gap;
            }
            arr[j] = key;
        }
    }
    comparisons
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn comb_gaps_reach_one() {
        for n in [1, 2, 3, 10, 1000, 100_000] {
            let mut gap = n;
            let mut steps = 0;
            while gap > 1 {
                let next = next_comb_gap(gap);
                assert!(next < gap, "gap did not shrink: {} -> {}", gap, next);
                gap = next;
                steps += 1;
            }
            assert_eq!(gap, 1);
            assert!(steps <= 64);
        }
    }

    #[test]
    fn shell_gaps_halve() {
        assert_eq!(shell_gaps(10).collect::<Vec<_>>(), vec![5, 2, 1]);
        assert_eq!(shell_gaps(1).count(), 0);
        assert_eq!(shell_gaps(0).count(), 0);
        assert_eq!(shell_gaps(2).collect::<Vec<_>>(), vec![1]);
    }

    #[test]
    fn comb_small() {
        let mut arr = [9, -3, 5, 0, 0, 2, 7, -8];
        comb_sort(&mut arr);
        assert_eq!(arr, [-8, -3, 0, 0, 2, 5, 7, 9]);
    }

    #[test]
    fn comb_on_trivial_inputs() {
        let mut empty: [i32; 0] = [];
        assert_eq!(comb_sort(&mut empty), 0);
        let mut one = [1];
        assert_eq!(comb_sort(&mut one), 0);
    }

    #[test]
    fn shell_small() {
        let mut arr = [9, -3, 5, 0, 0, 2, 7, -8];
        shell_sort(&mut arr);
        assert_eq!(arr, [-8, -3, 0, 0, 2, 5, 7, 9]);
    }

    #[test]
    fn shell_sorted_input_costs_one_comparison_per_element_and_gap() {
        let mut arr: Vec<i32> = (0..10).collect();
        // gaps 5, 2, 1
        assert_eq!(shell_sort(&mut arr), 5 + 8 + 9);
    }
}
