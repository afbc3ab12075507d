use std::fmt;
use std::str::FromStr;
use crate::gapped::{comb_sort, shell_sort};
use crate::quadratic::{bubble_sort, insertion_sort, selection_sort};
use crate::radix::radix_sort;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Bubble,
    Selection,
    Insertion,
    Comb,
    Shell,
    Radix,
}

impl Algorithm {
    /// Registry in execution order.
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Comb,
        Algorithm::Shell,
        Algorithm::Radix,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubbleSort",
            Algorithm::Selection => "selectionSort",
            Algorithm::Insertion => "insertionSort",
            Algorithm::Comb => "combSort",
            Algorithm::Shell => "shellSort",
            Algorithm::Radix => "radixSort",
        }
    }

    /// Sorts `arr` ascending in place and returns the number of element comparisons,
    /// or `None` for radix sort, which does not compare elements.
    pub fn sort(self, arr: &mut [i32]) -> Option<u64> {
        match self {
            Algorithm::Bubble => Some(bubble_sort(arr)),
            Algorithm::Selection => Some(selection_sort(arr)),
            Algorithm::Insertion => Some(insertion_sort(arr)),
            Algorithm::Comb => Some(comb_sort(arr)),
            Algorithm::Shell => Some(shell_sort(arr)),
            Algorithm::Radix => {
                radix_sort(arr);
                None
            }
        }
    }

    pub fn counts_comparisons(self) -> bool {
        self != Algorithm::Radix
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Algorithm::ALL
            .into_iter()
            .find(|a| {
                let name = a.name().to_ascii_lowercase();
                name == wanted || name.trim_end_matches("sort") == wanted
            })
            .ok_or_else(|| format!("unknown algorithm '{}'", s))
    }
}
