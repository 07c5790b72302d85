//! Sorting visualizer traces.
//!
//! The visualizers replay textbook sorts as a recorded sequence of
//! frames, each carrying the operation and a snapshot of the array so
//! the UI can step forwards and backwards freely.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use std::fmt;

pub const DEFAULT_ARRAY_LEN: usize = 12;
const VALUE_RANGE: std::ops::RangeInclusive<u32> = 5..=99;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SortAlgorithm {
    #[default]
    Bubble,
    Merge,
    Quick,
}

impl SortAlgorithm {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Bubble => "bubble",
            Self::Merge => "merge",
            Self::Quick => "quick",
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Bubble => "Bubble Sort",
            Self::Merge => "Merge Sort",
            Self::Quick => "Quick Sort",
        }
    }

    pub const ALL: [Self; 3] = [Self::Bubble, Self::Merge, Self::Quick];
}

impl fmt::Display for SortAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One operation performed by the sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", tag = "op")]
pub enum SortOp {
    Compare { a: usize, b: usize },
    Swap { a: usize, b: usize },
    /// Merge sort writes values back instead of swapping in place.
    Write { index: usize, value: u32 },
    Done,
}

/// A single animation frame: the operation plus the array after it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortFrame {
    pub op: SortOp,
    pub values: Vec<u32>,
}

/// Seeded random array for a visualizer round.
#[must_use]
pub fn random_values(seed: u64, len: usize) -> Vec<u32> {
    let mut rng = ChaCha20Rng::seed_from_u64(seed);
    (0..len).map(|_| rng.gen_range(VALUE_RANGE)).collect()
}

/// Record the full frame sequence for sorting `values` with `algo`.
/// The last frame is always `Done` over the sorted array.
#[must_use]
pub fn trace_sort(values: &[u32], algo: SortAlgorithm) -> Vec<SortFrame> {
    let mut work = values.to_vec();
    let mut frames = Vec::new();
    match algo {
        SortAlgorithm::Bubble => bubble(&mut work, &mut frames),
        SortAlgorithm::Merge => {
            let len = work.len();
            merge_sort(&mut work, 0, len, &mut frames);
        }
        SortAlgorithm::Quick => {
            let len = work.len();
            if len > 0 {
                quick_sort(&mut work, 0, len - 1, &mut frames);
            }
        }
    }
    frames.push(SortFrame {
        op: SortOp::Done,
        values: work,
    });
    frames
}

fn push(frames: &mut Vec<SortFrame>, op: SortOp, values: &[u32]) {
    frames.push(SortFrame {
        op,
        values: values.to_vec(),
    });
}

fn bubble(values: &mut [u32], frames: &mut Vec<SortFrame>) {
    let len = values.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 0..len.saturating_sub(pass + 1) {
            push(frames, SortOp::Compare { a: i, b: i + 1 }, values);
            if values[i] > values[i + 1] {
                values.swap(i, i + 1);
                swapped = true;
                push(frames, SortOp::Swap { a: i, b: i + 1 }, values);
            }
        }
        if !swapped {
            break;
        }
    }
}

fn merge_sort(values: &mut [u32], lo: usize, hi: usize, frames: &mut Vec<SortFrame>) {
    if hi - lo < 2 {
        return;
    }
    let mid = lo + (hi - lo) / 2;
    merge_sort(values, lo, mid, frames);
    merge_sort(values, mid, hi, frames);

    let left: Vec<u32> = values[lo..mid].to_vec();
    let right: Vec<u32> = values[mid..hi].to_vec();
    let (mut i, mut j) = (0, 0);
    for k in lo..hi {
        let take_left = match (left.get(i), right.get(j)) {
            (Some(l), Some(r)) => {
                push(frames, SortOp::Compare { a: lo + i, b: mid + j }, values);
                l <= r
            }
            (Some(_), None) => true,
            (None, _) => false,
        };
        let value = if take_left {
            i += 1;
            left[i - 1]
        } else {
            j += 1;
            right[j - 1]
        };
        values[k] = value;
        push(frames, SortOp::Write { index: k, value }, values);
    }
}

fn quick_sort(values: &mut [u32], lo: usize, hi: usize, frames: &mut Vec<SortFrame>) {
    if lo >= hi {
        return;
    }
    // Lomuto partition around the last element.
    let pivot = values[hi];
    let mut boundary = lo;
    for i in lo..hi {
        push(frames, SortOp::Compare { a: i, b: hi }, values);
        if values[i] <= pivot {
            if i != boundary {
                values.swap(i, boundary);
                push(frames, SortOp::Swap { a: i, b: boundary }, values);
            }
            boundary += 1;
        }
    }
    if boundary != hi {
        values.swap(boundary, hi);
        push(frames, SortOp::Swap { a: boundary, b: hi }, values);
    }
    if boundary > lo {
        quick_sort(values, lo, boundary - 1, frames);
    }
    quick_sort(values, boundary + 1, hi, frames);
}
