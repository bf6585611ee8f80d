//! Partition-exchange sort by full name
//!
//! Last-element pivot, Lomuto partition, recursive with no size cutoff.
//! Keys are lower-cased full names; equal names may reorder (not stable).

use crate::model::Member;

/// Sort a slice copy by full name, ascending, case-insensitive
pub fn sort_by_name(members: &[Member]) -> Vec<Member> {
    let mut sorted = members.to_vec();
    if !sorted.is_empty() {
        let high = sorted.len() - 1;
        quick_sort(&mut sorted, 0, high);
    }
    sorted
}

fn quick_sort(members: &mut [Member], low: usize, high: usize) {
    if low < high {
        let pivot = partition(members, low, high);
        if pivot > 0 {
            quick_sort(members, low, pivot - 1);
        }
        quick_sort(members, pivot + 1, high);
    }
}

/// Lomuto partition around the last element's name key
fn partition(members: &mut [Member], low: usize, high: usize) -> usize {
    let pivot = members[high].full_name().to_lowercase();
    let mut i = low;

    for j in low..high {
        if members[j].full_name().to_lowercase() <= pivot {
            members.swap(i, j);
            i += 1;
        }
    }
    members.swap(i, high);
    i
}
