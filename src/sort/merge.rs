//! Stable merge sort by rating, descending
//!
//! Classic midpoint divide with a linear merge. The merge compares with
//! `>=`, preferring the left half on ties, which is what makes the sort
//! stable: equal ratings keep their input order.

use crate::model::Member;

/// Sort a slice copy by rating, descending, stable
pub fn sort_by_rating_desc(members: &[Member]) -> Vec<Member> {
    let mut sorted = members.to_vec();
    if sorted.len() > 1 {
        merge_sort(&mut sorted, 0, members.len() - 1);
    }
    sorted
}

fn merge_sort(members: &mut [Member], left: usize, right: usize) {
    if left < right {
        let middle = left + (right - left) / 2;
        merge_sort(members, left, middle);
        merge_sort(members, middle + 1, right);
        merge(members, left, middle, right);
    }
}

fn merge(members: &mut [Member], left: usize, middle: usize, right: usize) {
    let left_half: Vec<Member> = members[left..=middle].to_vec();
    let right_half: Vec<Member> = members[middle + 1..=right].to_vec();

    let mut i = 0;
    let mut j = 0;
    let mut k = left;

    while i < left_half.len() && j < right_half.len() {
        // Descending by rating; >= keeps the left element first on ties.
        if left_half[i].rating() >= right_half[j].rating() {
            members[k] = left_half[i].clone();
            i += 1;
        } else {
            members[k] = right_half[j].clone();
            j += 1;
        }
        k += 1;
    }

    while i < left_half.len() {
        members[k] = left_half[i].clone();
        i += 1;
        k += 1;
    }

    while j < right_half.len() {
        members[k] = right_half[j].clone();
        j += 1;
        k += 1;
    }
}
