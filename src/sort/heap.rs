//! Heap sort by computed monthly fee, descending
//!
//! Builds a MIN-heap keyed by fee, then repeatedly swaps the root to the
//! shrinking tail: the smallest fees settle at the back, leaving the copy
//! ordered descending. In-place over the private copy, O(1) auxiliary
//! space. Fee ties may reorder (not stable).

use crate::model::{FeePolicy, Member};

/// Sort a slice copy by monthly fee, descending
pub fn sort_by_fee_desc(members: &[Member], fees: &dyn FeePolicy) -> Vec<Member> {
    let mut sorted = members.to_vec();
    let n = sorted.len();
    if n < 2 {
        return sorted;
    }

    // Build the min-heap bottom-up from the last parent.
    for i in (0..n / 2).rev() {
        sift_down(&mut sorted, n, i, fees);
    }

    // Extract: move the current minimum behind the heap boundary.
    for end in (1..n).rev() {
        sorted.swap(0, end);
        sift_down(&mut sorted, end, 0, fees);
    }

    sorted
}

fn sift_down(members: &mut [Member], heap_len: usize, root: usize, fees: &dyn FeePolicy) {
    let left = 2 * root + 1;
    let right = 2 * root + 2;
    let mut smallest = root;

    if left < heap_len
        && members[left]
            .monthly_fee(fees)
            .total_cmp(&members[smallest].monthly_fee(fees))
            .is_lt()
    {
        smallest = left;
    }

    if right < heap_len
        && members[right]
            .monthly_fee(fees)
            .total_cmp(&members[smallest].monthly_fee(fees))
            .is_lt()
    {
        smallest = right;
    }

    if smallest != root {
        members.swap(root, smallest);
        sift_down(members, heap_len, smallest, fees);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Membership, StandardRates};

    fn standard(id: &str) -> Member {
        Member::new(id, "First", "Last", "x@example.com", "555", Membership::Standard)
    }

    fn coached(id: &str, sessions: u32) -> Member {
        Member::new(
            id,
            "First",
            "Last",
            "x@example.com",
            "555",
            Membership::Coached {
                trainer_name: "Dana".to_string(),
                sessions_per_month: sessions,
            },
        )
    }

    fn academic(id: &str) -> Member {
        Member::new(
            id,
            "First",
            "Last",
            "x@example.com",
            "555",
            Membership::Academic {
                student_id: "S1".to_string(),
                institution: "State U".to_string(),
            },
        )
    }

    #[test]
    fn test_sorts_descending_by_fee() {
        let rates = StandardRates::default();
        // academic 40.0 < standard 50.0 < coached(2) 75.0 < coached(8) 150.0
        let members = vec![standard("std"), coached("c8", 8), academic("aca"), coached("c2", 2)];

        let sorted = sort_by_fee_desc(&members, &rates);
        let ids: Vec<&str> = sorted.iter().map(Member::id).collect();
        assert_eq!(ids, vec!["c8", "c2", "std", "aca"]);
    }

    #[test]
    fn test_fees_non_increasing() {
        let rates = StandardRates::default();
        let members: Vec<Member> = (0..20).map(|i| coached(&i.to_string(), i % 7)).collect();

        let sorted = sort_by_fee_desc(&members, &rates);
        for window in sorted.windows(2) {
            assert!(window[0].monthly_fee(&rates) >= window[1].monthly_fee(&rates));
        }
    }

    #[test]
    fn test_empty_and_single() {
        let rates = StandardRates::default();
        assert!(sort_by_fee_desc(&[], &rates).is_empty());
        assert_eq!(sort_by_fee_desc(&[standard("1")], &rates).len(), 1);
    }

    #[test]
    fn test_input_not_mutated() {
        let rates = StandardRates::default();
        let members = vec![academic("1"), coached("2", 5)];
        let _ = sort_by_fee_desc(&members, &rates);
        assert_eq!(members[0].id(), "1");
    }
}
