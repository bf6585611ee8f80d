//! Algorithm Correctness Tests
//!
//! Tests for the sort and search engines:
//! - Every sort output is a permutation of its input with the required order
//! - Merge sort stability on rating ties
//! - Binary search matches a brute-force filter over the whole rating domain
//! - Advanced search equals the conjunction of its predicates

use memberdb::{
    Member, MemberManager, Membership, MembershipKind, SearchCriteria, StandardRates,
};

// =============================================================================
// Helper Functions
// =============================================================================

fn make_member(id: &str, first: &str, last: &str, rating: u8, membership: Membership) -> Member {
    let mut member = Member::new(id, first, last, "x@example.com", "555-0000", membership);
    member.set_rating(rating);
    member
}

fn standard(id: &str, first: &str, rating: u8) -> Member {
    make_member(id, first, "Last", rating, Membership::Standard)
}

fn coached(id: &str, first: &str, rating: u8, sessions: u32) -> Member {
    make_member(
        id,
        first,
        "Last",
        rating,
        Membership::Coached {
            trainer_name: "Dana".to_string(),
            sessions_per_month: sessions,
        },
    )
}

/// Mixed record set with ties on every sort key
fn mixed_roster() -> Vec<Member> {
    vec![
        standard("M001", "Zoe", 5),
        coached("M002", "Alice", 9, 4),
        standard("M003", "Bob", 9),
        coached("M004", "Cara", 0, 4),
        standard("M005", "bob", 5),
        make_member(
            "M006",
            "Eli",
            "Stone",
            7,
            Membership::Academic {
                student_id: "S1".to_string(),
                institution: "State U".to_string(),
            },
        ),
    ]
}

fn loaded_manager(members: &[Member]) -> MemberManager {
    let mut manager = MemberManager::new();
    for member in members {
        manager.add(member.clone()).unwrap();
    }
    manager
}

/// Same multiset of ids in input and output
fn assert_permutation(input: &[Member], output: &[Member]) {
    assert_eq!(input.len(), output.len());
    let mut in_ids: Vec<&str> = input.iter().map(Member::id).collect();
    let mut out_ids: Vec<&str> = output.iter().map(Member::id).collect();
    in_ids.sort_unstable();
    out_ids.sort_unstable();
    assert_eq!(in_ids, out_ids);
}

// =============================================================================
// Sort Correctness Tests
// =============================================================================

/// Quick sort output is a permutation, non-decreasing by lower-cased name.
#[test]
fn test_quick_sort_by_name() {
    let manager = MemberManager::new();
    let roster = mixed_roster();

    let sorted = manager.sort_by_name(&roster);

    assert_permutation(&roster, &sorted);
    for window in sorted.windows(2) {
        assert!(window[0].full_name().to_lowercase() <= window[1].full_name().to_lowercase());
    }
}

/// Merge sort output is a permutation, non-increasing by rating, stable.
#[test]
fn test_merge_sort_by_rating_desc_stable() {
    let manager = MemberManager::new();
    let roster = mixed_roster();

    let sorted = manager.sort_by_rating_desc(&roster);

    assert_permutation(&roster, &sorted);
    for window in sorted.windows(2) {
        assert!(window[0].rating() >= window[1].rating());
    }

    // Ties keep input order: M002 before M003 (both 9), M001 before M005
    // (both 5).
    let ids: Vec<&str> = sorted.iter().map(Member::id).collect();
    let pos = |id: &str| ids.iter().position(|i| *i == id).unwrap();
    assert!(pos("M002") < pos("M003"));
    assert!(pos("M001") < pos("M005"));
}

/// Heap sort output is a permutation, non-increasing by computed fee.
#[test]
fn test_heap_sort_by_fee_desc() {
    let manager = MemberManager::new();
    let rates = StandardRates::default();
    let roster = mixed_roster();

    let sorted = manager.sort_by_fee_desc(&roster);

    assert_permutation(&roster, &sorted);
    for window in sorted.windows(2) {
        assert!(window[0].monthly_fee(&rates) >= window[1].monthly_fee(&rates));
    }
}

/// A(5), B(9), C(9) added in that order sorts to
/// exactly [B, C, A] because the rating sort is stable.
#[test]
fn test_stable_rating_sort_scenario() {
    let mut manager = MemberManager::new();
    manager.add(standard("A", "First", 5)).unwrap();
    manager.add(standard("B", "Second", 9)).unwrap();
    manager.add(standard("C", "Third", 9)).unwrap();

    let sorted = manager.sort_by_rating_desc(&manager.all());
    let ids: Vec<&str> = sorted.iter().map(Member::id).collect();
    assert_eq!(ids, vec!["B", "C", "A"]);
}

// =============================================================================
// Binary Search Tests
// =============================================================================

/// For every rating in the domain, binary search returns exactly the
/// brute-force filter result, in the same order.
#[test]
fn test_binary_search_matches_brute_force_across_domain() {
    let roster: Vec<Member> = (0..40)
        .map(|i| standard(&format!("M{:03}", i), "Name", (i * 7 % 11) as u8))
        .collect();
    let manager = loaded_manager(&roster);

    for rating in 0..=10u8 {
        let found = manager.search_by_rating(rating);
        let expected: Vec<&Member> = {
            // Brute force over the rating-ascending order with stable ties.
            let mut sorted: Vec<&Member> = roster.iter().collect();
            sorted.sort_by_key(|m| m.rating());
            sorted.into_iter().filter(|m| m.rating() == rating).collect()
        };

        let found_ids: Vec<&str> = found.iter().map(Member::id).collect();
        let expected_ids: Vec<&str> = expected.iter().map(|m| m.id()).collect();
        assert_eq!(found_ids, expected_ids, "rating {}", rating);
    }
}

/// search_by_rating(9) over A(5), B(9), C(9) returns
/// [B, C] in insertion order.
#[test]
fn test_binary_search_ties_in_insertion_order() {
    let mut manager = MemberManager::new();
    manager.add(standard("A", "First", 5)).unwrap();
    manager.add(standard("B", "Second", 9)).unwrap();
    manager.add(standard("C", "Third", 9)).unwrap();

    let hits = manager.search_by_rating(9);
    let ids: Vec<&str> = hits.iter().map(Member::id).collect();
    assert_eq!(ids, vec!["B", "C"]);
}

/// Absent ratings produce an empty result, not an error.
#[test]
fn test_binary_search_absent_rating() {
    let manager = loaded_manager(&[standard("A", "First", 5)]);
    assert!(manager.search_by_rating(9).is_empty());
    assert!(loaded_manager(&[]).search_by_rating(0).is_empty());
}

/// Binary search sees mutations immediately despite the lazy cache.
#[test]
fn test_binary_search_after_mutations() {
    let mut manager = MemberManager::new();
    manager.add(standard("A", "First", 5)).unwrap();
    assert_eq!(manager.search_by_rating(5).len(), 1);

    manager.add(standard("B", "Second", 5)).unwrap();
    assert_eq!(manager.search_by_rating(5).len(), 2);

    manager.remove("A");
    let hits = manager.search_by_rating(5);
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), "B");

    manager.set_rating("B", 8);
    assert!(manager.search_by_rating(5).is_empty());
    assert_eq!(manager.search_by_rating(8).len(), 1);
}

// =============================================================================
// Prefix Search Tests
// =============================================================================

/// Prefix search is case-insensitive and ordered by name.
#[test]
fn test_prefix_search_ordering() {
    let manager = loaded_manager(&[
        standard("1", "Zoe", 1),
        standard("2", "alice", 1),
        standard("3", "Alan", 1),
    ]);

    let hits = manager.search_by_name_prefix("AL");
    let names: Vec<String> = hits.iter().map(Member::full_name).collect();
    assert_eq!(names, vec!["Alan Last", "alice Last"]);
}

/// The empty prefix returns exactly `all()` sorted by name.
#[test]
fn test_empty_prefix_equals_all_sorted() {
    let roster = mixed_roster();
    let manager = loaded_manager(&roster);

    let hits = manager.search_by_name_prefix("");
    assert_permutation(&roster, &hits);
    for window in hits.windows(2) {
        assert!(window[0].full_name().to_lowercase() <= window[1].full_name().to_lowercase());
    }
}

// =============================================================================
// Advanced Search Tests
// =============================================================================

/// Advanced search equals a brute-force conjunction of its predicates.
#[test]
fn test_advanced_search_matches_manual_filter() {
    let roster = mixed_roster();
    let manager = loaded_manager(&roster);

    let criteria = SearchCriteria::new()
        .with_rating_range(Some(5), Some(9))
        .with_kind(MembershipKind::Standard);
    let hits = manager.search_advanced(&criteria);

    let expected: Vec<&str> = roster
        .iter()
        .filter(|m| (5..=9).contains(&m.rating()) && m.kind() == MembershipKind::Standard)
        .map(Member::id)
        .collect();
    let found: Vec<&str> = hits.iter().map(Member::id).collect();
    assert_eq!(found, expected);
}

/// Exact-id criteria hit the id index and return at most one record.
#[test]
fn test_advanced_search_exact_id_path() {
    let manager = loaded_manager(&mixed_roster());

    let hits = manager.search_advanced(&SearchCriteria::new().with_id_exact("M004"));
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].id(), "M004");

    // The remaining predicates still apply to the single candidate.
    let criteria = SearchCriteria::new()
        .with_id_exact("M004")
        .with_rating_range(Some(5), None);
    assert!(manager.search_advanced(&criteria).is_empty());
}

/// All-absent criteria match every record.
#[test]
fn test_advanced_search_unconstrained() {
    let roster = mixed_roster();
    let manager = loaded_manager(&roster);
    assert_eq!(manager.search_advanced(&SearchCriteria::new()).len(), roster.len());
}

// =============================================================================
// Performance Accounting Tests
// =============================================================================

/// Every engine call lands one sample under its fixed operation name.
#[test]
fn test_operations_accumulate_in_report() {
    let manager = loaded_manager(&mixed_roster());
    let snapshot = manager.all();

    let _ = manager.sort_by_name(&snapshot);
    let _ = manager.sort_by_rating_desc(&snapshot);
    let _ = manager.sort_by_fee_desc(&snapshot);
    let _ = manager.search_by_id("M001");
    let _ = manager.search_by_name_prefix("a");
    let _ = manager.search_by_rating(5);
    let _ = manager.search_advanced(&SearchCriteria::new());

    let report = manager.performance_report();
    let names: Vec<&str> = report.iter().map(|(n, _)| n.as_str()).collect();
    for expected in [
        "sort.quick",
        "sort.merge",
        "sort.heap",
        "search.hash",
        "search.prefix",
        "search.binary",
        "search.advanced",
    ] {
        assert!(names.contains(&expected), "missing {}", expected);
    }

    // Report is ascending by cumulative duration.
    for window in report.windows(2) {
        assert!(window[0].1 <= window[1].1);
    }

    assert_eq!(manager.last_operation().unwrap().0, "search.advanced");
}
