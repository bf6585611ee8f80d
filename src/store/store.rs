//! The member store: canonical collection, auxiliary indices, rating cache
//!
//! # Structures
//!
//! - Canonical collection: `Vec<Member>` in insertion order
//! - Id index: `HashMap<id, position>` for O(1) average lookups
//! - Name index: `BTreeSet<(lower-cased full name, id)>` for ordered
//!   prefix scans in O(log n + k); keying the pair means two members
//!   sharing a name never collide
//! - Rating cache: a lazily rebuilt ascending-by-rating snapshot behind an
//!   `RwLock`, cleared by every mutation
//!
//! # Exclusion
//!
//! Mutators take `&mut self` and reads take `&self`, so the borrow checker
//! serializes writers against readers by construction. The rating cache is
//! the one interior-mutable member; its `RwLock` keeps a lazy rebuild from
//! interleaving with another rebuild when the store is shared read-only.

use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, PoisonError, RwLock};

use crate::model::Member;

use super::errors::{StoreError, StoreResult};

/// The index store over the live member record set
#[derive(Debug, Default)]
pub struct MemberStore {
    /// Canonical collection, insertion order
    members: Vec<Member>,
    /// Id -> position in the canonical collection
    positions: HashMap<String, usize>,
    /// (lower-cased full name, id) pairs, ordered by name then id
    by_name: BTreeSet<(String, String)>,
    /// Ascending-by-rating snapshot; `None` means stale
    rating_cache: RwLock<Option<Arc<Vec<Member>>>>,
}

impl MemberStore {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of live records
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Whether the store holds no records
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Insert a record.
    ///
    /// Fails with [`StoreError::DuplicateId`] if the id is already present;
    /// the store is left unchanged in that case. On success the canonical
    /// collection, both indices and the cache staleness flag are all
    /// updated before returning, so no partial-index state is observable.
    pub fn add(&mut self, member: Member) -> StoreResult<()> {
        if self.positions.contains_key(member.id()) {
            return Err(StoreError::DuplicateId(member.id().to_string()));
        }

        self.positions
            .insert(member.id().to_string(), self.members.len());
        self.by_name
            .insert((member.full_name().to_lowercase(), member.id().to_string()));
        self.members.push(member);
        self.invalidate_rating_cache();
        Ok(())
    }

    /// Remove a record by id.
    ///
    /// Returns `false` if the id is absent (removal of an unknown id is a
    /// normal no-op, not a failure).
    pub fn remove(&mut self, id: &str) -> bool {
        let Some(pos) = self.positions.remove(id) else {
            return false;
        };

        let member = self.members.remove(pos);
        self.by_name
            .remove(&(member.full_name().to_lowercase(), member.id().to_string()));

        // Records after the removed one shifted down by one.
        for moved in &self.members[pos..] {
            if let Some(p) = self.positions.get_mut(moved.id()) {
                *p -= 1;
            }
        }

        self.invalidate_rating_cache();
        true
    }

    /// Change a record's name.
    ///
    /// The name-index key is derived from the name, so the old entry must
    /// be removed and a new one inserted; mutating the record in place
    /// would desynchronize the index. Returns `false` if the id is absent.
    pub fn rename(&mut self, id: &str, new_first: &str, new_last: &str) -> bool {
        let Some(&pos) = self.positions.get(id) else {
            return false;
        };

        let member = &mut self.members[pos];
        self.by_name
            .remove(&(member.full_name().to_lowercase(), id.to_string()));
        member.set_name(new_first, new_last);
        self.by_name
            .insert((member.full_name().to_lowercase(), id.to_string()));

        self.invalidate_rating_cache();
        true
    }

    /// Assign a rating, under the model's reject-on-out-of-range contract.
    ///
    /// Returns `false` if the id is absent. The rating cache is marked
    /// stale whenever the record exists: the cache orders by rating, so a
    /// rating write that stuck would otherwise leave it mis-ordered.
    pub fn set_rating(&mut self, id: &str, rating: u8) -> bool {
        let Some(&pos) = self.positions.get(id) else {
            return false;
        };
        self.members[pos].set_rating(rating);
        self.invalidate_rating_cache();
        true
    }

    /// Set the goal-achieved flag. Returns `false` if the id is absent.
    pub fn set_goal_achieved(&mut self, id: &str, achieved: bool) -> bool {
        let Some(&pos) = self.positions.get(id) else {
            return false;
        };
        self.members[pos].set_goal_achieved(achieved);
        self.invalidate_rating_cache();
        true
    }

    /// Replace contact attributes. No index derives from these, but the
    /// rating cache holds record snapshots, so it still goes stale.
    /// Returns `false` if the id is absent.
    pub fn set_contact(&mut self, id: &str, email: &str, phone: &str) -> bool {
        let Some(&pos) = self.positions.get(id) else {
            return false;
        };
        self.members[pos].set_contact(email, phone);
        self.invalidate_rating_cache();
        true
    }

    /// Lookup by id, O(1) average
    pub fn by_id(&self, id: &str) -> Option<&Member> {
        self.positions.get(id).map(|&pos| &self.members[pos])
    }

    /// Cloned snapshot of the whole record set in insertion order.
    ///
    /// Mutations after the snapshot is taken do not retroactively appear
    /// in it.
    pub fn all(&self) -> Vec<Member> {
        self.members.clone()
    }

    /// Case-insensitive prefix scan over the name index.
    ///
    /// Returns matches ordered by lower-cased full name (ties by id) in
    /// O(log n + k). An empty prefix returns every record in name order.
    pub fn by_name_prefix(&self, prefix: &str) -> Vec<Member> {
        let prefix = prefix.to_lowercase();
        self.by_name
            .range((prefix.clone(), String::new())..)
            .take_while(|(name, _)| name.starts_with(&prefix))
            .filter_map(|(_, id)| self.by_id(id).cloned())
            .collect()
    }

    /// Ascending-by-rating snapshot, rebuilt lazily.
    ///
    /// The first read after a mutation pays one O(n log n) rebuild; the
    /// shared `Arc` is then reused until the next mutation. The sort is
    /// stable, so equal ratings keep insertion order.
    pub fn rating_view(&self) -> Arc<Vec<Member>> {
        {
            let cache = self
                .rating_cache
                .read()
                .unwrap_or_else(PoisonError::into_inner);
            if let Some(view) = cache.as_ref() {
                return Arc::clone(view);
            }
        }

        let mut cache = self
            .rating_cache
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        // Another reader may have rebuilt while we waited for the lock.
        if let Some(view) = cache.as_ref() {
            return Arc::clone(view);
        }

        let mut sorted = self.members.clone();
        sorted.sort_by_key(Member::rating);
        let view = Arc::new(sorted);
        *cache = Some(Arc::clone(&view));
        view
    }

    fn invalidate_rating_cache(&mut self) {
        *self
            .rating_cache
            .get_mut()
            .unwrap_or_else(PoisonError::into_inner) = None;
    }
}

impl Clone for MemberStore {
    /// Clones never share cache state: the clone starts with a stale cache
    /// and rebuilds its own view on first read.
    fn clone(&self) -> Self {
        Self {
            members: self.members.clone(),
            positions: self.positions.clone(),
            by_name: self.by_name.clone(),
            rating_cache: RwLock::new(None),
        }
    }
}
