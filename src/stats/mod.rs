//! Aggregate membership statistics
//!
//! Pure computation over a record snapshot; nothing here touches the
//! store or its indices. Collaborator report surfaces serialize the
//! result however they present it.

use serde::Serialize;

use crate::model::{FeePolicy, Member, MembershipKind};

/// Rating at or above which a member counts as a high performer
pub const HIGH_PERFORMER_RATING: u8 = 8;

/// Aggregate figures over one record snapshot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MembershipStats {
    /// Total live records in the snapshot
    pub total: usize,
    /// Standard members
    pub standard: usize,
    /// Coached members
    pub coached: usize,
    /// Academic members
    pub academic: usize,
    /// Mean rating, 0.0 for an empty snapshot
    pub average_rating: f64,
    /// Members with the goal flag set
    pub goal_achievers: usize,
    /// Goal achievers as a fraction of the total, 0.0 when empty
    pub goal_rate: f64,
    /// Members rated at or above [`HIGH_PERFORMER_RATING`]
    pub high_performers: usize,
    /// Sum of monthly fees under the supplied policy
    pub monthly_revenue: f64,
    /// Mean monthly fee, 0.0 for an empty snapshot
    pub average_fee: f64,
    /// Full name and fee of the highest-paying member, if any
    pub highest_payer: Option<(String, f64)>,
}

impl MembershipStats {
    /// Compute statistics over a snapshot under the given fee policy
    pub fn collect(members: &[Member], fees: &dyn FeePolicy) -> Self {
        let total = members.len();
        if total == 0 {
            return Self::empty();
        }

        let mut standard = 0;
        let mut coached = 0;
        let mut academic = 0;
        let mut rating_sum = 0u64;
        let mut goal_achievers = 0;
        let mut high_performers = 0;
        let mut monthly_revenue = 0.0;
        let mut highest_payer: Option<(String, f64)> = None;

        for member in members {
            match member.kind() {
                MembershipKind::Standard => standard += 1,
                MembershipKind::Coached => coached += 1,
                MembershipKind::Academic => academic += 1,
            }

            rating_sum += u64::from(member.rating());
            if member.goal_achieved() {
                goal_achievers += 1;
            }
            if member.rating() >= HIGH_PERFORMER_RATING {
                high_performers += 1;
            }

            let fee = member.monthly_fee(fees);
            monthly_revenue += fee;
            let is_new_highest = highest_payer
                .as_ref()
                .map_or(true, |(_, best)| fee.total_cmp(best).is_gt());
            if is_new_highest {
                highest_payer = Some((member.full_name(), fee));
            }
        }

        let total_f = total as f64;
        Self {
            total,
            standard,
            coached,
            academic,
            average_rating: rating_sum as f64 / total_f,
            goal_achievers,
            goal_rate: goal_achievers as f64 / total_f,
            high_performers,
            monthly_revenue,
            average_fee: monthly_revenue / total_f,
            highest_payer,
        }
    }

    fn empty() -> Self {
        Self {
            total: 0,
            standard: 0,
            coached: 0,
            academic: 0,
            average_rating: 0.0,
            goal_achievers: 0,
            goal_rate: 0.0,
            high_performers: 0,
            monthly_revenue: 0.0,
            average_fee: 0.0,
            highest_payer: None,
        }
    }
}
