//! Fee policy seam
//!
//! The monthly fee is a pure function of the membership variant and a rate
//! card. The core never stores fees; callers supply a policy at
//! construction (or per call for statistics over a snapshot).

use serde::{Deserialize, Serialize};

use super::member::Membership;

/// Computes the monthly fee for a membership variant.
///
/// Implementations must be pure: same variant, same fee, no side effects.
pub trait FeePolicy {
    /// Monthly fee for the given variant
    fn monthly_fee(&self, membership: &Membership) -> f64;
}

/// The stock rate card.
///
/// - `Standard` pays the base fee
/// - `Coached` pays the base fee plus a surcharge per booked session
/// - `Academic` pays the base fee reduced by the discount fraction
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardRates {
    /// Fee every membership starts from
    pub base_fee: f64,
    /// Added per coached session per month
    pub coached_session_surcharge: f64,
    /// Fraction of the base fee waived for academic members, in [0, 1]
    pub academic_discount: f64,
}

impl Default for StandardRates {
    fn default() -> Self {
        Self {
            base_fee: 50.0,
            coached_session_surcharge: 12.5,
            academic_discount: 0.2,
        }
    }
}

impl FeePolicy for StandardRates {
    fn monthly_fee(&self, membership: &Membership) -> f64 {
        match membership {
            Membership::Standard => self.base_fee,
            Membership::Coached {
                sessions_per_month, ..
            } => self.base_fee + self.coached_session_surcharge * f64::from(*sessions_per_month),
            Membership::Academic { .. } => self.base_fee * (1.0 - self.academic_discount),
        }
    }
}
