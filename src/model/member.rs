//! The member record and its membership variants
//!
//! A member is identified by an immutable, globally unique id. Contact
//! attributes and the rating are mutable; the membership variant is fixed
//! at creation. Variant-specific fields are reached through variant-gated
//! accessors that fail with `InvalidVariant` on the wrong variant rather
//! than returning a silent default.

use serde::{Deserialize, Serialize};

use super::errors::{ModelError, ModelResult};
use super::fees::FeePolicy;

/// Highest rating a member can hold; writes above this are rejected.
pub const MAX_RATING: u8 = 10;

/// The membership kind, fixed when the record is created.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Membership {
    /// Base membership with no extras
    Standard,
    /// Membership with personal coaching sessions
    Coached {
        /// Assigned trainer
        trainer_name: String,
        /// Booked sessions per month
        sessions_per_month: u32,
    },
    /// Discounted membership for enrolled students
    Academic {
        /// Student identifier at the institution
        student_id: String,
        /// Institution name
        institution: String,
    },
}

impl Membership {
    /// Returns the variant tag without its payload
    pub fn kind(&self) -> MembershipKind {
        match self {
            Membership::Standard => MembershipKind::Standard,
            Membership::Coached { .. } => MembershipKind::Coached,
            Membership::Academic { .. } => MembershipKind::Academic,
        }
    }
}

/// Payload-free membership tag, used by search criteria and statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MembershipKind {
    /// Base membership
    Standard,
    /// Coached membership
    Coached,
    /// Academic membership
    Academic,
}

/// One membership record.
///
/// The id is private and immutable; everything else mutates through
/// setters so the rating contract and variant gating cannot be bypassed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    /// Globally unique identifier, immutable after creation
    id: String,
    /// Given name (non-empty by contract, not validated here)
    first_name: String,
    /// Family name (non-empty by contract, not validated here)
    last_name: String,
    /// Contact email (format validation is a collaborator concern)
    email: String,
    /// Contact phone (format validation is a collaborator concern)
    phone: String,
    /// Performance rating in [0, MAX_RATING]
    rating: u8,
    /// Whether the member reached their goal
    goal_achieved: bool,
    /// Membership variant, fixed at creation
    membership: Membership,
}

impl Member {
    /// Create a new member record with rating 0 and goal not achieved
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        phone: impl Into<String>,
        membership: Membership,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone: phone.into(),
            rating: 0,
            goal_achieved: false,
            membership,
        }
    }

    /// The immutable member id
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Given name
    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    /// Family name
    pub fn last_name(&self) -> &str {
        &self.last_name
    }

    /// `"first last"`, the key the name index derives from (lower-cased)
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Contact email
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Contact phone
    pub fn phone(&self) -> &str {
        &self.phone
    }

    /// Current performance rating
    pub fn rating(&self) -> u8 {
        self.rating
    }

    /// Whether the member reached their goal
    pub fn goal_achieved(&self) -> bool {
        self.goal_achieved
    }

    /// The membership variant with its payload
    pub fn membership(&self) -> &Membership {
        &self.membership
    }

    /// The payload-free variant tag
    pub fn kind(&self) -> MembershipKind {
        self.membership.kind()
    }

    /// Replace both name parts.
    ///
    /// Callers holding the record inside a store must go through the
    /// store's `rename` so the name index gets re-keyed.
    pub fn set_name(&mut self, first_name: impl Into<String>, last_name: impl Into<String>) {
        self.first_name = first_name.into();
        self.last_name = last_name.into();
    }

    /// Replace contact attributes (no index derives from these)
    pub fn set_contact(&mut self, email: impl Into<String>, phone: impl Into<String>) {
        self.email = email.into();
        self.phone = phone.into();
    }

    /// Assign a rating.
    ///
    /// Values above [`MAX_RATING`] are rejected and the previous value is
    /// retained. The rejection is silent: no error is returned.
    pub fn set_rating(&mut self, rating: u8) {
        if rating <= MAX_RATING {
            self.rating = rating;
        }
    }

    /// Set the goal-achieved flag
    pub fn set_goal_achieved(&mut self, achieved: bool) {
        self.goal_achieved = achieved;
    }

    /// Monthly fee derived from the variant by the supplied policy
    pub fn monthly_fee(&self, fees: &dyn FeePolicy) -> f64 {
        fees.monthly_fee(&self.membership)
    }

    // Variant-gated accessors. Using one on the wrong variant is a
    // contract violation reported as InvalidVariant.

    /// Trainer name (Coached only)
    pub fn trainer_name(&self) -> ModelResult<&str> {
        match &self.membership {
            Membership::Coached { trainer_name, .. } => Ok(trainer_name),
            other => Err(Self::wrong_variant(MembershipKind::Coached, other)),
        }
    }

    /// Booked sessions per month (Coached only)
    pub fn sessions_per_month(&self) -> ModelResult<u32> {
        match &self.membership {
            Membership::Coached {
                sessions_per_month, ..
            } => Ok(*sessions_per_month),
            other => Err(Self::wrong_variant(MembershipKind::Coached, other)),
        }
    }

    /// Reassign the trainer (Coached only)
    pub fn set_trainer_name(&mut self, name: impl Into<String>) -> ModelResult<()> {
        match &mut self.membership {
            Membership::Coached { trainer_name, .. } => {
                *trainer_name = name.into();
                Ok(())
            }
            other => Err(Self::wrong_variant(MembershipKind::Coached, other)),
        }
    }

    /// Rebook monthly sessions (Coached only)
    pub fn set_sessions_per_month(&mut self, sessions: u32) -> ModelResult<()> {
        match &mut self.membership {
            Membership::Coached {
                sessions_per_month, ..
            } => {
                *sessions_per_month = sessions;
                Ok(())
            }
            other => Err(Self::wrong_variant(MembershipKind::Coached, other)),
        }
    }

    /// Student id (Academic only)
    pub fn student_id(&self) -> ModelResult<&str> {
        match &self.membership {
            Membership::Academic { student_id, .. } => Ok(student_id),
            other => Err(Self::wrong_variant(MembershipKind::Academic, other)),
        }
    }

    /// Institution name (Academic only)
    pub fn institution(&self) -> ModelResult<&str> {
        match &self.membership {
            Membership::Academic { institution, .. } => Ok(institution),
            other => Err(Self::wrong_variant(MembershipKind::Academic, other)),
        }
    }

    /// Update the institution (Academic only)
    pub fn set_institution(&mut self, name: impl Into<String>) -> ModelResult<()> {
        match &mut self.membership {
            Membership::Academic { institution, .. } => {
                *institution = name.into();
                Ok(())
            }
            other => Err(Self::wrong_variant(MembershipKind::Academic, other)),
        }
    }

    fn wrong_variant(expected: MembershipKind, actual: &Membership) -> ModelError {
        ModelError::InvalidVariant {
            expected,
            actual: actual.kind(),
        }
    }
}
