//! Member record model for memberdb
//!
//! Pure data: the member entity, its membership variant, and fee
//! computation. No index or search logic lives here.
//!
//! # Design Principles
//!
//! - The id is immutable after creation; there is no setter for it
//! - The membership variant is fixed at creation; variant-specific fields
//!   stay mutable through variant-gated accessors
//! - The monthly fee is derived, never stored; a [`FeePolicy`] supplies it
//! - An out-of-range rating write is rejected and the previous value kept

mod errors;
mod fees;
mod member;

pub use errors::{ModelError, ModelResult};
pub use fees::{FeePolicy, StandardRates};
pub use member::{Member, Membership, MembershipKind};
