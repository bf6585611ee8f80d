//! Seeded test data generation
//!
//! Deterministic: the same seed always yields the same record set, so
//! benchmark runs are comparable across invocations.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::model::{Member, Membership};

/// Generate `n` members with ids `TEST000000..`, random variants, random
/// ratings in [0, 10] and random goal flags, all drawn from `seed`.
pub fn generate_members(n: usize, seed: u64) -> Vec<Member> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut members = Vec::with_capacity(n);

    for i in 0..n {
        let membership = match rng.gen_range(0..3) {
            0 => Membership::Standard,
            1 => Membership::Coached {
                trainer_name: format!("Trainer{}", i),
                sessions_per_month: rng.gen_range(1..=10),
            },
            _ => Membership::Academic {
                student_id: format!("STU{}", i),
                institution: format!("University{}", i),
            },
        };

        let mut member = Member::new(
            format!("TEST{:06}", i),
            format!("FirstName{}", i),
            format!("LastName{}", i),
            format!("test{}@example.com", i),
            format!("555-{:04}", i % 10_000),
            membership,
        );
        member.set_rating(rng.gen_range(0..=10));
        member.set_goal_achieved(rng.gen_bool(0.5));
        members.push(member);
    }

    members
}
