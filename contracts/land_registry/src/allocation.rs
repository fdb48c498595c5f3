//! # Winner selection
//!
//! Winners are the `min(capacity, applicants)` smallest applicants in the
//! host's total order on addresses. The result depends only on the applicant
//! *set* and the capacity, never on submission order, so any replay of the
//! same program yields the same winners.

use soroban_sdk::{Address, Env, Vec};

/// Return the `capacity` smallest addresses of `applicants`, ascending.
///
/// Runs a bounded insertion sort: the working list never holds more than
/// `capacity` entries.
pub fn select_winners(env: &Env, applicants: &Vec<Address>, capacity: u32) -> Vec<Address> {
    let mut winners: Vec<Address> = Vec::new(env);
    if capacity == 0 {
        return winners;
    }

    for applicant in applicants.iter() {
        if winners.len() == capacity {
            match winners.last() {
                Some(largest) if applicant >= largest => continue,
                _ => {}
            }
        }

        let mut pos = winners.len();
        for (i, current) in winners.iter().enumerate() {
            if applicant < current {
                pos = i as u32;
                break;
            }
        }
        winners.insert(pos, applicant);

        if winners.len() > capacity {
            winners.pop_back();
        }
    }

    winners
}
