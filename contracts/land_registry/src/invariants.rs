#![allow(dead_code)]

extern crate std;

use crate::types::{AllocationProgram, Ownership, Parcel};

/// INV-1: Parcel area must always be positive.
pub fn assert_area_positive(parcel: &Parcel) {
    assert!(
        parcel.area > 0,
        "INV-1 violated: parcel {} has zero area",
        parcel.id
    );
}

/// INV-2: Parcel ids are positive.
pub fn assert_parcel_id_positive(parcel: &Parcel) {
    assert!(parcel.id > 0, "INV-2 violated: parcel id is zero");
}

/// INV-3: Immutable parcel fields never change after creation.
pub fn assert_parcel_immutable_fields(original: &Parcel, current: &Parcel) {
    assert_eq!(original.id, current.id, "INV-3 violated: parcel id changed");
    assert_eq!(
        original.geo_hash, current.geo_hash,
        "INV-3 violated: parcel geo_hash changed"
    );
    assert_eq!(
        original.area, current.area,
        "INV-3 violated: parcel area changed"
    );
    assert_eq!(
        original.location_code, current.location_code,
        "INV-3 violated: parcel location_code changed"
    );
    assert_eq!(
        original.land_use, current.land_use,
        "INV-3 violated: parcel land_use changed"
    );
}

/// INV-4: A transfer links the new record to the previous owner and never
/// moves the ownership clock backwards.
pub fn assert_ownership_chain(before: &Ownership, after: &Ownership) {
    assert_eq!(
        after.prev_owner.as_ref(),
        Some(&before.owner),
        "INV-4 violated: prev_owner does not match the previous owner"
    );
    assert!(
        after.start_block >= before.start_block,
        "INV-4 violated: start_block moved backwards ({} -> {})",
        before.start_block,
        after.start_block
    );
}

/// INV-5: Winners are drawn from the applicants.
pub fn assert_winners_subset(program: &AllocationProgram) {
    for winner in program.winners.iter() {
        assert!(
            program.applicants.contains(&winner),
            "INV-5 violated: program {} has a winner who never applied",
            program.id
        );
    }
}

/// INV-6: A closed program has exactly `min(parcels, applicants)` winners;
/// an open one has none.
pub fn assert_winner_count(program: &AllocationProgram) {
    let expected = if program.closed {
        program.parcel_ids.len().min(program.applicants.len())
    } else {
        0
    };
    assert_eq!(
        program.winners.len(),
        expected,
        "INV-6 violated: program {} has {} winners, expected {}",
        program.id,
        program.winners.len(),
        expected
    );
}

/// INV-7: Winners are strictly ascending, which also rules out duplicates.
pub fn assert_winners_ascending(program: &AllocationProgram) {
    let winners = &program.winners;
    for i in 1..winners.len() {
        let prev = winners.get_unchecked(i - 1);
        let next = winners.get_unchecked(i);
        assert!(
            prev < next,
            "INV-7 violated: program {} winners out of order at index {}",
            program.id,
            i
        );
    }
}

/// INV-8: No applicant is listed twice.
pub fn assert_applicants_unique(program: &AllocationProgram) {
    let applicants = &program.applicants;
    for i in 0..applicants.len() {
        for j in (i + 1)..applicants.len() {
            assert_ne!(
                applicants.get_unchecked(i),
                applicants.get_unchecked(j),
                "INV-8 violated: program {} lists an applicant twice",
                program.id
            );
        }
    }
}

/// INV-9: No winner is ranked below a losing applicant.
pub fn assert_winners_are_smallest(program: &AllocationProgram) {
    if let Some(largest_winner) = program.winners.last() {
        for applicant in program.applicants.iter() {
            if !program.winners.contains(&applicant) {
                assert!(
                    applicant > largest_winner,
                    "INV-9 violated: program {} passed over a smaller applicant",
                    program.id
                );
            }
        }
    }
}

pub fn assert_all_parcel_invariants(parcel: &Parcel) {
    assert_area_positive(parcel);
    assert_parcel_id_positive(parcel);
}

pub fn assert_all_program_invariants(program: &AllocationProgram) {
    assert_winners_subset(program);
    assert_winner_count(program);
    assert_winners_ascending(program);
    assert_applicants_unique(program);
    assert_winners_are_smallest(program);
}
