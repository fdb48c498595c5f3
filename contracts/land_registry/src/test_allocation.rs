extern crate std;

use soroban_sdk::{testutils::Address as _, vec, Address, BytesN, Env, String, Vec};

use crate::invariants;
use crate::{Error, LandRegistry, LandRegistryClient};

fn setup_with_parcels(count: u64) -> (Env, LandRegistryClient<'static>, Address) {
    let env = Env::default();
    env.mock_all_auths();
    let contract_id = env.register(LandRegistry, ());
    let client = LandRegistryClient::new(&env, &contract_id);

    let admin = Address::generate(&env);
    let officer = Address::generate(&env);
    client.init(&admin);
    client.set_officer(&admin, &officer, &true);

    for id in 1..=count {
        client.create_parcel(
            &officer,
            &id,
            &BytesN::from_array(&env, &[id as u8; 32]),
            &(500 * id),
            &String::from_str(&env, "PUNE-002"),
            &String::from_str(&env, "RES"),
            &Address::generate(&env),
        );
    }
    (env, client, officer)
}

fn applicants(env: &Env, n: usize) -> std::vec::Vec<Address> {
    (0..n).map(|_| Address::generate(env)).collect()
}

// ─────────────────────────────────────────────────────────
// create_allocation
// ─────────────────────────────────────────────────────────

#[test]
fn test_create_allocation_opens_program() {
    let (env, client, officer) = setup_with_parcels(3);
    client.create_allocation(&officer, &101, &vec![&env, 2u64, 3u64]);

    let program = client.get_program(&101);
    assert_eq!(program.id, 101);
    assert_eq!(program.parcel_ids, vec![&env, 2u64, 3u64]);
    assert!(program.applicants.is_empty());
    assert!(program.winners.is_empty());
    assert!(!program.closed);
}

#[test]
fn test_create_allocation_requires_officer() {
    let (env, client, _officer) = setup_with_parcels(1);
    let outsider = Address::generate(&env);
    let result = client.try_create_allocation(&outsider, &1, &vec![&env, 1u64]);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert_eq!(client.try_get_program(&1), Err(Ok(Error::ProgramNotFound)));
}

#[test]
fn test_create_allocation_rejects_duplicate_program() {
    let (env, client, officer) = setup_with_parcels(2);
    client.create_allocation(&officer, &5, &vec![&env, 1u64]);
    let result = client.try_create_allocation(&officer, &5, &vec![&env, 2u64]);
    assert_eq!(result, Err(Ok(Error::DuplicateProgram)));
    assert_eq!(client.get_program(&5).parcel_ids, vec![&env, 1u64]);
}

#[test]
fn test_create_allocation_validates_parcels() {
    let (env, client, officer) = setup_with_parcels(2);

    let result = client.try_create_allocation(&officer, &1, &Vec::new(&env));
    assert_eq!(result, Err(Ok(Error::EmptyParcelList)));

    let result = client.try_create_allocation(&officer, &1, &vec![&env, 1u64, 9u64]);
    assert_eq!(result, Err(Ok(Error::ParcelNotFound)));

    let result = client.try_create_allocation(&officer, &1, &vec![&env, 1u64, 1u64]);
    assert_eq!(result, Err(Ok(Error::ParcelAlreadyEnrolled)));

    let result = client.try_create_allocation(&officer, &0, &vec![&env, 1u64]);
    assert_eq!(result, Err(Ok(Error::InvalidId)));

    // None of the failures left a program or an enrolment behind.
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64]);
}

#[test]
fn test_parcel_cannot_join_two_open_programs() {
    let (env, client, officer) = setup_with_parcels(3);
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64]);

    let result = client.try_create_allocation(&officer, &2, &vec![&env, 3u64, 2u64]);
    assert_eq!(result, Err(Ok(Error::ParcelAlreadyEnrolled)));

    // Closing the first program releases its parcels.
    client.allocate(&officer, &1);
    client.create_allocation(&officer, &2, &vec![&env, 3u64, 2u64]);
}

#[test]
fn test_encumbered_parcel_can_be_offered() {
    let (env, client, officer) = setup_with_parcels(1);
    client.set_bank_or_officer(&client.admin(), &officer, &true);
    client.set_encumbrance(&officer, &1, &true);

    client.create_allocation(&officer, &1, &vec![&env, 1u64]);
    assert!(!client.get_program(&1).closed);
}

// ─────────────────────────────────────────────────────────
// apply_for_allocation
// ─────────────────────────────────────────────────────────

#[test]
fn test_apply_is_idempotent() {
    let (env, client, officer) = setup_with_parcels(1);
    client.create_allocation(&officer, &1, &vec![&env, 1u64]);
    let a = Address::generate(&env);
    let b = Address::generate(&env);

    client.apply_for_allocation(&a, &1);
    client.apply_for_allocation(&b, &1);
    client.apply_for_allocation(&a, &1);

    assert_eq!(client.get_applications(&1), vec![&env, a, b]);
    invariants::assert_applicants_unique(&client.get_program(&1));
}

#[test]
fn test_apply_to_missing_program() {
    let (env, client, _officer) = setup_with_parcels(1);
    let a = Address::generate(&env);
    let result = client.try_apply_for_allocation(&a, &42);
    assert_eq!(result, Err(Ok(Error::ProgramNotFound)));
}

#[test]
fn test_apply_after_close_rejected() {
    let (env, client, officer) = setup_with_parcels(1);
    client.create_allocation(&officer, &1, &vec![&env, 1u64]);
    let a = Address::generate(&env);
    client.apply_for_allocation(&a, &1);
    client.allocate(&officer, &1);

    let late = Address::generate(&env);
    let result = client.try_apply_for_allocation(&late, &1);
    assert_eq!(result, Err(Ok(Error::ProgramClosed)));
    // Even a previous applicant cannot re-apply once closed.
    let result = client.try_apply_for_allocation(&a, &1);
    assert_eq!(result, Err(Ok(Error::ProgramClosed)));
    assert_eq!(client.get_applications(&1), vec![&env, a]);
}

// ─────────────────────────────────────────────────────────
// allocate
// ─────────────────────────────────────────────────────────

#[test]
fn test_allocate_requires_officer() {
    let (env, client, officer) = setup_with_parcels(1);
    client.create_allocation(&officer, &1, &vec![&env, 1u64]);
    let a = Address::generate(&env);
    client.apply_for_allocation(&a, &1);

    let result = client.try_allocate(&a, &1);
    assert_eq!(result, Err(Ok(Error::Unauthorized)));
    assert!(!client.get_program(&1).closed);
    assert!(client.get_winners(&1).is_empty());
}

#[test]
fn test_allocate_missing_program() {
    let (_env, client, officer) = setup_with_parcels(1);
    assert_eq!(client.try_allocate(&officer, &8), Err(Ok(Error::ProgramNotFound)));
    assert_eq!(client.try_get_winners(&8), Err(Ok(Error::ProgramNotFound)));
    assert_eq!(client.try_get_applications(&8), Err(Ok(Error::ProgramNotFound)));
}

#[test]
fn test_allocate_is_exactly_once() {
    let (env, client, officer) = setup_with_parcels(2);
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64]);
    for applicant in applicants(&env, 4) {
        client.apply_for_allocation(&applicant, &1);
    }

    let first = client.allocate(&officer, &1);
    let result = client.try_allocate(&officer, &1);
    assert_eq!(result, Err(Ok(Error::ProgramAlreadyClosed)));
    assert_eq!(client.get_winners(&1), first);
}

#[test]
fn test_allocate_with_no_applicants_closes_empty() {
    let (env, client, officer) = setup_with_parcels(2);
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64]);

    let winners = client.allocate(&officer, &1);
    assert!(winners.is_empty());

    let program = client.get_program(&1);
    assert!(program.closed);
    invariants::assert_all_program_invariants(&program);
}

#[test]
fn test_fewer_applicants_than_parcels_all_win() {
    let (env, client, officer) = setup_with_parcels(5);
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64, 3u64, 4u64, 5u64]);
    let pool = applicants(&env, 3);
    for applicant in &pool {
        client.apply_for_allocation(applicant, &1);
    }

    let winners = client.allocate(&officer, &1);

    let mut expected = pool.clone();
    expected.sort();
    assert_eq!(winners, Vec::from_slice(&env, &expected));
}

#[test]
fn test_winners_independent_of_application_order() {
    let (env, client, officer) = setup_with_parcels(4);
    client.create_allocation(&officer, &1, &vec![&env, 1u64, 2u64]);
    client.create_allocation(&officer, &2, &vec![&env, 3u64, 4u64]);

    let pool = applicants(&env, 6);
    for applicant in &pool {
        client.apply_for_allocation(applicant, &1);
    }
    for applicant in pool.iter().rev() {
        client.apply_for_allocation(applicant, &2);
    }

    let first = client.allocate(&officer, &1);
    let second = client.allocate(&officer, &2);
    assert_eq!(first, second);
    assert_eq!(first.len(), 2);
}

#[test]
fn test_program_invariants_across_sizes() {
    let (env, client, officer) = setup_with_parcels(7);
    let mut next_parcel = 1u64;
    let mut program_id = 1u64;

    for (capacity, applicant_count) in [(1u64, 0usize), (1, 5), (2, 2), (3, 1)] {
        let mut parcel_ids = Vec::new(&env);
        for _ in 0..capacity {
            parcel_ids.push_back(next_parcel);
            next_parcel += 1;
        }
        client.create_allocation(&officer, &program_id, &parcel_ids);
        for applicant in applicants(&env, applicant_count) {
            client.apply_for_allocation(&applicant, &program_id);
        }
        client.allocate(&officer, &program_id);

        let program = client.get_program(&program_id);
        assert_eq!(
            program.winners.len() as usize,
            (capacity as usize).min(applicant_count)
        );
        invariants::assert_all_program_invariants(&program);
        program_id += 1;
    }
}
