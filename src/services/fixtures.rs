//! Sample entities shared by the service tests.

use crate::domain::contract::Contract;
use crate::domain::directory::{Company, Consultant};
use crate::domain::proposal::Proposal;
use crate::domain::schedule::Schedule;
use crate::domain::types::{
    BearerToken, CompanyId, ConsultantId, ContractId, ProposalId, ScheduleId, UserId,
};
use crate::domain::user::UserProfile;
use crate::session::MockCredentialStore;

pub fn token() -> BearerToken {
    BearerToken::new("token-123").unwrap()
}

/// A store holding a valid token that must never be cleared.
pub fn signed_in_store() -> MockCredentialStore {
    let mut store = MockCredentialStore::new();
    store.expect_token().returning(|| Ok(Some(token())));
    store.expect_clear().never();
    store
}

/// A store holding a token the backend is expected to reject once.
pub fn expiring_store() -> MockCredentialStore {
    let mut store = MockCredentialStore::new();
    store.expect_token().returning(|| Ok(Some(token())));
    store.expect_clear().times(1).return_const(());
    store
}

pub fn profile() -> UserProfile {
    UserProfile {
        id: UserId::new(1).unwrap(),
        name: "Ana Souza".to_string(),
        email: "ana@empresa.com".to_string(),
        role: "Admin".to_string(),
        consultant_id: None,
        active: true,
    }
}

pub fn contract(id: i32, status: &str) -> Contract {
    Contract {
        id: ContractId::new(id).unwrap(),
        proposal_id: ProposalId::new(1).unwrap(),
        number: Some(format!("CT-{id}")),
        signed_on: None,
        due_on: None,
        value: Some(1000.0),
        payment_status: Some(status.to_string()),
        notes: None,
        proposal: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn schedule(id: i32, status: &str) -> Schedule {
    Schedule {
        id: ScheduleId::new(id).unwrap(),
        proposal_id: ProposalId::new(1).unwrap(),
        starts_on: None,
        ends_on: None,
        planned_hours: Some(10.0),
        executed_hours: Some(5.0),
        completion: Some(50.0),
        status: Some(status.to_string()),
        notes: None,
        proposal: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn proposal(id: i32, number: &str, company_id: i32, status: &str) -> Proposal {
    Proposal {
        id: ProposalId::new(id).unwrap(),
        number: Some(number.to_string()),
        company_id: CompanyId::new(company_id).unwrap(),
        consultant_id: None,
        solution: None,
        contacted_on: None,
        proposed_on: None,
        value: None,
        closed_on: None,
        status: Some(status.to_string()),
        outcome: None,
        notes: None,
        company: None,
        consultant: None,
        created_at: None,
        updated_at: None,
    }
}

pub fn company(id: i32, name: &str) -> Company {
    Company {
        id: CompanyId::new(id).unwrap(),
        cnpj: None,
        name: name.to_string(),
        segment: None,
        region: None,
    }
}

pub fn consultant(id: i32, name: &str) -> Consultant {
    Consultant {
        id: ConsultantId::new(id).unwrap(),
        name: name.to_string(),
        email: None,
        role: None,
        active: true,
    }
}
