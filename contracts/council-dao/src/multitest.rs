mod role_ops;

use assert_matches::assert_matches;
use suite::{contract_council, SuiteBuilder};

use crate::ContractError;

#[test]
fn migrate_contract() {
    let mut suite = SuiteBuilder::new().with_member("alice").build();

    let new_code = suite.app.store_code(contract_council());

    // only the admin may migrate
    suite.migrate("alice", new_code).unwrap_err();

    let resp = suite.migrate("founder", new_code).unwrap();
    let wasm = resp.events.iter().find(|ev| ev.ty == "wasm").unwrap();
    let version = wasm
        .attributes
        .iter()
        .find(|attr| attr.key == "version")
        .unwrap();
    assert_eq!(version.value, env!("CARGO_PKG_VERSION"));

    // state survives the migration
    assert_eq!(suite.counts().unwrap(), (2, 1));
}

#[test]
fn governance_errors_are_wrapped() {
    let mut suite = SuiteBuilder::new().build();

    let err = suite.join("alice").unwrap_err();
    assert_eq!(
        ContractError::Governance(council_governance::ContractError::ClosedMembership {}),
        err.downcast().unwrap()
    );

    // storage errors are not wrapped twice
    let err = suite.review_proposal("founder", "missing").unwrap_err();
    assert_matches!(
        err.downcast::<ContractError>().unwrap(),
        ContractError::Std(cosmwasm_std::StdError::NotFound { .. })
    );
}
