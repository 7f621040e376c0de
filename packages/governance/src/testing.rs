use cosmwasm_std::testing::mock_env;
use cosmwasm_std::{Addr, DepsMut, Uint128};

use crate::members::join;
use crate::state::{Config, Electorates, VotingRules, CONFIG, TREASURY};
use crate::treasury;

pub const DENOM: &str = "ucouncil";

/// Fresh organization with `founder` as its only (council) member and an empty treasury
pub fn setup(deps: DepsMut, threshold_bps: u16, deliberation_period: u64) {
    let cfg = Config {
        id: 1,
        rules: VotingRules {
            threshold_bps,
            deliberation_period,
            min_signers: 1,
            electorate: Electorates::default(),
        },
        open_membership: false,
        members_count: 0,
        council_count: 0,
    };
    CONFIG.save(deps.storage, &cfg).unwrap();
    treasury::create(deps.storage, DENOM.to_owned(), Uint128::zero()).unwrap();
    join(
        deps.storage,
        &Addr::unchecked("founder"),
        true,
        mock_env().block.time,
    )
    .unwrap();
}

pub fn with_members(deps: DepsMut, members: &[&str]) {
    for member in members {
        join(
            deps.storage,
            &Addr::unchecked(*member),
            false,
            mock_env().block.time,
        )
        .unwrap();
    }
}

pub fn fund(deps: DepsMut, amount: u128) {
    TREASURY
        .update(deps.storage, |mut treasury| -> cosmwasm_std::StdResult<_> {
            treasury.balance += Uint128::new(amount);
            Ok(treasury)
        })
        .unwrap();
}
