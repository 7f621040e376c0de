pub mod ballots;
mod error;
pub mod members;
pub mod msg;
pub mod proposals;
pub mod role_ops;
pub mod state;
pub mod treasury;

#[cfg(test)]
mod testing;

pub use error::ContractError;

use cosmwasm_std::{Deps, DepsMut, Env, MessageInfo, StdResult};
use cw_utils::may_pay;

use state::{Config, VotingRules, CONFIG};

pub type Response = cosmwasm_std::Response;

/// Sets up a new organization. The sender becomes its founding council member and any
/// coins of `denom` sent along open the treasury balance.
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    id: u64,
    rules: VotingRules,
    denom: String,
    open_membership: bool,
) -> Result<Response, ContractError> {
    rules.validate()?;

    let cfg = Config {
        id,
        rules,
        open_membership,
        members_count: 0,
        council_count: 0,
    };
    CONFIG.save(deps.storage, &cfg)?;

    let initial = may_pay(&info, &denom)?;
    let treasury = treasury::create(deps.storage, denom, initial)?;
    members::join(deps.storage, &info.sender, true, env.block.time)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("sender", info.sender)
        .add_attribute("id", id.to_string())
        .add_attribute("treasury", treasury.balance.to_string()))
}

pub fn query_config(deps: Deps) -> StdResult<Config> {
    CONFIG.load(deps.storage)
}
