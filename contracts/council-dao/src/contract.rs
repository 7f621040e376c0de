use std::convert::TryFrom;

#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, StdResult};

use council_governance::ballots::ballots;
use council_governance::state::{self, RoleOpKind};
use council_governance::{members, proposals, role_ops, treasury};
use cw2::set_contract_version;

use crate::migration::ensure_from_older_version;
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::ContractError;

pub type Response = cosmwasm_std::Response;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:council-dao";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    council_governance::instantiate(
        deps,
        env,
        info,
        msg.id,
        msg.rules,
        msg.denom,
        msg.open_membership,
    )
    .map_err(ContractError::from)
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    use ExecuteMsg::*;

    let res = match msg {
        Join {} => members::execute_join(deps, env, info),
        AddMember { aspirant } => members::execute_add_member(deps, env, info, aspirant),
        Exit { member } => members::execute_exit(deps, info, member),
        Fund {} => treasury::execute_fund(deps, info),
        InitiateRoleOperation { kind, target } => {
            let kind = kind.parse::<RoleOpKind>()?;
            role_ops::initiate(deps, env, info, kind, target)
        }
        VoteRoleOperation { kind, target, vote } => {
            let kind = kind.parse::<RoleOpKind>()?;
            let vote = state::Vote::try_from(vote)?;
            role_ops::vote(deps, env, info, kind, target, vote)
        }
        ReviewRoleOperation { kind, target } => {
            let kind = kind.parse::<RoleOpKind>()?;
            role_ops::review(deps, env, info, kind, target)
        }
        ResolveRoleOperation { kind, target } => {
            let kind = kind.parse::<RoleOpKind>()?;
            role_ops::resolve(deps, info, kind, target)
        }
        SubmitProposal {
            title,
            content,
            beneficiary,
            amount,
        } => proposals::submit(deps, env, info, title, content, beneficiary, amount),
        VoteProposal { title, vote } => {
            let vote = state::Vote::try_from(vote)?;
            proposals::vote(deps, env, info, title, vote)
        }
        ReviewProposal { title } => proposals::review(deps, env, info, title),
        SignOff { title } => proposals::sign_off(deps, env, info, title),
        ResolveProposal { title, beneficiary } => {
            proposals::resolve(deps, info, title, beneficiary)
        }
    };

    res.map_err(ContractError::from)
}

fn align_limit(limit: Option<u32>) -> usize {
    // settings for pagination
    const MAX_LIMIT: u32 = 30;
    const DEFAULT_LIMIT: u32 = 10;

    limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as _
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    use QueryMsg::*;

    match msg {
        Config {} => to_binary(&council_governance::query_config(deps)?),
        Member { addr } => to_binary(&members::query_member(deps, addr)?),
        ListMembers { start_after, limit } => to_binary(&members::list_members(
            deps,
            start_after,
            align_limit(limit),
        )?),
        RoleOperation { kind, target } => {
            to_binary(&role_ops::query_role_operation(deps, kind, target)?)
        }
        ListRoleOperations {
            kind,
            start_after,
            limit,
        } => to_binary(&role_ops::list_role_operations(
            deps,
            kind,
            start_after,
            align_limit(limit),
        )?),
        Proposal { title } => to_binary(&proposals::query_proposal(deps, title)?),
        ListProposals { start_after, limit } => to_binary(&proposals::list_proposals(
            deps,
            start_after,
            align_limit(limit),
        )?),
        Vote { target_id, voter } => to_binary(&ballots().query_vote(deps, target_id, voter)?),
        ListVotes {
            target_id,
            start_after,
            limit,
        } => to_binary(&ballots().query_votes(
            deps,
            target_id,
            start_after,
            align_limit(limit),
        )?),
        ListVotesByVoter {
            voter,
            start_after,
            limit,
        } => to_binary(&ballots().query_votes_by_voter(
            deps,
            voter,
            start_after,
            align_limit(limit),
        )?),
        SignOffs { title } => to_binary(&proposals::query_sign_offs(deps, title)?),
        Treasury {} => to_binary(&treasury::query_treasury(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    let previous = ensure_from_older_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("previous_version", previous.to_string())
        .add_attribute("version", CONTRACT_VERSION))
}
