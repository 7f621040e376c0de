use cosmwasm_std::{to_binary, Addr, Deps, DepsMut, Env, MessageInfo, Order, StdResult, Storage};
use cw_storage_plus::Bound;
use cw_utils::maybe_addr;

use crate::ballots::ballots;
use crate::members::{self, ensure_council, ensure_member};
use crate::msg::{ReviewResponse, RoleOperationListResponse, RoleOperationResolution};
use crate::state::{
    next_id, Deliberation, RoleOpKind, RoleOperation, Status, Vote, CONFIG, MEMBERS, ROLE_OPS,
};
use crate::{ContractError, Response};

/// Promotions and demotions can only be driven by the council, removals by any member.
fn ensure_participant(
    storage: &dyn Storage,
    actor: &Addr,
    kind: RoleOpKind,
) -> Result<(), ContractError> {
    if kind.council_only() {
        ensure_council(storage, actor)?;
    } else {
        ensure_member(storage, actor)?;
    }
    Ok(())
}

fn load(
    deps: Deps,
    kind: RoleOpKind,
    target: &str,
) -> Result<(Addr, RoleOperation), ContractError> {
    let target = deps.api.addr_validate(target)?;
    let op = ROLE_OPS.load(deps.storage, (kind.seed(), &target))?;
    Ok((target, op))
}

pub fn initiate(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: RoleOpKind,
    target: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;

    // every kind of role operation is initiated by the council
    ensure_council(deps.storage, &info.sender)?;

    let target = deps.api.addr_validate(&target)?;
    ensure_member(deps.storage, &target)?;

    if ROLE_OPS.has(deps.storage, (kind.seed(), &target)) {
        return Err(ContractError::DuplicateOperation {
            kind,
            target: target.into(),
        });
    }

    let op = RoleOperation {
        id: next_id(deps.storage)?,
        kind,
        target: target.clone(),
        initiator: info.sender.clone(),
        deliberation: Deliberation::open(&env.block, &cfg.rules),
    };
    ROLE_OPS.save(deps.storage, (kind.seed(), &target), &op)?;

    Ok(Response::new()
        .add_attribute("action", "initiate_role_operation")
        .add_attribute("sender", info.sender)
        .add_attribute("kind", kind.to_string())
        .add_attribute("target", target)
        .add_attribute("id", op.id.to_string()))
}

pub fn vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: RoleOpKind,
    target: String,
    vote: Vote,
) -> Result<Response, ContractError> {
    let (target, mut op) = load(deps.as_ref(), kind, &target)?;

    // anybody may vote on a removal, only the council on promotions and demotions
    ensure_participant(deps.storage, &info.sender, kind)?;
    op.deliberation.ensure_pending()?;

    let vote = ballots().create_ballot(deps.storage, &info.sender, op.id, vote, env.block.time)?;
    op.deliberation.votes.add_vote(vote)?;
    ROLE_OPS.save(deps.storage, (kind.seed(), &target), &op)?;

    Ok(Response::new()
        .add_attribute("action", "vote_role_operation")
        .add_attribute("sender", info.sender)
        .add_attribute("kind", kind.to_string())
        .add_attribute("target", target)
        .add_attribute("vote", format!("{:?}", vote)))
}

/// Settles the tally. An undecided operation stays `Pending`, which is not an error, and an
/// already decided one keeps its status.
pub fn review(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    kind: RoleOpKind,
    target: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let (target, mut op) = load(deps.as_ref(), kind, &target)?;

    ensure_participant(deps.storage, &info.sender, kind)?;

    let electorate = cfg.electorate_size(cfg.rules.electorate.for_role_op(kind));
    let transitioned = op
        .deliberation
        .update_status(&env.block, &cfg.rules, electorate);
    if transitioned {
        ROLE_OPS.save(deps.storage, (kind.seed(), &target), &op)?;
    }

    let status = op.deliberation.status;
    let data = ReviewResponse {
        id: op.id,
        status,
        transitioned,
    };

    Ok(Response::new()
        .add_attribute("action", "review_role_operation")
        .add_attribute("sender", info.sender)
        .add_attribute("kind", kind.to_string())
        .add_attribute("target", target)
        .add_attribute("status", format!("{:?}", status))
        .set_data(to_binary(&data)?))
}

/// Enacts an approved operation and closes it. Dismissed and expired operations are closed
/// without touching the membership.
pub fn resolve(
    deps: DepsMut,
    info: MessageInfo,
    kind: RoleOpKind,
    target: String,
) -> Result<Response, ContractError> {
    let (target, mut op) = load(deps.as_ref(), kind, &target)?;

    if !op.deliberation.status.is_reviewed() {
        return Err(ContractError::NotYetReviewed {});
    }
    ensure_participant(deps.storage, &info.sender, kind)?;

    // the target may have exited in the meantime, then there is nothing left to enact
    let enacted = if op.deliberation.status == Status::Approved
        && MEMBERS.has(deps.storage, &target)
    {
        match kind {
            RoleOpKind::Promote => members::set_council_flag(deps.storage, &target, true)?,
            RoleOpKind::Demote => members::set_council_flag(deps.storage, &target, false)?,
            RoleOpKind::Remove => {
                members::remove(deps.storage, &target)?;
                true
            }
        }
    } else {
        false
    };

    let outcome = op.deliberation.status;
    ROLE_OPS.remove(deps.storage, (kind.seed(), &target));
    op.deliberation.status = Status::Resolved;

    let data = RoleOperationResolution {
        operation: op,
        enacted,
    };

    Ok(Response::new()
        .add_attribute("action", "resolve_role_operation")
        .add_attribute("sender", info.sender)
        .add_attribute("kind", kind.to_string())
        .add_attribute("target", target)
        .add_attribute("outcome", format!("{:?}", outcome))
        .add_attribute("enacted", enacted.to_string())
        .set_data(to_binary(&data)?))
}

pub fn query_role_operation(
    deps: Deps,
    kind: RoleOpKind,
    target: String,
) -> StdResult<RoleOperation> {
    let target = deps.api.addr_validate(&target)?;
    ROLE_OPS.load(deps.storage, (kind.seed(), &target))
}

pub fn list_role_operations(
    deps: Deps,
    kind: RoleOpKind,
    start_after: Option<String>,
    limit: usize,
) -> StdResult<RoleOperationListResponse> {
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);

    let operations: StdResult<Vec<_>> = ROLE_OPS
        .prefix(kind.seed())
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, op)| op))
        .collect();

    Ok(RoleOperationListResponse {
        operations: operations?,
    })
}
