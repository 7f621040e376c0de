use cosmwasm_std::{Addr, Deps, DepsMut, Env, MessageInfo, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::Bound;
use cw_utils::maybe_addr;

use crate::msg::{MemberListResponse, MemberResponse};
use crate::state::{Member, CONFIG, MEMBERS};
use crate::{ContractError, Response};

fn increment(count: u64) -> Result<u64, ContractError> {
    count.checked_add(1).ok_or(ContractError::CountOutOfRange {})
}

fn decrement(count: u64) -> Result<u64, ContractError> {
    count.checked_sub(1).ok_or(ContractError::CountOutOfRange {})
}

/// Creates a member record for `addr`. Only the founder joins with `is_council` set,
/// every later council seat comes from a resolved promotion.
pub fn join(
    storage: &mut dyn Storage,
    addr: &Addr,
    is_council: bool,
    joined_at: Timestamp,
) -> Result<Member, ContractError> {
    let mut cfg = CONFIG.load(storage)?;

    let member = Member {
        addr: addr.clone(),
        is_council,
        joined_at,
    };

    cfg.members_count = increment(cfg.members_count)?;
    if member.is_council {
        cfg.council_count = increment(cfg.council_count)?;
    }
    cfg.validate_counts()?;

    MEMBERS.update(storage, addr, |existing| match existing {
        Some(_) => Err(ContractError::DuplicateMember {}),
        None => Ok(member.clone()),
    })?;
    CONFIG.save(storage, &cfg)?;

    Ok(member)
}

/// Destroys the member record of `addr`, returning it.
pub fn remove(storage: &mut dyn Storage, addr: &Addr) -> Result<Member, ContractError> {
    let member = ensure_member(storage, addr)?;

    let mut cfg = CONFIG.load(storage)?;
    cfg.members_count = decrement(cfg.members_count)?;
    if member.is_council {
        cfg.council_count = decrement(cfg.council_count)?;
    }
    cfg.validate_counts()?;

    MEMBERS.remove(storage, addr);
    CONFIG.save(storage, &cfg)?;

    Ok(member)
}

/// Sets the council flag of an existing member. The council count only moves if the flag
/// actually flips; returns whether it did.
pub fn set_council_flag(
    storage: &mut dyn Storage,
    addr: &Addr,
    is_council: bool,
) -> Result<bool, ContractError> {
    let mut member = ensure_member(storage, addr)?;
    if member.is_council == is_council {
        return Ok(false);
    }

    let mut cfg = CONFIG.load(storage)?;
    cfg.council_count = if is_council {
        increment(cfg.council_count)?
    } else {
        decrement(cfg.council_count)?
    };
    cfg.validate_counts()?;

    member.is_council = is_council;
    MEMBERS.save(storage, addr, &member)?;
    CONFIG.save(storage, &cfg)?;

    Ok(true)
}

pub fn ensure_member(storage: &dyn Storage, addr: &Addr) -> Result<Member, ContractError> {
    MEMBERS
        .may_load(storage, addr)?
        .ok_or(ContractError::NotMember {})
}

pub fn ensure_council(storage: &dyn Storage, addr: &Addr) -> Result<Member, ContractError> {
    match MEMBERS.may_load(storage, addr)? {
        Some(member) if member.is_council => Ok(member),
        _ => Err(ContractError::NotCouncilMember {}),
    }
}

pub fn execute_join(deps: DepsMut, env: Env, info: MessageInfo) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    if !cfg.open_membership {
        return Err(ContractError::ClosedMembership {});
    }

    let member = join(deps.storage, &info.sender, false, env.block.time)?;

    Ok(Response::new()
        .add_attribute("action", "join")
        .add_attribute("sender", info.sender)
        .add_attribute("council", member.is_council.to_string()))
}

pub fn execute_add_member(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    aspirant: String,
) -> Result<Response, ContractError> {
    ensure_council(deps.storage, &info.sender)?;

    let aspirant = deps.api.addr_validate(&aspirant)?;
    join(deps.storage, &aspirant, false, env.block.time)?;

    Ok(Response::new()
        .add_attribute("action", "add_member")
        .add_attribute("sender", info.sender)
        .add_attribute("member", aspirant))
}

pub fn execute_exit(
    deps: DepsMut,
    info: MessageInfo,
    member: String,
) -> Result<Response, ContractError> {
    let member = deps.api.addr_validate(&member)?;
    if member != info.sender {
        return Err(ContractError::Unauthorized {});
    }

    let removed = remove(deps.storage, &member)?;

    Ok(Response::new()
        .add_attribute("action", "exit")
        .add_attribute("sender", info.sender)
        .add_attribute("council", removed.is_council.to_string()))
}

pub fn query_member(deps: Deps, addr: String) -> StdResult<MemberResponse> {
    let addr = deps.api.addr_validate(&addr)?;
    let member = MEMBERS.may_load(deps.storage, &addr)?;
    Ok(MemberResponse { member })
}

pub fn list_members(
    deps: Deps,
    start_after: Option<String>,
    limit: usize,
) -> StdResult<MemberListResponse> {
    let addr = maybe_addr(deps.api, start_after)?;
    let start = addr.as_ref().map(Bound::exclusive);

    let members: StdResult<Vec<_>> = MEMBERS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, member)| member))
        .collect();

    Ok(MemberListResponse { members: members? })
}
