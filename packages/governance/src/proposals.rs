use cosmwasm_std::{
    to_binary, Addr, Deps, DepsMut, Env, MessageInfo, Order, StdResult, Storage, Uint128,
};
use cw_storage_plus::Bound;

use crate::ballots::ballots;
use crate::members::ensure_member;
use crate::msg::{ProposalListResponse, ProposalResolution, ReviewResponse, SignOffsResponse};
use crate::state::{
    next_id, Deliberation, Proposal, Status, Vote, CONFIG, MAX_CONTENT_LENGTH, MAX_TITLE_LENGTH,
    MEMBERS, PROPOSALS, SIGN_OFFS, TREASURY,
};
use crate::treasury;
use crate::{ContractError, Response};

pub fn submit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    title: String,
    content: String,
    beneficiary: String,
    amount: Uint128,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    ensure_member(deps.storage, &info.sender)?;

    if title.len() > MAX_TITLE_LENGTH {
        return Err(ContractError::TitleTooLong {
            max: MAX_TITLE_LENGTH,
        });
    }
    if content.len() > MAX_CONTENT_LENGTH {
        return Err(ContractError::ContentTooLong {
            max: MAX_CONTENT_LENGTH,
        });
    }
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount {});
    }
    let beneficiary = deps.api.addr_validate(&beneficiary)?;

    if PROPOSALS.has(deps.storage, &title) {
        return Err(ContractError::DuplicateTitle(title));
    }

    let proposal = Proposal {
        id: next_id(deps.storage)?,
        author: info.sender.clone(),
        title,
        content,
        beneficiary,
        amount,
        deliberation: Deliberation::open(&env.block, &cfg.rules),
    };
    PROPOSALS.save(deps.storage, &proposal.title, &proposal)?;

    Ok(Response::new()
        .add_attribute("action", "submit_proposal")
        .add_attribute("sender", info.sender)
        .add_attribute("title", proposal.title)
        .add_attribute("id", proposal.id.to_string())
        .add_attribute("amount", amount.to_string()))
}

pub fn vote(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    title: String,
    vote: Vote,
) -> Result<Response, ContractError> {
    let mut proposal = PROPOSALS.load(deps.storage, &title)?;

    ensure_member(deps.storage, &info.sender)?;
    proposal.deliberation.ensure_pending()?;

    let vote = ballots().create_ballot(
        deps.storage,
        &info.sender,
        proposal.id,
        vote,
        env.block.time,
    )?;
    proposal.deliberation.votes.add_vote(vote)?;
    PROPOSALS.save(deps.storage, &title, &proposal)?;

    Ok(Response::new()
        .add_attribute("action", "vote_proposal")
        .add_attribute("sender", info.sender)
        .add_attribute("title", title)
        .add_attribute("vote", format!("{:?}", vote)))
}

pub fn review(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    title: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let mut proposal = PROPOSALS.load(deps.storage, &title)?;

    ensure_member(deps.storage, &info.sender)?;

    let electorate = cfg.electorate_size(cfg.rules.electorate.proposal);
    let transitioned = proposal
        .deliberation
        .update_status(&env.block, &cfg.rules, electorate);
    if transitioned {
        PROPOSALS.save(deps.storage, &title, &proposal)?;
    }

    let status = proposal.deliberation.status;
    let data = ReviewResponse {
        id: proposal.id,
        status,
        transitioned,
    };

    Ok(Response::new()
        .add_attribute("action", "review_proposal")
        .add_attribute("sender", info.sender)
        .add_attribute("title", title)
        .add_attribute("status", format!("{:?}", status))
        .set_data(to_binary(&data)?))
}

/// Adds the sender to the signers authorizing the transfer of an approved proposal.
/// Signing is possible while the vote is still running.
pub fn sign_off(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    title: String,
) -> Result<Response, ContractError> {
    let proposal = PROPOSALS.load(deps.storage, &title)?;
    ensure_member(deps.storage, &info.sender)?;

    let status = proposal.deliberation.status;
    if !matches!(status, Status::Pending | Status::Approved) {
        return Err(ContractError::NotSignable(status));
    }

    SIGN_OFFS.update(
        deps.storage,
        (proposal.id, &info.sender),
        |signed| match signed {
            Some(_) => Err(ContractError::AlreadySigned {}),
            None => Ok(env.block.time),
        },
    )?;

    Ok(Response::new()
        .add_attribute("action", "sign_off")
        .add_attribute("sender", info.sender)
        .add_attribute("title", title))
}

/// Signers that still count: sign-offs of current members plus the resolver, each once.
fn count_signers(storage: &dyn Storage, id: u64, resolver: &Addr) -> StdResult<u32> {
    let signers = SIGN_OFFS
        .prefix(id)
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;

    let others = signers
        .iter()
        .filter(|&signer| signer != resolver && MEMBERS.has(storage, signer))
        .count();
    Ok(others as u32 + 1)
}

fn clear_sign_offs(storage: &mut dyn Storage, id: u64) -> StdResult<()> {
    let signers = SIGN_OFFS
        .prefix(id)
        .keys(storage, None, None, Order::Ascending)
        .collect::<StdResult<Vec<Addr>>>()?;
    for signer in signers {
        SIGN_OFFS.remove(storage, (id, &signer));
    }
    Ok(())
}

/// Closes a reviewed proposal. An approved one pays `amount` out of the treasury to the
/// beneficiary, which must be confirmed by the resolver.
pub fn resolve(
    deps: DepsMut,
    info: MessageInfo,
    title: String,
    beneficiary: String,
) -> Result<Response, ContractError> {
    let cfg = CONFIG.load(deps.storage)?;
    let mut proposal = PROPOSALS.load(deps.storage, &title)?;

    if !proposal.deliberation.status.is_reviewed() {
        return Err(ContractError::NotYetReviewed {});
    }
    ensure_member(deps.storage, &info.sender)?;

    let outcome = proposal.deliberation.status;
    let mut res = Response::new();
    let enacted = if outcome == Status::Approved {
        let beneficiary = deps.api.addr_validate(&beneficiary)?;
        if beneficiary != proposal.beneficiary {
            return Err(ContractError::TreasuryMismatch {});
        }

        let available = TREASURY.load(deps.storage)?.balance;
        if available < proposal.amount {
            return Err(ContractError::InsufficientTreasuryBalance {
                required: proposal.amount,
                available,
            });
        }

        let presented = count_signers(deps.storage, proposal.id, &info.sender)?;
        if presented < cfg.rules.min_signers {
            return Err(ContractError::InsufficientSigners {
                required: cfg.rules.min_signers,
                presented,
            });
        }

        let transfer = treasury::debit(deps.storage, &proposal.beneficiary, proposal.amount)?;
        res = res.add_message(transfer);
        true
    } else {
        false
    };

    PROPOSALS.remove(deps.storage, &title);
    clear_sign_offs(deps.storage, proposal.id)?;
    proposal.deliberation.status = Status::Resolved;

    let data = ProposalResolution { proposal, enacted };

    Ok(res
        .add_attribute("action", "resolve_proposal")
        .add_attribute("sender", info.sender)
        .add_attribute("title", title)
        .add_attribute("outcome", format!("{:?}", outcome))
        .add_attribute("enacted", enacted.to_string())
        .set_data(to_binary(&data)?))
}

pub fn query_proposal(deps: Deps, title: String) -> StdResult<Proposal> {
    PROPOSALS.load(deps.storage, &title)
}

pub fn list_proposals(
    deps: Deps,
    start_after: Option<String>,
    limit: usize,
) -> StdResult<ProposalListResponse> {
    let start = start_after.as_deref().map(Bound::exclusive);

    let proposals: StdResult<Vec<_>> = PROPOSALS
        .range(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .map(|item| item.map(|(_, proposal)| proposal))
        .collect();

    Ok(ProposalListResponse {
        proposals: proposals?,
    })
}

pub fn query_sign_offs(deps: Deps, title: String) -> StdResult<SignOffsResponse> {
    let proposal = PROPOSALS.load(deps.storage, &title)?;
    let signers: StdResult<Vec<_>> = SIGN_OFFS
        .prefix(proposal.id)
        .keys(deps.storage, None, None, Order::Ascending)
        .map(|signer| signer.map(String::from))
        .collect();
    Ok(SignOffsResponse { signers: signers? })
}
