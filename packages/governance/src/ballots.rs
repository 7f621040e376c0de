use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, Deps, Order, StdResult, Storage, Timestamp};
use cw_storage_plus::{Bound, Map};
use cw_utils::maybe_addr;

use crate::msg::{VoteInfo, VoteListResponse, VoteResponse};
use crate::state::Vote;
use crate::ContractError;

// we cast a ballot with our chosen vote, stored under the target and the key that voted
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Ballot {
    pub voter: Addr,
    pub target_id: u64,
    pub vote: Vote,
    pub cast_at: Timestamp,
}

pub fn ballots() -> Ballots<'static> {
    Ballots::new("ballots", "ballots__voter")
}

/// Ledger of every vote ever cast. There is exactly one ballot per (target, voter) and
/// ballots are never changed or removed, which is what prevents double voting.
pub struct Ballots<'a> {
    ballots: Map<'a, (u64, &'a Addr), Ballot>,
    by_voter: Map<'a, (&'a Addr, u64), Vote>,
}

impl<'a> Ballots<'a> {
    pub const fn new(storage_key: &'a str, voter_subkey: &'a str) -> Self {
        Self {
            ballots: Map::new(storage_key),
            by_voter: Map::new(voter_subkey),
        }
    }

    /// Records the vote. The caller applies the returned vote to its target's tally.
    pub fn create_ballot(
        &self,
        storage: &mut dyn Storage,
        voter: &Addr,
        target_id: u64,
        vote: Vote,
        cast_at: Timestamp,
    ) -> Result<Vote, ContractError> {
        self.ballots.update(
            storage,
            (target_id, voter),
            move |ballot| -> Result<_, ContractError> {
                match ballot {
                    Some(_) => Err(ContractError::DuplicateVote {}),
                    None => Ok(Ballot {
                        voter: voter.clone(),
                        target_id,
                        vote,
                        cast_at,
                    }),
                }
            },
        )?;
        self.by_voter.save(storage, (voter, target_id), &vote)?;
        Ok(vote)
    }

    pub fn query_vote(&self, deps: Deps, target_id: u64, voter: String) -> StdResult<VoteResponse> {
        let voter_addr = deps.api.addr_validate(&voter)?;
        let ballot = self.ballots.may_load(deps.storage, (target_id, &voter_addr))?;
        let vote = ballot.map(|b| VoteInfo {
            target_id,
            voter,
            vote: b.vote,
        });
        Ok(VoteResponse { vote })
    }

    pub fn query_votes(
        &self,
        deps: Deps,
        target_id: u64,
        start_after: Option<String>,
        limit: usize,
    ) -> StdResult<VoteListResponse> {
        let addr = maybe_addr(deps.api, start_after)?;
        let start = addr.as_ref().map(Bound::exclusive);

        let votes: StdResult<Vec<_>> = self
            .ballots
            .prefix(target_id)
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (voter, ballot) = item?;
                Ok(VoteInfo {
                    target_id,
                    voter: voter.into(),
                    vote: ballot.vote,
                })
            })
            .collect();

        Ok(VoteListResponse { votes: votes? })
    }

    pub fn query_votes_by_voter(
        &self,
        deps: Deps,
        voter: String,
        start_after: Option<u64>,
        limit: usize,
    ) -> StdResult<VoteListResponse> {
        let voter_addr = deps.api.addr_validate(&voter)?;
        let start = start_after.map(Bound::exclusive);

        let votes: StdResult<Vec<_>> = self
            .by_voter
            .prefix(&voter_addr)
            .range(deps.storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (target_id, vote) = item?;
                Ok(VoteInfo {
                    target_id,
                    voter: voter.clone(),
                    vote,
                })
            })
            .collect();

        Ok(VoteListResponse { votes: votes? })
    }
}
