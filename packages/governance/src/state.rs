use std::convert::TryFrom;
use std::fmt;
use std::str::FromStr;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Addr, BlockInfo, StdResult, Storage, Timestamp, Uint128};
use cw_storage_plus::{Item, Map};
use cw_utils::Expiration;

use crate::ContractError;

/// Consensus thresholds are expressed in basis points of this
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Maximum length of a proposal title in bytes
pub const MAX_TITLE_LENGTH: usize = 64;

/// Maximum length of a proposal content in bytes
pub const MAX_CONTENT_LENGTH: usize = 2048;

/// Which group of members a consensus percentage is measured against.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Electorate {
    /// Percentage of council members
    Council,
    /// Percentage of all members
    Members,
}

/// Denominator used for every kind of votable entity.
///
/// Removals are voted on by every member but measured against the council by default,
/// so the upvotes of regular members can exceed the denominator: with a single council
/// member one upvote approves a removal. Use `Electorate::Members` for `remove` to
/// measure it against everybody who may vote.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
pub struct Electorates {
    pub promote: Electorate,
    pub demote: Electorate,
    pub remove: Electorate,
    pub proposal: Electorate,
}

impl Default for Electorates {
    fn default() -> Self {
        Electorates {
            promote: Electorate::Council,
            demote: Electorate::Council,
            remove: Electorate::Council,
            proposal: Electorate::Members,
        }
    }
}

impl Electorates {
    pub fn for_role_op(&self, kind: RoleOpKind) -> Electorate {
        match kind {
            RoleOpKind::Promote => self.promote,
            RoleOpKind::Demote => self.demote,
            RoleOpKind::Remove => self.remove,
        }
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, Debug, JsonSchema)]
pub struct VotingRules {
    /// Share of the electorate (upvotes or downvotes) required to approve or dismiss,
    /// in basis points (e.g. 5100 = 51%)
    pub threshold_bps: u16,
    /// Length of the deliberation window in seconds
    pub deliberation_period: u64,
    /// Number of distinct members that must sign off a fund transfer before it is executed
    pub min_signers: u32,
    #[serde(default)]
    pub electorate: Electorates,
}

impl VotingRules {
    pub fn validate(&self) -> Result<(), ContractError> {
        if u64::from(self.threshold_bps) > BPS_DENOMINATOR {
            return Err(ContractError::InvalidThreshold(self.threshold_bps));
        }

        if self.deliberation_period == 0 {
            return Err(ContractError::InvalidDeliberationPeriod {});
        }
        Ok(())
    }

    /// Returns true iff `votes` out of `electorate_size` meets the threshold.
    /// Zero votes never reach a threshold, so a freshly created entity cannot be
    /// decided without anybody voting.
    pub fn reaches_threshold(&self, votes: u64, electorate_size: u64) -> bool {
        votes > 0
            && u128::from(votes) * u128::from(BPS_DENOMINATOR)
                >= u128::from(self.threshold_bps) * u128::from(electorate_size)
    }
}

/// Organization configuration together with its aggregate membership counters.
/// Counters are only ever modified through the membership registry.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Config {
    pub id: u64,
    pub rules: VotingRules,
    /// If set, anybody can join as a regular member
    pub open_membership: bool,
    pub members_count: u64,
    pub council_count: u64,
}

impl Config {
    pub fn electorate_size(&self, electorate: Electorate) -> u64 {
        match electorate {
            Electorate::Council => self.council_count,
            Electorate::Members => self.members_count,
        }
    }

    /// Council is a subset of members, so it can never outnumber them
    pub fn validate_counts(&self) -> Result<(), ContractError> {
        if self.council_count > self.members_count {
            return Err(ContractError::CountOutOfRange {});
        }
        Ok(())
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Member {
    pub addr: Addr,
    pub is_council: bool,
    pub joined_at: Timestamp,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    /// Open for voting
    Pending,
    /// Upvotes reached the threshold
    Approved,
    /// Downvotes reached the threshold
    Dismissed,
    /// Deliberation window elapsed without a decision
    Expired,
    /// Effect enacted (or skipped) and entity closed
    Resolved,
}

impl Status {
    /// Reviewed and waiting to be resolved
    pub fn is_reviewed(self) -> bool {
        matches!(self, Status::Approved | Status::Dismissed | Status::Expired)
    }
}

/// Serialized as its storage seed, the same string execute messages carry.
#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
pub enum RoleOpKind {
    /// Grant council standing to a member
    #[serde(rename = "promotion")]
    Promote,
    /// Revoke council standing from a member
    #[serde(rename = "demotion")]
    Demote,
    /// Remove a member from the organization
    #[serde(rename = "removal")]
    Remove,
}

impl RoleOpKind {
    /// Storage seed of the operation kind
    pub fn seed(self) -> &'static str {
        match self {
            RoleOpKind::Promote => "promotion",
            RoleOpKind::Demote => "demotion",
            RoleOpKind::Remove => "removal",
        }
    }

    /// Promotions and demotions are council business, removals concern every member
    pub fn council_only(self) -> bool {
        !matches!(self, RoleOpKind::Remove)
    }
}

impl FromStr for RoleOpKind {
    type Err = ContractError;

    fn from_str(seed: &str) -> Result<Self, Self::Err> {
        match seed {
            "promotion" => Ok(RoleOpKind::Promote),
            "demotion" => Ok(RoleOpKind::Demote),
            "removal" => Ok(RoleOpKind::Remove),
            _ => Err(ContractError::InvalidOperationKind(seed.to_owned())),
        }
    }
}

impl fmt::Display for RoleOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.seed())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum Vote {
    Upvote,
    Downvote,
}

/// Wire encoding of a vote in execute messages: 1 up, 0 down
impl TryFrom<u8> for Vote {
    type Error = ContractError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Vote::Downvote),
            1 => Ok(Vote::Upvote),
            _ => Err(ContractError::InvalidVoteType(value)),
        }
    }
}

impl From<Vote> for u8 {
    fn from(vote: Vote) -> u8 {
        match vote {
            Vote::Downvote => 0,
            Vote::Upvote => 1,
        }
    }
}

// tally of the votes cast on a single target
#[derive(Serialize, Deserialize, Clone, Default, PartialEq, JsonSchema, Debug)]
pub struct Votes {
    pub upvotes: u64,
    pub downvotes: u64,
}

impl Votes {
    pub fn add_vote(&mut self, vote: Vote) -> Result<(), ContractError> {
        let counter = match vote {
            Vote::Upvote => &mut self.upvotes,
            Vote::Downvote => &mut self.downvotes,
        };
        *counter = counter
            .checked_add(1)
            .ok_or(ContractError::CountOutOfRange {})?;
        Ok(())
    }
}

/// Voting state shared by role operations and proposals.
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Deliberation {
    pub status: Status,
    pub votes: Votes,
    pub created_at: Timestamp,
    pub expires: Expiration,
}

impl Deliberation {
    pub fn open(block: &BlockInfo, rules: &VotingRules) -> Self {
        Deliberation {
            status: Status::Pending,
            votes: Votes::default(),
            created_at: block.time,
            expires: Expiration::AtTime(block.time.plus_seconds(rules.deliberation_period)),
        }
    }

    pub fn ensure_pending(&self) -> Result<(), ContractError> {
        if self.status != Status::Pending {
            return Err(ContractError::AlreadyReviewed(self.status));
        }
        Ok(())
    }

    /// current_status is non-mutable and returns what the status should be after a review.
    /// Approval is checked before dismissal, and both before expiry.
    pub fn current_status(
        &self,
        block: &BlockInfo,
        rules: &VotingRules,
        electorate_size: u64,
    ) -> Status {
        if self.status != Status::Pending {
            return self.status;
        }

        if rules.reaches_threshold(self.votes.upvotes, electorate_size) {
            Status::Approved
        } else if rules.reaches_threshold(self.votes.downvotes, electorate_size) {
            Status::Dismissed
        } else if self.expires.is_expired(block) {
            Status::Expired
        } else {
            Status::Pending
        }
    }

    /// update_status sets the status to current_status, returns true if it changed
    pub fn update_status(
        &mut self,
        block: &BlockInfo,
        rules: &VotingRules,
        electorate_size: u64,
    ) -> bool {
        let status = self.current_status(block, rules, electorate_size);
        let changed = status != self.status;
        self.status = status;
        changed
    }
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RoleOperation {
    /// Unique across role operations and proposals, identifies the ballot box
    pub id: u64,
    pub kind: RoleOpKind,
    pub target: Addr,
    pub initiator: Addr,
    pub deliberation: Deliberation,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Proposal {
    /// Unique across role operations and proposals, identifies the ballot box
    pub id: u64,
    pub author: Addr,
    pub title: String,
    pub content: String,
    /// Receiver of the requested funds
    pub beneficiary: Addr,
    pub amount: Uint128,
    pub deliberation: Deliberation,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct Treasury {
    pub denom: String,
    pub balance: Uint128,
}

// unique items
pub const CONFIG: Item<Config> = Item::new("config");
pub const TREASURY: Item<Treasury> = Item::new("treasury");
pub const ENTITY_COUNT: Item<u64> = Item::new("entity_count");

// multiple-item maps
pub const MEMBERS: Map<&Addr, Member> = Map::new("members");
/// Keyed by (kind seed, target member)
pub const ROLE_OPS: Map<(&str, &Addr), RoleOperation> = Map::new("role_ops");
/// Keyed by title
pub const PROPOSALS: Map<&str, Proposal> = Map::new("proposals");
/// Execution sign-offs, keyed by (proposal id, signer)
pub const SIGN_OFFS: Map<(u64, &Addr), Timestamp> = Map::new("sign_offs");

pub fn next_id(store: &mut dyn Storage) -> StdResult<u64> {
    let id: u64 = ENTITY_COUNT.may_load(store)?.unwrap_or_default() + 1;
    ENTITY_COUNT.save(store, &id)?;
    Ok(id)
}
