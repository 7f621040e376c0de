use cosmwasm_std::{StdError, Uint128};
use cw_utils::PaymentError;
use thiserror::Error;

use crate::state::{RoleOpKind, Status};

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Payment(#[from] PaymentError),

    #[error("Invalid consensus threshold, must be 0-10000 basis points: {0}")]
    InvalidThreshold(u16),

    #[error("Invalid deliberation period, must be at least one second")]
    InvalidDeliberationPeriod {},

    #[error("Not a council member")]
    NotCouncilMember {},

    #[error("Not a member of the organization")]
    NotMember {},

    #[error("Unauthorized: only the member itself can exit")]
    Unauthorized {},

    #[error("Membership is closed, members must be added by the council")]
    ClosedMembership {},

    #[error("Invalid role operation kind: {0}")]
    InvalidOperationKind(String),

    #[error("Invalid vote type {0}: a vote must be either 1 for upvote or 0 for downvote")]
    InvalidVoteType(u8),

    #[error("Already a member of the organization")]
    DuplicateMember {},

    #[error("A {kind:?} operation is already pending for {target}")]
    DuplicateOperation { kind: RoleOpKind, target: String },

    #[error("A proposal titled '{0}' already exists")]
    DuplicateTitle(String),

    #[error("Already voted on this target")]
    DuplicateVote {},

    #[error("Already signed off this proposal")]
    AlreadySigned {},

    #[error("Target was already reviewed, status: {0:?}")]
    AlreadyReviewed(Status),

    #[error("This cannot be resolved until it has been reviewed")]
    NotYetReviewed {},

    #[error("Only pending or approved proposals can be signed off, status: {0:?}")]
    NotSignable(Status),

    #[error("Proposal title exceeds maximum length of {max} bytes")]
    TitleTooLong { max: usize },

    #[error("Proposal content exceeds maximum length of {max} bytes")]
    ContentTooLong { max: usize },

    #[error("Treasury account does not match the proposal's beneficiary")]
    TreasuryMismatch {},

    #[error("Treasury balance {available} is less than the required amount {required}")]
    InsufficientTreasuryBalance {
        required: Uint128,
        available: Uint128,
    },

    #[error("Insufficient multisig signers: {presented} presented, {required} required")]
    InsufficientSigners { required: u32, presented: u32 },

    #[error("Amount must be higher than zero")]
    ZeroAmount {},

    #[error("Count overflow or underflow")]
    CountOutOfRange {},
}
