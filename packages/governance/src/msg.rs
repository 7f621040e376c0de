use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::state::{Member, Proposal, RoleOperation, Status, Vote};

/// Data attached to the response of a review
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ReviewResponse {
    pub id: u64,
    pub status: Status,
    /// false if the entity was still undecided or had been reviewed before
    pub transitioned: bool,
}

/// Data attached to the response of a role operation resolution
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RoleOperationResolution {
    /// The closed operation, with status set to `Resolved`
    pub operation: RoleOperation,
    /// true if membership was changed
    pub enacted: bool,
}

/// Data attached to the response of a proposal resolution
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ProposalResolution {
    /// The closed proposal, with status set to `Resolved`
    pub proposal: Proposal,
    /// true if the funds were transferred
    pub enacted: bool,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberResponse {
    pub member: Option<Member>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct MemberListResponse {
    pub members: Vec<Member>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct RoleOperationListResponse {
    pub operations: Vec<RoleOperation>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct ProposalListResponse {
    pub proposals: Vec<Proposal>,
}

/// Returns the vote as well as the address of the voter who submitted it
#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct VoteInfo {
    /// Id of the role operation or proposal voted on
    pub target_id: u64,
    pub voter: String,
    pub vote: Vote,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct VoteListResponse {
    pub votes: Vec<VoteInfo>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct VoteResponse {
    pub vote: Option<VoteInfo>,
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
pub struct SignOffsResponse {
    pub signers: Vec<String>,
}
