use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::Uint128;
use council_governance::state::{RoleOpKind, VotingRules};

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct InstantiateMsg {
    /// Organization identifier
    pub id: u64,
    pub rules: VotingRules,
    /// Denom of the treasury. Coins of this denom sent with instantiation open its balance
    pub denom: String,
    /// If set, anybody can join as a regular member
    #[serde(default)]
    pub open_membership: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// Join an organization with open membership
    Join {},
    /// Council only
    AddMember { aspirant: String },
    /// Leave the organization, only the member itself can do it
    Exit { member: String },
    /// Deposit the coins sent with the message in the treasury
    Fund {},
    /// `kind` is the operation seed: "promotion", "demotion" or "removal"
    InitiateRoleOperation {
        kind: String,
        target: String,
    },
    /// `vote` is 1 for up and 0 for down
    VoteRoleOperation {
        kind: String,
        target: String,
        vote: u8,
    },
    ReviewRoleOperation {
        kind: String,
        target: String,
    },
    ResolveRoleOperation {
        kind: String,
        target: String,
    },
    SubmitProposal {
        title: String,
        content: String,
        /// Receiver of the requested funds
        beneficiary: String,
        amount: Uint128,
    },
    VoteProposal {
        title: String,
        vote: u8,
    },
    ReviewProposal {
        title: String,
    },
    /// Authorize the transfer of the proposal funds
    SignOff {
        title: String,
    },
    ResolveProposal {
        title: String,
        /// Must match the beneficiary of the proposal for the transfer to happen
        beneficiary: String,
    },
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    /// Returns Config
    Config {},
    /// Returns MemberResponse
    Member { addr: String },
    /// Returns MemberListResponse
    ListMembers {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns RoleOperation
    RoleOperation { kind: RoleOpKind, target: String },
    /// Returns RoleOperationListResponse
    ListRoleOperations {
        kind: RoleOpKind,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns Proposal
    Proposal { title: String },
    /// Returns ProposalListResponse
    ListProposals {
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns VoteResponse
    Vote { target_id: u64, voter: String },
    /// Returns VoteListResponse
    ListVotes {
        target_id: u64,
        start_after: Option<String>,
        limit: Option<u32>,
    },
    /// Returns VoteListResponse
    ListVotesByVoter {
        voter: String,
        start_after: Option<u64>,
        limit: Option<u32>,
    },
    /// Returns SignOffsResponse
    SignOffs { title: String },
    /// Returns Treasury
    Treasury {},
}

#[derive(Serialize, Deserialize, Clone, PartialEq, JsonSchema, Debug)]
#[serde(rename_all = "snake_case")]
pub struct MigrateMsg {}
