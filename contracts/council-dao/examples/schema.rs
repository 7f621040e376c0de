use std::env::current_dir;
use std::fs::create_dir_all;

use cosmwasm_schema::{export_schema, remove_schemas, schema_for};

use council_dao::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use council_governance::msg::{
    MemberListResponse, MemberResponse, ProposalListResponse, ProposalResolution,
    ReviewResponse, RoleOperationListResponse, RoleOperationResolution, SignOffsResponse,
    VoteListResponse, VoteResponse,
};
use council_governance::state::{Config, Proposal, RoleOperation, Treasury};

fn main() {
    let mut out_dir = current_dir().unwrap();
    out_dir.push("schema");
    create_dir_all(&out_dir).unwrap();
    remove_schemas(&out_dir).unwrap();

    export_schema(&schema_for!(InstantiateMsg), &out_dir);
    export_schema(&schema_for!(ExecuteMsg), &out_dir);
    export_schema(&schema_for!(QueryMsg), &out_dir);
    export_schema(&schema_for!(MigrateMsg), &out_dir);
    export_schema(&schema_for!(Config), &out_dir);
    export_schema(&schema_for!(Treasury), &out_dir);
    export_schema(&schema_for!(MemberResponse), &out_dir);
    export_schema(&schema_for!(MemberListResponse), &out_dir);
    export_schema(&schema_for!(RoleOperation), &out_dir);
    export_schema(&schema_for!(RoleOperationListResponse), &out_dir);
    export_schema(&schema_for!(Proposal), &out_dir);
    export_schema(&schema_for!(ProposalListResponse), &out_dir);
    export_schema(&schema_for!(ReviewResponse), &out_dir);
    export_schema(&schema_for!(RoleOperationResolution), &out_dir);
    export_schema(&schema_for!(ProposalResolution), &out_dir);
    export_schema(&schema_for!(VoteResponse), &out_dir);
    export_schema(&schema_for!(VoteListResponse), &out_dir);
    export_schema(&schema_for!(SignOffsResponse), &out_dir);
}
