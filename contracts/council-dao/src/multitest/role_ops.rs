use council_governance::state::{Electorate, RoleOpKind, Status, Vote};
use council_governance::ContractError as GovError;
use council_test_utils::RulesBuilder;

use super::suite::{Suite, SuiteBuilder};
use crate::msg::ExecuteMsg;
use crate::ContractError;

fn organization(members: &[&str]) -> Suite {
    members
        .iter()
        .fold(SuiteBuilder::new(), |builder, member| builder.with_member(member))
        .build()
}

#[test]
fn council_promotes_member() {
    let mut suite = organization(&["alice", "bob", "carol"]);

    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();

    // regular members neither initiate nor vote on promotions
    let err = suite
        .initiate("bob", RoleOpKind::Promote, "carol")
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::NotCouncilMember {}),
        err.downcast().unwrap()
    );
    let err = suite
        .vote_role_op("bob", RoleOpKind::Promote, "alice", Vote::Upvote)
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::NotCouncilMember {}),
        err.downcast().unwrap()
    );

    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Upvote)
        .unwrap();
    let review = suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert_eq!(review.status, Status::Approved);
    assert!(review.transitioned);

    let resolution = suite
        .resolve_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert!(resolution.enacted);
    assert_eq!(resolution.operation.deliberation.status, Status::Resolved);
    assert!(suite.is_council("alice").unwrap());
    assert_eq!(suite.counts().unwrap(), (4, 2));

    // with two council members one vote is 50%, short of 51%
    suite.initiate("alice", RoleOpKind::Promote, "bob").unwrap();
    suite
        .vote_role_op("alice", RoleOpKind::Promote, "bob", Vote::Upvote)
        .unwrap();
    let review = suite
        .review_role_op("alice", RoleOpKind::Promote, "bob")
        .unwrap();
    assert_eq!(review.status, Status::Pending);
    assert!(!review.transitioned);

    suite
        .vote_role_op("founder", RoleOpKind::Promote, "bob", Vote::Upvote)
        .unwrap();
    let review = suite
        .review_role_op("alice", RoleOpKind::Promote, "bob")
        .unwrap();
    assert_eq!(review.status, Status::Approved);

    suite
        .resolve_role_op("alice", RoleOpKind::Promote, "bob")
        .unwrap();
    assert_eq!(suite.counts().unwrap(), (4, 3));
}

#[test]
fn removal_measured_against_members() {
    let rules = RulesBuilder::new()
        .with_threshold(5100)
        .with_role_op_electorate(Electorate::Members)
        .build();
    let mut suite = SuiteBuilder::new()
        .with_member("alice")
        .with_member("bob")
        .with_member("carol")
        .with_rules(rules)
        .build();

    suite
        .initiate("founder", RoleOpKind::Remove, "carol")
        .unwrap();
    let id = suite
        .query_role_operation(RoleOpKind::Remove, "carol")
        .unwrap()
        .id;

    // 2 of 4 members
    for voter in ["alice", "bob"] {
        suite
            .vote_role_op(voter, RoleOpKind::Remove, "carol", Vote::Upvote)
            .unwrap();
    }
    let review = suite
        .review_role_op("carol", RoleOpKind::Remove, "carol")
        .unwrap();
    assert_eq!(review.status, Status::Pending);

    // 3 of 4 members
    suite
        .vote_role_op("founder", RoleOpKind::Remove, "carol", Vote::Upvote)
        .unwrap();

    let err = suite
        .review_role_op("stranger", RoleOpKind::Remove, "carol")
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::NotMember {}),
        err.downcast().unwrap()
    );

    let review = suite
        .review_role_op("bob", RoleOpKind::Remove, "carol")
        .unwrap();
    assert_eq!(review.status, Status::Approved);

    let resolution = suite
        .resolve_role_op("bob", RoleOpKind::Remove, "carol")
        .unwrap();
    assert!(resolution.enacted);
    assert!(suite.query_member("carol").unwrap().member.is_none());
    assert_eq!(suite.counts().unwrap(), (3, 1));

    // ballots outlive the operation
    assert_eq!(suite.list_votes(id).unwrap().votes.len(), 3);
    suite
        .query_role_operation(RoleOpKind::Remove, "carol")
        .unwrap_err();
}

#[test]
fn default_removal_is_measured_against_council() {
    let mut suite = organization(&["alice", "bob", "carol"]);

    suite
        .initiate("founder", RoleOpKind::Remove, "carol")
        .unwrap();
    // one upvote out of a council of one, while three members stay silent
    suite
        .vote_role_op("alice", RoleOpKind::Remove, "carol", Vote::Upvote)
        .unwrap();

    let review = suite
        .review_role_op("bob", RoleOpKind::Remove, "carol")
        .unwrap();
    assert_eq!(review.status, Status::Approved);
}

#[test]
fn dismissed_promotion_leaves_member() {
    let mut suite = organization(&["alice"]);

    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Downvote)
        .unwrap();

    let review = suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert_eq!(review.status, Status::Dismissed);

    let resolution = suite
        .resolve_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert!(!resolution.enacted);
    assert!(!suite.is_council("alice").unwrap());
    assert_eq!(suite.counts().unwrap(), (2, 1));
}

#[test]
fn undecided_operation_expires() {
    let mut suite = organization(&["alice"]);

    suite
        .initiate("founder", RoleOpKind::Remove, "alice")
        .unwrap();

    // pending operations can't be resolved, whoever asks
    for sender in ["founder", "alice", "stranger"] {
        let err = suite
            .resolve_role_op(sender, RoleOpKind::Remove, "alice")
            .unwrap_err();
        assert_eq!(
            ContractError::Governance(GovError::NotYetReviewed {}),
            err.downcast().unwrap()
        );
    }

    suite.advance_seconds(4);
    let review = suite
        .review_role_op("alice", RoleOpKind::Remove, "alice")
        .unwrap();
    assert_eq!(review.status, Status::Pending);

    suite.advance_seconds(1);
    let review = suite
        .review_role_op("alice", RoleOpKind::Remove, "alice")
        .unwrap();
    assert_eq!(review.status, Status::Expired);

    let resolution = suite
        .resolve_role_op("alice", RoleOpKind::Remove, "alice")
        .unwrap();
    assert!(!resolution.enacted);
    assert!(suite.query_member("alice").unwrap().member.is_some());
    assert_eq!(suite.counts().unwrap(), (2, 1));
}

#[test]
fn review_is_idempotent() {
    let mut suite = organization(&["alice"]);

    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Upvote)
        .unwrap();
    suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();

    // time passing doesn't turn an approval into an expiry
    suite.advance_seconds(10);
    let review = suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert_eq!(review.status, Status::Approved);
    assert!(!review.transitioned);

    let err = suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Downvote)
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::AlreadyReviewed(Status::Approved)),
        err.downcast().unwrap()
    );
}

#[test]
fn one_live_operation_per_kind_and_target() {
    let mut suite = organization(&["alice"]);

    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    let err = suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::DuplicateOperation {
            kind: RoleOpKind::Promote,
            target: "alice".to_owned()
        }),
        err.downcast().unwrap()
    );

    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Downvote)
        .unwrap();
    let err = suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Downvote)
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::DuplicateVote {}),
        err.downcast().unwrap()
    );

    suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    suite
        .resolve_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();

    // closing the operation frees the slot, and the new one has its own ballot box
    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Upvote)
        .unwrap();

    let votes = suite.list_votes_by_voter("founder").unwrap().votes;
    assert_eq!(votes.len(), 2);
    assert_ne!(votes[0].target_id, votes[1].target_id);
}

#[test]
fn departed_target_closes_without_effect() {
    let mut suite = organization(&["alice"]);

    suite
        .initiate("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    suite
        .vote_role_op("founder", RoleOpKind::Promote, "alice", Vote::Upvote)
        .unwrap();
    suite
        .review_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();

    suite.exit("alice", "alice").unwrap();

    let resolution = suite
        .resolve_role_op("founder", RoleOpKind::Promote, "alice")
        .unwrap();
    assert!(!resolution.enacted);
    assert_eq!(suite.counts().unwrap(), (1, 1));
}

#[test]
fn unknown_kind_and_vote_encodings_are_refused() {
    let mut suite = organization(&["alice"]);

    let err = suite
        .execute_raw(
            "founder",
            &ExecuteMsg::InitiateRoleOperation {
                kind: "ramoval".to_owned(),
                target: "alice".to_owned(),
            },
        )
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::InvalidOperationKind("ramoval".to_owned())),
        err.downcast().unwrap()
    );

    // the seed is what the wire carries
    suite
        .execute_raw(
            "founder",
            &ExecuteMsg::InitiateRoleOperation {
                kind: "removal".to_owned(),
                target: "alice".to_owned(),
            },
        )
        .unwrap();

    let err = suite
        .execute_raw(
            "founder",
            &ExecuteMsg::VoteRoleOperation {
                kind: "removal".to_owned(),
                target: "alice".to_owned(),
                vote: 2,
            },
        )
        .unwrap_err();
    assert_eq!(
        ContractError::Governance(GovError::InvalidVoteType(2)),
        err.downcast().unwrap()
    );

    // nothing was recorded for the refused vote
    let op = suite
        .query_role_operation(RoleOpKind::Remove, "alice")
        .unwrap();
    assert_eq!(op.deliberation.votes.upvotes + op.deliberation.votes.downvotes, 0);

    suite
        .execute_raw(
            "founder",
            &ExecuteMsg::VoteRoleOperation {
                kind: "removal".to_owned(),
                target: "alice".to_owned(),
                vote: 1,
            },
        )
        .unwrap();
    let op = suite
        .query_role_operation(RoleOpKind::Remove, "alice")
        .unwrap();
    assert_eq!(op.deliberation.votes.upvotes, 1);
}
