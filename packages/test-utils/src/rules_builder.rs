use council_governance::state::{Electorate, Electorates, VotingRules};

pub struct RulesBuilder {
    pub threshold_bps: u16,
    pub deliberation_period: u64,
    pub min_signers: u32,
    pub electorate: Electorates,
}

impl RulesBuilder {
    pub fn new() -> Self {
        Self {
            threshold_bps: 5100,
            deliberation_period: 5,
            min_signers: 1,
            electorate: Electorates::default(),
        }
    }

    pub fn with_threshold(mut self, threshold_bps: u16) -> Self {
        self.threshold_bps = threshold_bps;
        self
    }

    pub fn with_deliberation_period(mut self, seconds: u64) -> Self {
        self.deliberation_period = seconds;
        self
    }

    pub fn with_min_signers(mut self, min_signers: u32) -> Self {
        self.min_signers = min_signers;
        self
    }

    /// Measure proposal consensus against the given group
    pub fn with_proposal_electorate(mut self, electorate: Electorate) -> Self {
        self.electorate.proposal = electorate;
        self
    }

    /// Measure consensus of promotions, demotions and removals against the given group
    pub fn with_role_op_electorate(mut self, electorate: Electorate) -> Self {
        self.electorate.promote = electorate;
        self.electorate.demote = electorate;
        self.electorate.remove = electorate;
        self
    }

    pub fn build(&self) -> VotingRules {
        VotingRules {
            threshold_bps: self.threshold_bps,
            deliberation_period: self.deliberation_period,
            min_signers: self.min_signers,
            electorate: self.electorate,
        }
    }
}

impl Default for RulesBuilder {
    fn default() -> Self {
        Self::new()
    }
}
