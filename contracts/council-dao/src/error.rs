use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Governance(council_governance::ContractError),

    #[error("Cannot migrate from {previous_contract} to {contract}")]
    WrongContract {
        previous_contract: String,
        contract: String,
    },

    #[error("Cannot migrate from newer version ({previous}) to older ({current})")]
    CannotDowngrade { previous: String, current: String },

    #[error("Semver: {0}")]
    SemVer(String),
}

impl From<council_governance::ContractError> for ContractError {
    fn from(err: council_governance::ContractError) -> Self {
        match err {
            council_governance::ContractError::Std(err) => Self::Std(err),
            err => Self::Governance(err),
        }
    }
}

impl From<semver::Error> for ContractError {
    fn from(err: semver::Error) -> Self {
        Self::SemVer(err.to_string())
    }
}
