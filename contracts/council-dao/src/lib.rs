pub mod contract;
mod error;
mod migration;
pub mod msg;
#[cfg(test)]
mod multitest;

pub use crate::error::ContractError;
