use cosmwasm_std::{coins, Addr, BankMsg, Deps, DepsMut, MessageInfo, StdResult, Storage, Uint128};
use cw_utils::must_pay;

use crate::state::{Treasury, TREASURY};
use crate::{ContractError, Response};

/// Opens the treasury, crediting whatever was sent along with the instantiation
pub fn create(
    storage: &mut dyn Storage,
    denom: String,
    initial: Uint128,
) -> Result<Treasury, ContractError> {
    let treasury = Treasury {
        denom,
        balance: initial,
    };
    TREASURY.save(storage, &treasury)?;
    Ok(treasury)
}

/// Anyone may fund the organization, with coins of the treasury denom only
pub fn execute_fund(deps: DepsMut, info: MessageInfo) -> Result<Response, ContractError> {
    let mut treasury = TREASURY.load(deps.storage)?;
    let amount = must_pay(&info, &treasury.denom)?;

    treasury.balance = treasury
        .balance
        .checked_add(amount)
        .map_err(|_| ContractError::CountOutOfRange {})?;
    TREASURY.save(deps.storage, &treasury)?;

    Ok(Response::new()
        .add_attribute("action", "fund")
        .add_attribute("sender", info.sender)
        .add_attribute("amount", amount.to_string())
        .add_attribute("balance", treasury.balance.to_string()))
}

/// Takes `amount` out of the treasury and returns the transfer to `recipient`.
/// Only called when resolving an approved proposal.
pub(crate) fn debit(
    storage: &mut dyn Storage,
    recipient: &Addr,
    amount: Uint128,
) -> Result<BankMsg, ContractError> {
    let mut treasury = TREASURY.load(storage)?;
    let available = treasury.balance;
    treasury.balance = available.checked_sub(amount).map_err(|_| {
        ContractError::InsufficientTreasuryBalance {
            required: amount,
            available,
        }
    })?;
    TREASURY.save(storage, &treasury)?;

    Ok(BankMsg::Send {
        to_address: recipient.to_string(),
        amount: coins(amount.u128(), treasury.denom),
    })
}

pub fn query_treasury(deps: Deps) -> StdResult<Treasury> {
    TREASURY.load(deps.storage)
}
