use cosmwasm_std::Storage;
use cw2::{get_contract_version, set_contract_version};
use semver::Version;

use crate::ContractError;

/// Accepts a migration only from an older (or the same) version of this very contract,
/// recording the new version when it changed.
pub fn ensure_from_older_version(
    storage: &mut dyn Storage,
    name: &str,
    new_version: &str,
) -> Result<Version, ContractError> {
    let version: Version = new_version.parse()?;
    let stored = get_contract_version(storage)?;
    let storage_version: Version = stored.version.parse()?;

    if name != stored.contract {
        return Err(ContractError::WrongContract {
            previous_contract: stored.contract,
            contract: name.to_owned(),
        });
    }

    if storage_version > version {
        return Err(ContractError::CannotDowngrade {
            previous: stored.version,
            current: new_version.to_owned(),
        });
    } else if storage_version < version {
        // we don't need to save anything if migrating from the same version
        set_contract_version(storage, name, new_version)?;
    }

    Ok(storage_version)
}
