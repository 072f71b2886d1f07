//! Role-based access control.
//!
//! Each address holds a bitset of [`Role`]s. The instantiating admin receives
//! every role; admins grant and revoke the rest.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::ContractError;

#[cw_serde]
#[derive(Copy, Eq, Hash)]
pub enum Role {
    /// Fees, treasurer, pause, state sender and role management
    Admin,
    /// Vault registration and token mapping
    Mapper,
    /// Publishes Merkle roots of child-chain withdrawals
    MerkleUpdater,
}

impl Role {
    pub const ALL: [Role; 3] = [Role::Admin, Role::Mapper, Role::MerkleUpdater];

    fn bit(self) -> u8 {
        match self {
            Role::Admin => 1,
            Role::Mapper => 1 << 1,
            Role::MerkleUpdater => 1 << 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Mapper => "mapper",
            Role::MerkleUpdater => "merkle_updater",
        }
    }
}

pub const ROLES: Map<&Addr, u8> = Map::new("roles");

pub fn has_role(storage: &dyn Storage, addr: &Addr, role: Role) -> StdResult<bool> {
    let bits = ROLES.may_load(storage, addr)?.unwrap_or_default();
    Ok(bits & role.bit() != 0)
}

pub fn ensure_role(storage: &dyn Storage, addr: &Addr, role: Role) -> Result<(), ContractError> {
    if has_role(storage, addr, role)? {
        Ok(())
    } else {
        Err(ContractError::MissingRole {
            role: role.as_str().to_string(),
        })
    }
}

pub fn grant_role(storage: &mut dyn Storage, addr: &Addr, role: Role) -> StdResult<()> {
    let bits = ROLES.may_load(storage, addr)?.unwrap_or_default();
    ROLES.save(storage, addr, &(bits | role.bit()))
}

pub fn revoke_role(storage: &mut dyn Storage, addr: &Addr, role: Role) -> StdResult<()> {
    let bits = ROLES.may_load(storage, addr)?.unwrap_or_default() & !role.bit();
    if bits == 0 {
        ROLES.remove(storage, addr);
        Ok(())
    } else {
        ROLES.save(storage, addr, &bits)
    }
}

pub fn roles_of(storage: &dyn Storage, addr: &Addr) -> StdResult<Vec<Role>> {
    let bits = ROLES.may_load(storage, addr)?.unwrap_or_default();
    Ok(Role::ALL
        .into_iter()
        .filter(|role| bits & role.bit() != 0)
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    #[test]
    fn test_grant_and_revoke() {
        let mut storage = MockStorage::new();
        let addr = Addr::unchecked("terra1mapper");

        assert!(!has_role(&storage, &addr, Role::Mapper).unwrap());
        grant_role(&mut storage, &addr, Role::Mapper).unwrap();
        grant_role(&mut storage, &addr, Role::MerkleUpdater).unwrap();
        assert_eq!(
            roles_of(&storage, &addr).unwrap(),
            vec![Role::Mapper, Role::MerkleUpdater]
        );

        revoke_role(&mut storage, &addr, Role::Mapper).unwrap();
        assert!(ensure_role(&storage, &addr, Role::MerkleUpdater).is_ok());
        assert_eq!(
            ensure_role(&storage, &addr, Role::Mapper).unwrap_err(),
            ContractError::MissingRole {
                role: "mapper".to_string()
            }
        );

        revoke_role(&mut storage, &addr, Role::MerkleUpdater).unwrap();
        assert!(ROLES.may_load(&storage, &addr).unwrap().is_none());
    }
}
