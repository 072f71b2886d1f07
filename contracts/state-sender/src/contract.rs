use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, Event, MessageInfo, Response,
    StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    CounterResponse, ExecuteMsg, InstantiateMsg, IsSenderResponse, MigrateMsg, QueryMsg,
};
use crate::state::{ADMIN, CONTRACT_NAME, CONTRACT_VERSION, COUNTER, SENDERS};

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let admin = deps.api.addr_validate(&msg.admin)?;
    ADMIN.save(deps.storage, &admin)?;
    COUNTER.save(deps.storage, &0)?;
    for sender in &msg.senders {
        SENDERS.save(deps.storage, &deps.api.addr_validate(sender)?, &true)?;
    }

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("admin", admin))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SyncState { data } => execute_sync_state(deps, env, info, data),
        ExecuteMsg::RegisterSender { sender } => execute_set_sender(deps, info, sender, true),
        ExecuteMsg::RemoveSender { sender } => execute_set_sender(deps, info, sender, false),
    }
}

fn execute_sync_state(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    data: Binary,
) -> Result<Response, ContractError> {
    if !SENDERS
        .may_load(deps.storage, &info.sender)?
        .unwrap_or(false)
    {
        return Err(ContractError::NotSender {
            sender: info.sender.to_string(),
        });
    }
    if data.is_empty() {
        return Err(ContractError::EmptyPayload);
    }

    let id = COUNTER.may_load(deps.storage)?.unwrap_or_default() + 1;
    COUNTER.save(deps.storage, &id)?;

    Ok(Response::new()
        .add_event(
            Event::new("state_synced")
                .add_attribute("id", id.to_string())
                .add_attribute("contract_address", env.contract.address.to_string())
                .add_attribute("sender", info.sender.to_string())
                .add_attribute("data", data.to_base64()),
        )
        .add_attribute("action", "sync_state")
        .add_attribute("state_id", id.to_string()))
}

fn execute_set_sender(
    deps: DepsMut,
    info: MessageInfo,
    sender: String,
    register: bool,
) -> Result<Response, ContractError> {
    if info.sender != ADMIN.load(deps.storage)? {
        return Err(ContractError::Unauthorized);
    }

    let sender = deps.api.addr_validate(&sender)?;
    if register {
        SENDERS.save(deps.storage, &sender, &true)?;
    } else {
        SENDERS.remove(deps.storage, &sender);
    }

    Ok(Response::new()
        .add_attribute(
            "action",
            if register {
                "register_sender"
            } else {
                "remove_sender"
            },
        )
        .add_attribute("sender", sender))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Counter {} => to_json_binary(&CounterResponse {
            counter: COUNTER.may_load(deps.storage)?.unwrap_or_default(),
        }),
        QueryMsg::IsSender { address } => {
            let addr = deps.api.addr_validate(&address)?;
            to_json_binary(&IsSenderResponse {
                is_sender: SENDERS.may_load(deps.storage, &addr)?.unwrap_or(false),
            })
        }
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("action", "migrate"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::from_json;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};

    fn setup(deps: DepsMut) {
        instantiate(
            deps,
            mock_env(),
            mock_info("creator", &[]),
            InstantiateMsg {
                admin: "admin".to_string(),
                senders: vec!["manager".to_string()],
            },
        )
        .unwrap();
    }

    fn sync(data: &[u8]) -> ExecuteMsg {
        ExecuteMsg::SyncState {
            data: Binary::from(data),
        }
    }

    #[test]
    fn test_sync_assigns_increasing_ids() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        for expected in 1..=3u64 {
            let res = execute(
                deps.as_mut(),
                mock_env(),
                mock_info("manager", &[]),
                sync(b"{}"),
            )
            .unwrap();
            let event = &res.events[0];
            assert_eq!(event.ty, "state_synced");
            assert_eq!(event.attributes[0].value, expected.to_string());
        }

        let res: CounterResponse =
            from_json(query(deps.as_ref(), mock_env(), QueryMsg::Counter {}).unwrap()).unwrap();
        assert_eq!(res.counter, 3);
    }

    #[test]
    fn test_sync_rejects_unregistered() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("stranger", &[]),
            sync(b"{}"),
        )
        .unwrap_err();
        assert_eq!(
            err,
            ContractError::NotSender {
                sender: "stranger".to_string()
            }
        );

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("manager", &[]),
            sync(b""),
        )
        .unwrap_err();
        assert_eq!(err, ContractError::EmptyPayload);
    }

    #[test]
    fn test_sender_registry_admin_only() {
        let mut deps = mock_dependencies();
        setup(deps.as_mut());

        let err = execute(
            deps.as_mut(),
            mock_env(),
            mock_info("manager", &[]),
            ExecuteMsg::RegisterSender {
                sender: "stranger".to_string(),
            },
        )
        .unwrap_err();
        assert_eq!(err, ContractError::Unauthorized);

        execute(
            deps.as_mut(),
            mock_env(),
            mock_info("admin", &[]),
            ExecuteMsg::RemoveSender {
                sender: "manager".to_string(),
            },
        )
        .unwrap();
        let res: IsSenderResponse = from_json(
            query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsSender {
                    address: "manager".to_string(),
                },
            )
            .unwrap(),
        )
        .unwrap();
        assert!(!res.is_sender);
    }
}
