use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only the admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: {sender} is not a registered sender")]
    NotSender { sender: String },

    #[error("Empty payload")]
    EmptyPayload,
}
