//! Execute handlers for the root manager.
//!
//! - `deposit` - DepositFor and DepositNativeFor
//! - `withdraw` - Merkle root publication and proven withdrawals
//! - `mapping` - vault registration and token mapping
//! - `admin` - pause, state sender, fees, treasurer and roles

mod admin;
mod deposit;
mod mapping;
mod withdraw;

pub use admin::*;
pub use deposit::*;
pub use mapping::*;
pub use withdraw::*;
