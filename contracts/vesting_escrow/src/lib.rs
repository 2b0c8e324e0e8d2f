#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod contract;
mod curve;
mod errors;
mod events;
mod ledger;
mod storage;
mod types;


pub use contract::{VestingEscrow, VestingEscrowClient};
pub use errors::Error;
pub use types::{GrantTerms, VestingGrant};
