#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod bulk;
pub mod constants;
mod contract;
mod errors;
mod events;
mod interfaces;
mod schedule;
mod storage;
mod types;


pub use contract::{TokenSaleContract, TokenSaleContractClient};
pub use errors::{category, Error, ErrorCategory};
pub use types::{EmissionConfig, GrantTerms, SaleConfig, SaleState, SaleWallets};
