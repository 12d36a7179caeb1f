#![no_std]

#[cfg(any(test, feature = "testutils"))]
extern crate std;

mod admin;
mod allowance;
mod balance;
mod constants;
mod contract;
mod errors;
mod events;
mod storage;
mod testutils;

pub use constants::NULL_ADDRESS;
pub use contract::*;
pub use errors::JazzTokenError;
pub use storage::{AllowanceKey, JazzTokenDataKey, TokenMetadata};
