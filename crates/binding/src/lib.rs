//! Contract bindings for all external contracts.
//!
//! This crate consolidates the Solidity interfaces used by the deployment
//! tool:
//! - Chainlink VRF coordinator mock (local stand-in for the live coordinator)
//!
//! All bindings are generated using alloy's `sol!` macro.

pub mod vrf;
