//! Blockchain-specific model implementations.
//!
//! Only Substrate based chains running `pallet-referenda` are supported.

pub mod substrate;
