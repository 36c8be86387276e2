//! Domain types and derivations shared across the Rentman service.
//!
//! This crate contains only pure types and computation functions with no
//! framework dependencies. Derived fields (room codes, lease end dates,
//! rent totals, transaction numbers) are computed here and invoked
//! explicitly at the write boundary; there are no persistence hooks.

pub mod building;
pub mod clock;
pub mod lease;
pub mod ledger;
pub mod pagination;
pub mod txn;
pub mod types;
