//! Task records and the collaborators that store and update them.
//!
//! The module follows hexagonal architecture:
//!
//! - Domain types in [`domain`]: the validated task record and its status
//!   enumeration
//! - Port contracts in [`ports`]: storage and status transition policy
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;
