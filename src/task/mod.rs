//! Task records nested under projects.
//!
//! Tasks are created, listed, shown, edited and deleted within the scope of
//! a single project. Moving a task into the configured completion status
//! stamps its completion time exactly once; deletion is a two-step protocol
//! that requires an explicit confirmation. The module follows hexagonal
//! architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
