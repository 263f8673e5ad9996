//! Instruction handlers for Flake.

pub mod create_pair;
pub mod factory;
pub mod proceeds;
pub mod requests;
pub mod swap;

pub use create_pair::*;
pub use factory::*;
pub use proceeds::*;
pub use requests::*;
pub use swap::*;
