//! Environment sources
//!
//! The resolver never touches the process environment directly. It reads
//! through an injected [`EnvSource`]:
//! - `ProcessEnv`: the live process environment
//! - `MemoryEnv`: an in-memory map, for tests and frozen snapshots
//! - `DotenvEnv`: a parsed `.env` file
//! - `ChainEnv`: an ordered overlay of other sources

mod traits;
mod process;
mod memory;
mod dotenv;
mod chain;
mod flags;
pub mod vars;

pub use traits::{EnvSource, EnvError, EnvResult, first_value, all_present};
pub use process::ProcessEnv;
pub use memory::MemoryEnv;
pub use dotenv::DotenvEnv;
pub use chain::ChainEnv;
pub use flags::{Truthy, is_truthy};
