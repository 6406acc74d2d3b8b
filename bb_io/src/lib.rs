pub mod board;
pub mod locate;
pub mod packages;
pub mod runner;
pub mod services;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use board::Brewboard;
pub use locate::{BrewLocator, Candidate};
pub use packages::{list_packages, try_list_packages};
pub use runner::{BrewRunner, CommandOutput, CommandRunner, RunnerConfig};
pub use services::{ServiceAction, dispatch, read_service_states, try_read_service_states};
