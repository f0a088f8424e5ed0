#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod board;
mod common;
mod config;
mod counter;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
mod position;
pub mod prelude;
mod random;
mod session;
mod ship;

pub use board::*;
pub use common::*;
pub use config::*;
pub use counter::Counter;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, level_from};
pub use position::Position;
pub use random::*;
pub use session::*;
pub use ship::*;
