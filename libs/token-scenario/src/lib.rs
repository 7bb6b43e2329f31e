#![no_std]

mod error;
mod interface;
mod model;
mod reference;
mod runner;


pub use error::*;
pub use interface::*;
pub use model::*;
pub use reference::*;
pub use runner::*;
