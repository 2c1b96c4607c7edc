//! Interactive front end.
//!
//! - [`Args`] - command-line flags, mapped onto a `StoreConfig`
//! - [`Session`] - the numbered menu loop
//! - [`Prompter`] - prompts that re-ask on invalid input

mod args;
mod prompt;
mod session;
mod table;

pub use args::{Args, FinalizeArg, ShortReadArg};
pub use prompt::{parse_int, parse_price, Prompter};
pub use session::{MenuChoice, Session};
