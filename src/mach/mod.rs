/*!
## Rust Machine Module

This Rust module stores and runs BASIC programs.

*/

mod console;
mod exec;
mod listing;
mod operation;
mod program;
mod runtime;
mod state;
mod var;

pub use console::Console;
pub use console::Transcript;
pub use listing::Listing;
pub use operation::Operation;
pub use program::Program;
pub use runtime::Event;
pub use runtime::Runtime;
pub use state::EvalState;
pub use state::State;
pub use var::Var;

#[cfg(test)]
mod tests;
