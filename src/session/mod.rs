mod console;
mod runner;

pub use console::{Console, SessionError};
pub use runner::{administer, Outcome};
