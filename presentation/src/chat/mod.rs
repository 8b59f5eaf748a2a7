//! Interactive chat

pub mod repl;
