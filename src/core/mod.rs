pub mod components;
pub mod event;
pub mod execution;
pub mod lookahead;
pub mod memory;
pub mod report;
pub mod trace;
pub mod types;

#[cfg(test)]
mod tests;
