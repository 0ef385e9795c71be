pub mod calculator;
pub mod mvi;
pub mod repl;
