/// Jungle domain types.
pub mod jungle;
/// Move legality.
pub mod rules;
/// Reversible command execution.
pub mod command;
/// Game sessions.
pub mod session;
