/// Command definitions and per-command handlers
pub mod commands;
/// Update routing: commands, plain text, callback queries
pub mod handlers;
