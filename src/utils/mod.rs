/// Friday cadence: payday predicate and next-occurrence calculator
pub mod datetime;
/// Uniform user-facing feedback messages
pub mod feedback;
/// Structured log helpers with consistent formats
pub mod logging;
/// Telegram MarkdownV2 escaping
pub mod markdown;
/// Input validation for names and identifiers
pub mod validation;
