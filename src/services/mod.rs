/// Friday morning "who pays" broadcast
pub mod announcer;
/// HTTP health endpoints
pub mod health;
