use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, user: &str, user_id: i64, chat_id: i64) {
    info!(
        "CMD_START: {} by {}({}) in chat {}",
        command, user, user_id, chat_id
    );
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, user: &str, user_id: i64, chat_id: i64, details: &str) {
    info!(
        "CMD_SUCCESS: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, details
    );
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, user: &str, user_id: i64, chat_id: i64, error: &str) {
    error!(
        "CMD_ERROR: {} by {}({}) in chat {} - {}",
        command, user, user_id, chat_id, error
    );
}

/// Logs validation errors with consistent format
pub fn log_validation_error(command: &str, field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {}",
        command, field, value, error
    );
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str) {
    error!("DB_ERROR: {} on {} failed: {}", operation, table, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
