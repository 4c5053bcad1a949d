use anyhow::{anyhow, Result};

/// A participant's display name: what the group calls them in the queue.
pub fn validate_display_name(name: &str) -> Result<()> {
    let name = name.trim();

    if name.is_empty() {
        return Err(anyhow!("Display name cannot be empty"));
    }

    if name.len() > 64 {
        return Err(anyhow!("Display name cannot be longer than 64 characters"));
    }

    if name.contains('\n') || name.contains('\r') {
        return Err(anyhow!("Display name cannot contain line breaks"));
    }

    if name.starts_with('/') {
        return Err(anyhow!("Display name cannot start with a slash"));
    }

    Ok(())
}

pub fn validate_telegram_chat_id(chat_id: i64) -> Result<()> {
    // Telegram chat IDs should be non-zero
    if chat_id == 0 {
        return Err(anyhow!("Chat ID cannot be zero"));
    }

    // Positive IDs should be within reasonable range for user chats (up to 2^31-1)
    if chat_id > 2147483647 {
        return Err(anyhow!("Invalid user chat ID range"));
    }

    // Negative IDs are group or supergroup chats; reject values beyond
    // Telegram's known ranges
    if chat_id < -2000000000000 {
        return Err(anyhow!("Chat ID out of valid range"));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_display_name_valid() {
        assert!(validate_display_name("Alice").is_ok());
        assert!(validate_display_name("Maria Jose").is_ok());
        assert!(validate_display_name("  Trimmed Name  ").is_ok());
        assert!(validate_display_name("O'Brien-Smith").is_ok());
    }

    #[test]
    fn test_validate_display_name_empty() {
        assert!(validate_display_name("").is_err());
        assert!(validate_display_name("   ").is_err());
        assert!(validate_display_name("\t\n").is_err());
    }

    #[test]
    fn test_validate_display_name_too_long() {
        let long_name = "a".repeat(65);
        assert!(validate_display_name(&long_name).is_err());

        let max_name = "a".repeat(64);
        assert!(validate_display_name(&max_name).is_ok());
    }

    #[test]
    fn test_validate_display_name_line_breaks() {
        assert!(validate_display_name("Name\nwith\nnewlines").is_err());
        assert!(validate_display_name("Name\rwith\rreturns").is_err());
    }

    #[test]
    fn test_validate_display_name_slash_prefix() {
        assert!(validate_display_name("/whopays").is_err());
        assert!(validate_display_name("not/a/command").is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_valid() {
        // Private chat (positive)
        assert!(validate_telegram_chat_id(12345).is_ok());
        assert!(validate_telegram_chat_id(987654321).is_ok());

        // Group chat (negative)
        assert!(validate_telegram_chat_id(-12345).is_ok());

        // Super group (very negative)
        assert!(validate_telegram_chat_id(-1001234567890).is_ok());
    }

    #[test]
    fn test_validate_telegram_chat_id_invalid() {
        assert!(validate_telegram_chat_id(0).is_err());
        assert!(validate_telegram_chat_id(-3000000000000).is_err());
        assert!(validate_telegram_chat_id(3000000000).is_err());
    }
}
