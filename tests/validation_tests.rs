use cremaet_bot::utils::markdown::escape_markdown;
use cremaet_bot::utils::validation::{validate_display_name, validate_telegram_chat_id};

#[test]
fn test_display_name_accepts_real_names() {
    assert!(validate_display_name("Alice").is_ok());
    assert!(validate_display_name("Maria Jose").is_ok());
    assert!(validate_display_name("Jean-Luc").is_ok());
    assert!(validate_display_name("  padded  ").is_ok());
}

#[test]
fn test_display_name_rejects_garbage() {
    assert!(validate_display_name("").is_err());
    assert!(validate_display_name("   ").is_err());
    assert!(validate_display_name("multi\nline").is_err());
    assert!(validate_display_name("/whopays").is_err());
    assert!(validate_display_name(&"x".repeat(65)).is_err());
}

#[test]
fn test_chat_id_ranges() {
    assert!(validate_telegram_chat_id(12345).is_ok());
    assert!(validate_telegram_chat_id(-12345).is_ok());
    assert!(validate_telegram_chat_id(-1001234567890).is_ok());

    assert!(validate_telegram_chat_id(0).is_err());
    assert!(validate_telegram_chat_id(3000000000).is_err());
    assert!(validate_telegram_chat_id(-3000000000000).is_err());
}

#[test]
fn test_markdown_escaping_round_messages() {
    assert_eq!(
        escape_markdown("Alice pays the next round, on 10/05/2024"),
        "Alice pays the next round, on 10/05/2024"
    );
    assert_eq!(
        escape_markdown("1. Alice (next)"),
        "1\\. Alice \\(next\\)"
    );
}
