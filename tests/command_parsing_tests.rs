use cremaet_bot::bot::commands::Command;
use teloxide::utils::command::BotCommands;

#[test]
fn test_help_command_parsing() {
    let result = Command::parse("/help", "cremaetbot");
    assert!(matches!(result, Ok(Command::Help)));
}

#[test]
fn test_start_command_parsing() {
    let result = Command::parse("/start", "cremaetbot");
    assert!(matches!(result, Ok(Command::Start)));
}

#[test]
fn test_whopays_command_parsing() {
    let result = Command::parse("/whopays", "cremaetbot");
    assert!(matches!(result, Ok(Command::WhoPays)));
}

#[test]
fn test_ranking_command_parsing() {
    let result = Command::parse("/ranking", "cremaetbot");
    assert!(matches!(result, Ok(Command::Ranking)));
}

#[test]
fn test_log_command_parsing() {
    let result = Command::parse("/log", "cremaetbot");
    assert!(matches!(result, Ok(Command::Log)));
}

#[test]
fn test_holiday_command_parsing() {
    let result = Command::parse("/holiday", "cremaetbot");
    assert!(matches!(result, Ok(Command::Holiday)));
}

#[test]
fn test_menu_command_parsing() {
    let result = Command::parse("/menu", "cremaetbot");
    assert!(matches!(result, Ok(Command::Menu)));
}

#[test]
fn test_event_command_takes_a_name() {
    let result = Command::parse("/event Alice", "cremaetbot");
    match result {
        Ok(Command::Event { name }) => assert_eq!(name, "Alice"),
        other => panic!("expected /event to parse, got {other:?}"),
    }
}

#[test]
fn test_participant_command_keeps_spaces_in_the_name() {
    let result = Command::parse("/participant Maria Jose", "cremaetbot");
    match result {
        Ok(Command::Participant { name }) => assert_eq!(name, "Maria Jose"),
        other => panic!("expected /participant to parse, got {other:?}"),
    }
}

#[test]
fn test_commands_parse_with_bot_mention() {
    let result = Command::parse("/whopays@cremaetbot", "cremaetbot");
    assert!(matches!(result, Ok(Command::WhoPays)));
}

#[test]
fn test_unknown_command_is_an_error() {
    assert!(Command::parse("/unknown", "cremaetbot").is_err());
    assert!(Command::parse("not a command", "cremaetbot").is_err());
}
