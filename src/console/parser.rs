//! Console command parser

use super::commands::Command;
use crate::validation::Field;

/// Parses one input line. Verbs are case-insensitive; values keep their case.
pub fn parse_command(raw: &str) -> Command {
    let line = raw.trim_end_matches(['\r', '\n']);
    let trimmed = line.trim();
    let (verb, raw_rest) = match line.trim_start().split_once(char::is_whitespace) {
        Some((verb, rest)) => (verb, rest),
        None => (trimmed, ""),
    };
    let rest = raw_rest.trim();

    match verb.to_ascii_uppercase().as_str() {
        "SIGNUP" => Command::Signup,
        "LOGIN" => Command::Login,
        "SET" => parse_set(raw_rest),
        "AVATAR" if !rest.is_empty() => Command::Avatar(rest.to_string()),
        "AVATAR" => Command::Invalid("AVATAR requires a URL".into()),
        "SUBMIT" => Command::Submit,
        "SHOW" => Command::Show,
        "HINT" => match rest.parse::<Field>() {
            Ok(field) => Command::Hint(field),
            Err(e) => Command::Invalid(e.to_string()),
        },
        "WHOAMI" => Command::Whoami,
        "HELP" | "?" => Command::Help,
        "QUIT" | "EXIT" | "Q" => Command::Quit,
        _ => Command::Unknown(trimmed.to_string()),
    }
}

/// `SET <field> [value...]`; a missing value clears the field.
///
/// Password values are everything after the single space following the field
/// name, so leading and trailing spaces survive. Other values are trimmed.
fn parse_set(raw_rest: &str) -> Command {
    let rest = raw_rest.trim_start();
    if rest.trim().is_empty() {
        return Command::Invalid("SET requires a field name".into());
    }

    let (name, raw_value) = rest.split_once(char::is_whitespace).unwrap_or((rest, ""));

    match name.parse::<Field>() {
        Ok(field @ (Field::Password | Field::ConfirmPassword)) => {
            Command::Set(field, raw_value.to_string())
        }
        Ok(field) => Command::Set(field, raw_value.trim().to_string()),
        Err(e) => Command::Invalid(e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(parse_command("SIGNUP"), Command::Signup);
        assert_eq!(parse_command("login"), Command::Login);
        assert_eq!(parse_command("Submit"), Command::Submit);
        assert_eq!(parse_command("SHOW"), Command::Show);
        assert_eq!(parse_command("whoami"), Command::Whoami);
        assert_eq!(parse_command("?"), Command::Help);
        assert_eq!(parse_command("Q"), Command::Quit);
    }

    #[test]
    fn test_parse_set_keeps_spaces_in_value() {
        assert_eq!(
            parse_command("SET address 1 Main St"),
            Command::Set(Field::Address, "1 Main St".to_string())
        );
        assert_eq!(
            parse_command("set Password Abc123"),
            Command::Set(Field::Password, "Abc123".to_string())
        );
        assert_eq!(
            parse_command("  SET confirm Abc123"),
            Command::Set(Field::ConfirmPassword, "Abc123".to_string())
        );
    }

    #[test]
    fn test_parse_set_keeps_password_spaces() {
        assert_eq!(
            parse_command("SET password  Abc 123 "),
            Command::Set(Field::Password, " Abc 123 ".to_string())
        );
        assert_eq!(
            parse_command("SET confirm  Abc 123 \r\n"),
            Command::Set(Field::ConfirmPassword, " Abc 123 ".to_string())
        );
        assert_eq!(
            parse_command("SET name  Ada  "),
            Command::Set(Field::Name, "Ada".to_string())
        );
    }

    #[test]
    fn test_parse_set_without_value_clears() {
        assert_eq!(
            parse_command("SET city"),
            Command::Set(Field::City, String::new())
        );
    }

    #[test]
    fn test_parse_set_errors() {
        assert_eq!(
            parse_command("SET"),
            Command::Invalid("SET requires a field name".into())
        );
        assert_eq!(
            parse_command("SET pincode 12345"),
            Command::Invalid("Unknown field: pincode".into())
        );
    }

    #[test]
    fn test_parse_hint_and_avatar() {
        assert_eq!(parse_command("HINT email"), Command::Hint(Field::Email));
        assert_eq!(
            parse_command("AVATAR https://img.example.com/a.png"),
            Command::Avatar("https://img.example.com/a.png".into())
        );
        assert!(matches!(parse_command("AVATAR"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(parse_command("  SUBMIT  "), Command::Submit);
        assert_eq!(
            parse_command("FOO bar"),
            Command::Unknown("FOO bar".to_string())
        );
    }
}
