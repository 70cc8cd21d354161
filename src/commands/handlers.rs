//! Executing parsed commands against the directory.

use super::parser::Command;
use crate::config::Config;
use crate::domain::{Birthday, PhoneNumber};
use crate::error::{CommandError, CommandResult};
use crate::matching::NameMatcher;
use crate::models::{ContactRecord, Directory, Upsert};
use chrono::NaiveDate;

/// What the session should do after a command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Print this text and keep reading commands
    Text(String),
    /// Save and end the session
    Exit,
}

impl Reply {
    fn text(s: impl Into<String>) -> Self {
        Self::Text(s.into())
    }
}

/// Runs commands against a directory.
///
/// Holds the caller-supplied settings (birthday window, suggestion limits)
/// so the directory itself never needs defaults.
pub struct CommandHandler {
    birthday_window_days: u32,
    max_suggestions: usize,
    suggestion_threshold: u8,
    matcher: NameMatcher,
}

impl CommandHandler {
    pub fn new(config: &Config) -> Self {
        Self {
            birthday_window_days: config.birthday_window_days,
            max_suggestions: config.max_suggestions,
            suggestion_threshold: config.suggestion_threshold,
            matcher: NameMatcher::new(),
        }
    }

    /// Run one command. `today` anchors the birthday window.
    pub fn execute(
        &self,
        command: Command,
        directory: &mut Directory,
        today: NaiveDate,
    ) -> CommandResult<Reply> {
        match command {
            Command::Hello => Ok(Reply::text("How can I help you?")),
            Command::Add {
                name,
                phone,
                birthday,
            } => self.add_contact(directory, &name, &phone, birthday.as_deref()),
            Command::Change {
                name,
                old_phone,
                new_phone,
            } => {
                self.update(directory, &name, |record| {
                    record.edit_phone(&old_phone, &new_phone)?;
                    Ok(())
                })?;
                Ok(Reply::Text(format!("Contact {} updated.", name)))
            }
            Command::Phone { name } => {
                let record = self.require(directory, &name)?;
                Ok(Reply::Text(format!("{}: {}", name, record.phones_display())))
            }
            Command::All if directory.is_empty() => Ok(Reply::text("No contacts saved.")),
            Command::All => Ok(Reply::Text(directory.to_string())),
            Command::AddBirthday { name, birthday } => {
                let birthday = Birthday::parse(&birthday)?;
                self.update(directory, &name, |record| {
                    record.set_birthday(birthday);
                    Ok(())
                })?;
                Ok(Reply::Text(format!("Birthday added for {}.", name)))
            }
            Command::ShowBirthday { name } => {
                let record = self.require(directory, &name)?;
                match record.birthday() {
                    Some(birthday) => Ok(Reply::Text(format!(
                        "{}'s birthday is {}.",
                        name, birthday
                    ))),
                    None => Err(CommandError::NoBirthday(name)),
                }
            }
            Command::Birthdays => {
                let upcoming = directory.upcoming_birthdays(self.birthday_window_days, today);
                if upcoming.is_empty() {
                    return Ok(Reply::text("No upcoming birthdays."));
                }
                Ok(Reply::Text(
                    upcoming
                        .iter()
                        .map(|record| record.to_string())
                        .collect::<Vec<_>>()
                        .join("\n"),
                ))
            }
            Command::Exit => Ok(Reply::Exit),
        }
    }

    // Arguments are validated before the record is created, so a bad phone
    // or birthday never leaves an empty contact behind.
    fn add_contact(
        &self,
        directory: &mut Directory,
        name: &str,
        phone: &str,
        birthday: Option<&str>,
    ) -> CommandResult<Reply> {
        let phone = PhoneNumber::new(phone)?;
        let birthday = birthday.map(Birthday::parse).transpose()?;

        let (record, outcome) = directory.upsert(name)?;
        record.add_phone(phone);
        if let Some(birthday) = birthday {
            record.set_birthday(birthday);
        }

        Ok(match outcome {
            Upsert::Added => Reply::text("Contact added."),
            Upsert::Updated => Reply::text("Contact updated."),
        })
    }

    fn require<'d>(&self, directory: &'d Directory, name: &str) -> CommandResult<&'d ContactRecord> {
        directory
            .find(name)
            .ok_or_else(|| self.not_found(directory, name))
    }

    /// Apply `f` to the contact called `name`.
    fn update<T>(
        &self,
        directory: &mut Directory,
        name: &str,
        f: impl FnOnce(&mut ContactRecord) -> CommandResult<T>,
    ) -> CommandResult<T> {
        match directory.find_mut(name) {
            Some(record) => f(record),
            None => Err(self.not_found(directory, name)),
        }
    }

    fn not_found(&self, directory: &Directory, name: &str) -> CommandError {
        let suggestions = self
            .matcher
            .suggest(
                name,
                directory.names(),
                self.max_suggestions,
                self.suggestion_threshold,
            )
            .into_iter()
            .map(|s| s.name)
            .collect();

        CommandError::NotFound {
            name: name.to_string(),
            suggestions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ValidationError;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
    }

    fn run(handler: &CommandHandler, directory: &mut Directory, line: &str) -> CommandResult<Reply> {
        let command = Command::parse(line)?.expect("non-blank line");
        handler.execute(command, directory, today())
    }

    fn text(reply: CommandResult<Reply>) -> String {
        match reply {
            Ok(Reply::Text(text)) => text,
            other => panic!("Expected text reply, got: {:?}", other),
        }
    }

    fn setup() -> (CommandHandler, Directory) {
        (CommandHandler::new(&Config::default()), Directory::new())
    }

    #[test]
    fn test_hello_and_exit() {
        let (handler, mut directory) = setup();
        assert_eq!(text(run(&handler, &mut directory, "hello")), "How can I help you?");
        assert_eq!(run(&handler, &mut directory, "exit"), Ok(Reply::Exit));
    }

    #[test]
    fn test_add_then_update() {
        let (handler, mut directory) = setup();
        assert_eq!(
            text(run(&handler, &mut directory, "add Ann 1111111111")),
            "Contact added."
        );
        assert_eq!(
            text(run(&handler, &mut directory, "add Ann 2222222222 05.01.1990")),
            "Contact updated."
        );

        let ann = directory.find("Ann").unwrap();
        assert_eq!(ann.phones_display(), "1111111111, 2222222222");
        assert_eq!(ann.birthday().unwrap().to_string(), "05.01.1990");
    }

    #[test]
    fn test_add_with_bad_phone_creates_nothing() {
        let (handler, mut directory) = setup();
        let result = run(&handler, &mut directory, "add Ann 12345");
        assert_eq!(
            result,
            Err(CommandError::Validation(ValidationError::InvalidPhone(
                "12345".to_string()
            )))
        );
        assert!(directory.is_empty());
    }

    #[test]
    fn test_add_with_bad_birthday_creates_nothing() {
        let (handler, mut directory) = setup();
        let result = run(&handler, &mut directory, "add Ann 1111111111 31.02.2024");
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert!(directory.is_empty());
    }

    #[test]
    fn test_change_phone() {
        let (handler, mut directory) = setup();
        run(&handler, &mut directory, "add Ann 1111111111").unwrap();

        assert_eq!(
            text(run(&handler, &mut directory, "change Ann 1111111111 3333333333")),
            "Contact Ann updated."
        );
        assert_eq!(
            text(run(&handler, &mut directory, "phone Ann")),
            "Ann: 3333333333"
        );
    }

    #[test]
    fn test_change_with_invalid_new_phone_drops_old() {
        let (handler, mut directory) = setup();
        run(&handler, &mut directory, "add Ann 1111111111").unwrap();

        let result = run(&handler, &mut directory, "change Ann 1111111111 bad");
        assert!(matches!(result, Err(CommandError::Validation(_))));
        assert!(directory.find("Ann").unwrap().phones().is_empty());
    }

    #[test]
    fn test_unknown_contact_suggests_names() {
        let (handler, mut directory) = setup();
        run(&handler, &mut directory, "add Anna 1111111111").unwrap();
        run(&handler, &mut directory, "add Bob 2222222222").unwrap();

        match run(&handler, &mut directory, "phone Ann") {
            Err(CommandError::NotFound { name, suggestions }) => {
                assert_eq!(name, "Ann");
                assert_eq!(suggestions, vec!["Anna".to_string()]);
            }
            other => panic!("Expected NotFound error, got: {:?}", other),
        }

        let result = run(&handler, &mut directory, "change Zed 1111111111 2222222222");
        assert_eq!(
            result,
            Err(CommandError::NotFound {
                name: "Zed".to_string(),
                suggestions: vec![],
            })
        );
    }

    #[test]
    fn test_updates_on_unknown_contact_suggest_names() {
        let (handler, mut directory) = setup();
        run(&handler, &mut directory, "add Anna 1111111111").unwrap();

        for line in ["change Ann 1111111111 2222222222", "add-birthday Ann 05.01.1990"] {
            assert_eq!(
                run(&handler, &mut directory, line),
                Err(CommandError::NotFound {
                    name: "Ann".to_string(),
                    suggestions: vec!["Anna".to_string()],
                })
            );
        }
        assert_eq!(directory.find("Anna").unwrap().phones_display(), "1111111111");
        assert!(directory.find("Anna").unwrap().birthday().is_none());
    }

    #[test]
    fn test_birthday_commands() {
        let (handler, mut directory) = setup();
        run(&handler, &mut directory, "add Ann 1111111111").unwrap();

        assert_eq!(
            run(&handler, &mut directory, "show-birthday Ann"),
            Err(CommandError::NoBirthday("Ann".to_string()))
        );
        assert_eq!(
            text(run(&handler, &mut directory, "add-birthday Ann 05.01.1990")),
            "Birthday added for Ann."
        );
        assert_eq!(
            text(run(&handler, &mut directory, "show-birthday Ann")),
            "Ann's birthday is 05.01.1990."
        );
        assert!(run(&handler, &mut directory, "add-birthday Bob 05.01.1990").is_err());
    }

    #[test]
    fn test_add_birthday_validates_before_lookup() {
        let (handler, mut directory) = setup();
        let result = run(&handler, &mut directory, "add-birthday Nobody 1990-01-05");
        assert!(matches!(result, Err(CommandError::Validation(_))));
    }

    #[test]
    fn test_all_and_birthdays() {
        let (handler, mut directory) = setup();
        assert_eq!(text(run(&handler, &mut directory, "all")), "No contacts saved.");
        assert_eq!(
            text(run(&handler, &mut directory, "birthdays")),
            "No upcoming birthdays."
        );

        run(&handler, &mut directory, "add Ann 1111111111 05.01.1990").unwrap();
        run(&handler, &mut directory, "add Bob 2222222222 25.12.1990").unwrap();

        assert_eq!(
            text(run(&handler, &mut directory, "all")),
            "Ann: Phones: [1111111111], Birthday: 05.01.1990\n\
             Bob: Phones: [2222222222], Birthday: 25.12.1990"
        );
        assert_eq!(
            text(run(&handler, &mut directory, "birthdays")),
            "Ann: Phones: [1111111111], Birthday: 05.01.1990"
        );
    }

    #[test]
    fn test_birthday_window_comes_from_config() {
        let config = Config {
            birthday_window_days: 365,
            ..Config::default()
        };
        let handler = CommandHandler::new(&config);
        let mut directory = Directory::new();
        run(&handler, &mut directory, "add Ann 1111111111 05.01.1990").unwrap();
        run(&handler, &mut directory, "add Bob 2222222222 25.12.1990").unwrap();

        let reply = text(run(&handler, &mut directory, "birthdays"));
        assert_eq!(reply.lines().count(), 2);
    }
}
