//! Turning an input line into a typed command.

use crate::error::{CommandError, CommandResult};

pub const ADD_USAGE: &str = "add <name> <phone> [birthday]";
pub const CHANGE_USAGE: &str = "change <name> <old phone> <new phone>";
pub const PHONE_USAGE: &str = "phone <name>";
pub const ADD_BIRTHDAY_USAGE: &str = "add-birthday <name> <DD.MM.YYYY>";
pub const SHOW_BIRTHDAY_USAGE: &str = "show-birthday <name>";

/// A parsed user command with its arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add {
        name: String,
        phone: String,
        birthday: Option<String>,
    },
    Change {
        name: String,
        old_phone: String,
        new_phone: String,
    },
    Phone {
        name: String,
    },
    All,
    AddBirthday {
        name: String,
        birthday: String,
    },
    ShowBirthday {
        name: String,
    },
    Birthdays,
    Exit,
}

impl Command {
    /// Parse a whitespace-separated command line.
    ///
    /// Returns `Ok(None)` for a blank line. The command word is matched
    /// case-insensitively; arguments are kept verbatim and extra ones are
    /// ignored.
    ///
    /// # Errors
    ///
    /// `UnknownCommand` for an unrecognised word, `InvalidArguments` when a
    /// required argument is missing.
    pub fn parse(line: &str) -> CommandResult<Option<Self>> {
        let mut tokens = line.split_whitespace();
        let word = match tokens.next() {
            Some(word) => word.to_lowercase(),
            None => return Ok(None),
        };
        let args: Vec<&str> = tokens.collect();

        let command = match word.as_str() {
            "hello" => Self::Hello,
            "add" => match args.as_slice() {
                [name, phone, rest @ ..] => Self::Add {
                    name: name.to_string(),
                    phone: phone.to_string(),
                    birthday: rest.first().map(|b| b.to_string()),
                },
                _ => return Err(invalid(ADD_USAGE)),
            },
            "change" => match args.as_slice() {
                [name, old_phone, new_phone, ..] => Self::Change {
                    name: name.to_string(),
                    old_phone: old_phone.to_string(),
                    new_phone: new_phone.to_string(),
                },
                _ => return Err(invalid(CHANGE_USAGE)),
            },
            "phone" => match args.as_slice() {
                [name, ..] => Self::Phone {
                    name: name.to_string(),
                },
                _ => return Err(invalid(PHONE_USAGE)),
            },
            "all" => Self::All,
            "add-birthday" => match args.as_slice() {
                [name, birthday, ..] => Self::AddBirthday {
                    name: name.to_string(),
                    birthday: birthday.to_string(),
                },
                _ => return Err(invalid(ADD_BIRTHDAY_USAGE)),
            },
            "show-birthday" => match args.as_slice() {
                [name, ..] => Self::ShowBirthday {
                    name: name.to_string(),
                },
                _ => return Err(invalid(SHOW_BIRTHDAY_USAGE)),
            },
            "birthdays" => Self::Birthdays,
            "close" | "exit" => Self::Exit,
            _ => return Err(CommandError::UnknownCommand(word)),
        };

        Ok(Some(command))
    }
}

fn invalid(usage: &'static str) -> CommandError {
    CommandError::InvalidArguments { usage }
}
