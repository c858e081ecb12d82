//! Interactive command parsing
//!
//! A line of input is split on whitespace. The first word, lowercased, picks
//! the command and the following words are its positional arguments. Extra
//! arguments are ignored.

use thiserror::Error;

/// Entries shown by `history` when no count is given
pub const DEFAULT_HISTORY_COUNT: usize = 10;

/// A parsed interactive command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add { name: String, phone: String },
    Change { name: String, old_phone: String, new_phone: String },
    Phone { name: String },
    All,
    AddBirthday { name: String, birthday: String },
    ShowBirthday { name: String },
    Birthdays,
    RemovePhone { name: String, phone: String },
    Delete { name: String },
    History { count: usize },
    Help,
    Exit,
}

/// Why a line could not be turned into a command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Please enter a valid command.")]
    Empty,

    #[error("Invalid command.")]
    Unknown(String),

    #[error("Incomplete information provided. Please provide all necessary details.")]
    MissingArguments,

    #[error("Please enter the correct number of arguments.")]
    BadArgument(String),
}

/// Parse one line of user input
pub fn parse_input(line: &str) -> Result<Command, CommandError> {
    let mut words = line.split_whitespace();
    let Some(command) = words.next() else {
        return Err(CommandError::Empty);
    };
    let args: Vec<&str> = words.collect();

    let command = match command.to_lowercase().as_str() {
        "hello" => Command::Hello,
        "add" => {
            let [name, phone] = take_args::<2>(&args)?;
            Command::Add { name, phone }
        }
        "change" => {
            let [name, old_phone, new_phone] = take_args::<3>(&args)?;
            Command::Change {
                name,
                old_phone,
                new_phone,
            }
        }
        "phone" => {
            let [name] = take_args::<1>(&args)?;
            Command::Phone { name }
        }
        "all" => Command::All,
        "add-birthday" => {
            let [name, birthday] = take_args::<2>(&args)?;
            Command::AddBirthday { name, birthday }
        }
        "show-birthday" => {
            let [name] = take_args::<1>(&args)?;
            Command::ShowBirthday { name }
        }
        "birthdays" => Command::Birthdays,
        "remove-phone" => {
            let [name, phone] = take_args::<2>(&args)?;
            Command::RemovePhone { name, phone }
        }
        "delete" => {
            let [name] = take_args::<1>(&args)?;
            Command::Delete { name }
        }
        "history" => {
            let count = match args.first() {
                Some(raw) => raw
                    .parse()
                    .map_err(|_| CommandError::BadArgument(raw.to_string()))?,
                None => DEFAULT_HISTORY_COUNT,
            };
            Command::History { count }
        }
        "help" => Command::Help,
        "close" | "exit" => Command::Exit,
        other => return Err(CommandError::Unknown(other.to_string())),
    };

    Ok(command)
}

/// The first `N` arguments, owned
fn take_args<const N: usize>(args: &[&str]) -> Result<[String; N], CommandError> {
    if args.len() < N {
        return Err(CommandError::MissingArguments);
    }
    Ok(std::array::from_fn(|i| args[i].to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_commands() {
        assert_eq!(parse_input("hello"), Ok(Command::Hello));
        assert_eq!(parse_input("all"), Ok(Command::All));
        assert_eq!(parse_input("birthdays"), Ok(Command::Birthdays));
        assert_eq!(parse_input("help"), Ok(Command::Help));
        assert_eq!(parse_input("close"), Ok(Command::Exit));
        assert_eq!(parse_input("exit"), Ok(Command::Exit));
    }

    #[test]
    fn test_command_is_case_insensitive_and_trimmed() {
        assert_eq!(parse_input("  HeLLo  "), Ok(Command::Hello));
        assert_eq!(
            parse_input("ADD Ann 1111111111"),
            Ok(Command::Add {
                name: "Ann".into(),
                phone: "1111111111".into()
            })
        );
    }

    #[test]
    fn test_arguments_keep_case() {
        assert_eq!(
            parse_input("phone ann"),
            Ok(Command::Phone { name: "ann".into() })
        );
    }

    #[test]
    fn test_parse_change() {
        assert_eq!(
            parse_input("change Ann 1111111111 2222222222"),
            Ok(Command::Change {
                name: "Ann".into(),
                old_phone: "1111111111".into(),
                new_phone: "2222222222".into(),
            })
        );
    }

    #[test]
    fn test_extra_arguments_ignored() {
        assert_eq!(
            parse_input("add-birthday Ann 14.06.1990 extra words"),
            Ok(Command::AddBirthday {
                name: "Ann".into(),
                birthday: "14.06.1990".into()
            })
        );
    }

    #[test]
    fn test_missing_arguments() {
        assert_eq!(parse_input("add Ann"), Err(CommandError::MissingArguments));
        assert_eq!(
            parse_input("change Ann 1111111111"),
            Err(CommandError::MissingArguments)
        );
        assert_eq!(parse_input("phone"), Err(CommandError::MissingArguments));
        assert_eq!(parse_input("delete"), Err(CommandError::MissingArguments));
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(parse_input(""), Err(CommandError::Empty));
        assert_eq!(parse_input("   "), Err(CommandError::Empty));
        assert_eq!(
            parse_input("dance now"),
            Err(CommandError::Unknown("dance".into()))
        );
    }

    #[test]
    fn test_history_count() {
        assert_eq!(
            parse_input("history"),
            Ok(Command::History {
                count: DEFAULT_HISTORY_COUNT
            })
        );
        assert_eq!(parse_input("history 3"), Ok(Command::History { count: 3 }));
        assert_eq!(
            parse_input("history lots"),
            Err(CommandError::BadArgument("lots".into()))
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(CommandError::Empty.to_string(), "Please enter a valid command.");
        assert_eq!(
            CommandError::Unknown("x".into()).to_string(),
            "Invalid command."
        );
        assert_eq!(
            CommandError::MissingArguments.to_string(),
            "Incomplete information provided. Please provide all necessary details."
        );
    }
}
