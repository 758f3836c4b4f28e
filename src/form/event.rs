use std::str::FromStr;

use crate::catalog::Category;
use crate::error::CommandError;

/// User interaction with the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormEvent {
    Select { category: Category, value: String },
    Clear(Category),
    Submit,
    Reset,
    ShowOptions(Category),
}

/// One console line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Event(FormEvent),
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  set <category> <value>   pick an option
  clear <category>         unset a field
  options <category>       list the options of a field
  submit                   get a suggestion
  reset                    clear the whole form
  quit
categories: country, space, material, shape, pitch, roof_type, wall_type";

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let Some(verb) = words.next() else {
            return Err(CommandError::Empty);
        };

        let command = match verb.to_ascii_lowercase().as_str() {
            "set" | "select" => {
                let (Some(category), Some(value)) = (words.next(), words.next()) else {
                    return Err(CommandError::MissingArgument {
                        command: "set",
                        expected: "<category> <value>",
                    });
                };
                Command::Event(FormEvent::Select {
                    category: category.parse()?,
                    value: value.to_string(),
                })
            }
            "clear" | "unset" => Command::Event(FormEvent::Clear(category_arg(
                words.next(),
                "clear",
            )?)),
            "options" | "list" => Command::Event(FormEvent::ShowOptions(category_arg(
                words.next(),
                "options",
            )?)),
            "submit" | "send" => Command::Event(FormEvent::Submit),
            "reset" => Command::Event(FormEvent::Reset),
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            other => return Err(CommandError::UnknownCommand(other.to_string())),
        };

        Ok(command)
    }
}

fn category_arg(word: Option<&str>, command: &'static str) -> Result<Category, CommandError> {
    word.ok_or(CommandError::MissingArgument {
        command,
        expected: "<category>",
    })?
    .parse()
}
