//! Line commands typed into the viewer.

use postboard_core::domain::SortKey;
use thiserror::Error;

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Search(String),
    Sort(SortKey),
    /// Set the title input and submit it. `None` submits the current input.
    Add(Option<String>),
    /// Set the title input without submitting.
    Title(String),
    Refresh,
    Login { email: String, password: String },
    Logout,
    TodoAdd(String),
    TodoRemove(usize),
    TodoList,
    Help,
    Quit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("unknown command '{0}', type 'help' for a list")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("{0}")]
    Invalid(String),
}

pub const HELP: &str = "\
commands:
  list                      show the post list
  search <text>             filter by title, content or author (empty clears)
  sort <date|title|user|id> change the sort order
  title <text>              set the new-post title
  add [title]               create a post (uses the title input if omitted)
  refresh                   fetch the post list again
  login <email> <password>  log in
  logout                    log out
  todo add <text>           add a to-do item
  todo rm <index>           remove a to-do item
  todo list                 show the to-do list
  help                      show this help
  quit                      exit";

impl Command {
    /// Parse one input line. Blank lines parse to `List`.
    pub fn parse(line: &str) -> Result<Self, CommandError> {
        let line = line.trim();
        let (verb, rest) = match line.split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (line, ""),
        };

        match verb.to_lowercase().as_str() {
            "" | "list" | "ls" => Ok(Command::List),
            "search" | "/" => Ok(Command::Search(rest.to_string())),
            "sort" => rest
                .parse()
                .map(Command::Sort)
                .map_err(|e: postboard_core::DomainError| CommandError::Invalid(e.to_string())),
            "add" => Ok(Command::Add((!rest.is_empty()).then(|| rest.to_string()))),
            "title" => Ok(Command::Title(rest.to_string())),
            "refresh" | "reload" => Ok(Command::Refresh),
            "login" => {
                let mut parts = rest.split_whitespace();
                match (parts.next(), parts.next(), parts.next()) {
                    (Some(email), Some(password), None) => Ok(Command::Login {
                        email: email.to_string(),
                        password: password.to_string(),
                    }),
                    _ => Err(CommandError::Usage("login <email> <password>")),
                }
            }
            "logout" => Ok(Command::Logout),
            "todo" => Self::parse_todo(rest),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(CommandError::Unknown(other.to_string())),
        }
    }

    fn parse_todo(rest: &str) -> Result<Self, CommandError> {
        let (sub, arg) = match rest.split_once(char::is_whitespace) {
            Some((sub, arg)) => (sub, arg.trim()),
            None => (rest, ""),
        };

        match sub {
            "" | "list" => Ok(Command::TodoList),
            "add" => Ok(Command::TodoAdd(arg.to_string())),
            "rm" | "remove" | "delete" => arg
                .parse()
                .map(Command::TodoRemove)
                .map_err(|_| CommandError::Usage("todo rm <index>")),
            _ => Err(CommandError::Usage("todo <add|rm|list>")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_commands() {
        assert_eq!(Command::parse("").unwrap(), Command::List);
        assert_eq!(Command::parse("  quit ").unwrap(), Command::Quit);
        assert_eq!(Command::parse("refresh").unwrap(), Command::Refresh);
        assert_eq!(
            Command::parse("sort title").unwrap(),
            Command::Sort(SortKey::Title)
        );
    }

    #[test]
    fn test_search_keeps_inner_spaces() {
        assert_eq!(
            Command::parse("search banana bread").unwrap(),
            Command::Search("banana bread".to_string())
        );
        assert_eq!(
            Command::parse("search").unwrap(),
            Command::Search(String::new())
        );
    }

    #[test]
    fn test_add_with_and_without_title() {
        assert_eq!(
            Command::parse("add My post").unwrap(),
            Command::Add(Some("My post".to_string()))
        );
        assert_eq!(Command::parse("add").unwrap(), Command::Add(None));
    }

    #[test]
    fn test_login_needs_two_arguments() {
        assert_eq!(
            Command::parse("login a@b.co pw").unwrap(),
            Command::Login {
                email: "a@b.co".to_string(),
                password: "pw".to_string()
            }
        );
        assert!(matches!(
            Command::parse("login a@b.co"),
            Err(CommandError::Usage(_))
        ));
    }

    #[test]
    fn test_todo_subcommands() {
        assert_eq!(
            Command::parse("todo add buy milk").unwrap(),
            Command::TodoAdd("buy milk".to_string())
        );
        assert_eq!(Command::parse("todo rm 2").unwrap(), Command::TodoRemove(2));
        assert_eq!(Command::parse("todo").unwrap(), Command::TodoList);
        assert!(Command::parse("todo rm two").is_err());
    }

    #[test]
    fn test_bad_input() {
        assert!(matches!(
            Command::parse("dance"),
            Err(CommandError::Unknown(_))
        ));
        assert!(matches!(
            Command::parse("sort newest"),
            Err(CommandError::Invalid(_))
        ));
    }
}
