//! REPL command parsing.

use motodb_core::filter::CategoryFilter;
use motodb_core::view::Screen;
use thiserror::Error;

/// Words recognised as commands, used for completion and hints.
pub const COMMAND_WORDS: &[&str] = &[
    "list",
    "back",
    "search",
    "category",
    "categories",
    "open",
    "add",
    "compare",
    "remove",
    "clear",
    "ask",
    "chat",
    "guide",
    "help",
    "quit",
    "exit",
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    List,
    Back,
    /// Empty text clears the search.
    Search(String),
    Category(CategoryFilter),
    Categories,
    Open(String),
    /// Without an id, the product on the detail screen.
    Add(Option<String>),
    Compare,
    Remove(String),
    Clear,
    Ask(String),
    Chat,
    Guide,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown command '{0}'. Type 'help' for the list of commands.")]
    UnknownCommand(String),

    #[error("Usage: {0}")]
    MissingArgument(&'static str),

    #[error("Unknown category '{0}'. Type 'categories' to see the options.")]
    InvalidCategory(String),
}

/// Parses one input line.
///
/// On the advisor screen a line that does not start with a command word is
/// a question. Blank lines yield `Ok(None)`.
pub fn parse(line: &str, screen: Screen) -> Result<Option<Command>, ParseError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }

    let (word, rest) = match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    };
    let keyword = word.to_ascii_lowercase();

    let command = match keyword.as_str() {
        "list" => Command::List,
        "back" => Command::Back,
        "search" => Command::Search(rest.to_string()),
        "category" => {
            if rest.is_empty() {
                return Err(ParseError::MissingArgument(
                    "category <all|scooter|sport|touring|retro|electric>",
                ));
            }
            let filter = rest
                .parse::<CategoryFilter>()
                .map_err(|_| ParseError::InvalidCategory(rest.to_string()))?;
            Command::Category(filter)
        }
        "categories" => Command::Categories,
        "open" => Command::Open(required(rest, "open <id>")?),
        "add" => Command::Add((!rest.is_empty()).then(|| rest.to_string())),
        "compare" => Command::Compare,
        "remove" => Command::Remove(required(rest, "remove <id>")?),
        "clear" => Command::Clear,
        "ask" if rest.is_empty() => Command::Chat,
        "ask" => Command::Ask(rest.to_string()),
        "chat" => Command::Chat,
        "guide" => Command::Guide,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        _ if screen == Screen::Assistant => Command::Ask(line.to_string()),
        _ => return Err(ParseError::UnknownCommand(word.to_string())),
    };
    Ok(Some(command))
}

fn required(rest: &str, usage: &'static str) -> Result<String, ParseError> {
    if rest.is_empty() {
        Err(ParseError::MissingArgument(usage))
    } else {
        Ok(rest.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motodb_core::catalog::Category;

    fn parse_on_list(line: &str) -> Result<Option<Command>, ParseError> {
        parse(line, Screen::List)
    }

    #[test]
    fn test_blank_line_is_nothing() {
        assert_eq!(parse_on_list("   "), Ok(None));
    }

    #[test]
    fn test_search_keeps_inner_spaces_and_allows_clearing() {
        assert_eq!(
            parse_on_list("search  xciting s "),
            Ok(Some(Command::Search("xciting s".into())))
        );
        assert_eq!(parse_on_list("search"), Ok(Some(Command::Search(String::new()))));
    }

    #[test]
    fn test_category_argument() {
        assert_eq!(
            parse_on_list("category Touring"),
            Ok(Some(Command::Category(CategoryFilter::Only(Category::Touring))))
        );
        assert_eq!(
            parse_on_list("category all"),
            Ok(Some(Command::Category(CategoryFilter::All)))
        );
        assert_eq!(
            parse_on_list("category chopper"),
            Err(ParseError::InvalidCategory("chopper".into()))
        );
        assert!(matches!(
            parse_on_list("category"),
            Err(ParseError::MissingArgument(_))
        ));
    }

    #[test]
    fn test_add_with_and_without_id() {
        assert_eq!(parse_on_list("add"), Ok(Some(Command::Add(None))));
        assert_eq!(
            parse_on_list("add krv-180"),
            Ok(Some(Command::Add(Some("krv-180".into()))))
        );
    }

    #[test]
    fn test_open_and_remove_need_an_id() {
        assert!(matches!(parse_on_list("open"), Err(ParseError::MissingArgument(_))));
        assert!(matches!(parse_on_list("remove"), Err(ParseError::MissingArgument(_))));
        assert_eq!(
            parse_on_list("OPEN ak-550"),
            Ok(Some(Command::Open("ak-550".into())))
        );
    }

    #[test]
    fn test_ask_without_text_opens_chat() {
        assert_eq!(parse_on_list("ask"), Ok(Some(Command::Chat)));
        assert_eq!(
            parse_on_list("ask which one for touring?"),
            Ok(Some(Command::Ask("which one for touring?".into())))
        );
    }

    #[test]
    fn test_free_text_is_a_question_only_on_assistant_screen() {
        assert_eq!(
            parse("Is the F9 good in rain?", Screen::Assistant),
            Ok(Some(Command::Ask("Is the F9 good in rain?".into())))
        );
        assert_eq!(
            parse_on_list("Is the F9 good in rain?"),
            Err(ParseError::UnknownCommand("Is".into()))
        );
        // command words still win on the advisor screen
        assert_eq!(parse("compare", Screen::Assistant), Ok(Some(Command::Compare)));
    }

    #[test]
    fn test_quit_aliases() {
        assert_eq!(parse_on_list("quit"), Ok(Some(Command::Quit)));
        assert_eq!(parse_on_list("exit"), Ok(Some(Command::Quit)));
    }
}
