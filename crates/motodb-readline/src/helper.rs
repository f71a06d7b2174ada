//! rustyline helper: completion, hints and highlighting for REPL commands.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use motodb_core::catalog::Category;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMAND_WORDS;

/// Commands whose argument is a product id.
const ID_COMMANDS: &[&str] = &["open", "add", "remove"];

#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    product_ids: Vec<String>,
    categories: Vec<String>,
}

impl CliHelper {
    pub fn new(product_ids: Vec<String>) -> Self {
        let categories = std::iter::once("all")
            .chain(Category::all().map(Category::keyword))
            .map(str::to_string)
            .collect();
        Self {
            commands: COMMAND_WORDS.iter().map(|word| word.to_string()).collect(),
            product_ids,
            categories,
        }
    }

    /// Candidate words for the token ending at the cursor, and where it starts.
    fn candidates<'a>(&'a self, line: &str) -> (usize, Vec<&'a String>) {
        match line.split_once(' ') {
            None => (
                0,
                self.commands.iter().filter(|cmd| cmd.starts_with(line)).collect(),
            ),
            Some((command, arg)) => {
                let pool = if ID_COMMANDS.contains(&command) {
                    &self.product_ids
                } else if command == "category" {
                    &self.categories
                } else {
                    return (0, Vec::new());
                };
                let start = command.len() + 1;
                let arg = arg.trim_start();
                let start = start + (line.len() - start - arg.len());
                (start, pool.iter().filter(|word| word.starts_with(arg)).collect())
            }
        }
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, words) = self.candidates(&line[..pos]);
        let pairs = words
            .into_iter()
            .map(|word| Pair {
                display: word.clone(),
                replacement: word.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or("");
        if line.starts_with(word) && self.commands.iter().any(|cmd| cmd == word) {
            Owned(format!("{}{}", word.bright_cyan(), &line[word.len()..]))
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        if pos < line.len() || line.is_empty() {
            return None;
        }
        let (start, words) = self.candidates(line);
        let typed = &line[start..];
        match words.as_slice() {
            [only] if only.len() > typed.len() => Some(only[typed.len()..].to_string()),
            _ => None,
        }
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CliHelper {
        CliHelper::new(vec!["krv-180".into(), "krider-400".into(), "f9".into()])
    }

    fn words(helper: &CliHelper, line: &str) -> (usize, Vec<String>) {
        let (start, words) = helper.candidates(line);
        (start, words.into_iter().cloned().collect())
    }

    #[test]
    fn test_completes_command_words() {
        let (start, words) = words(&helper(), "cat");
        assert_eq!(start, 0);
        assert_eq!(words, vec!["category", "categories"]);
    }

    #[test]
    fn test_completes_product_ids_after_id_commands() {
        let (start, words) = words(&helper(), "open kr");
        assert_eq!(start, 5);
        assert_eq!(words, vec!["krv-180", "krider-400"]);
    }

    #[test]
    fn test_completes_category_keywords() {
        let (start, words) = words(&helper(), "category  to");
        assert_eq!(start, 10);
        assert_eq!(words, vec!["touring"]);
    }

    #[test]
    fn test_no_completion_for_free_text() {
        let (_, words) = words(&helper(), "ask which one");
        assert!(words.is_empty());
    }
}
