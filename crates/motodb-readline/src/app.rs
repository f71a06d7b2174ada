//! Applies parsed commands to the session.

use colored::Colorize;
use motodb_core::Session;
use motodb_core::assistant::AssistantGateway;
use motodb_core::comparison::{MAX_SELECTION, ToggleOutcome};
use motodb_core::guide::deployment_guide;
use motodb_core::view::{Destination, Screen, ViewAction};

use crate::command::Command;
use crate::render;

/// Whether the REPL keeps reading input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// REPL state: the session plus the advisor backend.
pub struct App {
    session: Session,
    gateway: Box<dyn AssistantGateway>,
}

impl App {
    pub fn new(session: Session, gateway: Box<dyn AssistantGateway>) -> Self {
        Self { session, gateway }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// The list screen shown at startup.
    pub fn welcome(&self) -> String {
        self.show_list()
    }

    /// Runs one command and appends its output to `out`.
    pub async fn execute(&mut self, command: Command, out: &mut Vec<String>) -> Flow {
        match command {
            Command::Quit => return Flow::Quit,
            Command::Help => out.push(render::help()),
            Command::List => {
                self.navigate(Destination::List);
                out.push(self.show_list());
            }
            Command::Back => {
                self.dispatch(ViewAction::Back, out);
                out.push(self.show_list());
            }
            Command::Search(text) => {
                self.session.set_search(text);
                self.navigate(Destination::List);
                out.push(self.show_list());
            }
            Command::Category(filter) => {
                self.session.set_category(filter);
                self.navigate(Destination::List);
                out.push(self.show_list());
            }
            Command::Categories => out.push(render::categories(
                self.session.query().category,
                self.session.catalog(),
            )),
            Command::Open(id) => {
                if self.dispatch(ViewAction::OpenProduct(id), out) {
                    out.push(self.show_detail());
                }
            }
            Command::Add(id) => self.toggle(id, out),
            Command::Compare => {
                self.navigate(Destination::Compare);
                out.push(self.show_compare());
            }
            Command::Remove(id) => {
                if self.session.selection().contains(&id) {
                    self.toggle(Some(id), out);
                } else {
                    out.push(format!("'{id}' is not in the comparison.").yellow().to_string());
                }
            }
            Command::Clear => {
                self.session.clear_comparison();
                out.push("Comparison cleared.".bright_black().to_string());
                if self.session.screen() == Screen::Compare {
                    out.push(self.show_compare());
                }
            }
            Command::Chat => {
                self.navigate(Destination::Assistant);
                out.push(render::header(Screen::Assistant));
                out.push(render::chat_history(self.session.assistant().history()));
            }
            Command::Ask(text) => {
                if self.session.screen() != Screen::Assistant {
                    self.navigate(Destination::Assistant);
                    out.push(render::header(Screen::Assistant));
                }
                self.ask(&text, out).await;
            }
            Command::Guide => {
                self.navigate(Destination::Guide);
                out.push(render::header(Screen::Guide));
                out.push(render::guide(deployment_guide()));
            }
        }

        if let Some(count) = self.session.compare_badge() {
            out.push(render::badge(count));
        }
        Flow::Continue
    }

    async fn ask(&mut self, text: &str, out: &mut Vec<String>) {
        let outcome = self
            .session
            .ask(self.gateway.as_ref(), text)
            .await
            .map(|_| ());
        match outcome {
            Ok(()) => {
                let entries = self.session.assistant().history().entries();
                // the question and its answer
                let start = entries.len().saturating_sub(2);
                out.extend(entries[start..].iter().map(render::chat_entry));
            }
            Err(rejected) => out.push(rejected.to_string().yellow().to_string()),
        }
    }

    fn toggle(&mut self, id: Option<String>, out: &mut Vec<String>) {
        let Some(id) = id.or_else(|| self.session.selected_product().map(|p| p.id.clone())) else {
            out.push(
                "Open a model first, or give an id: add <id>"
                    .yellow()
                    .to_string(),
            );
            return;
        };

        match self.session.toggle_compare(&id) {
            Ok(ToggleOutcome::Added) => out.push(
                format!(
                    "Added '{}' to the comparison ({}/{}).",
                    id,
                    self.session.selection().len(),
                    MAX_SELECTION
                )
                .green()
                .to_string(),
            ),
            Ok(ToggleOutcome::Removed) => {
                out.push(format!("Removed '{id}' from the comparison.").bright_black().to_string())
            }
            Ok(ToggleOutcome::Full) => out.push(
                format!("The comparison already holds {MAX_SELECTION} models. Remove one first.")
                    .yellow()
                    .to_string(),
            ),
            Err(e) => out.push(e.to_string().red().to_string()),
        }

        if self.session.screen() == Screen::Compare {
            out.push(self.show_compare());
        }
    }

    fn navigate(&mut self, destination: Destination) {
        self.session.navigate(destination);
    }

    /// Returns whether the action was accepted.
    fn dispatch(&mut self, action: ViewAction, out: &mut Vec<String>) -> bool {
        match self.session.dispatch(action) {
            Ok(_) => true,
            Err(e) => {
                out.push(e.to_string().red().to_string());
                false
            }
        }
    }

    fn show_list(&self) -> String {
        format!(
            "{}\n{}",
            render::header(Screen::List),
            render::product_list(&self.session.visible_products(), self.session.query())
        )
    }

    fn show_detail(&self) -> String {
        match self.session.selected_product() {
            Some(product) => format!(
                "{}\n{}",
                render::header(Screen::Detail),
                render::product_detail(product, self.session.selection().contains(&product.id))
            ),
            None => render::header(Screen::Detail),
        }
    }

    fn show_compare(&self) -> String {
        format!(
            "{}\n{}",
            render::header(Screen::Compare),
            render::comparison(&self.session.comparison())
        )
    }
}
