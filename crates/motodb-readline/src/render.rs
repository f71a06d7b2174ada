//! Terminal rendering of the screens.
//!
//! Every function returns the text to print so the app loop decides where it
//! goes.

use colored::Colorize;
use motodb_core::assistant::{ChatEntry, ChatHistory, Speaker};
use motodb_core::catalog::{CatalogStore, Product};
use motodb_core::comparison::{Comparison, MAX_SELECTION};
use motodb_core::filter::{CatalogQuery, CategoryFilter};
use motodb_core::guide::GuideSection;
use motodb_core::view::{Destination, Screen};

const LABEL_WIDTH: usize = 24;
const COLUMN_WIDTH: usize = 18;

/// Screen title plus the navigation tabs, the active one highlighted.
pub fn header(screen: Screen) -> String {
    let active = screen.nav_tab();
    let tabs: Vec<String> = Destination::TABS
        .iter()
        .map(|&tab| {
            if tab == active {
                format!("[{}]", tab.label()).bright_cyan().bold().to_string()
            } else {
                tab.label().bright_black().to_string()
            }
        })
        .collect();
    format!(
        "{}  {}",
        format!("== {} ==", screen.title()).bright_magenta().bold(),
        tabs.join(" ")
    )
}

pub fn product_list(products: &[&Product], query: &CatalogQuery) -> String {
    let mut lines = Vec::new();

    let mut filter = format!("Category: {}", query.category);
    if !query.text.is_empty() {
        filter.push_str(&format!("  Search: \"{}\"", query.text));
    }
    lines.push(filter.bright_black().to_string());

    if products.is_empty() {
        lines.push("No models match the current filter.".yellow().to_string());
        return lines.join("\n");
    }

    for product in products {
        lines.push(format!(
            "  {:<16} {:<22} {:<10} {:>10}  {}",
            product.id.bright_white(),
            product.name,
            product.category.label(),
            format!("¥{}", product.price),
            product.specs.displacement.bright_black()
        ));
    }
    lines.push(
        format!("{} model(s). 'open <id>' for details.", products.len())
            .bright_black()
            .to_string(),
    );
    lines.join("\n")
}

pub fn categories(current: CategoryFilter, catalog: &CatalogStore) -> String {
    CategoryFilter::options()
        .map(|option| {
            let count = catalog.iter().filter(|p| option.admits(p.category)).count();
            let keyword = match option {
                CategoryFilter::All => "all",
                CategoryFilter::Only(category) => category.keyword(),
            };
            let line = format!("  {:<10} {:<10} ({})", keyword, option.label(), count);
            if option == current {
                line.bright_cyan().to_string()
            } else {
                line
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn product_detail(product: &Product, in_comparison: bool) -> String {
    let mut lines = vec![
        format!("{} ({})", product.name.bright_white().bold(), product.series),
        format!("{}  ¥{}", product.category.label(), product.price),
        product.description.clone(),
        String::new(),
    ];
    for (field, value) in product.specs.entries() {
        lines.push(format!("  {:<LABEL_WIDTH$} {}", field.label(), value));
    }
    lines.push(String::new());
    let hint = if in_comparison {
        "In comparison. 'add' again to remove it."
    } else {
        "'add' to put this model in the comparison."
    };
    lines.push(hint.bright_black().to_string());
    lines.join("\n")
}

/// Side-by-side table; divergent rows are marked with `*`.
pub fn comparison(comparison: &Comparison<'_>) -> String {
    if comparison.is_empty() {
        return format!(
            "{}\n{}",
            "No models selected.".yellow(),
            format!("Use 'add <id>' to compare up to {MAX_SELECTION} models.").bright_black()
        );
    }

    let mut lines = Vec::new();
    let mut head = format!("  {:<LABEL_WIDTH$}", "");
    for product in &comparison.products {
        head.push_str(&format!(" {:<COLUMN_WIDTH$}", fit(&product.name)));
    }
    lines.push(head.bold().to_string());

    let mut prices = format!("  {:<LABEL_WIDTH$}", "Price");
    for product in &comparison.products {
        prices.push_str(&format!(" {:<COLUMN_WIDTH$}", fit(&format!("¥{}", product.price))));
    }
    lines.push(prices);

    for row in &comparison.rows {
        let mut line = format!("{} {:<LABEL_WIDTH$}", if row.is_divergent { "*" } else { " " }, row.label());
        for value in &row.values {
            line.push_str(&format!(" {:<COLUMN_WIDTH$}", fit(value)));
        }
        lines.push(if row.is_divergent {
            line.yellow().to_string()
        } else {
            line
        });
    }

    if comparison.open_slots() > 0 {
        lines.push(
            format!(
                "+ {} slot(s) free. 'add <id>' to compare more.",
                comparison.open_slots()
            )
            .bright_black()
            .to_string(),
        );
    }
    lines.push("* values differ".bright_black().to_string());
    lines.join("\n")
}

pub fn chat_entry(entry: &ChatEntry) -> String {
    match entry.speaker {
        Speaker::User => format!("{} {}", "you>".green().bold(), entry.text.green()),
        Speaker::Bot => entry
            .text
            .lines()
            .enumerate()
            .map(|(i, line)| {
                let prefix = if i == 0 { "advisor>" } else { "        " };
                format!("{} {}", prefix.bright_magenta().bold(), line.bright_blue())
            })
            .collect::<Vec<_>>()
            .join("\n"),
    }
}

pub fn chat_history(history: &ChatHistory) -> String {
    let mut lines: Vec<String> = history.entries().iter().map(chat_entry).collect();
    lines.push(
        "Type your question, or any command to leave."
            .bright_black()
            .to_string(),
    );
    lines.join("\n")
}

pub fn guide(sections: &[GuideSection]) -> String {
    let mut lines = Vec::new();
    for section in sections {
        lines.push(section.title.bright_white().bold().to_string());
        for line in section.lines {
            lines.push(format!("  {line}"));
        }
        lines.push(String::new());
    }
    lines.join("\n")
}

/// Floating compare shortcut.
pub fn badge(count: usize) -> String {
    format!("[compare: {count}]").on_blue().white().bold().to_string()
}

pub fn help() -> String {
    const HELP: &[(&str, &str)] = &[
        ("list | back", "show the model list"),
        ("search [text]", "filter by name or series (no text clears)"),
        ("category <name>", "all, scooter, sport, touring, retro, electric"),
        ("categories", "list categories with model counts"),
        ("open <id>", "show a model's full specs"),
        ("add [id]", "add or remove a model from the comparison"),
        ("compare", "compare the selected models"),
        ("remove <id>", "remove a model from the comparison"),
        ("clear", "empty the comparison"),
        ("ask <question>", "ask the advisor"),
        ("chat", "show the advisor conversation"),
        ("guide", "how to publish this catalog"),
        ("quit | exit", "leave"),
    ];
    HELP.iter()
        .map(|(usage, text)| format!("  {:<18} {}", usage.bright_cyan(), text))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Truncates to the comparison column width.
fn fit(value: &str) -> String {
    if value.chars().count() <= COLUMN_WIDTH {
        value.to_string()
    } else {
        let mut cut: String = value.chars().take(COLUMN_WIDTH - 1).collect();
        cut.push('~');
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use motodb_core::catalog::CatalogSource;
    use motodb_core::comparison::Selection;
    use motodb_core::guide::deployment_guide;
    use motodb_infrastructure::JsonCatalogSource;

    fn catalog() -> CatalogStore {
        CatalogStore::new(JsonCatalogSource::embedded().load().unwrap()).unwrap()
    }

    #[test]
    fn test_empty_comparison_shows_placeholder() {
        let catalog = catalog();
        let text = comparison(&Comparison::build(&catalog, &Selection::new()));
        assert!(text.contains("No models selected."));
    }

    #[test]
    fn test_comparison_marks_divergent_rows_and_free_slots() {
        let catalog = catalog();
        let selection = Selection::from_ids(["like-150", "krider-400"]);
        let text = comparison(&Comparison::build(&catalog, &selection));

        assert!(text.contains("Like 150i ABS"));
        assert!(text.contains("Krider 400"));
        assert!(text.lines().any(|line| line.contains("* Displacement")));
        assert!(text.contains("1 slot(s) free"));
    }

    #[test]
    fn test_full_comparison_has_no_free_slot_line() {
        let catalog = catalog();
        let selection = Selection::from_ids(["like-150", "krider-400", "ak-550"]);
        let text = comparison(&Comparison::build(&catalog, &selection));
        assert!(!text.contains("slot(s) free"));
    }

    #[test]
    fn test_detail_lists_every_spec() {
        let catalog = catalog();
        let product = catalog.get("ak-550").unwrap();
        let text = product_detail(product, false);
        for (field, _) in product.specs.entries() {
            assert!(text.contains(field.label()));
        }
    }

    #[test]
    fn test_empty_list_message() {
        let text = product_list(&[], &CatalogQuery::new("zzz", CategoryFilter::All));
        assert!(text.contains("No models match"));
    }

    #[test]
    fn test_guide_has_every_section() {
        let text = guide(deployment_guide());
        for section in deployment_guide() {
            assert!(text.contains(section.title));
        }
    }

    #[test]
    fn test_fit_truncates_long_values() {
        assert_eq!(fit("short"), "short");
        let long = fit("Parallel twin, 4-stroke, DOHC 8-valve");
        assert_eq!(long.chars().count(), COLUMN_WIDTH);
        assert!(long.ends_with('~'));
    }
}
