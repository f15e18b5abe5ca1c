use chrono::{DateTime, Utc};
use colored::Colorize;
use libranet::commands::{CmdMessage, MessageLevel, ReturnReceipt};
use libranet::config::LibraConfig;
use libranet::error::LibraError;
use libranet::model::{ItemView, ReturnOutcome};
use std::io::{self, Write};
use timeago::Formatter;
use unicode_width::UnicodeWidthStr;

const RULE: &str = "======================================";

pub(super) fn render_banner(w: &mut impl Write) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "{}", RULE)?;
    writeln!(w, "{}", "      Welcome to LibraNet      ".bold())?;
    writeln!(w, " Your Digital Library Assistant")?;
    writeln!(w, "{}", RULE)
}

pub(super) fn render_menu(w: &mut impl Write, entries: &[(u8, &str)]) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "--- MENU ---")?;
    for (number, label) in entries {
        writeln!(w, "{}. {}", number, label)?;
    }
    Ok(())
}

pub(super) fn render_prompt(w: &mut impl Write, prompt: &str) -> io::Result<()> {
    write!(w, "{}: ", prompt)?;
    w.flush()
}

pub(super) fn render_messages(w: &mut impl Write, messages: &[CmdMessage]) -> io::Result<()> {
    for message in messages {
        match message.level {
            MessageLevel::Info => writeln!(w, "{}", message.content)?,
            MessageLevel::Success => writeln!(w, "{}", message.content.green())?,
        }
    }
    Ok(())
}

pub(super) fn render_error(w: &mut impl Write, error: &LibraError) -> io::Result<()> {
    writeln!(w, "{}", format!("Error: {}", error).red())
}

pub(super) fn render_receipt(
    w: &mut impl Write,
    receipt: &ReturnReceipt,
    config: &LibraConfig,
) -> io::Result<()> {
    match receipt.outcome {
        ReturnOutcome::Returned { fine } => {
            let line = format!(
                "{} returned. Fine: {}",
                receipt.title,
                config.format_amount(fine)
            );
            writeln!(w, "{}", line.green())
        }
        ReturnOutcome::NotBorrowed => {
            writeln!(w, "{}", format!("{} was not borrowed.", receipt.title).yellow())
        }
    }
}

pub(super) fn render_items(
    w: &mut impl Write,
    items: &[ItemView],
    total_fines: Option<f64>,
    config: &LibraConfig,
) -> io::Result<()> {
    writeln!(w)?;
    writeln!(w, "--- Library Items ---")?;
    if items.is_empty() {
        writeln!(w, "No items in the catalogue.")?;
        return Ok(());
    }

    let kind_width = column_width(items, |v| kind_tag(v).width());
    let title_width = column_width(items, |v| v.title.width());
    let author_width = column_width(items, |v| v.author.width());

    for view in items {
        let kind = pad_to_width(&kind_tag(view), kind_width);
        let availability = if view.available {
            "true".green()
        } else {
            "false".yellow()
        };
        let fine = config.format_amount(view.fine);
        let fine = if view.fine > 0.0 {
            fine.red()
        } else {
            fine.normal()
        };

        write!(
            w,
            "{} ID: {} | Title: {} | Author: {} | {} | Available: {} | Fine: {}",
            kind.bold(),
            view.id,
            pad_to_width(&view.title, title_width),
            pad_to_width(&view.author, author_width),
            view.details,
            availability,
            fine
        )?;
        if let Some(since) = view.borrowed_at {
            write!(w, " | Borrowed: {}", format_time_ago(since).dimmed())?;
        }
        writeln!(w)?;
    }

    if let Some(total) = total_fines.filter(|t| *t > 0.0) {
        writeln!(w, "Total fines on record: {}", config.format_amount(total))?;
    }
    Ok(())
}

fn kind_tag(view: &ItemView) -> String {
    format!("[{}]", view.kind.label())
}

fn column_width(items: &[ItemView], measure: impl Fn(&ItemView) -> usize) -> usize {
    items.iter().map(measure).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    Formatter::new().convert(duration.to_std().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use libranet::model::{ItemDetails, ItemId};

    fn plain() -> LibraConfig {
        colored::control::set_override(false);
        LibraConfig {
            color: false,
            ..LibraConfig::default()
        }
    }

    fn rendered(f: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> String {
        let mut buf = Vec::new();
        f(&mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    fn view(id: u32, title: &str, details: ItemDetails, fine: f64) -> ItemView {
        ItemView {
            id: ItemId(id),
            kind: details.kind(),
            title: title.to_string(),
            author: "Someone".to_string(),
            details,
            available: true,
            borrowed_at: None,
            fine,
        }
    }

    #[test]
    fn item_rows_carry_every_field() {
        let config = plain();
        let items = vec![
            view(1, "Java Basics", ItemDetails::Book { page_count: 300 }, 0.0),
            view(2, "Learn DSA", ItemDetails::AudioBook { duration_minutes: 120.0 }, 20.0),
        ];
        let out = rendered(|w| render_items(w, &items, Some(20.0), &config));

        assert!(out.contains("[Book]"));
        assert!(out.contains("ID: 1"));
        assert!(out.contains("Pages: 300"));
        assert!(out.contains("[Audiobook] ID: 2"));
        assert!(out.contains("Duration: 120.0 mins"));
        assert!(out.contains("Fine: Rs.20.0"));
        assert!(out.contains("Total fines on record: Rs.20.0"));
    }

    #[test]
    fn columns_are_aligned() {
        let config = plain();
        let items = vec![
            view(1, "A", ItemDetails::Book { page_count: 1 }, 0.0),
            view(2, "Much Longer", ItemDetails::Book { page_count: 2 }, 0.0),
        ];
        let out = rendered(|w| render_items(w, &items, None, &config));
        let rows: Vec<&str> = out.lines().filter(|l| l.contains("ID:")).collect();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].find("| Author"), rows[1].find("| Author"));
    }

    #[test]
    fn borrowed_items_show_loan_start() {
        let config = plain();
        let mut on_loan = view(3, "Tech Today", ItemDetails::EMagazine { issue_number: 45 }, 0.0);
        on_loan.available = false;
        on_loan.borrowed_at = Some(Utc::now());
        let out = rendered(|w| render_items(w, &[on_loan], Some(0.0), &config));

        assert!(out.contains("Available: false"));
        assert!(out.contains("Borrowed:"));
        assert!(!out.contains("Total fines"));
    }

    #[test]
    fn receipts() {
        let config = plain();
        let returned = ReturnReceipt {
            title: "Learn DSA".into(),
            outcome: ReturnOutcome::Returned { fine: 20.0 },
            fine_on_record: 20.0,
        };
        let out = rendered(|w| render_receipt(w, &returned, &config));
        assert!(out.contains("Learn DSA returned. Fine: Rs.20.0"));

        let idle = ReturnReceipt {
            outcome: ReturnOutcome::NotBorrowed,
            ..returned
        };
        let out = rendered(|w| render_receipt(w, &idle, &config));
        assert!(out.contains("Learn DSA was not borrowed."));
    }

    #[test]
    fn currency_comes_from_config() {
        colored::control::set_override(false);
        let config = LibraConfig {
            currency: "$".into(),
            color: false,
        };
        let items = vec![view(1, "X", ItemDetails::Book { page_count: 1 }, 5.0)];
        let out = rendered(|w| render_items(w, &items, None, &config));
        assert!(out.contains("Fine: $5.0"));
    }

    #[test]
    fn errors_are_prefixed() {
        plain();
        let out = rendered(|w| render_error(w, &LibraError::NotFound(ItemId(99))));
        assert!(out.contains("Error: Item not found: 99"));
    }
}
