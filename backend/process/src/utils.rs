use std::{fmt::Write, sync::LazyLock};

use bank::{Transaction, VaultEntry};
use dashboard::Snapshot;
use regex::Regex;

static UNDERSCORES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"_").expect("static regex"));
static DISALLOWED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9- ]").expect("static regex"));
static SPACES: LazyLock<Regex> = LazyLock::new(|| Regex::new(r" +").expect("static regex"));

/// Normalizes a category to lowercase words: `"Eating_Out!"` becomes `"eating out"`.
pub fn sanitize(input: &str) -> String {
    let spaced = UNDERSCORES.replace_all(input, " ");
    let cleaned = DISALLOWED.replace_all(&spaced, "");

    SPACES
        .replace_all(cleaned.trim(), " ")
        .into_owned()
        .to_lowercase()
}

/// Rupee amount with thousands separators, e.g. `₹25,000` or `-₹1,234.50`.
pub fn format_amount(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let (whole, fraction) = (cents / 100, cents % 100);

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    if fraction == 0 {
        format!("{sign}₹{grouped}")
    } else {
        format!("{sign}₹{grouped}.{fraction:02}")
    }
}

fn transaction_line(out: &mut String, transaction: &Transaction, sign: &str) {
    let _ = write!(
        out,
        "  {sign}{}  {}  {}",
        format_amount(transaction.amount),
        transaction.date,
        transaction.category
    );
    if let Some(note) = &transaction.note {
        let _ = write!(out, "  ({note})");
    }
    out.push('\n');
}

pub fn render_dashboard(snapshot: &Snapshot) -> String {
    let totals = &snapshot.totals;
    let mut out = String::new();

    let _ = writeln!(out, "Income       {}", format_amount(totals.total_income));
    let _ = writeln!(out, "Expenditure  {}", format_amount(totals.total_expenses));
    let _ = writeln!(out, "Balance      {}", format_amount(totals.balance));
    let _ = writeln!(out, "Savings rate {}%", totals.savings_rate_percent);

    out.push_str("\nRecent income\n");
    for income in &snapshot.recent_incomes {
        transaction_line(&mut out, income, "+");
    }

    out.push_str("\nRecent expenses\n");
    for expense in &snapshot.recent_expenses {
        transaction_line(&mut out, expense, "-");
    }

    out.push_str("\nGoals\n");
    for goal in &snapshot.goals {
        let _ = writeln!(
            out,
            "  [{}] {}  {} / {}  {}%",
            goal.id,
            goal.name,
            format_amount(goal.current),
            format_amount(goal.target),
            goal.percent
        );
    }

    out.push_str("\nChallenges\n");
    for challenge in &snapshot.challenges {
        let _ = writeln!(
            out,
            "  {}  {}/{}  {}",
            challenge.name,
            challenge.current,
            challenge.target,
            format_amount(challenge.value)
        );
    }

    out.push_str("\nCommunity\n");
    for post in &snapshot.recent_forum_posts {
        let _ = writeln!(
            out,
            "  {} ({})  {}  ♥ {}  💬 {}",
            post.author,
            post.date,
            post.content,
            post.likes,
            post.comments.len()
        );
    }

    out
}

pub fn render_vault(entries: &[VaultEntry]) -> String {
    if entries.is_empty() {
        return "Vault is empty\n".to_string();
    }

    entries
        .iter()
        .map(|entry| {
            format!(
                "  [{}] {}  saved {}\n",
                entry.id,
                entry.title,
                entry.created_at.format("%Y-%m-%d %H:%M")
            )
        })
        .collect()
}
