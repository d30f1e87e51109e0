//! Command-line forms.
//!
//! Each form is what a user typed. `validate` turns it into store input or rejects it,
//! since the store itself persists whatever it is handed.

use bank::{ChallengeTemplate, NewForumPost, NewGoal, NewTransaction, RecordId, Theme};
use chrono::NaiveDate;
use clap::{Args, Subcommand, ValueEnum};

use crate::{error::AppError, utils::sanitize};

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Show totals, recent activity, goals and challenges
    Summary,

    /// Record an income
    Income(TransactionForm),

    /// Record an expense
    Expense(TransactionForm),

    /// Create a savings goal
    Goal(GoalForm),

    /// Add money to a savings goal
    Progress(ProgressForm),

    /// Share a story on the forum
    Post(PostForm),

    /// Join a savings challenge
    Join {
        #[arg(value_enum)]
        challenge: ChallengeChoice,
    },

    #[command(subcommand)]
    Vault(VaultCommand),

    /// Toggle the theme, or set it explicitly
    Theme {
        #[arg(value_enum)]
        theme: Option<ThemeChoice>,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum VaultCommand {
    /// Store a credential
    Add {
        #[arg(long)]
        title: String,

        #[arg(long)]
        credential: String,
    },

    /// List stored credential titles
    List,

    /// Print one credential in plaintext
    Reveal { id: RecordId },
}

#[derive(Args, Debug, Clone)]
pub struct TransactionForm {
    #[arg(long)]
    pub amount: f64,

    /// Defaults to today (UTC)
    #[arg(long)]
    pub date: Option<NaiveDate>,

    #[arg(long)]
    pub category: String,

    #[arg(long)]
    pub note: Option<String>,
}

impl TransactionForm {
    pub fn validate(self) -> Result<NewTransaction, AppError> {
        Ok(NewTransaction {
            amount: positive("amount", self.amount)?,
            date: self.date,
            category: required("category", &sanitize(&self.category))?,
            note: self
                .note
                .map(|note| note.trim().to_string())
                .filter(|note| !note.is_empty()),
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct GoalForm {
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub target: f64,

    #[arg(long)]
    pub deadline: NaiveDate,
}

impl GoalForm {
    pub fn validate(self) -> Result<NewGoal, AppError> {
        Ok(NewGoal {
            name: required("name", &self.name)?,
            target: positive("target", self.target)?,
            current: 0.0,
            deadline: self.deadline,
        })
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProgressForm {
    #[arg(long)]
    pub goal: RecordId,

    #[arg(long, allow_negative_numbers = true)]
    pub amount: f64,
}

impl ProgressForm {
    pub fn validate(self) -> Result<(RecordId, f64), AppError> {
        if !self.amount.is_finite() || self.amount == 0.0 {
            return Err(AppError::invalid("amount", "must be a non-zero number"));
        }

        Ok((self.goal, self.amount))
    }
}

#[derive(Args, Debug, Clone)]
pub struct PostForm {
    #[arg(long)]
    pub author: String,

    #[arg(long)]
    pub content: String,
}

impl PostForm {
    pub fn validate(self) -> Result<NewForumPost, AppError> {
        Ok(NewForumPost {
            author: required("author", &self.author)?,
            content: required("content", &self.content)?,
            ..Default::default()
        })
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeChoice {
    RupeeRise,
    NoSpend,
}

impl From<ChallengeChoice> for ChallengeTemplate {
    fn from(choice: ChallengeChoice) -> Self {
        match choice {
            ChallengeChoice::RupeeRise => ChallengeTemplate::RupeeRise,
            ChallengeChoice::NoSpend => ChallengeTemplate::NoSpend,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Dark,
    Light,
}

impl From<ThemeChoice> for Theme {
    fn from(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Dark => Theme::Dark,
            ThemeChoice::Light => Theme::Light,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64, AppError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(AppError::invalid(field, "must be greater than zero"))
    }
}

fn required(field: &'static str, value: &str) -> Result<String, AppError> {
    let trimmed = value.trim();

    if trimmed.is_empty() {
        Err(AppError::invalid(field, "is required"))
    } else {
        Ok(trimmed.to_string())
    }
}
