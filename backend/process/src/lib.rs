//! # Finance Processing
//!
//! Host side of the dashboard: reads what the user typed, checks it, hands it to the
//! record store, refreshes the dashboard, and says what happened.
//!
//! ## Flow
//! 1. Parse a [`Command`] from the command line.
//! 2. Validate its form. Bad input stops here, nothing is written.
//! 3. Run the store mutation.
//! 4. [`dashboard::refresh`] the whole snapshot.
//! 5. Return a [`Report`] carrying the snapshot and the notice to show.
//!
//! ## Notices
//! - `New income added successfully!` / `New expense added successfully!`
//! - `New goal added successfully!`
//! - `Congratulations! You've achieved your <goal> goal!` once progress reaches the target
//! - `Your story has been shared successfully!`
//! - `You've joined the <challenge> challenge!`
//! - `Credential saved securely!`

pub mod config;
pub mod error;
pub mod models;
pub mod state;
pub mod utils;

use bank::{ChallengeTemplate, Collection, Storage, Theme, TransactionKind, VaultEntry, vault::Cipher};
use dashboard::{Snapshot, refresh};
use tracing::info;

use error::AppError;
use models::{Command, VaultCommand};
use state::State;

#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    Dashboard {
        notice: Option<String>,
        snapshot: Snapshot,
    },
    Vault(Vec<VaultEntry>),
    Credential {
        title: String,
        credential: String,
    },
    Theme(Theme),
}

pub fn execute<S: Storage>(state: &mut State<S>, command: Command) -> Result<Report, AppError> {
    let notice = match command {
        Command::Summary => None,
        Command::Income(form) => Some(add_transaction(state, TransactionKind::Income, form)?),
        Command::Expense(form) => Some(add_transaction(state, TransactionKind::Expense, form)?),
        Command::Goal(form) => {
            let goal = state.store.add_goal(form.validate()?)?;
            info!("Added goal {}", goal.id);

            Some("New goal added successfully!".to_string())
        }
        Command::Progress(form) => {
            let (goal_id, delta) = form.validate()?;
            let goal = state
                .store
                .update_goal_progress(goal_id, delta)?
                .ok_or(AppError::NotFound {
                    collection: Collection::Goals,
                    id: goal_id,
                })?;

            Some(if goal.is_reached() {
                format!("Congratulations! You've achieved your {} goal! 🎉", goal.name)
            } else {
                "Goal progress updated.".to_string()
            })
        }
        Command::Post(form) => {
            state.store.add_forum_post(form.validate()?)?;

            Some("Your story has been shared successfully!".to_string())
        }
        Command::Join { challenge } => {
            let joined = state.store.join_challenge(ChallengeTemplate::from(challenge))?;

            Some(format!("You've joined the {} challenge!", joined.name))
        }
        Command::Vault(command) => return vault(state, command),
        Command::Theme { theme } => return set_theme(state, theme.map(Theme::from)),
    };

    Ok(Report::Dashboard {
        notice,
        snapshot: refresh(&state.store),
    })
}

fn add_transaction<S: Storage>(
    state: &mut State<S>,
    kind: TransactionKind,
    form: models::TransactionForm,
) -> Result<String, AppError> {
    let transaction = state.store.add_transaction(kind, form.validate()?)?;
    info!("Added {} {}", kind.noun(), transaction.id);

    Ok(format!("New {} added successfully!", kind.noun()))
}

fn vault<S: Storage>(state: &mut State<S>, command: VaultCommand) -> Result<Report, AppError> {
    match command {
        VaultCommand::Add { title, credential } => {
            if title.trim().is_empty() {
                return Err(AppError::invalid("title", "is required"));
            }
            if credential.is_empty() {
                return Err(AppError::invalid("credential", "is required"));
            }

            state
                .store
                .add_vault_entry(title.trim(), &credential, &state.cipher)?;

            Ok(Report::Dashboard {
                notice: Some("Credential saved securely!".to_string()),
                snapshot: refresh(&state.store),
            })
        }
        VaultCommand::List => Ok(Report::Vault(state.store.vault())),
        VaultCommand::Reveal { id } => {
            let entry = state.store.vault_entry(id).ok_or(AppError::NotFound {
                collection: Collection::Vault,
                id,
            })?;

            Ok(Report::Credential {
                credential: state.cipher.open(&entry.credential)?,
                title: entry.title,
            })
        }
    }
}

/// With no explicit choice, flips the stored theme (light when nothing is stored).
fn set_theme<S: Storage>(state: &mut State<S>, choice: Option<Theme>) -> Result<Report, AppError> {
    let theme = choice.unwrap_or_else(|| {
        state
            .store
            .theme()
            .map_or(Theme::Dark, Theme::toggled)
    });
    state.store.set_theme(theme)?;

    Ok(Report::Theme(theme))
}

#[cfg(test)]
mod tests {
    use bank::{MemoryStorage, vault::PLACEHOLDER_KEY};

    use super::*;
    use crate::{
        config::Config,
        models::{ChallengeChoice, GoalForm, PostForm, ProgressForm, ThemeChoice, TransactionForm},
    };

    fn state() -> State<MemoryStorage> {
        let config = Config {
            data_path: "unused.json".into(),
            vault_key: PLACEHOLDER_KEY.to_string(),
        };

        State::with_storage(config, MemoryStorage::new()).unwrap()
    }

    fn notice(report: Report) -> String {
        match report {
            Report::Dashboard { notice, .. } => notice.unwrap(),
            other => panic!("unexpected report {other:?}"),
        }
    }

    #[test]
    fn test_summary_reflects_seed() {
        let report = execute(&mut state(), Command::Summary).unwrap();

        let Report::Dashboard { notice, snapshot } = report else {
            panic!("expected dashboard");
        };
        assert_eq!(notice, None);
        assert_eq!(snapshot.totals.savings_rate_percent, 50);
    }

    #[test]
    fn test_income_then_refresh() {
        let mut state = state();

        let report = execute(
            &mut state,
            Command::Income(TransactionForm {
                amount: 10000.0,
                date: "2025-04-01".parse().ok(),
                category: "Bonus".to_string(),
                note: None,
            }),
        )
        .unwrap();

        let Report::Dashboard { notice, snapshot } = report else {
            panic!("expected dashboard");
        };
        assert_eq!(notice.as_deref(), Some("New income added successfully!"));
        assert_eq!(snapshot.totals.total_income, 40000.0);
        assert_eq!(snapshot.recent_incomes[0].category, "bonus");
        assert_eq!(snapshot.chart.income[3], 10000.0);
    }

    #[test]
    fn test_invalid_expense_writes_nothing() {
        let mut state = state();
        let before = state.store.raw(Collection::Expenses);

        let err = execute(
            &mut state,
            Command::Expense(TransactionForm {
                amount: -1.0,
                date: None,
                category: "rent".to_string(),
                note: None,
            }),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::InvalidInput { .. }));
        assert_eq!(state.store.raw(Collection::Expenses), before);
    }

    #[test]
    fn test_goal_lifecycle() {
        let mut state = state();

        let added = execute(
            &mut state,
            Command::Goal(GoalForm {
                name: "Scooter".to_string(),
                target: 1000.0,
                deadline: "2025-10-01".parse().unwrap(),
            }),
        )
        .unwrap();
        assert_eq!(notice(added), "New goal added successfully!");

        let goal_id = state.store.goals()[2].id;
        let partial = execute(
            &mut state,
            Command::Progress(ProgressForm { goal: goal_id, amount: 400.0 }),
        )
        .unwrap();
        assert_eq!(notice(partial), "Goal progress updated.");

        let done = execute(
            &mut state,
            Command::Progress(ProgressForm { goal: goal_id, amount: 600.0 }),
        )
        .unwrap();
        assert!(notice(done).starts_with("Congratulations! You've achieved your Scooter goal!"));
    }

    #[test]
    fn test_progress_unknown_goal() {
        let err = execute(
            &mut state(),
            Command::Progress(ProgressForm { goal: 99, amount: 5.0 }),
        )
        .unwrap_err();

        assert!(matches!(err, AppError::NotFound { id: 99, .. }));
    }

    #[test]
    fn test_post_and_join() {
        let mut state = state();

        let posted = execute(
            &mut state,
            Command::Post(PostForm {
                author: "Kavya".to_string(),
                content: "Saved 10% this month".to_string(),
            }),
        )
        .unwrap();
        assert_eq!(notice(posted), "Your story has been shared successfully!");

        let joined = execute(
            &mut state,
            Command::Join {
                challenge: ChallengeChoice::NoSpend,
            },
        )
        .unwrap();
        assert_eq!(notice(joined), "You've joined the No-Spend Week challenge!");
        assert_eq!(state.store.challenges().len(), 3);
    }

    #[test]
    fn test_vault_roundtrip() {
        let mut state = state();

        execute(
            &mut state,
            Command::Vault(VaultCommand::Add {
                title: "UPI".to_string(),
                credential: "1234".to_string(),
            }),
        )
        .unwrap();

        let Report::Vault(entries) = execute(&mut state, Command::Vault(VaultCommand::List)).unwrap()
        else {
            panic!("expected vault listing");
        };
        assert_ne!(entries[0].credential, "1234");

        let revealed = execute(
            &mut state,
            Command::Vault(VaultCommand::Reveal { id: entries[0].id }),
        )
        .unwrap();
        assert_eq!(
            revealed,
            Report::Credential {
                title: "UPI".to_string(),
                credential: "1234".to_string(),
            }
        );
    }

    #[test]
    fn test_theme_toggle() {
        let mut state = state();

        assert_eq!(
            execute(&mut state, Command::Theme { theme: None }).unwrap(),
            Report::Theme(Theme::Dark)
        );
        assert_eq!(
            execute(&mut state, Command::Theme { theme: None }).unwrap(),
            Report::Theme(Theme::Light)
        );
        assert_eq!(
            execute(
                &mut state,
                Command::Theme {
                    theme: Some(ThemeChoice::Dark)
                }
            )
            .unwrap(),
            Report::Theme(Theme::Dark)
        );
    }
}
