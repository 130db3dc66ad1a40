//! Goal CLI commands

use clap::Subcommand;

use crate::display::format_goals;
use crate::error::{FinsightError, FinsightResult};
use crate::insights::project_goal;
use crate::models::{Goal, GoalKind};
use crate::storage::Storage;

use super::{parse_date, parse_positive_amount, today};

/// Goal subcommands
#[derive(Subcommand)]
pub enum GoalCommands {
    /// Create a new savings goal
    Add {
        /// Goal name (unique)
        name: String,
        /// Target amount in rupees
        target: String,
        /// Deadline (YYYY-MM-DD)
        deadline: String,
        /// Goal kind (e.g., "vacation", "emergency-fund")
        #[arg(short, long, default_value = "general-savings")]
        kind: String,
    },

    /// List goals with projections
    List,

    /// Add to a goal's saved amount
    Contribute {
        /// Goal name
        name: String,
        /// Amount in rupees
        amount: String,
    },

    /// Delete a goal
    Delete {
        /// Goal name
        name: String,
    },
}

/// Handle a goal command
pub fn handle_goal_command(storage: &Storage, cmd: GoalCommands) -> FinsightResult<()> {
    match cmd {
        GoalCommands::Add {
            name,
            target,
            deadline,
            kind,
        } => {
            let kind: GoalKind = kind.parse().map_err(FinsightError::Parse)?;
            let target = parse_positive_amount(&target)?;
            let deadline = parse_date(&deadline)?;
            let today = today();

            if deadline <= today {
                return Err(FinsightError::Validation(format!(
                    "Deadline must be in the future, got {}",
                    deadline
                )));
            }

            let goal = Goal::new(name, kind, target, deadline, today);
            storage.goals.insert(goal.clone())?;
            storage.goals.save()?;

            println!("Created goal '{}': {} by {}", goal.name, goal.target, goal.deadline);
            Ok(())
        }

        GoalCommands::List => {
            let snapshot = storage.snapshot()?;
            let today = today();

            let projected: Vec<_> = snapshot
                .goals()
                .iter()
                .map(|goal| (goal.clone(), project_goal(&snapshot, goal, today)))
                .collect();

            print!("{}", format_goals(&projected));
            Ok(())
        }

        GoalCommands::Contribute { name, amount } => {
            let amount = parse_positive_amount(&amount)?;
            let goal = storage.goals.contribute(&name, amount)?;
            storage.goals.save()?;

            println!(
                "'{}' now at {} / {}{}",
                goal.name,
                goal.saved,
                goal.target,
                if goal.is_funded() { " - completed!" } else { "" },
            );
            Ok(())
        }

        GoalCommands::Delete { name } => {
            if storage.goals.delete_by_name(&name)? {
                storage.goals.save()?;
                println!("Deleted goal '{}'", name);
                Ok(())
            } else {
                Err(FinsightError::goal_not_found(name))
            }
        }
    }
}
