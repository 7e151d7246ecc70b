//! Probes command implementation.
//!
//! The `greenroom probes` command lists the capability probes a check
//! would run, in execution order, after applying any plan file.

use std::path::{Path, PathBuf};

use crate::cli::args::ProbesArgs;
use crate::config::{discover_plan, load_plan_file};
use crate::error::{GreenroomError, Result};
use crate::ui::theme::GreenroomTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The probes command implementation.
pub struct ProbesCommand {
    work_dir: PathBuf,
    plan_override: Option<PathBuf>,
    args: ProbesArgs,
}

impl ProbesCommand {
    /// Create a new probes command.
    pub fn new(work_dir: &Path, plan_override: Option<PathBuf>, args: ProbesArgs) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            plan_override,
            args,
        }
    }
}

impl Command for ProbesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let config = match &self.plan_override {
            Some(path) => load_plan_file(path),
            None => discover_plan(&self.work_dir),
        };
        let plan = match config.and_then(|c| c.to_plan()) {
            Ok(plan) => plan,
            Err(
                e @ (GreenroomError::PlanNotFound { .. }
                | GreenroomError::PlanParseError { .. }
                | GreenroomError::PlanValidationError { .. }
                | GreenroomError::UnknownProbe { .. }),
            ) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
            Err(e) => return Err(e),
        };

        if self.args.json {
            let rows: Vec<serde_json::Value> = plan
                .probes
                .iter()
                .map(|def| {
                    serde_json::json!({
                        "name": def.name,
                        "title": def.title,
                        "caption": def.caption,
                    })
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&rows)?);
            return Ok(CommandResult::success());
        }

        let theme = GreenroomTheme::new();
        ui.message(&format!(
            "  {}",
            theme.highlight.apply_to("Probes, in execution order:")
        ));
        for def in &plan.probes {
            ui.message(&format!("    {}", theme.format_probe(def.title, def.name)));
            ui.message(&format!("      {}", theme.dim.apply_to(def.caption)));
        }
        ui.show_hint("Trim or reorder the list with a greenroom.yml plan file.");

        Ok(CommandResult::success())
    }
}
