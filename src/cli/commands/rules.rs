//! Rules command implementation.
//!
//! The `greenroom rules` command shows the conduct rule catalog and the
//! notices contestants see before accepting their readiness results.
//! With `--reason`, it judges the catalog against a violation reason the
//! way the disqualification record does.

use crate::cli::args::RulesArgs;
use crate::conduct::{assess, CONDUCT_NOTICES, CONDUCT_RULES};
use crate::error::Result;
use crate::ui::theme::GreenroomTheme;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The rules command implementation.
pub struct RulesCommand {
    args: RulesArgs,
}

impl RulesCommand {
    /// Create a new rules command.
    pub fn new(args: RulesArgs) -> Self {
        Self { args }
    }

    fn show_catalog(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.json {
            let value = serde_json::json!({
                "rules": CONDUCT_RULES.iter().map(|r| r.rule).collect::<Vec<_>>(),
                "notices": CONDUCT_NOTICES
                    .iter()
                    .map(|n| serde_json::json!({
                        "summary": n.summary,
                        "detail": n.detail,
                    }))
                    .collect::<Vec<_>>(),
            });
            println!("{}", serde_json::to_string_pretty(&value)?);
            return Ok(CommandResult::success());
        }

        let theme = GreenroomTheme::new();
        ui.message(&format!("  {}", theme.highlight.apply_to("Security Rules:")));
        for rule in CONDUCT_RULES {
            ui.message(&format!("    {} {}", theme.dim.apply_to("-"), rule.rule));
        }
        ui.message("");
        ui.message(&format!(
            "  {}",
            theme.highlight.apply_to("Before you start:")
        ));
        for notice in CONDUCT_NOTICES {
            ui.show_notice(notice.summary, notice.detail);
        }

        Ok(CommandResult::success())
    }

    fn show_assessment(&self, reason: &str, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let assessments = assess(reason);

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&assessments)?);
            return Ok(CommandResult::success());
        }

        let theme = GreenroomTheme::new();
        ui.message(&format!(
            "  {} {}",
            theme.highlight.apply_to("Rules Violations:"),
            theme.dim.apply_to(reason)
        ));
        for assessment in &assessments {
            if assessment.broken {
                ui.message(&format!("    {}", theme.format_error(assessment.rule)));
            } else {
                ui.message(&format!("    {}", theme.format_success(assessment.rule)));
            }
        }

        let broken = assessments.iter().filter(|a| a.broken).count();
        if broken == 0 {
            ui.message(&format!(
                "    {}",
                theme.dim.apply_to("No catalog rule is implicated by this reason.")
            ));
        }

        Ok(CommandResult::success())
    }
}

impl Command for RulesCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        match &self.args.reason {
            Some(reason) => self.show_assessment(reason, ui),
            None => self.show_catalog(ui),
        }
    }
}
