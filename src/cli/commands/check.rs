//! Check command implementation.
//!
//! The `greenroom check` command runs the readiness sequence: every planned
//! probe in order with a settling pause between steps, then the warning
//! summary, the conduct notices, and the acceptance prompt. Accepting a
//! completed run releases the ready announcement through the completion
//! gate; declining exits non-zero without it.
//!
//! `--format text` and `--format json` skip the step display and the prompt
//! entirely and print a [`ReadinessReport`] to stdout instead.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::check::{CheckProgress, CompletionGate, ProbeStatus, SequencePlan, Sequencer};
use crate::cli::args::{CheckArgs, ReportFormat};
use crate::config::{discover_plan, load_plan_file};
use crate::conduct::CONDUCT_NOTICES;
use crate::error::{GreenroomError, Result};
use crate::platform::HostPlatform;
use crate::report::ReadinessReport;
use crate::ui::theme::GreenroomTheme;
use crate::ui::{format_duration, Prompt, SpinnerHandle, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The check command implementation.
pub struct CheckCommand {
    work_dir: PathBuf,
    plan_override: Option<PathBuf>,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(work_dir: &Path, plan_override: Option<PathBuf>, args: CheckArgs) -> Self {
        Self {
            work_dir: work_dir.to_path_buf(),
            plan_override,
            args,
        }
    }

    /// Get the working directory used for plan discovery.
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Resolve the sequence plan. An explicit plan path must exist; a
    /// discovered one may be absent.
    fn resolve_plan(&self) -> Result<SequencePlan> {
        let config = match &self.plan_override {
            Some(path) => load_plan_file(path)?,
            None => discover_plan(&self.work_dir)?,
        };
        let mut plan = config.to_plan()?;
        if self.args.fast {
            plan.settle_delay = Duration::ZERO;
        }
        Ok(plan)
    }

    /// Silent run that prints a report to stdout, for scripted callers.
    fn run_report(&self, mut plan: SequencePlan, as_json: bool) -> Result<CommandResult> {
        // No step display to pace.
        plan.settle_delay = Duration::ZERO;

        let check = Sequencer::new(plan, HostPlatform::new(false)).run();
        let report = ReadinessReport::now(&check);
        if as_json {
            println!("{}", report.to_json()?);
        } else {
            print!("{}", report.render_text());
        }
        Ok(CommandResult::success())
    }

    /// Step-by-step run ending in the acceptance prompt.
    fn run_interactive(
        &self,
        plan: SequencePlan,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let platform = HostPlatform::new(ui.is_interactive());
        ui.show_check_header(plan.probes.len());

        let mut spinner: Option<Box<dyn SpinnerHandle>> = None;
        let check = Sequencer::new(plan, platform).run_with_progress(|progress| match progress {
            CheckProgress::ProbeStarting {
                title,
                caption,
                index,
                total,
                ..
            } => {
                let label = format!("[{}/{}] {}: {}", index + 1, total, title, caption);
                spinner = Some(ui.start_spinner_indented(&label, 2));
            }
            CheckProgress::ProbeFinished { title, outcome, .. } => {
                if let Some(mut handle) = spinner.take() {
                    let line = format!("{}: {}", title, outcome.message);
                    match outcome.status {
                        ProbeStatus::Passed => handle.finish_success(&line),
                        ProbeStatus::Warning => handle.finish_warning(&line),
                        ProbeStatus::Failed => handle.finish_error(&line),
                        ProbeStatus::Pending => {}
                    }
                }
            }
            CheckProgress::SequenceComplete { .. } => {}
        });

        if !check.warnings.is_empty() {
            ui.show_warning_panel(
                "Some checks have warnings",
                "You can continue, but you might experience some issues during the competition:",
                check.warnings.entries(),
            );
        }

        if ui.output_mode().shows_banners() {
            let theme = GreenroomTheme::new();
            ui.message("");
            ui.message(&format!("  {}", theme.highlight.apply_to("Security Rules:")));
            for notice in CONDUCT_NOTICES {
                ui.show_notice(notice.summary, notice.detail);
            }
            ui.message("");
        }

        let accepted = if self.args.yes {
            true
        } else {
            ui.confirm(&Prompt::new("accept", "I Understand and Accept"))?
        };

        if !accepted {
            ui.warning("Results not accepted.");
            ui.show_hint("Run 'greenroom check' again when your environment is ready.");
            return Ok(CommandResult::failure(1));
        }

        let duration = check.duration;
        let mut gate = CompletionGate::new(|verdict| {
            ui.success(&format!(
                "Environment ready in {} ({})",
                format_duration(duration),
                verdict
            ));
        });
        gate.acknowledge_completed(&check);

        Ok(CommandResult::success())
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let plan = match self.resolve_plan() {
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

        match self.args.format {
            ReportFormat::Human => self.run_interactive(plan, ui),
            ReportFormat::Text => self.run_report(plan, false),
            ReportFormat::Json => self.run_report(plan, true),
        }
    }
}
