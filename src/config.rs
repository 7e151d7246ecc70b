//! Check plan configuration.
//!
//! A plan file is a small YAML document that reorders or trims the probe
//! list and overrides thresholds and pacing. Every field is optional;
//! omitted fields keep the built-in defaults, and a missing plan file is
//! not an error when discovered rather than named explicitly.
//!
//! ```yaml
//! probes:
//!   - browser
//!   - screenSize
//!   - performance
//! min_width: 1024
//! settle_delay_ms: 0
//! probe_timeout_secs: 10
//! ```

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::Deserialize;
use tracing::debug;

use crate::check::{find_probe, SequencePlan};
use crate::error::{GreenroomError, Result};

/// Default plan file name, discovered in the working directory.
pub const DEFAULT_PLAN_FILE: &str = "greenroom.yml";

/// On-disk check plan.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CheckConfig {
    /// Probe names to run, in order. Omitted runs the full catalog.
    pub probes: Option<Vec<String>>,

    /// Minimum viewport width in pixels.
    pub min_width: Option<u32>,

    /// Minimum viewport height in pixels.
    pub min_height: Option<u32>,

    /// Client engine substrings considered compatible.
    pub engines: Option<Vec<String>>,

    /// CPU benchmark loop length.
    pub benchmark_iterations: Option<u64>,

    /// CPU benchmark budget in milliseconds.
    pub benchmark_budget_ms: Option<f64>,

    /// Pause before each probe, in milliseconds.
    pub settle_delay_ms: Option<u64>,

    /// Per-probe deadline in seconds. Zero disables the deadline.
    pub probe_timeout_secs: Option<u64>,
}

/// Load a plan file from an explicit path.
///
/// # Errors
///
/// Returns `PlanNotFound` if the file doesn't exist.
/// Returns `PlanParseError` if the YAML is invalid.
pub fn load_plan_file(path: &Path) -> Result<CheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GreenroomError::PlanNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GreenroomError::Io(e)
        }
    })?;

    parse_plan(&content, path)
}

/// Parse YAML content into a validated plan.
///
/// # Arguments
///
/// * `content` - The YAML content to parse
/// * `source_path` - Path for error reporting
pub fn parse_plan(content: &str, source_path: &Path) -> Result<CheckConfig> {
    let config: CheckConfig =
        serde_yaml::from_str(content).map_err(|e| GreenroomError::PlanParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}

/// Discover the default plan file in a directory. A missing file resolves
/// to the built-in defaults.
pub fn discover_plan(dir: &Path) -> Result<CheckConfig> {
    let path = dir.join(DEFAULT_PLAN_FILE);
    if path.exists() {
        debug!("Loading check plan from {}", path.display());
        load_plan_file(&path)
    } else {
        debug!("No plan file at {}; using defaults", path.display());
        Ok(CheckConfig::default())
    }
}

impl CheckConfig {
    /// Check plan values against the probe catalog and threshold ranges.
    pub fn validate(&self) -> Result<()> {
        if let Some(names) = &self.probes {
            for (index, name) in names.iter().enumerate() {
                if find_probe(name).is_none() {
                    return Err(GreenroomError::UnknownProbe { name: name.clone() });
                }
                if names[..index].contains(name) {
                    return Err(GreenroomError::PlanValidationError {
                        message: format!("probe '{}' is listed more than once", name),
                    });
                }
            }
        }

        if self.min_width == Some(0) || self.min_height == Some(0) {
            return Err(GreenroomError::PlanValidationError {
                message: "minimum screen size must be at least 1x1".to_string(),
            });
        }

        if let Some(budget) = self.benchmark_budget_ms {
            if budget <= 0.0 {
                return Err(GreenroomError::PlanValidationError {
                    message: "benchmark budget must be positive".to_string(),
                });
            }
        }

        Ok(())
    }

    /// Turn the plan file into a runnable sequence plan.
    pub fn to_plan(&self) -> Result<SequencePlan> {
        let mut plan = SequencePlan::default();

        if let Some(names) = &self.probes {
            plan.probes = names
                .iter()
                .map(|name| {
                    find_probe(name)
                        .copied()
                        .ok_or_else(|| GreenroomError::UnknownProbe { name: name.clone() })
                })
                .collect::<Result<Vec<_>>>()?;
        }

        if let Some(width) = self.min_width {
            plan.params.min_width = width;
        }
        if let Some(height) = self.min_height {
            plan.params.min_height = height;
        }
        if let Some(engines) = &self.engines {
            plan.params.engines = engines.clone();
        }
        if let Some(iterations) = self.benchmark_iterations {
            plan.params.benchmark_iterations = iterations;
        }
        if let Some(budget) = self.benchmark_budget_ms {
            plan.params.benchmark_budget_ms = budget;
        }
        if let Some(ms) = self.settle_delay_ms {
            plan.settle_delay = Duration::from_millis(ms);
        }
        if let Some(secs) = self.probe_timeout_secs {
            plan.probe_timeout = (secs > 0).then(|| Duration::from_secs(secs));
        }

        Ok(plan)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    use crate::check::probes::DEFAULT_MIN_HEIGHT;
    use crate::check::{DEFAULT_SETTLE_DELAY, PROBE_DEFS};

    #[test]
    fn explicit_path_must_exist() {
        let result = load_plan_file(Path::new("/nonexistent/greenroom.yml"));
        assert!(matches!(
            result,
            Err(GreenroomError::PlanNotFound { .. })
        ));
    }

    #[test]
    fn discovery_without_a_file_uses_defaults() {
        let temp = TempDir::new().unwrap();
        let config = discover_plan(temp.path()).unwrap();
        assert!(config.probes.is_none());

        let plan = config.to_plan().unwrap();
        assert_eq!(plan.probes.len(), PROBE_DEFS.len());
        assert_eq!(plan.settle_delay, DEFAULT_SETTLE_DELAY);
        assert_eq!(plan.params.min_height, DEFAULT_MIN_HEIGHT);
    }

    #[test]
    fn discovery_picks_up_the_default_file() {
        let temp = TempDir::new().unwrap();
        fs::write(
            temp.path().join(DEFAULT_PLAN_FILE),
            "probes:\n  - browser\n  - performance\n",
        )
        .unwrap();

        let config = discover_plan(temp.path()).unwrap();
        let plan = config.to_plan().unwrap();
        let names: Vec<&str> = plan.probes.iter().map(|def| def.name).collect();
        assert_eq!(names, ["browser", "performance"]);
    }

    #[test]
    fn parse_error_carries_the_source_path() {
        let result = parse_plan("probes: [unclosed", Path::new("/plan.yml"));
        match result {
            Err(GreenroomError::PlanParseError { path, .. }) => {
                assert_eq!(path, PathBuf::from("/plan.yml"));
            }
            other => panic!("expected parse error, got {:?}", other),
        }
    }

    #[test]
    fn unknown_probe_name_is_rejected() {
        let result = parse_plan("probes:\n  - warp_drive\n", Path::new("/plan.yml"));
        match result {
            Err(GreenroomError::UnknownProbe { name }) => assert_eq!(name, "warp_drive"),
            other => panic!("expected unknown probe, got {:?}", other),
        }
    }

    #[test]
    fn duplicate_probe_name_is_rejected() {
        let result = parse_plan(
            "probes:\n  - browser\n  - browser\n",
            Path::new("/plan.yml"),
        );
        assert!(matches!(
            result,
            Err(GreenroomError::PlanValidationError { .. })
        ));
    }

    #[test]
    fn zero_minimum_screen_size_is_rejected() {
        let result = parse_plan("min_width: 0\n", Path::new("/plan.yml"));
        assert!(matches!(
            result,
            Err(GreenroomError::PlanValidationError { .. })
        ));
    }

    #[test]
    fn nonpositive_benchmark_budget_is_rejected() {
        let result = parse_plan("benchmark_budget_ms: -5.0\n", Path::new("/plan.yml"));
        assert!(matches!(
            result,
            Err(GreenroomError::PlanValidationError { .. })
        ));
    }

    #[test]
    fn thresholds_flow_into_probe_params() {
        let config = parse_plan(
            "min_width: 1024\nmin_height: 768\nbenchmark_iterations: 1000\n",
            Path::new("/plan.yml"),
        )
        .unwrap();
        let plan = config.to_plan().unwrap();

        assert_eq!(plan.params.min_width, 1024);
        assert_eq!(plan.params.min_height, 768);
        assert_eq!(plan.params.benchmark_iterations, 1000);
    }

    #[test]
    fn engine_list_overrides_the_default_set() {
        let config = parse_plan("engines:\n  - edge\n", Path::new("/plan.yml")).unwrap();
        let plan = config.to_plan().unwrap();
        assert_eq!(plan.params.engines, ["edge"]);
    }

    #[test]
    fn settle_delay_override_applies() {
        let config = parse_plan("settle_delay_ms: 0\n", Path::new("/plan.yml")).unwrap();
        let plan = config.to_plan().unwrap();
        assert_eq!(plan.settle_delay, Duration::ZERO);
    }

    #[test]
    fn zero_timeout_disables_the_deadline() {
        let config = parse_plan("probe_timeout_secs: 0\n", Path::new("/plan.yml")).unwrap();
        let plan = config.to_plan().unwrap();
        assert!(plan.probe_timeout.is_none());

        let config = parse_plan("probe_timeout_secs: 10\n", Path::new("/plan.yml")).unwrap();
        let plan = config.to_plan().unwrap();
        assert_eq!(plan.probe_timeout, Some(Duration::from_secs(10)));
    }

    #[test]
    fn empty_probe_list_is_allowed() {
        let config = parse_plan("probes: []\n", Path::new("/plan.yml")).unwrap();
        let plan = config.to_plan().unwrap();
        assert!(plan.probes.is_empty());
    }
}
