/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 16/10/26
******************************************************************************/
use crate::application::runner::{Scenario, Step};
use crate::model::responses::HttpRecord;
use prettytable::{Cell, Row, Table, format};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Longest body excerpt shown in the summary table
const TABLE_BODY_WIDTH: usize = 60;

/// One request of a smoke run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    /// Which call this was
    pub step: Step,
    /// Full URL requested
    pub url: String,
    /// Status and raw body received
    pub record: HttpRecord,
    /// Whether the status was in the step's success set
    pub success: bool,
}

impl StepReport {
    /// Creates a step report, judging success against the step's success set
    pub fn new(step: Step, url: impl Into<String>, record: HttpRecord) -> Self {
        let success = record.is_success_in(step.success_statuses());
        Self {
            step,
            url: url.into(),
            record,
            success,
        }
    }
}

/// Final verdict of a smoke run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SmokeOutcome {
    /// Every call returned a success status
    Passed,
    /// The named step returned a non-success status and the run stopped there
    Failed {
        /// Step that failed
        step: Step,
        /// Status it returned
        status: u16,
    },
}

/// Everything a smoke run did, in order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SmokeReport {
    /// Scenario that was run
    pub scenario: Scenario,
    /// Calls made, in order
    pub steps: Vec<StepReport>,
    /// Verdict
    pub outcome: SmokeOutcome,
}

impl SmokeReport {
    /// Starts an empty report; the outcome stays `Passed` until a step fails
    pub fn new(scenario: Scenario) -> Self {
        Self {
            scenario,
            steps: Vec::new(),
            outcome: SmokeOutcome::Passed,
        }
    }

    /// Appends a step, marking the run failed if the step did not succeed
    pub fn push(&mut self, report: StepReport) {
        if !report.success && self.outcome == SmokeOutcome::Passed {
            self.outcome = SmokeOutcome::Failed {
                step: report.step,
                status: report.record.status,
            };
        }
        self.steps.push(report);
    }

    /// Whether every call succeeded
    #[must_use]
    pub fn passed(&self) -> bool {
        self.outcome == SmokeOutcome::Passed
    }

    /// First report for `step`, if that call was made
    #[must_use]
    pub fn step(&self, step: Step) -> Option<&StepReport> {
        self.steps.iter().find(|s| s.step == step)
    }

    /// Summary table of every call
    #[must_use]
    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.add_row(Row::new(vec![
            Cell::new("STEP"),
            Cell::new("REQUEST"),
            Cell::new("STATUS"),
            Cell::new("RESULT"),
            Cell::new("BODY"),
        ]));

        for report in &self.steps {
            table.add_row(Row::new(vec![
                Cell::new(&report.step.to_string()),
                Cell::new(&format!("{} {}", report.step.method(), report.url)),
                Cell::new(&report.record.status.to_string()),
                Cell::new(if report.success { "ok" } else { "failed" }),
                Cell::new(&excerpt(&report.record.body, TABLE_BODY_WIDTH)),
            ]));
        }

        table
    }
}

impl fmt::Display for SmokeReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Scenario: {}", self.scenario)?;
        write!(f, "{}", self.to_table())?;
        match self.outcome {
            SmokeOutcome::Passed => writeln!(f, "Result: passed"),
            SmokeOutcome::Failed { step, status } => {
                writeln!(f, "Result: failed at {step} (status {status})")
            }
        }
    }
}

/// Shortens `body` to at most `width` characters on a single line
fn excerpt(body: &str, width: usize) -> String {
    let flat: String = body
        .chars()
        .map(|c| if c.is_control() { ' ' } else { c })
        .collect();
    if flat.chars().count() <= width {
        return flat;
    }
    let cut: String = flat.chars().take(width.saturating_sub(3)).collect();
    format!("{cut}...")
}
