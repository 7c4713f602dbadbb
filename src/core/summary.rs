use std::fmt::Display;

use serde::{Deserialize, Serialize};

use crate::Float;

/// A struct that holds the results of a [`Strongin`](crate::algorithms::strongin::Strongin)
/// minimization run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StronginSummary {
    /// The search interval `(a, b)`.
    pub bounds: (Float, Float),
    /// A message that can be set by minimization algorithms.
    pub message: String,
    /// The location of the reported minimum (`NaN` if the run did not converge).
    pub x: Float,
    /// The reported minimum value (`NaN` if the run did not converge).
    pub fx: Float,
    /// The last estimate of the Lipschitz constant, $`M`$.
    pub lipschitz: Float,
    /// The number of intervals in the final partition.
    pub intervals: usize,
    /// The number of iterations performed.
    pub iterations: usize,
    /// The number of function evaluations made by this worker.
    pub cost_evals: usize,
    /// The number of workers which shared the reductions.
    pub workers: usize,
    /// Flag that says whether or not the fit is in a converged state.
    pub converged: bool,
}

impl Default for StronginSummary {
    fn default() -> Self {
        Self {
            bounds: (Float::NAN, Float::NAN),
            message: String::new(),
            x: Float::NAN,
            fx: Float::NAN,
            lipschitz: 0.0,
            intervals: 0,
            iterations: 0,
            cost_evals: 0,
            workers: 1,
            converged: false,
        }
    }
}

impl Display for StronginSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let status = if self.converged {
            "Converged"
        } else {
            "Invalid Minimum"
        };
        writeln!(f, "╭──────────────────────────────────────────────╮")?;
        writeln!(f, "│ {:^44} │", "FIT RESULTS")?;
        writeln!(f, "├──────────────────────────────────────────────┤")?;
        writeln!(f, "│ {:<14} {:>29} │", "Status", status)?;
        writeln!(
            f,
            "│ {:<14} {:>29} │",
            "Interval",
            format!("[{:.5}, {:.5}]", self.bounds.0, self.bounds.1)
        )?;
        writeln!(f, "│ {:<14} {:>29.5} │", "x", self.x)?;
        writeln!(f, "│ {:<14} {:>29.5} │", "f(x)", self.fx)?;
        writeln!(f, "│ {:<14} {:>29.5} │", "M", self.lipschitz)?;
        writeln!(f, "│ {:<14} {:>29} │", "#intervals", self.intervals)?;
        writeln!(f, "│ {:<14} {:>29} │", "#iterations", self.iterations)?;
        writeln!(f, "│ {:<14} {:>29} │", "#f(x)", self.cost_evals)?;
        writeln!(f, "│ {:<14} {:>29} │", "#workers", self.workers)?;
        writeln!(f, "├──────────────────────────────────────────────┤")?;
        writeln!(f, "│ {:<44} │", self.message)?;
        write!(f, "╰──────────────────────────────────────────────╯")
    }
}
