//! Command-line interface orchestration for the junction solver.
//!
//! Each command loads an `x,y,z` point list and runs one or both forest
//! builders over it.

mod commands;

pub use commands::{
    Cli, CliError, ClusterArgs, Command, ExecutionSummary, InputArgs, render_summary, run_cli,
};
