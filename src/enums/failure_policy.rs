use clap::ValueEnum;

/// What the orchestrator does when a stage of the IEC workflow fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum FailurePolicy {
    /// Log, fall back to the stage's zero value and keep going.
    #[default]
    Continue,
    /// Log and skip every remaining stage.
    Abort,
}
