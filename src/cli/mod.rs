pub mod presenter;
pub mod prompt;
pub mod workflows;

pub use presenter::Presenter;
pub use prompt::{Prompter, TerminalPrompter};
pub use workflows::{Studio, Workflow, WorkflowOutcome};
