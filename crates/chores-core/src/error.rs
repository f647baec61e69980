use thiserror::Error;

use crate::config::ConfigError;
use crate::executor::ExecError;

/// Runner-level failures: registry lookup problems plus everything a task
/// body can raise while reading its config or running commands.
#[derive(Debug, Error)]
pub enum TaskError {
    #[error("no task is registered for \"{0}\"")]
    UnknownTask(String),

    #[error("duplicate task registration for \"{0}\"")]
    DuplicateTask(String),

    #[error("command exited with status {0}")]
    CommandFailed(i32),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Exec(#[from] ExecError),
}
