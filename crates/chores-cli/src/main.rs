use std::process::ExitCode;
use std::sync::Arc;

use chores_core::config::TaskConfig;
use chores_core::error::TaskError;
use chores_core::executor;
use chores_core::manifest::Manifest;
use chores_core::registry::{HandlerRegistry, Runner, TaskHandler};
use tracing_subscriber::EnvFilter;

/// `command` task: runs a shell command.
///
/// Accepts either a bare string payload or a mapping with `command`
/// (required) and `silent` (optional, default false).
struct CommandHandler;

impl TaskHandler for CommandHandler {
    fn name(&self) -> &'static str {
        "command"
    }

    fn run(&self, config: &TaskConfig) -> Result<(), TaskError> {
        let command = config.string_property_allow_single("command")?;
        let silent = if config.is_hash() {
            config.boolean_property_default("silent", false)?
        } else {
            false
        };

        let code = if silent {
            executor::run_shell_silent(&command)?
        } else {
            executor::run_shell(&command)?
        };
        if code != 0 {
            return Err(TaskError::CommandFailed(code));
        }
        Ok(())
    }
}

/// `mkdir` task: creates directories. The whole payload is the list.
struct MkdirHandler;

impl TaskHandler for MkdirHandler {
    fn name(&self) -> &'static str {
        "mkdir"
    }

    fn run(&self, config: &TaskConfig) -> Result<(), TaskError> {
        for dir in config.list_of_strings()? {
            std::fs::create_dir_all(&dir)?;
            println!("  Created: {dir}");
        }
        Ok(())
    }
}

fn registry() -> Runner {
    let mut reg = HandlerRegistry::new();
    // Built-in names are distinct; register cannot fail here.
    let _ = reg.register(Arc::new(CommandHandler));
    let _ = reg.register(Arc::new(MkdirHandler));
    Runner::new(Arc::new(reg))
}

fn run(manifest_path: &str) -> Result<bool, Box<dyn std::error::Error>> {
    let manifest = Manifest::load(manifest_path)?;
    let configs = manifest.task_configs()?;
    let runner = registry();

    let mut all_ok = true;
    for config in &configs {
        println!("Task: {}", config.name());
        match runner.execute(config) {
            Ok(()) => {}
            Err(err) => {
                eprintln!("  Failed: {err}");
                all_ok = false;
            }
        }
    }
    Ok(all_ok)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let Some(manifest_path) = std::env::args().nth(1) else {
        eprintln!("usage: chores <manifest.yml>");
        return ExitCode::from(2);
    };

    match run(&manifest_path) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("chores: {err}");
            ExitCode::FAILURE
        }
    }
}
