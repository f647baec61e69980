//! Task dispatch.
//!
//! Handlers implement one task kind each and read whatever they need from
//! the task's [`TaskConfig`].

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::TaskConfig;
use crate::error::TaskError;

/// A handler for one task kind.
pub trait TaskHandler: Send + Sync {
    /// Task name this handler answers to (the manifest entry key).
    fn name(&self) -> &'static str;

    /// Perform the task. The handler decides which config properties it
    /// needs and how strictly to read them.
    fn run(&self, config: &TaskConfig) -> Result<(), TaskError>;
}

/// Registry of handlers (task name -> handler).
///
/// Design:
/// - Built during initialization (mutable).
/// - Used during runtime (immutable).
/// This avoids locks and keeps dispatch a plain map lookup.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<&'static str, Arc<dyn TaskHandler>>,
}

impl HandlerRegistry {
    pub fn new() -> Self {
        Self {
            handlers: HashMap::new(),
        }
    }

    /// Register a handler under its own name. Registering the same name
    /// twice is an error rather than last-wins.
    pub fn register(&mut self, handler: Arc<dyn TaskHandler>) -> Result<(), TaskError> {
        let name = handler.name();
        if self.handlers.contains_key(name) {
            return Err(TaskError::DuplicateTask(name.to_string()));
        }
        self.handlers.insert(name, handler);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn TaskHandler>> {
        self.handlers.get(name)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

/// Runner executes one [`TaskConfig`] by dispatching on the task name.
pub struct Runner {
    registry: Arc<HandlerRegistry>,
}

impl Runner {
    pub fn new(registry: Arc<HandlerRegistry>) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Execute one task.
    pub fn execute(&self, config: &TaskConfig) -> Result<(), TaskError> {
        let handler = self
            .registry
            .get(config.name())
            .ok_or_else(|| TaskError::UnknownTask(config.name().to_string()))?;

        handler.run(config)
    }
}
