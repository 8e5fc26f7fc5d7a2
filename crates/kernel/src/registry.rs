use anyhow::{anyhow, Context};

use crate::action::{Action, ActionCtx};

/// Ordered registry of menu actions keyed by their selector input.
pub struct ActionRegistry<S> {
    actions: Vec<Box<dyn Action<S>>>,
}

impl<S> ActionRegistry<S> {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            actions: Vec::new(),
        }
    }

    /// Register an action; keys must be unique.
    pub fn register(&mut self, action: Box<dyn Action<S>>) -> anyhow::Result<()> {
        if self.get(action.key()).is_some() {
            return Err(anyhow!(
                "action key '{}' is already registered",
                action.key()
            ));
        }
        tracing::debug!(key = action.key(), label = action.label(), "registered action");
        self.actions.push(action);
        Ok(())
    }

    /// All actions in registration order
    pub fn actions(&self) -> impl Iterator<Item = &dyn Action<S>> {
        self.actions.iter().map(|action| action.as_ref())
    }

    /// Look up an action by key
    pub fn get(&self, key: &str) -> Option<&dyn Action<S>> {
        self.actions
            .iter()
            .find(|action| action.key() == key)
            .map(|action| action.as_ref())
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Run the action selected by `key`.
    ///
    /// Returns `Ok(false)` when no action has that key.
    pub fn dispatch(&self, key: &str, ctx: &mut ActionCtx<'_, '_, S>) -> anyhow::Result<bool> {
        let Some(action) = self.get(key) else {
            return Ok(false);
        };

        tracing::debug!(key, label = action.label(), "dispatching action");
        action
            .run(ctx)
            .with_context(|| format!("action '{}' failed", action.label()))?;
        Ok(true)
    }
}

impl<S> Default for ActionRegistry<S> {
    fn default() -> Self {
        Self::new()
    }
}
