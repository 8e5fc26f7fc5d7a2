use crate::console::Console;
use crate::settings::Settings;

/// Context handed to an action for one invocation.
pub struct ActionCtx<'a, 'c, S> {
    pub settings: &'a Settings,
    pub state: &'a mut S,
    pub console: &'a mut Console<'c>,
}

/// One entry of the interactive menu, operating on shared state `S`.
pub trait Action<S> {
    /// Input that selects this action, e.g. `"1"`.
    fn key(&self) -> &'static str;

    /// Human-readable label shown in the menu.
    fn label(&self) -> &'static str;

    /// Run the action. Domain refusals are reported to the console by the
    /// action itself; an `Err` here means the terminal is unusable.
    fn run(&self, ctx: &mut ActionCtx<'_, '_, S>) -> anyhow::Result<()>;
}

/// Plain function-pointer action.
pub type Handler<S> = fn(&mut ActionCtx<'_, '_, S>) -> anyhow::Result<()>;

/// [`Action`] backed by a bare function.
pub struct FnAction<S> {
    key: &'static str,
    label: &'static str,
    handler: Handler<S>,
}

impl<S> FnAction<S> {
    pub const fn new(key: &'static str, label: &'static str, handler: Handler<S>) -> Self {
        Self {
            key,
            label,
            handler,
        }
    }
}

impl<S> std::fmt::Debug for FnAction<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnAction")
            .field("key", &self.key)
            .field("label", &self.label)
            .finish()
    }
}

impl<S> Action<S> for FnAction<S> {
    fn key(&self) -> &'static str {
        self.key
    }

    fn label(&self) -> &'static str {
        self.label
    }

    fn run(&self, ctx: &mut ActionCtx<'_, '_, S>) -> anyhow::Result<()> {
        (self.handler)(ctx)
    }
}
