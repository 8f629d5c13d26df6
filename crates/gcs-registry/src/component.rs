//! Lifecycle hooks a host calls on a registry component.
//!
//! The host first reads the component's configuration shape through
//! [`Configurable`], populates it from its own configuration source, hands
//! it back through [`ConfigurableNotify::config_set`], and finally invokes
//! [`Registry::push`]. How the component is loaded (in-process, subprocess,
//! RPC) is up to the host and does not leak into these traits.

use tokio_util::sync::CancellationToken;

use crate::error::Result;
use crate::ui::Ui;

/// Configuration retrieval hook.
pub trait Configurable {
    /// Declarative configuration accepted by the component.
    type Config;

    /// Returns the configuration currently held by the component.
    fn config(&self) -> Option<&Self::Config>;
}

/// Configuration acceptance hook.
pub trait ConfigurableNotify: Configurable {
    /// Validates `config` and, on success, stores it for the next push.
    ///
    /// # Errors
    ///
    /// Returns an error and keeps the previous configuration if validation
    /// fails.
    fn config_set(&mut self, config: Self::Config) -> Result<()>;
}

/// Registry push hook.
#[async_trait::async_trait]
pub trait Registry: ConfigurableNotify + Send + Sync {
    /// Descriptor returned to the host on success.
    type Artifact: Send;

    /// Pushes the configured artifact to the registry.
    async fn push(&self, ctx: &PushContext, ui: &dyn Ui) -> Result<Self::Artifact>;
}

/// Cancellable execution context for a single push.
#[derive(Debug, Clone, Default)]
pub struct PushContext {
    token: CancellationToken,
}

impl PushContext {
    /// Creates a context that is never cancelled unless asked to.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a context driven by an existing cancellation token.
    pub fn from_token(token: CancellationToken) -> Self {
        Self { token }
    }

    /// Returns the underlying cancellation token.
    pub fn token(&self) -> &CancellationToken {
        &self.token
    }

    /// Cancels any in-flight operation bound to this context.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Returns `true` once the context has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancel_propagates_to_child_tokens() {
        let parent = CancellationToken::new();
        let ctx = PushContext::from_token(parent.child_token());
        assert!(!ctx.is_cancelled());

        parent.cancel();
        assert!(ctx.is_cancelled());
    }

    #[test]
    fn cancel_from_context() {
        let ctx = PushContext::new();
        let clone = ctx.clone();
        ctx.cancel();
        assert!(clone.token().is_cancelled());
    }
}
