//! Status reporting sink provided by the host.

/// Host terminal interface.
pub trait Ui: Send + Sync {
    /// Opens a new status channel.
    fn status(&self) -> Box<dyn Status>;
}

/// A single status channel for user-visible progress text.
pub trait Status: Send {
    /// Replaces the current status line.
    fn update(&mut self, message: &str);

    /// Releases the channel. Called exactly once by [`StatusGuard`].
    fn close(&mut self);
}

/// Owns a [`Status`] and closes it when dropped.
///
/// Dropping happens on every exit path, so the channel is released exactly
/// once whether the operation succeeds, fails, or is cancelled.
pub struct StatusGuard {
    status: Box<dyn Status>,
}

impl StatusGuard {
    /// Opens a status channel on `ui`.
    pub fn open(ui: &dyn Ui) -> Self {
        Self {
            status: ui.status(),
        }
    }

    /// Replaces the current status line.
    pub fn update(&mut self, message: &str) {
        self.status.update(message);
    }
}

impl Drop for StatusGuard {
    fn drop(&mut self) {
        self.status.close();
    }
}

impl std::fmt::Debug for StatusGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StatusGuard").finish_non_exhaustive()
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RecordingUi;
    use super::*;

    #[test]
    fn guard_closes_once_on_drop() {
        let ui = RecordingUi::default();
        {
            let mut guard = StatusGuard::open(&ui);
            guard.update("working");
            assert_eq!(ui.snapshot(), (1, 0, vec!["working".to_owned()]));
        }
        assert_eq!(ui.snapshot().1, 1);
    }

    #[test]
    fn guard_closes_on_early_return() {
        fn fails(ui: &dyn Ui) -> Result<(), ()> {
            let mut guard = StatusGuard::open(ui);
            guard.update("about to fail");
            Err(())
        }

        let ui = RecordingUi::default();
        assert!(fails(&ui).is_err());
        assert_eq!(ui.snapshot().1, 1);
    }
}
