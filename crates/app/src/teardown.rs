/// Handle to something a view acquired and must give back: a document
/// listener, a pending timer.
///
/// Dropping the handle runs the release closure exactly once. Views keep
/// these in hooks so every unmount path releases them.
#[must_use = "dropping a Teardown releases the resource immediately"]
pub struct Teardown {
    release: Option<Box<dyn FnOnce()>>,
}

impl Teardown {
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A handle with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }

    /// Release now instead of at drop.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Teardown {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Teardown {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Teardown")
            .field("armed", &self.release.is_some())
            .finish()
    }
}
