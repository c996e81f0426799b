//! Handle owning a single host or broker subscription

/// A registered subscription, owned exclusively by the component that
/// created it
///
/// Releasing the handle (explicitly or on drop) unregisters the handler:
/// no new invocations are dispatched afterwards, while in-flight handler
/// invocations are allowed to complete.
pub struct SubscriptionHandle {
    unsubscribe: Option<Box<dyn FnOnce() + Send>>,
}

impl SubscriptionHandle {
    /// Create a handle wrapping the collaborator's unsubscribe action
    pub fn new(unsubscribe: impl FnOnce() + Send + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Release the subscription
    pub fn release(mut self) {
        self.release_inner();
    }

    fn release_inner(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for SubscriptionHandle {
    fn drop(&mut self) {
        self.release_inner();
    }
}

impl std::fmt::Debug for SubscriptionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SubscriptionHandle")
            .field("released", &self.unsubscribe.is_none())
            .finish()
    }
}
