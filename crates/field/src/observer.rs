//! Observer registration for validity notifications.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Sent to the registered observer after every recomputation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldNotification {
    /// Name of the field that changed.
    pub field: String,
    pub is_valid: bool,
    pub text: String,
}

/// Handle returned by observer registration, used to unregister.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ObserverId(u64);

/// Callback invoked with every notification.
pub type ValidityObserver = Box<dyn FnMut(&FieldNotification) + Send>;

/// Holds at most one observer; registering replaces the previous one.
#[derive(Default)]
pub(crate) struct ObserverSlot {
    next_id: u64,
    current: Option<(ObserverId, ValidityObserver)>,
}

impl ObserverSlot {
    pub(crate) fn register(&mut self, observer: ValidityObserver) -> ObserverId {
        self.next_id += 1;
        let id = ObserverId(self.next_id);
        self.current = Some((id, observer));
        id
    }

    /// Removes the observer if `id` is still the registered one.
    pub(crate) fn unregister(&mut self, id: ObserverId) -> bool {
        match &self.current {
            Some((current, _)) if *current == id => {
                self.current = None;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn is_registered(&self) -> bool {
        self.current.is_some()
    }

    pub(crate) fn notify(&mut self, notification: &FieldNotification) {
        if let Some((_, observer)) = &mut self.current {
            observer(notification);
        }
    }
}

impl fmt::Debug for ObserverSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverSlot")
            .field("registered", &self.current.as_ref().map(|(id, _)| id))
            .finish()
    }
}
