use std::fmt;

use indexmap::IndexMap;

use crate::error::{WidgetError, WidgetResult};

/// Receives every event a widget emits, in emission order.
///
/// Observers see values only; they cannot reach back into controller state.
pub trait WidgetObserver<E> {
    fn id(&self) -> &str;
    fn on_event(&mut self, event: &E);
}

/// Ordered registry of uniquely named observers.
pub struct ObserverRegistry<E> {
    observers: IndexMap<String, Box<dyn WidgetObserver<E>>>,
}

impl<E> Default for ObserverRegistry<E> {
    fn default() -> Self {
        Self {
            observers: IndexMap::new(),
        }
    }
}

impl<E> fmt::Debug for ObserverRegistry<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ObserverRegistry")
            .field("ids", &self.observers.keys().collect::<Vec<_>>())
            .finish()
    }
}

impl<E> ObserverRegistry<E> {
    pub fn register(&mut self, observer: Box<dyn WidgetObserver<E>>) -> WidgetResult<()> {
        let observer_id = observer.id().to_owned();
        if observer_id.is_empty() {
            return Err(WidgetError::InvalidInput(
                "observer id must not be empty".to_owned(),
            ));
        }
        if self.observers.contains_key(&observer_id) {
            return Err(WidgetError::DuplicateObserver(observer_id));
        }
        self.observers.insert(observer_id, observer);
        Ok(())
    }

    /// Returns `true` when an observer was removed.
    pub fn unregister(&mut self, observer_id: &str) -> bool {
        self.observers.shift_remove(observer_id).is_some()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    #[must_use]
    pub fn contains(&self, observer_id: &str) -> bool {
        self.observers.contains_key(observer_id)
    }

    pub fn emit(&mut self, event: &E) {
        for observer in self.observers.values_mut() {
            observer.on_event(event);
        }
    }
}
