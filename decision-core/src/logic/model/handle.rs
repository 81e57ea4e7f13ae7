//! Model Handle
//!
//! Lazily loads a classifier once and shares it. Owned by whoever builds
//! the service state and passed down explicitly.

use std::sync::Arc;

use once_cell::sync::OnceCell;

use super::inference::{LexiconClassifier, TextClassifier};

type Loader = dyn Fn() -> Arc<dyn TextClassifier> + Send + Sync;

/// Shared, lazily initialised classifier
#[derive(Clone)]
pub struct ModelHandle {
    name: Arc<str>,
    loader: Arc<Loader>,
    cell: Arc<OnceCell<Arc<dyn TextClassifier>>>,
}

impl ModelHandle {
    /// Handle that runs `loader` on first use
    pub fn lazy<F>(name: impl Into<String>, loader: F) -> Self
    where
        F: Fn() -> Arc<dyn TextClassifier> + Send + Sync + 'static,
    {
        let name: String = name.into();
        Self {
            name: Arc::from(name),
            loader: Arc::new(loader),
            cell: Arc::new(OnceCell::new()),
        }
    }

    /// Handle around an already loaded classifier
    pub fn loaded(classifier: Arc<dyn TextClassifier>) -> Self {
        let handle = Self::lazy(classifier.model_name().to_string(), {
            let classifier = classifier.clone();
            move || classifier.clone()
        });
        // Fresh cell, cannot already be set
        let _ = handle.cell.set(classifier);
        handle
    }

    /// Built-in lexicon classifier under `name`, loaded on first use
    pub fn lexicon(name: impl Into<String>) -> Self {
        let name: String = name.into();
        let model_name = name.clone();
        Self::lazy(name, move || {
            Arc::new(LexiconClassifier::new(model_name.clone())) as Arc<dyn TextClassifier>
        })
    }

    /// Return the classifier, loading it if needed
    pub fn get(&self) -> Arc<dyn TextClassifier> {
        self.cell
            .get_or_init(|| {
                log::info!("Loading classifier: {}", self.name);
                let classifier = (self.loader)();
                log::info!("Classifier loaded: {}", classifier.model_name());
                classifier
            })
            .clone()
    }

    pub fn is_ready(&self) -> bool {
        self.cell.get().is_some()
    }

    pub fn model_name(&self) -> &str {
        &self.name
    }
}

impl std::fmt::Debug for ModelHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ModelHandle")
            .field("name", &self.name)
            .field("ready", &self.is_ready())
            .finish()
    }
}
