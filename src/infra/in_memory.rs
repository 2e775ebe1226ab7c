use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Mutex;
use tracing::debug;

use crate::catalog::WidgetCatalog;
use crate::choice::WidgetChoice;
use crate::repository::{order_choices, CommonError, DyResult, WidgetRepository, WidgetSelection};

/// In-memory widget repository for development/testing
#[derive(Default)]
pub struct InMemoryWidgetRepository {
    choices: Mutex<HashMap<String, WidgetChoice>>,
    failure: Mutex<Option<CommonError>>,
    requests: Mutex<Vec<Vec<String>>>,
}

impl InMemoryWidgetRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_choices<I: IntoIterator<Item = WidgetChoice>>(choices: I) -> Self {
        let repository = Self::new();
        for choice in choices {
            repository.insert(choice);
        }
        repository
    }

    /// Store a choice under its name, replacing any previous one
    pub fn insert(&self, choice: WidgetChoice) {
        let mut choices = self.choices.lock().unwrap();
        choices.insert(choice.name.clone(), choice);
    }

    /// Make every following request fail with `error`
    pub fn fail_with(&self, error: CommonError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn clear_failure(&self) {
        *self.failure.lock().unwrap() = None;
    }

    /// Selector lists of every request received so far
    pub fn requests(&self) -> Vec<Vec<String>> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl<C: WidgetCatalog> WidgetRepository<C> for InMemoryWidgetRepository {
    async fn choose_widgets(&self, selection: &WidgetSelection<C>) -> DyResult<Vec<WidgetChoice>> {
        let selectors = selection.selectors();
        self.requests
            .lock()
            .unwrap()
            .push(selectors.iter().map(|s| s.to_string()).collect());

        if let Some(error) = self.failure.lock().unwrap().clone() {
            debug!("Returning scripted failure: {}", error);
            return Err(error);
        }

        let found: Vec<WidgetChoice> = {
            let choices = self.choices.lock().unwrap();
            selectors
                .iter()
                .filter_map(|s| choices.get(*s).cloned())
                .collect()
        };

        debug!("Resolved {} of {} selectors", found.len(), selectors.len());
        Ok(order_choices(selection, found))
    }
}
