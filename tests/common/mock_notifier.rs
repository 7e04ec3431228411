//! Mock Notifier for Testing
//!
//! Records all notices for verification.

#![allow(dead_code)]

use declension_fixer::notify::Notifier;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
pub struct MockNotifier {
    pub notices: Arc<Mutex<Vec<String>>>,
}

impl MockNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_notices(&self) -> Vec<String> {
        self.notices.lock().unwrap().clone()
    }

    /// Notices that report a failure
    pub fn errors(&self) -> Vec<String> {
        self.get_notices()
            .into_iter()
            .filter(|n| n.starts_with("Error"))
            .collect()
    }
}

impl Notifier for MockNotifier {
    fn notify(&self, message: &str) {
        self.notices.lock().unwrap().push(message.to_string());
    }
}
