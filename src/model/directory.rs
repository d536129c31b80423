//! Directory Model
//!
//! The loaded record set plus everything derived from it: the specialty
//! universe and the currently visible (filtered, sorted) list.

use crate::api::Doctor;

/// Where the record load currently stands
#[derive(Clone, Debug, PartialEq)]
pub enum LoadState {
    Loading,
    Loaded,
    Failed { message: String },
}

#[derive(Clone, Debug)]
pub struct DirectoryModel {
    /// Full record set, in source order
    pub doctors: Vec<Doctor>,

    /// Distinct specialty labels across `doctors`
    pub specialties: Vec<String>,

    /// Result of applying the current filters to `doctors`
    pub visible: Vec<Doctor>,

    pub load_state: LoadState,
}

impl DirectoryModel {
    pub fn new() -> Self {
        Self {
            doctors: Vec::new(),
            specialties: Vec::new(),
            visible: Vec::new(),
            load_state: LoadState::Loading,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.load_state {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

impl Default for DirectoryModel {
    fn default() -> Self {
        Self::new()
    }
}
