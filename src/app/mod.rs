//! App Orchestration Methods
//!
//! `impl App` methods grouped by domain. Each one turns a user intent into
//! a model transition (pure, in docfinder::model) plus the UI bookkeeping
//! around it (focus, toasts, logging).

pub(crate) mod filters;
pub(crate) mod history;
pub(crate) mod navigation;
