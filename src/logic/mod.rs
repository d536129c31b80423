//! Business Logic
//!
//! Pure functions over doctor records and filter state:
//! - errors: Load error classification for the status banner
//! - filtering: Search, consultation and specialty predicates plus `apply`
//! - formatting: Card text and fallbacks
//! - numeric: First-integer extraction from fee/experience text
//! - panel: Filter panel rows and their actions
//! - sorting: Fee and experience orderings
//! - specialties: Distinct specialty labels in a record set
//! - suggestions: Autocomplete for the search box
//! - ui: Option cycling and selection movement
//! - url: Filter state <-> query string

pub mod errors;
pub mod filtering;
pub mod formatting;
pub mod numeric;
pub mod panel;
pub mod sorting;
pub mod specialties;
pub mod suggestions;
pub mod ui;
pub mod url;

pub use filtering::apply;
pub use specialties::all_specialties;
pub use suggestions::suggest;
