// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Splits the screen into search, filters, list and status areas
// - render: Main orchestration function that coordinates all rendering
// - search: Search input box and the suggestion dropdown
// - filter_panel: Consultation / specialty / sort options
// - doctor_list: Doctor cards, or loading/error/empty messages
// - status_bar: Current link, history position, key legend
// - toast: Brief pop-up messages
// - report: Plain-text rendering for --print

pub mod doctor_list;
pub mod filter_panel;
pub mod layout;
pub mod render;
pub mod report;
pub mod search;
pub mod status_bar;
pub mod toast;

// Re-export main render function for convenience
pub use render::render;
