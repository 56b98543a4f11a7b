//! Terminal output formatting

pub mod display;
pub mod formatters;

pub use display::{
    SimulationSummary, print_attribute_header, print_guess_row, print_session_result,
    print_simulation_summary,
};
pub use formatters::{column_width, format_cell, hint_glyph, pad_to};
