pub mod parsing;

// Re-export commonly used items
pub use parsing::{Selection, parse_colours, parse_selection};
