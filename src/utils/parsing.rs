//! Parsing utilities for interactive input.
//!
//! Shared by the shell and the repository so that colour lists and menu
//! selections are interpreted the same way everywhere.

use crate::error::{Result, SwatchError};

// =============================================================================
// Colour Lists
// =============================================================================

/// Split a comma-separated colour list.
///
/// Fragments are trimmed and blank fragments discarded. Duplicates and
/// order are kept.
///
/// # Example
/// ```
/// use filament_swatch::utils::parsing::parse_colours;
///
/// assert_eq!(parse_colours(" Red ,  ,Blue,"), vec!["Red", "Blue"]);
/// assert!(parse_colours("").is_empty());
/// ```
pub fn parse_colours(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(String::from)
        .collect()
}

// =============================================================================
// Numeric Selection
// =============================================================================

/// Result of a numeric menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection {
    /// The user entered `0`.
    Cancel,
    /// A 1-based position. Range checking is left to the caller.
    Index(usize),
}

/// Parse a numeric prompt answer; `0` means cancel.
///
/// # Example
/// ```
/// use filament_swatch::utils::parsing::{parse_selection, Selection};
///
/// assert_eq!(parse_selection(" 2 ").unwrap(), Selection::Index(2));
/// assert_eq!(parse_selection("0").unwrap(), Selection::Cancel);
/// assert!(parse_selection("two").is_err());
/// ```
pub fn parse_selection(input: &str) -> Result<Selection> {
    let input = input.trim();
    let n: usize = input
        .parse()
        .map_err(|_| SwatchError::InvalidInput(format!("'{}' is not a number", input)))?;

    Ok(match n {
        0 => Selection::Cancel,
        n => Selection::Index(n),
    })
}

// =============================================================================
// Tests
// =============================================================================
