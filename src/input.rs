//! Reference string loading.
//!
//! A reference string is a list of page numbers separated by any whitespace
//! (spaces, tabs or newlines). Every token must be a non-negative integer
//! that fits a [`PageId`]; anything else is rejected with its position, so
//! the replacers only ever see well-formed input.

use std::fs;
use std::path::Path;

use log::debug;

use crate::common::{Error, PageId, Result};

/// Parse a whitespace-delimited reference string.
///
/// # Errors
/// - `Error::InvalidReference` for a token that is not a valid page number
/// - `Error::TooManyReferences` if there are more than `max` tokens
///
/// # Example
/// ```
/// use pagesim::input::parse_references;
/// use pagesim::PageId;
///
/// let refs = parse_references("1 2\n3\t1", 16).unwrap();
/// assert_eq!(refs, vec![PageId::new(1), PageId::new(2), PageId::new(3), PageId::new(1)]);
/// assert!(parse_references("1 -2", 16).is_err());
/// ```
pub fn parse_references(text: &str, max: usize) -> Result<Vec<PageId>> {
    let mut references = Vec::new();

    for (position, token) in text.split_whitespace().enumerate() {
        if position == max {
            return Err(Error::TooManyReferences { max });
        }

        let page_id = token
            .parse::<PageId>()
            .map_err(|_| Error::InvalidReference {
                position,
                token: token.to_string(),
            })?;
        references.push(page_id);
    }

    Ok(references)
}

/// Read and parse a reference string from a file.
///
/// # Errors
/// - `Error::Io` if the file cannot be read
/// - any error from [`parse_references`]
pub fn read_references<P: AsRef<Path>>(path: P, max: usize) -> Result<Vec<PageId>> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let references = parse_references(&text, max)?;

    debug!(
        "loaded {} references from {}",
        references.len(),
        path.display()
    );
    Ok(references)
}
