//! Parsing of composite (`region:image-id`) artifact ids.
//!
//! Only the first two `:`-separated fields are used. Amazon artifacts that
//! span several regions (`us-east-1:ami-1,eu-west-1:ami-2`) therefore yield
//! the first region and everything up to the next `:` as the image id.

use crate::error::MalformedIdentifierError;

const DELIMITER: char = ':';

/// The two fields of a composite artifact id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompositeId<'a> {
    pub region: &'a str,
    pub image: &'a str,
}

/// Split `id` into region and image id.
///
/// Fails when `id` contains no delimiter. Empty fields are returned as-is.
pub fn parse_composite(id: &str) -> Result<CompositeId<'_>, MalformedIdentifierError> {
    let mut fields = id.split(DELIMITER);

    // `split` always yields at least one field.
    let region = fields.next().unwrap_or_default();
    let image = fields.next().ok_or_else(|| MalformedIdentifierError { id: id.to_string() })?;

    Ok(CompositeId { region, image })
}
