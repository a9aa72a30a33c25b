use crate::domain::DomainError;

pub const MIN_NOTES_LENGTH: usize = 50;
pub const DEFAULT_MAX_NOTES_LENGTH: usize = 50_000;

/// Check the notes length in characters and return it.
///
/// Runs before the extractor so out-of-range input never reaches the model.
pub fn validate_raw_notes(raw_notes: &str, max_length: usize) -> Result<usize, DomainError> {
    let length = raw_notes.chars().count();

    if length < MIN_NOTES_LENGTH {
        return Err(DomainError::invalid_input(format!(
            "raw_notes must be at least {MIN_NOTES_LENGTH} characters, got {length}"
        )));
    }
    if length > max_length {
        return Err(DomainError::invalid_input(format!(
            "raw_notes must be at most {max_length} characters, got {length}"
        )));
    }

    Ok(length)
}
