//! Memo field constants and input validation.
//!
//! Handlers run these checks before a request reaches the memo service,
//! so the service only ever sees well-formed input.

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a memo title in characters.
pub const MAX_TITLE_LENGTH: usize = 255;

/// Maximum length of memo content in characters.
pub const MAX_CONTENT_LENGTH: usize = 10_000;

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a memo title: required, not blank, bounded length.
pub fn validate_title(title: &str) -> Result<(), String> {
    if title.trim().is_empty() {
        return Err("Memo title cannot be empty".to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Memo title exceeds maximum length of {MAX_TITLE_LENGTH} characters"
        ));
    }
    Ok(())
}

/// Validate memo content. Empty content is allowed.
pub fn validate_content(content: &str) -> Result<(), String> {
    if content.chars().count() > MAX_CONTENT_LENGTH {
        return Err(format!(
            "Memo content exceeds maximum length of {MAX_CONTENT_LENGTH} characters"
        ));
    }
    Ok(())
}
