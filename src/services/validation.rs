use serde::Serialize;

pub const TITLE_MIN_CHARS: usize = 3;
pub const DESCRIPTION_MIN_CHARS: usize = 5;

/// One failed body field, in the shape the notes frontend already renders
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub value: String,
    pub msg: String,
    pub param: String,
    pub location: &'static str,
}

impl FieldError {
    pub fn body(param: &str, value: &str, msg: impl Into<String>) -> Self {
        Self {
            value: value.to_string(),
            msg: msg.into(),
            param: param.to_string(),
            location: "body",
        }
    }
}

/// Check a field's length in characters, not bytes
pub fn min_length(param: &str, value: &str, min: usize, msg: &str) -> Option<FieldError> {
    if value.chars().count() < min {
        Some(FieldError::body(param, value, msg))
    } else {
        None
    }
}

/// Rules for a new note. Every failing field is reported.
pub fn validate_new_note(title: &str, description: &str) -> Vec<FieldError> {
    [
        min_length("title", title, TITLE_MIN_CHARS, "Enter a valid title"),
        min_length(
            "description",
            description,
            DESCRIPTION_MIN_CHARS,
            "Description must be at least 5 characters",
        ),
    ]
    .into_iter()
    .flatten()
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_boundary_lengths() {
        assert!(validate_new_note("abc", "abcde").is_empty());
    }

    #[test]
    fn reports_every_failing_field() {
        let errors = validate_new_note("ab", "abcd");
        let params: Vec<&str> = errors.iter().map(|e| e.param.as_str()).collect();
        assert_eq!(params, vec!["title", "description"]);
        assert!(errors.iter().all(|e| e.location == "body"));
        assert_eq!(errors[0].value, "ab");
    }

    #[test]
    fn counts_characters_not_bytes() {
        // three characters, six bytes
        assert!(min_length("title", "日本語", 3, "too short").is_none());
        assert!(min_length("title", "éé", 3, "too short").is_some());
    }
}
