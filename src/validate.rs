use std::num::IntErrorKind;

use crate::error::InputError;

/// Number of score slots available in one batch.
pub const MAX_STUDENTS: usize = 4;

pub const MIN_SCORE: i64 = 0;
pub const MAX_SCORE: i64 = 100;

pub fn parse_student_count(text: &str) -> Result<usize, InputError> {
    let count = match text.trim().parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            return Err(match err.kind() {
                IntErrorKind::PosOverflow => InputError::TooManyStudents { max: MAX_STUDENTS },
                IntErrorKind::NegOverflow => InputError::InvalidCount,
                _ => InputError::NotANumber,
            })
        }
    };

    if count <= 0 {
        return Err(InputError::InvalidCount);
    }
    if count > MAX_STUDENTS as i64 {
        return Err(InputError::TooManyStudents { max: MAX_STUDENTS });
    }

    Ok(count as usize)
}

/// `student` is 1-based and only used to name the offending slot.
pub fn parse_score(text: &str, student: usize) -> Result<u8, InputError> {
    if text.is_empty() {
        return Err(InputError::MissingScore { student });
    }

    let value = match text.trim().parse::<i64>() {
        Ok(value) => value,
        Err(err) => {
            return Err(match err.kind() {
                IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                    InputError::OutOfRange { student }
                }
                _ => InputError::NonIntegerScore { student },
            })
        }
    };

    if !(MIN_SCORE..=MAX_SCORE).contains(&value) {
        return Err(InputError::OutOfRange { student });
    }

    Ok(value as u8)
}

/// Validates a batch in slot order and stops at the first bad input.
///
/// Only the first `count` score texts are read; slots past the end of
/// `score_texts` count as empty.
pub fn validate_inputs<S: AsRef<str>>(
    count_text: &str,
    score_texts: &[S],
) -> Result<Vec<u8>, InputError> {
    let count = parse_student_count(count_text)?;
    let mut scores = Vec::with_capacity(count);

    for index in 0..count {
        let text = score_texts.get(index).map(AsRef::as_ref).unwrap_or("");
        scores.push(parse_score(text, index + 1)?);
    }

    Ok(scores)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn count_must_be_numeric() {
        assert_eq!(validate_inputs::<&str>("", &[]), Err(InputError::NotANumber));
        assert_eq!(validate_inputs::<&str>("three", &[]), Err(InputError::NotANumber));
        assert_eq!(validate_inputs::<&str>("2.5", &[]), Err(InputError::NotANumber));
    }

    #[test]
    fn count_must_be_positive() {
        assert_eq!(validate_inputs::<&str>("0", &[]), Err(InputError::InvalidCount));
        assert_eq!(validate_inputs::<&str>("-3", &[]), Err(InputError::InvalidCount));
    }

    #[test]
    fn count_is_capped_at_capacity() {
        assert_eq!(
            validate_inputs::<&str>("5", &[]),
            Err(InputError::TooManyStudents { max: 4 })
        );
        assert_eq!(
            validate_inputs::<&str>("99999999999999999999999", &[]),
            Err(InputError::TooManyStudents { max: 4 })
        );
    }

    #[test]
    fn count_tolerates_surrounding_whitespace() {
        assert_eq!(validate_inputs(" 2 ", &["10", "20"]), Ok(vec![10, 20]));
    }

    #[test]
    fn missing_score_names_student() {
        assert_eq!(
            validate_inputs("3", &["50", ""]),
            Err(InputError::MissingScore { student: 2 })
        );
        assert_eq!(
            validate_inputs("3", &["50", "60"]),
            Err(InputError::MissingScore { student: 3 })
        );
    }

    #[test]
    fn non_integer_score_stops_before_later_students() {
        assert_eq!(
            validate_inputs("2", &["abc", "500"]),
            Err(InputError::NonIntegerScore { student: 1 })
        );
        assert_eq!(
            validate_inputs("1", &["  "]),
            Err(InputError::NonIntegerScore { student: 1 })
        );
        assert_eq!(
            validate_inputs("1", &["88.5"]),
            Err(InputError::NonIntegerScore { student: 1 })
        );
    }

    #[test]
    fn score_range_boundaries() {
        assert_eq!(validate_inputs("2", &["0", "100"]), Ok(vec![0, 100]));
        assert_eq!(
            validate_inputs("1", &["-1"]),
            Err(InputError::OutOfRange { student: 1 })
        );
        assert_eq!(
            validate_inputs("1", &["101"]),
            Err(InputError::OutOfRange { student: 1 })
        );
        assert_eq!(
            validate_inputs("1", &["123456789012345678901234"]),
            Err(InputError::OutOfRange { student: 1 })
        );
    }

    #[test]
    fn extra_slots_are_ignored() {
        assert_eq!(validate_inputs("1", &["70", "junk", ""]), Ok(vec![70]));
    }
}
