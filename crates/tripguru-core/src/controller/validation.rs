//! Pure validation rules for the trip form.
//!
//! Nothing here touches controller state; the controller calls these after
//! every mutation and stores the results in the next form snapshot.

use jiff::Timestamp;

use crate::models::{FieldError, TripFormState, DEFAULT_PARTICIPANTS, MAX_PARTICIPANTS};

/// Trip names must contain something other than whitespace.
pub fn validate_name(name: &str) -> Option<FieldError> {
    name.trim().is_empty().then_some(FieldError::NameRequired)
}

/// Validates the start/end pair and returns `(start_error, end_error)`.
///
/// At most one side is flagged:
/// - both set and start after end: the end date is flagged
/// - only the start set: the start date is flagged as missing its end
/// - only the end set: the end date is flagged as missing its start
pub fn validate_date_pair(
    start: Option<Timestamp>,
    end: Option<Timestamp>,
) -> (Option<FieldError>, Option<FieldError>) {
    match (start, end) {
        (Some(start), Some(end)) if start > end => (None, Some(FieldError::EndBeforeStart)),
        (Some(_), None) => (Some(FieldError::EndDateMissing), None),
        (None, Some(_)) => (None, Some(FieldError::StartDateMissing)),
        _ => (None, None),
    }
}

/// Parses participant-count text the way the form stores it.
pub fn parse_participants(text: &str) -> Option<i32> {
    text.parse().ok()
}

/// Participant text must be an integer of at least one.
pub fn validate_participants(text: &str) -> Option<FieldError> {
    match parse_participants(text) {
        None => Some(FieldError::InvalidNumber),
        Some(n) if n < 1 => Some(FieldError::TooFewParticipants),
        Some(_) => None,
    }
}

/// Next value of the participant stepper after an increment.
///
/// Unparseable text counts as the default of one.
pub fn increment_participants(text: &str) -> String {
    step_participants(text, 1)
}

/// Next value of the participant stepper after a decrement.
pub fn decrement_participants(text: &str) -> String {
    step_participants(text, -1)
}

fn step_participants(text: &str, delta: i32) -> String {
    let current = parse_participants(text).unwrap_or(DEFAULT_PARTICIPANTS as i32);
    current
        .saturating_add(delta)
        .clamp(DEFAULT_PARTICIPANTS as i32, MAX_PARTICIPANTS as i32)
        .to_string()
}

/// Whether the form may be submitted: a non-blank name and no field errors.
pub fn can_be_saved(form: &TripFormState) -> bool {
    !form.name.trim().is_empty()
        && form.name_error.is_none()
        && form.start_date_error.is_none()
        && form.end_date_error.is_none()
        && form.participants_error.is_none()
}

/// Writes the date-pair errors of the form's current dates into it.
pub(crate) fn apply_date_errors(form: &mut TripFormState) {
    let (start_error, end_error) = validate_date_pair(form.start_date, form.end_date);
    form.start_date_error = start_error;
    form.end_date_error = end_error;
}

/// Recomputes every field error and the save flag from current values.
pub(crate) fn revalidate(form: &mut TripFormState) {
    form.name_error = validate_name(&form.name);
    form.participants_error = validate_participants(&form.participants);
    apply_date_errors(form);
    form.can_be_saved = can_be_saved(form);
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn ts(millis: i64) -> Timestamp {
        Timestamp::from_millisecond(millis).unwrap()
    }

    #[test]
    fn test_validate_name() {
        assert_eq!(validate_name(""), Some(FieldError::NameRequired));
        assert_eq!(validate_name("   \t"), Some(FieldError::NameRequired));
        assert_eq!(validate_name("Rome Trip"), None);
        assert_eq!(validate_name("  Rome  "), None);
    }

    #[test]
    fn test_date_pair_cases() {
        assert_eq!(validate_date_pair(None, None), (None, None));
        assert_eq!(validate_date_pair(Some(ts(1)), Some(ts(2))), (None, None));
        assert_eq!(validate_date_pair(Some(ts(2)), Some(ts(2))), (None, None));
        assert_eq!(
            validate_date_pair(Some(ts(3)), Some(ts(2))),
            (None, Some(FieldError::EndBeforeStart))
        );
        assert_eq!(
            validate_date_pair(Some(ts(3)), None),
            (Some(FieldError::EndDateMissing), None)
        );
        assert_eq!(
            validate_date_pair(None, Some(ts(3))),
            (None, Some(FieldError::StartDateMissing))
        );
    }

    #[test]
    fn test_validate_participants() {
        assert_eq!(validate_participants("1"), None);
        assert_eq!(validate_participants("1000"), None);
        assert_eq!(validate_participants("5000"), None);
        assert_eq!(validate_participants("0"), Some(FieldError::TooFewParticipants));
        assert_eq!(validate_participants("-4"), Some(FieldError::TooFewParticipants));
        assert_eq!(validate_participants(""), Some(FieldError::InvalidNumber));
        assert_eq!(validate_participants("2.5"), Some(FieldError::InvalidNumber));
        assert_eq!(validate_participants("two"), Some(FieldError::InvalidNumber));
        assert_eq!(
            validate_participants("99999999999"),
            Some(FieldError::InvalidNumber)
        );
    }

    #[test]
    fn test_stepper_clamps() {
        assert_eq!(increment_participants("1"), "2");
        assert_eq!(increment_participants("999"), "1000");
        assert_eq!(increment_participants("1000"), "1000");
        assert_eq!(increment_participants("abc"), "2");
        assert_eq!(increment_participants("-10"), "1");
        assert_eq!(decrement_participants("2"), "1");
        assert_eq!(decrement_participants("1"), "1");
        assert_eq!(decrement_participants(""), "1");
        assert_eq!(decrement_participants("5000"), "1000");
    }

    #[test]
    fn test_revalidate_clears_stale_errors() {
        let mut form = TripFormState {
            name: "Rome".to_string(),
            name_error: Some(FieldError::NameRequired),
            participants_error: Some(FieldError::InvalidNumber),
            ..Default::default()
        };
        revalidate(&mut form);
        assert_eq!(form.name_error, None);
        assert_eq!(form.participants_error, None);
        assert!(form.can_be_saved);
    }

    fn field_error() -> impl Strategy<Value = Option<FieldError>> {
        prop_oneof![
            Just(None),
            Just(Some(FieldError::NameRequired)),
            Just(Some(FieldError::InvalidNumber)),
            Just(Some(FieldError::EndBeforeStart)),
            Just(Some(FieldError::StartDateMissing)),
        ]
    }

    proptest! {
        #[test]
        fn prop_date_pair_flags_at_most_one_side(
            start in proptest::option::of(-1_000_000i64..1_000_000),
            end in proptest::option::of(-1_000_000i64..1_000_000),
        ) {
            let (start_error, end_error) = validate_date_pair(start.map(ts), end.map(ts));
            let valid = match (start, end) {
                (None, None) => true,
                (Some(s), Some(e)) => s <= e,
                _ => false,
            };
            prop_assert_eq!(start_error.is_none() && end_error.is_none(), valid);
            prop_assert!(start_error.is_none() || end_error.is_none());
        }

        #[test]
        fn prop_participants_error_iff_not_positive_integer(text in "-?[0-9]{0,6}|[a-z ]{1,4}") {
            let expect_error = match text.parse::<i32>() {
                Ok(n) => n < 1,
                Err(_) => true,
            };
            prop_assert_eq!(validate_participants(&text).is_some(), expect_error);
        }

        #[test]
        fn prop_stepper_stays_in_range(text in "-?[0-9]{0,7}|[a-z]{0,3}", up in any::<bool>()) {
            let next = if up { increment_participants(&text) } else { decrement_participants(&text) };
            let value: u32 = next.parse().unwrap();
            prop_assert!((DEFAULT_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&value));
        }

        #[test]
        fn prop_can_be_saved_iff_named_and_error_free(
            name in "[ a-z]{0,6}",
            name_error in field_error(),
            start_date_error in field_error(),
            end_date_error in field_error(),
            participants_error in field_error(),
        ) {
            let form = TripFormState {
                name: name.clone(),
                name_error,
                start_date_error,
                end_date_error,
                participants_error,
                ..Default::default()
            };
            let expected = !name.trim().is_empty()
                && name_error.is_none()
                && start_date_error.is_none()
                && end_date_error.is_none()
                && participants_error.is_none();
            prop_assert_eq!(can_be_saved(&form), expected);
        }
    }
}
