//! Form feedback formatting.

use std::fmt;

use crate::models::TripFormState;

/// Lists the field errors currently held by a form.
pub struct FormErrors<'a>(pub &'a TripFormState);

impl fmt::Display for FormErrors<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let errors = self.0.field_errors();
        if errors.is_empty() {
            return Ok(());
        }

        writeln!(f, "Cannot save trip:")?;
        writeln!(f)?;
        for (field, error) in errors {
            writeln!(f, "- **{field}**: {error}")?;
        }
        Ok(())
    }
}
