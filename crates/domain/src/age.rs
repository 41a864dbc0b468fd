use time::Date;
use time::format_description::BorrowedFormatItem;
use time::macros::format_description;

/// Birthdate wire format used by medical records.
const BIRTHDATE_FORMAT: &[BorrowedFormatItem<'_>] = format_description!("[month]/[day]/[year]");

/// Inclusive upper bound for the "child" classification.
pub const CHILD_AGE_MAX: i32 = 18;

/// Outcome of an age computation.
///
/// `Unparseable` never leaves the domain layer: the engine maps it to
/// age 0 before anything reaches a response, so a person with a
/// mangled birthdate is reported — and classified — as a newborn.
/// Questionable, but it is the observed contract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthdateAge {
    Years(i32),
    Unparseable,
}

impl BirthdateAge {
    /// Collapse to the fail-open boundary value.
    pub fn or_zero(self) -> i32 {
        match self {
            Self::Years(years) => years,
            Self::Unparseable => 0,
        }
    }
}

/// Compute the whole-year age for a `MM/DD/YYYY` birthdate as of the
/// given date. Any parse failure yields `Unparseable`.
pub fn age_on(birthdate: &str, as_of: Date) -> BirthdateAge {
    let Ok(born) = Date::parse(birthdate, BIRTHDATE_FORMAT) else {
        return BirthdateAge::Unparseable;
    };

    let mut years = as_of.year() - born.year();
    // Birthday not yet reached this year.
    if (as_of.month() as u8, as_of.day()) < (born.month() as u8, born.day()) {
        years -= 1;
    }
    BirthdateAge::Years(years)
}

/// A person aged `CHILD_AGE_MAX` or less counts as a child.
pub fn is_child(age: i32) -> bool {
    age <= CHILD_AGE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;
    use time::macros::date;

    #[test]
    fn age_after_birthday() {
        assert_eq!(
            age_on("01/01/1990", date!(2024 - 01 - 02)),
            BirthdateAge::Years(34)
        );
    }

    #[test]
    fn age_before_birthday() {
        assert_eq!(
            age_on("01/01/1990", date!(2023 - 12 - 31)),
            BirthdateAge::Years(33)
        );
    }

    #[test]
    fn age_on_birthday_counts_full_year() {
        assert_eq!(
            age_on("03/06/1984", date!(2024 - 03 - 06)),
            BirthdateAge::Years(40)
        );
    }

    #[test]
    fn repeated_calls_agree() {
        let first = age_on("03/06/1984", date!(2024 - 01 - 01));
        let second = age_on("03/06/1984", date!(2024 - 01 - 01));
        assert_eq!(first, second);
        assert_eq!(first, BirthdateAge::Years(39));
    }

    #[test]
    fn malformed_inputs_are_unparseable() {
        for bad in ["", "not-a-date", "1990-01-01", "13/40/1990", "1/1/1990x"] {
            assert_eq!(
                age_on(bad, date!(2024 - 01 - 01)),
                BirthdateAge::Unparseable,
                "{bad:?} should not parse"
            );
        }
    }

    #[test]
    fn unparseable_collapses_to_zero() {
        assert_eq!(BirthdateAge::Unparseable.or_zero(), 0);
        assert_eq!(BirthdateAge::Years(7).or_zero(), 7);
    }

    #[test]
    fn child_threshold_is_inclusive() {
        assert!(is_child(18));
        assert!(is_child(0));
        assert!(!is_child(19));
    }
}
