use chrono::{Months, NaiveDate};
use validator::Validate;

use crate::domain::AccountDraft;
use crate::error::{ApiError, ApiResult, ValidationCode};

pub const MINIMUM_AGE_YEARS: u32 = 13;

/// Latest date of birth accepted on `today`.
///
/// Matches `CURRENT_DATE - INTERVAL '13 years'`: a 29 February today maps to
/// 28 February of the cutoff year.
pub fn latest_permitted_birth_date(today: NaiveDate) -> Option<NaiveDate> {
    today.checked_sub_months(Months::new(MINIMUM_AGE_YEARS * 12))
}

/// Rejects a date of birth later than the cutoff. The boundary is inclusive.
pub fn check_minimum_age(date_of_birth: NaiveDate, today: NaiveDate) -> ApiResult<()> {
    match latest_permitted_birth_date(today) {
        Some(cutoff) if date_of_birth <= cutoff => Ok(()),
        _ => Err(ApiError::validation(ValidationCode::MinimumAge)),
    }
}

/// Field-level constraints followed by the minimum-age rule.
pub fn check_constraints(draft: &AccountDraft, today: NaiveDate) -> ApiResult<()> {
    draft
        .validate()
        .map_err(|_| ApiError::validation(ValidationCode::FieldConstraint))?;
    check_minimum_age(draft.date_of_birth, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::AccountStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_draft() -> AccountDraft {
        AccountDraft {
            email: "a@x.com".to_string(),
            username: "a".to_string(),
            credential_hash: "h".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            date_of_birth: date(1990, 1, 15),
            phone_number: None,
            status: AccountStatus::Active,
            failed_login_attempts: 0,
        }
    }

    #[test]
    fn test_exactly_thirteen_years_is_accepted() {
        let today = date(2024, 6, 10);
        assert!(check_minimum_age(date(2011, 6, 10), today).is_ok());
    }

    #[test]
    fn test_one_day_short_of_thirteen_is_rejected() {
        let today = date(2024, 6, 10);
        let err = check_minimum_age(date(2011, 6, 11), today).unwrap_err();
        assert_eq!(err.validation_code(), Some(ValidationCode::MinimumAge));
    }

    #[test]
    fn test_leap_day_cutoff_clamps_to_end_of_february() {
        assert_eq!(latest_permitted_birth_date(date(2024, 2, 29)), Some(date(2011, 2, 28)));
    }

    #[test]
    fn test_valid_draft_passes() {
        assert!(check_constraints(&valid_draft(), date(2024, 1, 1)).is_ok());
    }

    #[test]
    fn test_malformed_email_is_a_field_constraint() {
        let mut draft = valid_draft();
        draft.email = "not-an-email".to_string();
        let err = check_constraints(&draft, date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.validation_code(), Some(ValidationCode::FieldConstraint));
    }

    #[test]
    fn test_blank_required_fields_are_rejected() {
        for blank in ["username", "first_name", "last_name"] {
            let mut draft = valid_draft();
            match blank {
                "username" => draft.username.clear(),
                "first_name" => draft.first_name.clear(),
                _ => draft.last_name.clear(),
            }
            let err = check_constraints(&draft, date(2024, 1, 1)).unwrap_err();
            assert_eq!(err.validation_code(), Some(ValidationCode::FieldConstraint), "{blank}");
        }
    }

    #[test]
    fn test_overlong_username_is_rejected() {
        let mut draft = valid_draft();
        draft.username = "u".repeat(51);
        assert!(check_constraints(&draft, date(2024, 1, 1)).is_err());
    }

    #[test]
    fn test_negative_failed_login_attempts_is_rejected() {
        let mut draft = valid_draft();
        draft.failed_login_attempts = -1;
        let err = check_constraints(&draft, date(2024, 1, 1)).unwrap_err();
        assert_eq!(err.validation_code(), Some(ValidationCode::FieldConstraint));
    }

    #[test]
    fn test_empty_credential_is_not_a_constraint_failure() {
        let mut draft = valid_draft();
        draft.credential_hash.clear();
        assert!(check_constraints(&draft, date(2024, 1, 1)).is_ok());
    }
}
