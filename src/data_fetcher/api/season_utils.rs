//! Season and date helpers for the dated endpoints

use chrono::{Datelike, Local, NaiveDate, Utc};

use crate::error::AppError;

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(date: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").map_err(|e| {
        AppError::datetime_parse_error(format!("Invalid date '{date}', expected YYYY-MM-DD: {e}"))
    })
}

/// Today's date in the local timezone as `YYYY-MM-DD`
pub fn today_local() -> String {
    Utc::now()
        .with_timezone(&Local)
        .format("%Y-%m-%d")
        .to_string()
}

/// Season identifier (e.g. `"20232024"`) that a date belongs to.
/// Seasons roll over in September.
pub fn season_for_date(date: NaiveDate) -> String {
    let start_year = if date.month() >= 9 {
        date.year()
    } else {
        date.year() - 1
    };
    format!("{start_year}{}", start_year + 1)
}

/// Season identifier for today
pub fn current_season() -> String {
    season_for_date(Utc::now().with_timezone(&Local).date_naive())
}

/// Checks that a season identifier is two consecutive years, e.g. `"20232024"`.
pub fn validate_season(season: &str) -> Result<(), AppError> {
    let invalid = || {
        AppError::config_error(format!(
            "Invalid season '{season}', expected two consecutive years like 20232024"
        ))
    };

    if season.len() != 8 || !season.chars().all(|c| c.is_ascii_digit()) {
        return Err(invalid());
    }

    let start: i32 = season[..4].parse().map_err(|_| invalid())?;
    let end: i32 = season[4..].parse().map_err(|_| invalid())?;
    if end != start + 1 {
        return Err(invalid());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_season_for_date() {
        let october = NaiveDate::from_ymd_opt(2023, 10, 10).unwrap();
        let march = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
        let august = NaiveDate::from_ymd_opt(2024, 8, 31).unwrap();
        let september = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();

        assert_eq!(season_for_date(october), "20232024");
        assert_eq!(season_for_date(march), "20232024");
        assert_eq!(season_for_date(august), "20232024");
        assert_eq!(season_for_date(september), "20242025");
    }

    #[test]
    fn test_parse_date() {
        assert!(parse_date("2024-01-15").is_ok());
        assert!(matches!(
            parse_date("15.01.2024"),
            Err(AppError::DateTimeParse(_))
        ));
    }

    #[test]
    fn test_today_local_is_parseable() {
        assert!(parse_date(&today_local()).is_ok());
        assert!(validate_season(&current_season()).is_ok());
    }

    #[test]
    fn test_validate_season() {
        assert!(validate_season("20232024").is_ok());
        assert!(validate_season("20232025").is_err());
        assert!(validate_season("2023").is_err());
        assert!(validate_season("2023-2024").is_err());
    }
}
