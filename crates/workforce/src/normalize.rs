//! Record normalization.
//!
//! Turns raw cell text into [`EmployeeRecord`]s. Every parse is lenient:
//! a cell that cannot be read becomes `None` (or `false` for flags) rather
//! than an error, so one bad row never blocks a report.
//!
//! Status policy: a record is *active* only when its status reads `ACTIVE`
//! after trimming and ignoring case. Every other value, including blanks,
//! typos and labels such as `ON LEAVE`, is classified as a leaver. There
//! is no list of leaver statuses.

use crate::record::{EmployeeRecord, ExitType, Gender, Generation, PositionLevel, RawRow, Status};
use chrono::{Datelike, NaiveDate, NaiveDateTime};

/// Date layouts tried in order.
const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%m/%d/%Y",
    "%d-%b-%Y",
    "%d %B %Y",
    "%B %d, %Y",
];

/// Date-time layouts tried after plain dates.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Normalize a batch of raw rows, one record per row.
pub fn normalize(rows: &[RawRow]) -> Vec<EmployeeRecord> {
    rows.iter().map(normalize_row).collect()
}

/// Normalize a single raw row.
pub fn normalize_row(row: &RawRow) -> EmployeeRecord {
    let status = if cell(&row.status).is_some_and(is_active_status) {
        Status::Active
    } else {
        Status::Leaver
    };

    EmployeeRecord {
        full_name: cell(&row.full_name).map(title_case).unwrap_or_default(),
        gender: cell(&row.gender)
            .map(|g| Gender::from_label(&capitalize(g)))
            .unwrap_or(Gender::Unknown),
        generation: cell(&row.generation)
            .map(Generation::from_label)
            .unwrap_or(Generation::Unknown),
        position_level: cell(&row.position_level)
            .map(PositionLevel::from_label)
            .unwrap_or(PositionLevel::Unknown),
        status,
        calendar_year: cell(&row.calendar_year).and_then(parse_year),
        resignation_date: cell(&row.resignation_date).and_then(parse_date),
        year_joined: cell(&row.year_joined).and_then(parse_year),
        tenure_years: cell(&row.tenure).and_then(parse_number),
        promotion_or_transfer: cell(&row.promotion_or_transfer).is_some_and(parse_flag),
        age: cell(&row.age)
            .and_then(parse_number)
            .filter(|age| {
                (0.0..=f64::from(u32::MAX)).contains(age) && age.fract() == 0.0
            })
            .map(|age| age as u32),
        exit_type: cell(&row.exit_type).and_then(ExitType::from_label),
        resigned_flag: status != Status::Active,
    }
}

/// Trimmed cell text, `None` when blank.
fn cell(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|s| !s.is_empty())
}

/// Whether a status cell reads as active.
pub fn is_active_status(status: &str) -> bool {
    status.trim().to_uppercase() == "ACTIVE"
}

/// Title-case a name: trim, collapse inner whitespace, upper-case every
/// letter that follows a non-letter and lower-case the rest.
///
/// `"  mary-jane  o'neil "` becomes `"Mary-Jane O'Neil"`.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut previous_is_letter = false;
    for (i, word) in text.split_whitespace().enumerate() {
        if i > 0 {
            out.push(' ');
            previous_is_letter = false;
        }
        for c in word.chars() {
            if c.is_alphabetic() {
                if previous_is_letter {
                    out.extend(c.to_lowercase());
                } else {
                    // Title-case mapping: 'ß' becomes "Ss", not "SS"
                    let mut upper = c.to_uppercase();
                    out.extend(upper.next());
                    out.extend(upper.flat_map(char::to_lowercase));
                }
                previous_is_letter = true;
            } else {
                out.push(c);
                previous_is_letter = false;
            }
        }
    }
    out
}

/// Upper-case the first character and lower-case the rest.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.trim().chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

/// Parse a date-like cell.
///
/// A bare year (`2023` or `2023.0`) is read as January 1st of that year.
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    if let Some(year) = parse_bare_year(text) {
        return NaiveDate::from_ymd_opt(year, 1, 1);
    }
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| {
            DATETIME_FORMATS.iter().find_map(|format| {
                NaiveDateTime::parse_from_str(text, format)
                    .ok()
                    .map(|dt| dt.date())
            })
        })
}

/// Parse the year out of a date-like cell.
pub fn parse_year(text: &str) -> Option<i32> {
    parse_date(text).map(|date| date.year())
}

fn parse_bare_year(text: &str) -> Option<i32> {
    let digits = text.strip_suffix(".0").unwrap_or(text);
    if digits.len() == 4 && digits.bytes().all(|b| b.is_ascii_digit()) {
        digits.parse().ok()
    } else {
        None
    }
}

fn parse_number(text: &str) -> Option<f64> {
    text.trim()
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

fn parse_flag(text: &str) -> bool {
    match text.trim().to_ascii_lowercase().as_str() {
        "true" | "yes" | "y" => true,
        other => parse_number(other).is_some_and(|value| value == 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rstest::rstest;

    #[rstest]
    #[case("jane doe", "Jane Doe")]
    #[case("  JANE   DOE ", "Jane Doe")]
    #[case("mary-jane o'neil", "Mary-Jane O'Neil")]
    #[case("Jane Doe", "Jane Doe")]
    #[case("", "")]
    #[case("ßtraße", "Sstraße")]
    #[case("ﬁona", "Fiona")]
    fn test_title_case(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(title_case(input), expected);
        assert_eq!(title_case(&title_case(input)), expected);
    }

    #[rstest]
    #[case("female", "Female")]
    #[case(" MALE ", "Male")]
    #[case("", "")]
    fn test_capitalize(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(capitalize(input), expected);
    }

    #[rstest]
    #[case("2023-03-15", Some((2023, 3, 15)))]
    #[case("2023-03-15 00:00:00", Some((2023, 3, 15)))]
    #[case("2023-03-15T08:30:00", Some((2023, 3, 15)))]
    #[case("03/15/2023", Some((2023, 3, 15)))]
    #[case("15-Mar-2023", Some((2023, 3, 15)))]
    #[case("March 15, 2023", Some((2023, 3, 15)))]
    #[case("2023", Some((2023, 1, 1)))]
    #[case("2023.0", Some((2023, 1, 1)))]
    #[case("not a date", None)]
    #[case("", None)]
    fn test_parse_date(#[case] input: &str, #[case] expected: Option<(i32, u32, u32)>) {
        let expected = expected.map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap());
        assert_eq!(parse_date(input), expected);
    }

    #[rstest]
    #[case("ACTIVE", true)]
    #[case(" active ", true)]
    #[case("Active", true)]
    #[case("LEAVER", false)]
    #[case("ON LEAVE", false)]
    #[case("ACTVE", false)]
    fn test_active_status(#[case] input: &str, #[case] expected: bool) {
        assert_eq!(is_active_status(input), expected);
    }

    #[test]
    fn test_normalize_row() {
        let row = RawRow::named("  jane   doe ")
            .gender("FEMALE")
            .generation(" gen z ")
            .position("Associate")
            .status("active")
            .calendar_year("2023-01-01")
            .year_joined("2021-06-01")
            .tenure("2.5")
            .promoted("1")
            .age("27");

        let record = normalize_row(&row);
        assert_eq!(record.full_name, "Jane Doe");
        assert_eq!(record.gender, Gender::Female);
        assert_eq!(record.generation, Generation::GenZ);
        assert_eq!(record.position_level, PositionLevel::Associate);
        assert_eq!(record.status, Status::Active);
        assert_eq!(record.calendar_year, Some(2023));
        assert_eq!(record.year_joined, Some(2021));
        assert_relative_eq!(record.tenure_years.unwrap(), 2.5);
        assert!(record.promotion_or_transfer);
        assert_eq!(record.age, Some(27));
        assert!(!record.resigned_flag());
        assert!(record.retained_flag());
    }

    #[test]
    fn test_unrecognized_status_is_resigned() {
        let record = normalize_row(&RawRow::named("Sam Lee").status("ON LEAVE"));
        assert_eq!(record.status, Status::Leaver);
        assert!(record.resigned_flag());
        assert!(!record.retained_flag());
    }

    #[test]
    fn test_missing_status_is_resigned() {
        let record = normalize_row(&RawRow::named("Sam Lee"));
        assert!(record.resigned_flag());
    }

    #[rstest]
    #[case("41", Some(41))]
    #[case("41.0", Some(41))]
    #[case("41.5", None)]
    #[case("-3", None)]
    #[case("1e12", None)]
    fn test_age_range(#[case] input: &str, #[case] expected: Option<u32>) {
        assert_eq!(normalize_row(&RawRow::named("Sam Lee").age(input)).age, expected);
    }

    #[test]
    fn test_bad_cells_become_missing() {
        let row = RawRow::named("Sam Lee")
            .status("ACTIVE")
            .calendar_year("sometime")
            .tenure("n/a")
            .age("-3")
            .promoted("maybe");

        let record = normalize_row(&row);
        assert_eq!(record.calendar_year, None);
        assert_eq!(record.tenure_years, None);
        assert_eq!(record.age, None);
        assert!(!record.promotion_or_transfer);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let rows = vec![
            RawRow::named("jane doe")
                .gender("female")
                .generation("millennials")
                .position("manager and up")
                .status("Active")
                .calendar_year("2024-05-01 00:00:00")
                .resignation_date("06/30/2024")
                .tenure("3.75")
                .promoted("1.0")
                .exit_type("voluntary"),
            RawRow::named("  JOHN  SMITH").status("ON LEAVE").age("41"),
            RawRow::named("ßtraße").status("ACTIVE"),
            RawRow::named("Early Bird")
                .calendar_year("0999-01-01")
                .year_joined("0999"),
            RawRow::default(),
        ];

        let once = normalize(&rows);
        assert_eq!(once[2].full_name, "Sstraße");
        assert_eq!(once[3].calendar_year, Some(999));
        assert_eq!(once[3].year_joined, Some(999));

        let rendered: Vec<RawRow> = once.iter().map(RawRow::from).collect();
        let twice = normalize(&rendered);
        assert_eq!(once, twice);
    }
}
