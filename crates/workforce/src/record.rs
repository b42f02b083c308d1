//! Employee record types.
//!
//! A [`RawRow`] is one source row exactly as read. An [`EmployeeRecord`] is
//! the same row after normalization, with categorical fields resolved to
//! enums and the resigned/retained flags derived once.

use chrono::NaiveDate;
use derive_more::Display;
use serde::Serialize;
use std::fmt;

/// A categorical attribute with a fixed reporting order.
pub trait Category: Copy + Eq + fmt::Display + fmt::Debug + 'static {
    /// Categories always reported, in display order.
    ///
    /// Values outside this list (such as `Unknown`) are reported after
    /// these, and only when observed.
    const DISPLAY_ORDER: &'static [Self];
}

/// Employee gender.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Gender {
    /// Female
    Female,
    /// Male
    Male,
    /// Missing or unrecognized
    Unknown,
}

impl Gender {
    /// Resolve a capitalized gender label.
    pub fn from_label(label: &str) -> Self {
        match label {
            "Female" | "F" => Self::Female,
            "Male" | "M" => Self::Male,
            _ => Self::Unknown,
        }
    }
}

impl Category for Gender {
    const DISPLAY_ORDER: &'static [Self] = &[Self::Female, Self::Male];
}

/// Birth-cohort label.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Generation {
    /// Baby Boomer
    #[display("Baby Boomer")]
    BabyBoomer,
    /// Generation X
    #[display("Gen X")]
    GenX,
    /// Generation Z
    #[display("Gen Z")]
    GenZ,
    /// Millennial
    Millennial,
    /// Missing or unrecognized
    Unknown,
}

impl Generation {
    /// Resolve a generation label, ignoring case and spacing.
    pub fn from_label(label: &str) -> Self {
        match squash(label).as_str() {
            "babyboomer" | "babyboomers" | "boomer" | "boomers" => Self::BabyBoomer,
            "genx" | "generationx" => Self::GenX,
            "genz" | "generationz" => Self::GenZ,
            "millennial" | "millennials" | "geny" | "generationy" => Self::Millennial,
            _ => Self::Unknown,
        }
    }
}

impl Category for Generation {
    const DISPLAY_ORDER: &'static [Self] =
        &[Self::BabyBoomer, Self::GenX, Self::GenZ, Self::Millennial];
}

/// Position level.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PositionLevel {
    /// Associate
    Associate,
    /// Manager and above
    #[display("Manager & Up")]
    ManagerAndUp,
    /// Missing or unrecognized
    Unknown,
}

impl PositionLevel {
    /// Resolve a position label, ignoring case and spacing.
    pub fn from_label(label: &str) -> Self {
        match squash(label).as_str() {
            "associate" | "associates" => Self::Associate,
            "manager&up" | "managerandup" | "manager&above" | "managerandabove" => {
                Self::ManagerAndUp
            }
            _ => Self::Unknown,
        }
    }

    /// Whether this level is one of the reported levels.
    pub const fn is_reported(self) -> bool {
        matches!(self, Self::Associate | Self::ManagerAndUp)
    }
}

impl Category for PositionLevel {
    const DISPLAY_ORDER: &'static [Self] = &[Self::Associate, Self::ManagerAndUp];
}

/// Employment status.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Status {
    /// Currently employed
    #[display("ACTIVE")]
    Active,
    /// Anything that is not "ACTIVE"
    #[display("LEAVER")]
    Leaver,
}

/// Reason category for a departure.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ExitType {
    /// Employee chose to leave
    Voluntary,
    /// Employee was let go
    Involuntary,
}

impl ExitType {
    /// Resolve an exit type label, ignoring case.
    pub fn from_label(label: &str) -> Option<Self> {
        match squash(label).as_str() {
            "voluntary" => Some(Self::Voluntary),
            "involuntary" => Some(Self::Involuntary),
            _ => None,
        }
    }
}

impl Category for ExitType {
    const DISPLAY_ORDER: &'static [Self] = &[Self::Voluntary, Self::Involuntary];
}

/// Lowercase and drop whitespace.
fn squash(label: &str) -> String {
    label
        .chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}

/// One source row before normalization.
///
/// Every field is the raw cell text, or `None` when the cell is empty or the
/// column is absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawRow {
    /// Full Name
    pub full_name: Option<String>,
    /// Gender
    pub gender: Option<String>,
    /// Generation
    pub generation: Option<String>,
    /// Position/Level
    pub position_level: Option<String>,
    /// Resignee Checking
    pub status: Option<String>,
    /// Calendar Year
    pub calendar_year: Option<String>,
    /// Resignation Date
    pub resignation_date: Option<String>,
    /// Year Joined
    pub year_joined: Option<String>,
    /// Tenure
    pub tenure: Option<String>,
    /// Promotion & Transfer
    pub promotion_or_transfer: Option<String>,
    /// Age
    pub age: Option<String>,
    /// Attrition Type
    pub exit_type: Option<String>,
}

impl RawRow {
    /// Start a row for the given name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            full_name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the gender cell.
    pub fn gender(mut self, value: impl Into<String>) -> Self {
        self.gender = Some(value.into());
        self
    }

    /// Set the generation cell.
    pub fn generation(mut self, value: impl Into<String>) -> Self {
        self.generation = Some(value.into());
        self
    }

    /// Set the position/level cell.
    pub fn position(mut self, value: impl Into<String>) -> Self {
        self.position_level = Some(value.into());
        self
    }

    /// Set the status cell.
    pub fn status(mut self, value: impl Into<String>) -> Self {
        self.status = Some(value.into());
        self
    }

    /// Set the calendar year cell.
    pub fn calendar_year(mut self, value: impl Into<String>) -> Self {
        self.calendar_year = Some(value.into());
        self
    }

    /// Set the resignation date cell.
    pub fn resignation_date(mut self, value: impl Into<String>) -> Self {
        self.resignation_date = Some(value.into());
        self
    }

    /// Set the year joined cell.
    pub fn year_joined(mut self, value: impl Into<String>) -> Self {
        self.year_joined = Some(value.into());
        self
    }

    /// Set the tenure cell.
    pub fn tenure(mut self, value: impl Into<String>) -> Self {
        self.tenure = Some(value.into());
        self
    }

    /// Set the promotion & transfer cell.
    pub fn promoted(mut self, value: impl Into<String>) -> Self {
        self.promotion_or_transfer = Some(value.into());
        self
    }

    /// Set the age cell.
    pub fn age(mut self, value: impl Into<String>) -> Self {
        self.age = Some(value.into());
        self
    }

    /// Set the attrition type cell.
    pub fn exit_type(mut self, value: impl Into<String>) -> Self {
        self.exit_type = Some(value.into());
        self
    }
}

/// A normalized employee observation.
///
/// The same person may appear in several records, one per snapshot year.
/// Records are built by [`crate::normalize`], which also derives the
/// resigned/retained flags.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EmployeeRecord {
    /// Identity key: trimmed, whitespace-collapsed, title-cased name
    pub full_name: String,
    /// Gender
    pub gender: Gender,
    /// Generation
    pub generation: Generation,
    /// Position level
    pub position_level: PositionLevel,
    /// Employment status
    pub status: Status,
    /// Snapshot year, `None` when the date was missing or unparseable
    pub calendar_year: Option<i32>,
    /// Resignation date
    pub resignation_date: Option<NaiveDate>,
    /// Year the employee joined
    pub year_joined: Option<i32>,
    /// Tenure in years at the snapshot
    pub tenure_years: Option<f64>,
    /// Promoted or transferred during the snapshot
    pub promotion_or_transfer: bool,
    /// Age in years
    pub age: Option<u32>,
    /// Voluntary or involuntary departure
    pub exit_type: Option<ExitType>,
    pub(crate) resigned_flag: bool,
}

impl EmployeeRecord {
    /// Whether the record counts as a leaver.
    pub const fn resigned_flag(&self) -> bool {
        self.resigned_flag
    }

    /// Whether the record counts as retained.
    pub const fn retained_flag(&self) -> bool {
        !self.resigned_flag
    }

    /// Month of the resignation date (1-12).
    pub fn resignation_month(&self) -> Option<u32> {
        use chrono::Datelike;
        self.resignation_date.map(|date| date.month())
    }
}

impl From<&EmployeeRecord> for RawRow {
    /// Render a record back into canonical cell text.
    fn from(record: &EmployeeRecord) -> Self {
        let known = |label: String, unknown: bool| (!unknown).then_some(label);
        Self {
            full_name: Some(record.full_name.clone()),
            gender: known(record.gender.to_string(), record.gender == Gender::Unknown),
            generation: known(
                record.generation.to_string(),
                record.generation == Generation::Unknown,
            ),
            position_level: known(
                record.position_level.to_string(),
                record.position_level == PositionLevel::Unknown,
            ),
            status: Some(record.status.to_string()),
            calendar_year: record.calendar_year.map(|year| format!("{year:04}")),
            resignation_date: record.resignation_date.map(|date| date.to_string()),
            year_joined: record.year_joined.map(|year| format!("{year:04}")),
            tenure: record.tenure_years.map(|tenure| tenure.to_string()),
            promotion_or_transfer: Some(
                if record.promotion_or_transfer { "1" } else { "0" }.to_string(),
            ),
            age: record.age.map(|age| age.to_string()),
            exit_type: record.exit_type.map(|exit| exit.to_string()),
        }
    }
}
