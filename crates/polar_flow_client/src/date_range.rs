//! Report date windows: a single calendar month or a whole calendar year.

use chrono::NaiveDate;

use crate::FlowError;

/// Value of the report's `timeFrame` parameter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimeFrame {
    Month,
    Year,
}

impl TimeFrame {
    pub fn as_str(self) -> &'static str {
        match self {
            TimeFrame::Month => "month",
            TimeFrame::Year => "year",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DateRange {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub time_frame: TimeFrame,
}

impl DateRange {
    /// First to last day of `month` in `year`.
    pub fn month(year: i32, month: u32) -> Result<Self, FlowError> {
        let from = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| FlowError::Config(format!("invalid month {month}/{year}")))?;
        let next = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        };
        let to = next
            .and_then(|d| d.pred_opt())
            .ok_or_else(|| FlowError::Config(format!("invalid month {month}/{year}")))?;
        Ok(Self {
            from,
            to,
            time_frame: TimeFrame::Month,
        })
    }

    /// January 1st to December 31st of `year`.
    pub fn whole_year(year: i32) -> Result<Self, FlowError> {
        let from = NaiveDate::from_ymd_opt(year, 1, 1);
        let to = NaiveDate::from_ymd_opt(year, 12, 31);
        match (from, to) {
            (Some(from), Some(to)) => Ok(Self {
                from,
                to,
                time_frame: TimeFrame::Year,
            }),
            _ => Err(FlowError::Config(format!("invalid year {year}"))),
        }
    }

    /// `whole` takes precedence over `month`.
    pub fn resolve(year: i32, month: u32, whole: bool) -> Result<Self, FlowError> {
        if whole {
            Self::whole_year(year)
        } else {
            Self::month(year, month)
        }
    }

    pub fn from_param(&self) -> String {
        format_day(self.from)
    }

    pub fn to_param(&self) -> String {
        format_day(self.to)
    }
}

/// Day-month-year as the report endpoint expects it, e.g. `29-02-2024`.
fn format_day(d: NaiveDate) -> String {
    d.format("%d-%m-%Y").to_string()
}
