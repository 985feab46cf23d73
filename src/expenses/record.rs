use chrono::{DateTime, Datelike, Local, Month};

/// The fixed month option set offered by the month picker.
pub const MONTHS: [Month; 12] = [
    Month::January,
    Month::February,
    Month::March,
    Month::April,
    Month::May,
    Month::June,
    Month::July,
    Month::August,
    Month::September,
    Month::October,
    Month::November,
    Month::December,
];

/// The fixed year whitelist offered by the year picker.
pub const YEARS: [u16; 7] = [2022, 2023, 2024, 2025, 2026, 2027, 2028];

pub const DEFAULT_MONTH: Month = Month::January;
pub const DEFAULT_YEAR: u16 = 2024;

/// One logged expense entry.
///
/// The price keeps the string form the user typed; `month` and `year` are
/// the tag the entry was filed under, independent of `created_at`.
#[derive(Debug, Clone)]
pub struct ExpenseRecord {
    pub title: String,
    pub price: String,
    pub month: Month,
    pub year: u16,
    pub created_at: DateTime<Local>,
}

impl ExpenseRecord {
    pub fn new(title: &str, price: &str, month: Month, year: u16) -> Self {
        Self {
            title: title.to_string(),
            price: price.to_string(),
            month,
            year,
            created_at: Local::now(),
        }
    }

    /// Whole currency units of the price. Fractional digits are truncated,
    /// not rounded; a price with no leading digits counts as zero.
    pub fn price_units(&self) -> u64 {
        let integral = self.price.split('.').next().unwrap_or("");
        integral.parse().unwrap_or(0)
    }

    /// Date line shown under the entry, e.g. `January 5, 2024 10:30:45 AM`.
    pub fn date_line(&self, time_format: &str) -> String {
        format!(
            "{} {}, {} {}",
            self.month.name(),
            self.created_at.day(),
            self.year,
            self.created_at.format(time_format)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_price_units_truncates() {
        let rec = ExpenseRecord::new("Tea", "10.9", Month::March, 2024);
        assert_eq!(rec.price_units(), 10);
        let rec = ExpenseRecord::new("Tea", "7", Month::March, 2024);
        assert_eq!(rec.price_units(), 7);
    }
}
