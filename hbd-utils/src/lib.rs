//! Shared utility functions for hotel dashboard crates.

/// Number formatting for KPI cards and CLI output
pub mod formatting {
    /// Format an integer with comma thousands separators: 119390 -> "119,390"
    pub fn format_thousands(value: u64) -> String {
        let digits = value.to_string();
        let mut out = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                out.push(',');
            }
            out.push(ch);
        }
        out
    }

    /// Format a percentage that is already scaled to 0-100: 37.04 -> "37.0%"
    pub fn format_percent(value: f64, decimals: usize) -> String {
        format!("{:.*}%", decimals, value)
    }

    /// Format a number of days: 7.5 -> "7.5 days"
    pub fn format_days(value: f64, decimals: usize) -> String {
        format!("{:.*} days", decimals, value)
    }

    /// Format a dollar amount with two decimals: 90.0 -> "$90.00"
    ///
    /// The sign follows the symbol: -6.38 -> "$-6.38"
    pub fn format_currency(value: f64) -> String {
        format!("${:.2}", value)
    }

}
