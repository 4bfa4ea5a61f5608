//! Quote reference numbers of the form `PREFIX/YYYY/INITIALS/DD`.

use chrono::{Datelike, NaiveDate};

/// Builds the reference printed on a quotation.
///
/// Initials are the upper-cased first letter of each whitespace-separated
/// word of `customer_name`. A blank name yields an empty initials segment.
///
/// ```
/// use chrono::NaiveDate;
/// use quote_core::quote_number;
///
/// let date = NaiveDate::from_ymd_opt(2026, 3, 7).unwrap();
///
/// assert_eq!(quote_number("ASS", "ravi kumar sharma", date), "ASS/2026/RKS/07");
/// ```
pub fn quote_number(
    prefix: &str,
    customer_name: &str,
    date: NaiveDate,
) -> String {
    let initials: String = customer_name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();

    format!("{}/{}/{}/{:02}", prefix, date.year(), initials, date.day())
}
