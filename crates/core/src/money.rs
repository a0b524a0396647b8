//! Money formatting helpers.
//!
//! Amounts are carried as integers in the smallest currency unit (pence);
//! this module only renders them. Currency/locale correctness is out of
//! scope; everything is GBP.

/// Render an amount in minor units as `£{pounds}.{pence}`.
pub fn format(minor_units: u64) -> String {
    format!("£{}.{:02}", minor_units / 100, minor_units % 100)
}

/// Render a signed amount (profit can be negative).
pub fn format_signed(minor_units: i64) -> String {
    let sign = if minor_units < 0 { "-" } else { "" };
    let abs = minor_units.unsigned_abs();
    format!("{sign}£{}.{:02}", abs / 100, abs % 100)
}
