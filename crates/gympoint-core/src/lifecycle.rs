//! Subscription lifecycle calculations.
//!
//! Pure calendar/date arithmetic backing the subscription tracker:
//! `paid_until` extension and renewal, expiry-proximity notices, the
//! registration default horizon, payment averaging, and age derivation.
//! All functions are deterministic in their date arguments; the
//! now-based wrappers exist only for call-site convenience.

use chrono::{Datelike, Duration, Months, NaiveDate, Utc};
use rust_decimal::Decimal;

/// Days within which an upcoming expiry produces a notice.
const EXPIRY_NOTICE_WINDOW_DAYS: i64 = 10;

/// Days of subscription granted to a newly registered student,
/// independent of any tier selection at signup.
const REGISTRATION_GRACE_DAYS: i64 = 30;

/// Add a whole number of calendar months to a date.
///
/// Month-end overflow clamps to the last day of the target month:
/// Jan 31 + 1 month is Feb 29 in a leap year and Feb 28 otherwise,
/// never Mar 2/3.
#[must_use]
pub fn extend_by_months(base: NaiveDate, months: u32) -> NaiveDate {
    base + Months::new(months)
}

/// The `paid_until` horizon for a student registered on `registered_on`.
#[must_use]
pub fn default_paid_until(registered_on: NaiveDate) -> NaiveDate {
    registered_on + Duration::days(REGISTRATION_GRACE_DAYS)
}

/// Extend a student's `paid_until` by `months` whole months.
///
/// The extension base is the later of `today` and the current horizon, so
/// the result is monotonically non-decreasing: renewing an expired
/// subscription starts counting from today, renewing an active one
/// stacks onto the remaining time.
#[must_use]
pub fn renew_paid_until(current: Option<NaiveDate>, today: NaiveDate, months: u32) -> NaiveDate {
    let base = match current {
        Some(paid_until) if paid_until > today => paid_until,
        _ => today,
    };
    extend_by_months(base, months)
}

/// Expiry-proximity notice for a `paid_until` horizon, evaluated at `today`.
///
/// - `None` when no horizon is set or it is more than 10 days out
/// - "will expire in N day(s)" when 0 <= N <= 10
/// - "expired N day(s) ago" once the horizon has passed
///
/// The comparison is a calendar-day difference; time of day never
/// shifts the boundary.
#[must_use]
pub fn expiry_notice_on(paid_until: Option<NaiveDate>, today: NaiveDate) -> Option<String> {
    let paid_until = paid_until?;
    let days = (paid_until - today).num_days();
    if days < 0 {
        Some(format!("Subscription expired {} day(s) ago.", -days))
    } else if days <= EXPIRY_NOTICE_WINDOW_DAYS {
        Some(format!("Subscription will expire in {days} day(s)."))
    } else {
        None
    }
}

/// Now-based convenience wrapper around [`expiry_notice_on`].
#[must_use]
pub fn expiry_notice(paid_until: Option<NaiveDate>) -> Option<String> {
    expiry_notice_on(paid_until, Utc::now().date_naive())
}

/// Whole years of age on `today`, decremented when the birthday has not
/// yet occurred this year.
#[must_use]
pub fn age_on(birthdate: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - birthdate.year();
    if (today.month(), today.day()) < (birthdate.month(), birthdate.day()) {
        age -= 1;
    }
    age
}

/// Weekly and monthly payment averages over a payment history.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PaymentAverages {
    /// Total divided by elapsed whole weeks since the earliest payment.
    pub weekly: Decimal,
    /// Total divided by elapsed calendar months since the earliest payment.
    pub monthly: Decimal,
}

/// Average a payment history `(amount, paid_at)` as of `today`.
///
/// The divisor floors at 1 week / 1 month so a brand-new history is
/// averaged over a single period rather than dividing by zero. An empty
/// history yields zero for both averages.
#[must_use]
pub fn payment_averages(payments: &[(Decimal, NaiveDate)], today: NaiveDate) -> PaymentAverages {
    let Some(earliest) = payments.iter().map(|(_, paid_at)| *paid_at).min() else {
        return PaymentAverages::default();
    };

    let total: Decimal = payments.iter().map(|(amount, _)| *amount).sum();

    let elapsed_days = (today - earliest).num_days().max(0);
    let weeks = (elapsed_days / 7).max(1);

    let mut months =
        i64::from(today.year() - earliest.year()) * 12 + i64::from(today.month()) - i64::from(earliest.month());
    if today.day() < earliest.day() {
        months -= 1;
    }
    let months = months.max(1);

    PaymentAverages {
        weekly: total / Decimal::from(weeks),
        monthly: total / Decimal::from(months),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn month_extension_clamps_leap_february() {
        assert_eq!(extend_by_months(date(2024, 1, 31), 1), date(2024, 2, 29));
    }

    #[test]
    fn month_extension_clamps_regular_february() {
        assert_eq!(extend_by_months(date(2023, 1, 31), 1), date(2023, 2, 28));
    }

    #[test]
    fn month_extension_plain_case() {
        assert_eq!(extend_by_months(date(2024, 3, 15), 2), date(2024, 5, 15));
        assert_eq!(extend_by_months(date(2024, 11, 30), 3), date(2025, 2, 28));
    }

    #[test]
    fn registration_default_is_thirty_days() {
        assert_eq!(default_paid_until(date(2024, 6, 1)), date(2024, 7, 1));
    }

    #[test]
    fn renewal_from_expired_horizon_starts_today() {
        let today = date(2024, 6, 10);
        let expired = Some(date(2024, 5, 1));
        assert_eq!(renew_paid_until(expired, today, 1), date(2024, 7, 10));
    }

    #[test]
    fn renewal_from_active_horizon_stacks() {
        let today = date(2024, 6, 10);
        let active = Some(date(2024, 7, 1));
        assert_eq!(renew_paid_until(active, today, 1), date(2024, 8, 1));
    }

    #[test]
    fn renewal_without_horizon_starts_today() {
        let today = date(2024, 6, 10);
        assert_eq!(renew_paid_until(None, today, 2), date(2024, 8, 10));
    }

    #[test]
    fn renewal_never_decreases_horizon() {
        let today = date(2024, 6, 10);
        for current in [None, Some(date(2020, 1, 1)), Some(date(2030, 1, 1))] {
            let renewed = renew_paid_until(current, today, 1);
            assert!(renewed >= current.unwrap_or(today));
            assert!(renewed > today);
        }
    }

    #[test]
    fn notice_within_window() {
        let today = date(2024, 6, 10);
        assert_eq!(
            expiry_notice_on(Some(date(2024, 6, 15)), today).as_deref(),
            Some("Subscription will expire in 5 day(s).")
        );
    }

    #[test]
    fn notice_on_expiry_day() {
        let today = date(2024, 6, 10);
        assert_eq!(
            expiry_notice_on(Some(today), today).as_deref(),
            Some("Subscription will expire in 0 day(s).")
        );
    }

    #[test]
    fn notice_after_expiry() {
        let today = date(2024, 6, 10);
        assert_eq!(
            expiry_notice_on(Some(date(2024, 6, 7)), today).as_deref(),
            Some("Subscription expired 3 day(s) ago.")
        );
    }

    #[test]
    fn no_notice_outside_window() {
        let today = date(2024, 6, 10);
        assert_eq!(expiry_notice_on(Some(date(2024, 6, 21)), today), None);
    }

    #[test]
    fn no_notice_without_horizon() {
        assert_eq!(expiry_notice_on(None, date(2024, 6, 10)), None);
    }

    #[test]
    fn boundary_day_ten_still_notices() {
        let today = date(2024, 6, 10);
        assert_eq!(
            expiry_notice_on(Some(date(2024, 6, 20)), today).as_deref(),
            Some("Subscription will expire in 10 day(s).")
        );
    }

    #[test]
    fn age_before_and_after_birthday() {
        let birth = date(2000, 6, 15);
        assert_eq!(age_on(birth, date(2024, 6, 14)), 23);
        assert_eq!(age_on(birth, date(2024, 6, 15)), 24);
        assert_eq!(age_on(birth, date(2024, 6, 16)), 24);
    }

    #[test]
    fn empty_history_averages_to_zero() {
        let averages = payment_averages(&[], date(2024, 6, 10));
        assert_eq!(averages.weekly, Decimal::ZERO);
        assert_eq!(averages.monthly, Decimal::ZERO);
    }

    #[test]
    fn fresh_history_uses_floor_divisors() {
        // Single payment made today: one week, one month.
        let today = date(2024, 6, 10);
        let averages = payment_averages(&[(Decimal::from(70), today)], today);
        assert_eq!(averages.weekly, Decimal::from(70));
        assert_eq!(averages.monthly, Decimal::from(70));
    }

    #[test]
    fn averages_divide_by_elapsed_periods() {
        let today = date(2024, 6, 10);
        let payments = [
            (Decimal::from(100), date(2024, 4, 10)),
            (Decimal::from(100), date(2024, 5, 10)),
        ];
        // Earliest is 61 days back: 8 whole weeks, 2 calendar months.
        let averages = payment_averages(&payments, today);
        assert_eq!(averages.weekly, Decimal::from(25));
        assert_eq!(averages.monthly, Decimal::from(100));
    }

    #[test]
    fn partial_month_rounds_down() {
        let today = date(2024, 6, 9);
        let payments = [(Decimal::from(60), date(2024, 4, 10))];
        // Apr 10 -> Jun 9 is one full month plus change.
        let averages = payment_averages(&payments, today);
        assert_eq!(averages.monthly, Decimal::from(60));
    }
}
