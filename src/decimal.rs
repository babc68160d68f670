use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub, SubAssign};
use std::str::FromStr;

use crate::errors::{Result, SimulationError};

/// number of significant digits carried through intermediate arithmetic
pub const WORKING_DIGITS: u32 = 10;

/// round half-up to the fixed working precision of ten significant digits
pub fn round_working(value: Decimal) -> Decimal {
    if value.is_zero() {
        return value;
    }
    let magnitude = digit_count(value.mantissa()) - value.scale() as i32;
    let dp = WORKING_DIGITS as i32 - magnitude;
    if dp >= 0 {
        value.round_dp_with_strategy(dp.min(28) as u32, RoundingStrategy::MidpointAwayFromZero)
    } else {
        // more integer digits than the working precision: scale down, round, scale back
        let shift = pow10((-dp) as u32);
        let scaled = (value / shift).round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        scaled.checked_mul(shift).unwrap_or(value)
    }
}

/// raise a growth factor to an integer power, rounding each step to the working precision
pub fn powi(base: Decimal, exp: u32) -> Result<Decimal> {
    let mut compound = Decimal::ONE;
    for _ in 0..exp {
        compound = match compound.checked_mul(base) {
            Some(product) => round_working(product),
            None => {
                return Err(SimulationError::CalculationError {
                    message: format!("overflow raising {} to power {}", base, exp),
                })
            }
        };
    }
    Ok(compound)
}

fn digit_count(mantissa: i128) -> i32 {
    let mut n = mantissa.abs();
    let mut count = 1;
    while n >= 10 {
        n /= 10;
        count += 1;
    }
    count
}

fn pow10(exp: u32) -> Decimal {
    Decimal::from_i128_with_scale(10_i128.pow(exp), 0)
}

/// Money type carrying amounts at the fixed working precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Money(Decimal);

impl Money {
    pub const ZERO: Money = Money(Decimal::ZERO);

    /// create from decimal
    pub fn from_decimal(d: Decimal) -> Self {
        Money(round_working(d))
    }

    /// create from string with exact parsing
    pub fn from_str_exact(s: &str) -> std::result::Result<Self, rust_decimal::Error> {
        Ok(Money(round_working(Decimal::from_str(s)?)))
    }

    /// create from integer amount (rupees, dollars, etc)
    pub fn from_major(amount: i64) -> Self {
        Money(Decimal::from(amount))
    }

    /// get underlying decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// round half-up to the whole currency unit
    pub fn round_unit(&self) -> Self {
        Money(
            self.0
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
                .normalize(),
        )
    }

    /// round half-up to two decimal places for display
    pub fn round_display(&self) -> Self {
        Money(self.0.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero))
    }

    /// whole currency units as an integer
    pub fn to_whole_units(&self) -> i64 {
        self.round_unit().0.to_string().parse().unwrap_or(0)
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// absolute value
    pub fn abs(&self) -> Self {
        Money(self.0.abs())
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Money {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Money::from_str_exact(s)
    }
}

impl From<Decimal> for Money {
    fn from(d: Decimal) -> Self {
        Money::from_decimal(d)
    }
}

impl Add for Money {
    type Output = Money;

    fn add(self, other: Money) -> Money {
        Money(round_working(self.0 + other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Money) {
        self.0 = round_working(self.0 + other.0);
    }
}

impl Sub for Money {
    type Output = Money;

    fn sub(self, other: Money) -> Money {
        Money(round_working(self.0 - other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Money) {
        self.0 = round_working(self.0 - other.0);
    }
}

impl Mul<Decimal> for Money {
    type Output = Money;

    fn mul(self, other: Decimal) -> Money {
        Money(round_working(self.0 * other))
    }
}

impl Div<Decimal> for Money {
    type Output = Money;

    fn div(self, other: Decimal) -> Money {
        Money(round_working(self.0 / other))
    }
}

/// periodic rate expressed as a fraction at the working precision
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct Rate(Decimal);

impl Rate {
    pub const ZERO: Rate = Rate(Decimal::ZERO);

    /// create from decimal (e.g., 0.0075 for 0.75% a month)
    pub fn from_decimal(d: Decimal) -> Self {
        Rate(round_working(d))
    }

    /// monthly periodic rate from an annual percentage (e.g., 8.5 for 8.5% a year)
    pub fn monthly_from_annual_percent(annual_percent: Decimal) -> Result<Rate> {
        if annual_percent < Decimal::ZERO {
            return Err(SimulationError::InvalidRate {
                rate: annual_percent,
            });
        }
        if annual_percent.is_zero() {
            return Ok(Rate::ZERO);
        }
        let per_month = round_working(annual_percent / Decimal::from(12));
        Ok(Rate(round_working(per_month / Decimal::from(100))))
    }

    /// get as decimal
    pub fn as_decimal(&self) -> Decimal {
        self.0
    }

    /// check if zero
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Decimal> for Rate {
    fn from(d: Decimal) -> Self {
        Rate::from_decimal(d)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_working_precision() {
        let m = Money::from_str_exact("123.456789012345").unwrap();
        assert_eq!(m.to_string(), "123.4567890"); // ten significant digits

        // integer part longer than the working precision
        assert_eq!(round_working(dec!(98765432109.87)), dec!(98765432110));
    }

    #[test]
    fn test_round_half_up_at_tenth_digit() {
        assert_eq!(round_working(dec!(1.0000000005)), dec!(1.000000001));
        assert_eq!(round_working(dec!(-1.0000000005)), dec!(-1.000000001));
        assert_eq!(round_working(dec!(1.00000000049)), dec!(1.0000000000));
    }

    #[test]
    fn test_money_ops_round() {
        let third = Money::from_major(1) / Decimal::from(3);
        assert_eq!(third.as_decimal(), dec!(0.3333333333));

        let mut sum = Money::ZERO;
        sum += Money::from_decimal(dec!(0.3333333333));
        sum += Money::from_decimal(dec!(0.3333333333));
        sum += Money::from_decimal(dec!(0.3333333333));
        assert_eq!(sum.as_decimal(), dec!(0.9999999999));
    }

    #[test]
    fn test_round_unit_and_display() {
        assert_eq!(Money::from_decimal(dec!(8678.232328)).round_unit(), Money::from_major(8678));
        assert_eq!(Money::from_decimal(dec!(2.5)).round_unit(), Money::from_major(3));
        assert_eq!(Money::from_decimal(dec!(-2.5)).round_unit(), Money::from_major(-3));
        assert_eq!(Money::from_decimal(dec!(8678.235)).round_display().to_string(), "8678.24");

        // negative fraction rounds to plain zero
        let z = Money::from_decimal(dec!(-0.2)).round_unit();
        assert_eq!(z, Money::ZERO);
        assert_eq!(z.to_string(), "0");
    }

    #[test]
    fn test_to_whole_units() {
        assert_eq!(Money::from_decimal(dec!(769999.9999)).to_whole_units(), 770_000);
        assert_eq!(Money::ZERO.to_whole_units(), 0);
    }

    #[test]
    fn test_monthly_rate() {
        let r = Rate::monthly_from_annual_percent(dec!(8.5)).unwrap();
        assert_eq!(r.as_decimal(), dec!(0.007083333333));

        let r = Rate::monthly_from_annual_percent(dec!(9)).unwrap();
        assert_eq!(r.as_decimal(), dec!(0.0075));

        assert_eq!(Rate::monthly_from_annual_percent(Decimal::ZERO).unwrap(), Rate::ZERO);
        assert!(matches!(
            Rate::monthly_from_annual_percent(dec!(-1)),
            Err(SimulationError::InvalidRate { .. })
        ));
    }

    #[test]
    fn test_powi() {
        assert_eq!(powi(dec!(1.0075), 2).unwrap(), dec!(1.01505625));
        assert_eq!(powi(dec!(1.0075), 0).unwrap(), Decimal::ONE);
        assert!(matches!(
            powi(dec!(10), 40),
            Err(SimulationError::CalculationError { .. })
        ));
    }
}
