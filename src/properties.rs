//! Number-theoretic property evaluators.

use std::fmt::{Display, Formatter, Result as FmtResult};

use serde::{Deserialize, Serialize};

////////////////////////////////////////////// Property ////////////////////////////////////////////////

/// A tag reported in the `properties` list of a classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Property {
    /// The number equals the sum of its digits raised to the digit count.
    Armstrong,
    /// The number is divisible by two.
    Even,
    /// The number is not divisible by two.
    Odd,
}

impl Property {
    /// The lowercase tag as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Property::Armstrong => "armstrong",
            Property::Even => "even",
            Property::Odd => "odd",
        }
    }
}

impl Display for Property {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{}", self.as_str())
    }
}

///////////////////////////////////////////// Evaluators ///////////////////////////////////////////////

/// Returns true when `n` is prime.  Anything below 2 is not.
pub fn is_prime(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    let mut divisor = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 1;
    }
    true
}

/// Returns true when `n` equals the sum of its proper divisors.
pub fn is_perfect(n: i64) -> bool {
    if n < 2 {
        return false;
    }
    // Divisors pair up as (d, n / d); 1 has no partner because n itself is excluded.
    let target = i128::from(n);
    let mut sum: i128 = 1;
    let mut divisor: i64 = 2;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            let partner = n / divisor;
            sum += i128::from(divisor);
            if partner != divisor {
                sum += i128::from(partner);
            }
            if sum > target {
                return false;
            }
        }
        divisor += 1;
    }
    sum == target
}

/// Number of decimal digits in `|n|`.  Zero has one digit.
pub fn digit_count(n: i64) -> u32 {
    n.unsigned_abs().checked_ilog10().map_or(1, |log| log + 1)
}

/// Decimal digits of `|n|`, most significant first.
pub fn digits(n: i64) -> Vec<u8> {
    n.unsigned_abs()
        .to_string()
        .bytes()
        .map(|b| b - b'0')
        .collect()
}

/// Returns true when `n` is an Armstrong number.  Negative numbers never are.
pub fn is_armstrong(n: i64) -> bool {
    if n < 0 {
        return false;
    }
    let power = digit_count(n);
    let total: u128 = digits(n)
        .into_iter()
        .map(|digit| u128::from(digit).pow(power))
        .sum();
    total == n as u128
}

/// The parity tag for `n`.
pub fn get_parity(n: i64) -> Property {
    if n % 2 == 0 {
        Property::Even
    } else {
        Property::Odd
    }
}

/// Sum of the decimal digits of `|n|`.
pub fn digit_sum(n: i64) -> u64 {
    digits(n).into_iter().map(u64::from).sum()
}

/// The ordered property tags for `n`: `armstrong` first when it applies, parity last.
pub fn get_properties(n: i64) -> Vec<Property> {
    let mut properties = Vec::with_capacity(2);
    if is_armstrong(n) {
        properties.push(Property::Armstrong);
    }
    properties.push(get_parity(n));
    properties
}

/// Explains why `n` is an Armstrong number, e.g. `153 is an Armstrong number because 1^3 + 5^3 + 3^3 = 153`.
pub fn armstrong_explanation(n: i64) -> String {
    let power = digit_count(n);
    let terms: Vec<String> = digits(n)
        .into_iter()
        .map(|digit| format!("{}^{}", digit, power))
        .collect();
    format!(
        "{} is an Armstrong number because {} = {}",
        n,
        terms.join(" + "),
        n
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primes() {
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(is_prime(97));
        assert!(is_prime(7919));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(!is_prime(25));
    }

    #[test]
    fn primes_below_two() {
        assert!(!is_prime(1));
        assert!(!is_prime(0));
        assert!(!is_prime(-7));
        assert!(!is_prime(i64::MIN));
    }

    #[test]
    fn prime_at_upper_range() {
        // Largest prime below 2^31; keeps trial division short.
        assert!(is_prime(2_147_483_647));
        assert!(!is_prime(i64::MAX));
    }

    #[test]
    fn perfect_numbers() {
        assert!(is_perfect(6));
        assert!(is_perfect(28));
        assert!(is_perfect(496));
        assert!(is_perfect(8128));
        assert!(!is_perfect(10));
        assert!(!is_perfect(12));
        assert!(!is_perfect(16));
    }

    #[test]
    fn perfect_below_two() {
        assert!(!is_perfect(1));
        assert!(!is_perfect(0));
        assert!(!is_perfect(-6));
    }

    #[test]
    fn armstrong_numbers() {
        for n in [0, 1, 5, 9, 153, 370, 371, 407, 1634, 8208, 9474] {
            assert!(is_armstrong(n), "{} should be armstrong", n);
        }
        assert!(!is_armstrong(10));
        assert!(!is_armstrong(100));
        assert!(!is_armstrong(-5));
        assert!(!is_armstrong(-153));
    }

    #[test]
    fn armstrong_does_not_overflow() {
        assert!(!is_armstrong(i64::MAX));
        assert!(!is_armstrong(i64::MIN));
    }

    #[test]
    fn digit_counts() {
        assert_eq!(digit_count(0), 1);
        assert_eq!(digit_count(9), 1);
        assert_eq!(digit_count(10), 2);
        assert_eq!(digit_count(-999), 3);
        assert_eq!(digit_count(i64::MIN), 19);
    }

    #[test]
    fn parity() {
        assert_eq!(get_parity(4), Property::Even);
        assert_eq!(get_parity(0), Property::Even);
        assert_eq!(get_parity(7), Property::Odd);
        assert_eq!(get_parity(-3), Property::Odd);
        assert_eq!(get_parity(-4), Property::Even);
    }

    #[test]
    fn digit_sums() {
        assert_eq!(digit_sum(-123), 6);
        assert_eq!(digit_sum(0), 0);
        assert_eq!(digit_sum(153), 9);
        assert_eq!(digit_sum(i64::MIN), 89);
    }

    #[test]
    fn properties_order() {
        assert_eq!(
            get_properties(153),
            vec![Property::Armstrong, Property::Odd]
        );
        assert_eq!(get_properties(10), vec![Property::Even]);
        assert_eq!(get_properties(4), vec![Property::Armstrong, Property::Even]);
        assert_eq!(
            get_properties(0),
            vec![Property::Armstrong, Property::Even]
        );
        assert_eq!(get_properties(-5), vec![Property::Odd]);
    }

    #[test]
    fn properties_serialize_lowercase() {
        let json = serde_json::to_string(&get_properties(153)).unwrap();
        assert_eq!(json, r#"["armstrong","odd"]"#);
    }

    #[test]
    fn explanation() {
        assert_eq!(
            armstrong_explanation(153),
            "153 is an Armstrong number because 1^3 + 5^3 + 3^3 = 153"
        );
        assert_eq!(
            armstrong_explanation(0),
            "0 is an Armstrong number because 0^1 = 0"
        );
        assert_eq!(
            armstrong_explanation(9474),
            "9474 is an Armstrong number because 9^4 + 4^4 + 7^4 + 4^4 = 9474"
        );
    }
}
