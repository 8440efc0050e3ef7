use itertools::Itertools;

use crate::{factorization::prime_factors, numbers::digit_sum};

/// Everything needed to decide whether `number` is a Smith number.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SmithReport {
    pub number: u64,
    pub factors: Vec<u64>,
    pub digit_sum: u64,
    pub factor_digit_sum: u64,
}

impl SmithReport {
    pub fn for_number(number: u64) -> Result<Self, String> {
        let factors = prime_factors(number)?;
        Ok(SmithReport {
            number,
            digit_sum: digit_sum(number),
            factor_digit_sum: factor_digit_sum(&factors),
            factors,
        })
    }

    /// primes have a single factor and are excluded
    pub fn is_smith(&self) -> bool {
        self.factors.len() > 1 && self.digit_sum == self.factor_digit_sum
    }
}

/// repeated factors are summed once per occurrence
pub fn factor_digit_sum(factors: &[u64]) -> u64 {
    factors.iter().copied().map(digit_sum).sum()
}

/// 0 and 1 are not Smith numbers, same as primes
pub fn is_smith_number(number: u64) -> bool {
    match SmithReport::for_number(number) {
        Ok(report) => report.is_smith(),
        Err(_) => false,
    }
}

/// Smith numbers in ascending order, scanning from 2 without upper bound.
pub fn smith_numbers() -> impl Iterator<Item = u64> {
    (2u64..).filter(|&number| is_smith_number(number))
}

pub fn find_smith_numbers(limit: usize) -> Vec<u64> {
    let found = smith_numbers().take(limit).collect_vec();

    #[cfg(feature = "verbose")]
    println!("found {} of {limit} smith numbers: {found:?}", found.len());

    found
}
