use itertools::Itertools;
use num_integer::Roots;
use num_traits::{checked_pow, CheckedMul};

/// prime factorization grouped as (prime, exponent), ascending by prime
pub type PowerMap = Vec<(u64, u32)>;

/// Trial division. Factors come out ascending, repeated according to multiplicity.
pub fn prime_factors(number: u64) -> Result<Vec<u64>, String> {
    if number < 2 {
        return Err(format!("cannot factorize {number}: number must be at least 2"));
    }

    let mut to_factor = number;

    let mut divisors = vec![];

    let mut candidate = 2;
    let mut bound = to_factor.sqrt();

    while candidate <= bound {
        if to_factor % candidate == 0 {
            while to_factor % candidate == 0 {
                divisors.push(candidate);
                to_factor /= candidate;
            }

            #[cfg(feature = "verbose")]
            println!("divided out {candidate}, cofactor {to_factor}");

            bound = to_factor.sqrt();
        }
        candidate += 1;
    }

    // whatever survives past the square root has no smaller divisor
    if to_factor > 1 {
        divisors.push(to_factor);
    }

    Ok(divisors)
}

pub fn is_prime(number: u64) -> bool {
    matches!(prime_factors(number), Ok(factors) if factors.len() == 1)
}

/// `factors` is expected to be sorted, as returned by [`prime_factors`]
pub fn group_factors(factors: &[u64]) -> PowerMap {
    factors
        .iter()
        .dedup_with_count()
        .map(|(count, &prime)| (prime, count as u32))
        .collect_vec()
}

/// multiplies grouped factors back, `None` if the result does not fit
pub fn expand_product(powers: &PowerMap) -> Option<u64> {
    powers.iter().try_fold(1u64, |acc, &(prime, exponent)| {
        let power = checked_pow(prime, exponent as usize)?;
        CheckedMul::checked_mul(&acc, &power)
    })
}

pub fn format_factors(powers: &PowerMap) -> String {
    powers
        .iter()
        .map(|&(prime, exponent)| {
            if exponent == 1 {
                prime.to_string()
            } else {
                format!("{prime}^{exponent}")
            }
        })
        .join(" * ")
}

#[cfg(test)]
mod tests {
    use rand::{thread_rng, Rng};

    use super::{expand_product, format_factors, group_factors, is_prime, prime_factors};

    fn small_eratosphenes(upper_limit: usize) -> Vec<bool> {
        let mut composite = vec![false; upper_limit + 1];
        composite[0] = true;
        composite[1] = true;
        for number in 2..=upper_limit {
            if composite[number] {
                continue;
            }
            let mut multiple = number * number;
            while multiple <= upper_limit {
                composite[multiple] = true;
                multiple += number;
            }
        }
        composite.into_iter().map(|c| !c).collect()
    }

    #[test]
    fn should_reject_numbers_below_two() {
        assert!(prime_factors(0).is_err());
        assert!(prime_factors(1).is_err());
    }

    #[test]
    fn prime_is_its_own_factorization() {
        assert_eq!(prime_factors(2), Ok(vec![2]));
        assert_eq!(prime_factors(7), Ok(vec![7]));
        assert_eq!(prime_factors(1_000_000_007), Ok(vec![1_000_000_007]));
    }

    #[test]
    fn should_keep_multiplicity() {
        assert_eq!(prime_factors(4), Ok(vec![2, 2]));
        assert_eq!(prime_factors(27), Ok(vec![3, 3, 3]));
        assert_eq!(prime_factors(1024), Ok(vec![2; 10]));
        assert_eq!(prime_factors(265), Ok(vec![5, 53]));
    }

    #[test]
    fn should_factor_largest_number() {
        assert_eq!(
            prime_factors(u64::MAX),
            Ok(vec![3, 5, 17, 257, 641, 65537, 6700417])
        );
    }

    #[test]
    fn factors_are_sorted_primes_multiplying_to_number() {
        const LIMIT: usize = 5000;
        let primes = small_eratosphenes(LIMIT);

        for number in 2..=LIMIT as u64 {
            let factors = prime_factors(number).unwrap();
            assert_eq!(factors.iter().product::<u64>(), number);
            assert!(factors.iter().all(|&f| primes[f as usize]), "{number}");
            assert!(factors.windows(2).all(|w| w[0] <= w[1]), "{number}");
        }
    }

    #[test]
    fn random_numbers_factorize_back() {
        let mut rng = thread_rng();
        for _ in 0..200 {
            let number = rng.gen_range(2..1_000_000_000u64);
            let factors = prime_factors(number).unwrap();
            assert_eq!(factors.iter().product::<u64>(), number);
            assert!(factors.iter().all(|&f| is_prime(f)), "{number}: {factors:?}");
        }
    }

    #[test]
    fn primality_matches_sieve() {
        let primes = small_eratosphenes(1000);
        for number in 0..=1000u64 {
            assert_eq!(is_prime(number), primes[number as usize], "{number}");
        }
    }

    #[test]
    fn should_group_factors() {
        assert_eq!(group_factors(&[2, 2, 3]), vec![(2, 2), (3, 1)]);
        assert!(group_factors(&[]).is_empty());
    }

    #[test]
    fn should_expand_grouped_product() {
        assert_eq!(expand_product(&vec![(2, 2), (3, 1)]), Some(12));
        assert_eq!(expand_product(&vec![]), Some(1));

        let powers = group_factors(&prime_factors(u64::MAX).unwrap());
        assert_eq!(expand_product(&powers), Some(u64::MAX));
    }

    #[test]
    fn expansion_reports_overflow() {
        assert_eq!(expand_product(&vec![(2, 64)]), None);
        assert_eq!(expand_product(&vec![(2, 40), (3, 30)]), None);
    }

    #[test]
    fn should_format_factors() {
        assert_eq!(format_factors(&vec![(2, 2), (11, 1)]), "2^2 * 11");
        assert_eq!(format_factors(&vec![(7, 1)]), "7");
    }
}
