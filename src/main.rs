use std::{env::args, process::ExitCode, str::FromStr};

use factorization::{expand_product, format_factors, group_factors, is_prime};
use itertools::Itertools;
use numbers::digits;
use smith::{find_smith_numbers, SmithReport};

mod factorization;
mod numbers;
mod smith;

const TEST_NUMBERS: [u64; 10] = [4, 22, 27, 58, 85, 94, 121, 166, 202, 265];

const DETAILED_EXAMPLE: u64 = 22;

fn print_report(report: &SmithReport) {
    println!("  Prime factors: {:?}", report.factors);
    println!("  Sum of digits: {}", report.digit_sum);
    println!("  Sum of factor digits: {}", report.factor_digit_sum);

    if report.is_smith() {
        println!("  ✓ {} is a Smith number!", report.number);
    } else {
        println!("  ✗ {} is NOT a Smith number.", report.number);
    }
}

fn run_demonstration() -> Result<(), String> {
    println!("=== Smith Number Test Examples ===\n");

    for number in TEST_NUMBERS {
        println!("Testing number: {number}");
        print_report(&SmithReport::for_number(number)?);
        println!();
    }

    println!("First 10 Smith numbers:");
    println!("{}", find_smith_numbers(10).iter().join(" "));

    println!("\n=== Detailed Example: {DETAILED_EXAMPLE} ===");
    let report = SmithReport::for_number(DETAILED_EXAMPLE)?;
    println!("Number: {}", report.number);
    println!("Prime factors: {:?}", report.factors);
    println!(
        "Sum of digits: {} = {}",
        digits(report.number).iter().join(" + "),
        report.digit_sum
    );
    println!(
        "Sum of factor digits: {} = {}",
        report
            .factors
            .iter()
            .flat_map(|&factor| digits(factor))
            .join(" + "),
        report.factor_digit_sum
    );

    if report.is_smith() {
        println!(
            "Since {} = {}, {} is a Smith number!",
            report.digit_sum, report.factor_digit_sum, report.number
        );
    } else {
        println!(
            "Since {} != {}, {} is not a Smith number.",
            report.digit_sum, report.factor_digit_sum, report.number
        );
    }

    Ok(())
}

fn check_number(number_repr: &str) -> Result<(), String> {
    let number = u64::from_str(number_repr.trim()).map_err(|e| e.to_string())?;

    let report = SmithReport::for_number(number)?;

    let powers = group_factors(&report.factors);
    let prod = expand_product(&powers)
        .ok_or_else(|| "factor product does not fit into 64 bits".to_string())?;
    println!("{} = {prod}", format_factors(&powers));

    if is_prime(number) {
        println!("{number} is prime");
    }

    print_report(&report);

    Ok(())
}

fn main() -> ExitCode {
    let args = args().collect::<Vec<String>>();

    let result = match args.len() {
        1 => run_demonstration(),
        2 => check_number(&args[1]),
        _ => Err("please provide at most one number as argument".to_string()),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            println!("ERROR: {e}");
            ExitCode::FAILURE
        }
    }
}
