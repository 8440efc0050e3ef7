use num_integer::Integer;

pub fn digit_sum(mut number: u64) -> u64 {
    let mut sum = 0;
    while number > 0 {
        let (rest, digit) = number.div_rem(&10);
        sum += digit;
        number = rest;
    }
    sum
}

/// base 10 digits, most significant first. zero is a single digit
pub fn digits(mut number: u64) -> Vec<u64> {
    if number == 0 {
        return vec![0];
    }

    let mut result = vec![];
    while number > 0 {
        let (rest, digit) = number.div_rem(&10);
        result.push(digit);
        number = rest;
    }
    result.reverse();
    result
}
