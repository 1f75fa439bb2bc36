use lib::prelude::*;

/// Spelled out digits, in order of value starting at one.
const WORDS: [&[u8]; 9] = [
    b"one", b"two", b"three", b"four", b"five", b"six", b"seven", b"eight", b"nine",
];

#[entry(input = "d01.txt", expect = (351, 423))]
fn main(input: IStr) -> Result<(u32, u32)> {
    Ok((calibrate(input, false)?, calibrate(input, true)?))
}

/// Sum the calibration values of every line, optionally counting spelled out
/// digits.
fn calibrate(mut input: IStr, words: bool) -> Result<u32> {
    let mut sum = 0u32;

    while let Some(line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let data = line.as_data();
        let mut digits = (0..data.len()).filter_map(|n| digit_at(&data[n..], words));

        let Some(first) = digits.next() else {
            // Lines with only spelled out digits count as zero without words.
            if !words && (0..data.len()).any(|n| digit_at(&data[n..], true).is_some()) {
                continue;
            }

            return Err(line.error(ErrorKind::Condition("line contains a digit")).into());
        };

        let last = digits.last().unwrap_or(first);
        let value = first * 10 + last;
        log::debug!("{}: {value}", line.as_bstr());
        sum = sum.checked_add(value).context("calibration sum out of range")?;
    }

    Ok(sum)
}

/// Decode the digit at the start of `rest`, if any.
fn digit_at(rest: &[u8], words: bool) -> Option<u32> {
    match rest {
        [d @ b'0'..=b'9', ..] => Some(u32::from(d - b'0')),
        _ if words => WORDS
            .iter()
            .position(|w| rest.starts_with(w))
            .map(|n| n as u32 + 1),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::calibrate;

    const FIRST: &[u8] = b"\
1abc2
pqr3stu8vwx
a1b2c3d4e5f
treb7uchet
";

    const SECOND: &[u8] = b"\
two1nine
eightwothree
abcone2threexyz
xtwone3four
4nineeightseven2
zoneight234
7pqrstsixteen
";

    #[test]
    fn test_samples() {
        assert_eq!(calibrate(IStr::new(FIRST), false).unwrap(), 142);
        assert_eq!(calibrate(IStr::new(FIRST), true).unwrap(), 142);
        assert_eq!(calibrate(IStr::new(SECOND), false).unwrap(), 209);
        assert_eq!(calibrate(IStr::new(SECOND), true).unwrap(), 281);
    }

    #[test]
    fn test_overlapping_words() {
        assert_eq!(calibrate(IStr::new(b"eightwothree"), true).unwrap(), 83);
        assert_eq!(calibrate(IStr::new(b"twone"), true).unwrap(), 21);
        assert_eq!(calibrate(IStr::new(b"oneight\n"), true).unwrap(), 18);
    }

    #[test]
    fn test_single_digit() {
        assert_eq!(calibrate(IStr::new(b"treb7uchet"), false).unwrap(), 77);
    }

    #[test]
    fn test_no_digits() {
        assert!(calibrate(IStr::new(b"12\nabc\n"), false).is_err());
        assert!(calibrate(IStr::new(b"12\nabc\n"), true).is_err());
        assert_eq!(calibrate(IStr::new(b"\n\n"), true).unwrap(), 0);
    }
}
