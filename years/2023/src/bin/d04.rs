use lib::prelude::*;

#[entry(input = "d04.txt", expect = (13, 30))]
fn main(input: IStr) -> Result<(u32, u32)> {
    let matches = matches(input)?;
    Ok((points(&matches)?, copies(&matches)?))
}

/// Count the winning numbers held on each card, such as
/// `Card 1: 41 48 83 | 83 86 6`.
fn matches(mut input: IStr) -> Result<Vec<usize>> {
    let mut output = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let mut header = line.until(b':')?;

        if !header.eat(b"Card") {
            return Err(header.error(ErrorKind::Condition("line starts with `Card`")).into());
        }

        let id = header.next::<u32>()?;
        header.finish()?;

        let winning = line.until(b'|')?.next::<ArrayVec<u32, 16>>()?;
        let have = line.next::<ArrayVec<u32, 32>>()?;

        let count = have.iter().filter(|n| winning.contains(n)).count();
        log::debug!("card {id}: {count} matching");
        output.push(count);
    }

    Ok(output)
}

/// A card is worth one point for its first match, doubled for every match
/// after that.
fn points(matches: &[usize]) -> Result<u32> {
    matches
        .iter()
        .filter(|&&m| m > 0)
        .try_fold(0u32, |sum, &m| {
            let worth = 1u32.checked_shl(u32::try_from(m - 1).ok()?)?;
            sum.checked_add(worth)
        })
        .context("points out of range")
}

/// Every match wins a copy of one of the cards that follow, so count how
/// many cards are held in the end.
fn copies(matches: &[usize]) -> Result<u32> {
    let mut copies = vec![1u32; matches.len()];

    for (n, &m) in matches.iter().enumerate() {
        let won = copies[n];

        for c in copies.iter_mut().skip(n + 1).take(m) {
            *c = c.checked_add(won).context("card copies out of range")?;
        }
    }

    copies
        .iter()
        .try_fold(0u32, |sum, &c| sum.checked_add(c))
        .context("card count out of range")
}

#[cfg(test)]
mod tests {
    use lib::prelude::*;

    use super::{copies, matches, points};

    const SAMPLE: &[u8] = b"\
Card 1: 41 48 83 86 17 | 83 86  6 31 17  9 48 53
Card 2: 13 32 20 16 61 | 61 30 68 82 17 32 24 19
Card 3:  1 21 53 59 44 | 69 82 63 72 16 21 14  1
Card 4: 41 92 73 84 69 | 59 84 76 51 58  5 54 83
Card 5: 87 83 26 28 32 | 88 30 70 12 93 22 82 36
Card 6: 31 18 13 56 72 | 74 77 10 23 35 67 36 11
";

    #[test]
    fn test_sample() {
        let matches = matches(IStr::new(SAMPLE)).unwrap();
        assert_eq!(matches, [4, 2, 2, 1, 0, 0]);
        assert_eq!(points(&matches).unwrap(), 13);
        assert_eq!(copies(&matches).unwrap(), 30);
    }

    #[test]
    fn test_no_matches() {
        let matches = matches(IStr::new(b"Card 1: 1 2 | 3 4\nCard 2: 5 | 6")).unwrap();
        assert_eq!(points(&matches).unwrap(), 0);
        assert_eq!(copies(&matches).unwrap(), 2);
    }

    #[test]
    fn test_copies_stop_at_last_card() {
        assert_eq!(copies(&[3, 1]).unwrap(), 1 + 2);
        assert_eq!(points(&[3, 1]).unwrap(), 4 + 1);
    }

    #[test]
    fn test_totals_out_of_range() {
        assert!(points(&[32, 32]).is_err());
        assert!(points(&[33]).is_err());
        assert!(copies(&[31; 40]).is_err());
    }

    #[test]
    fn test_bad_cards() {
        assert!(matches(IStr::new(b"Card 1: 1 2 3\n")).is_err());
        assert!(matches(IStr::new(b"Card 1 1 2 | 3\n")).is_err());
        assert!(matches(IStr::new(b"Card 1: 1 x | 3\n")).is_err());
    }

    #[test]
    fn test_bad_headers() {
        assert!(matches(IStr::new(b"Card 1 2: 1 | 1\n")).is_err());
        assert!(matches(IStr::new(b"Deck 1: 1 | 1\n")).is_err());
        assert_eq!(matches(IStr::new(b"Card   7 : 1 | 1\n")).unwrap(), [1]);
    }
}
