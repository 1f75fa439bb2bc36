use lib::grid;
use lib::prelude::*;

/// Offsets to the eight cells surrounding a cell, row first.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[entry(input = "d03.txt", expect = (4361, 467835))]
fn main(input: IStr) -> Result<(u32, u32)> {
    let grid = grid::lines(input.as_data())?;
    Ok((part1(&grid)?, part2(&grid)?))
}

/// A maximal horizontal run of digits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Span {
    row: usize,
    start: usize,
    /// Exclusive end column.
    end: usize,
    value: u32,
}

/// Sum every number adjacent to a symbol. A number touching several symbols
/// is only counted once.
fn part1(grid: &SliceGrid<'_, u8>) -> Result<u32> {
    let columns = grid.columns_len();
    let mut counted = vec![false; grid.rows_len() * columns];
    let mut sum = 0u32;

    for (y, row) in grid.rows().enumerate() {
        for (x, &c) in row.iter().enumerate() {
            if !is_symbol(c) {
                continue;
            }

            for span in adjacent_spans(grid, y, x)? {
                if std::mem::replace(&mut counted[span.row * columns + span.start], true) {
                    continue;
                }

                log::debug!(
                    "{y}:{x}: {} touches {} at {}:{}..{}",
                    c as char,
                    span.value,
                    span.row,
                    span.start,
                    span.end
                );
                sum = sum
                    .checked_add(span.value)
                    .context("part number sum out of range")?;
            }
        }
    }

    Ok(sum)
}

/// Sum the gear ratios of every `*` adjacent to exactly two numbers.
fn part2(grid: &SliceGrid<'_, u8>) -> Result<u32> {
    let mut sum = 0u32;

    for (y, row) in grid.rows().enumerate() {
        for (x, _) in row.iter().enumerate().filter(|&(_, &c)| c == b'*') {
            if let [a, b] = adjacent_spans(grid, y, x)?[..] {
                log::debug!("{y}:{x}: gear {} * {}", a.value, b.value);
                sum = a
                    .value
                    .checked_mul(b.value)
                    .and_then(|ratio| sum.checked_add(ratio))
                    .with_context(|| anyhow!("{}:{}: gear ratio out of range", y + 1, x + 1))?;
            }
        }
    }

    Ok(sum)
}

/// Test if the cell is a symbol, anything other than a digit or a period.
fn is_symbol(c: u8) -> bool {
    !c.is_ascii_digit() && c != b'.' && c != b'\n'
}

/// Collect the distinct digit runs surrounding the given cell.
fn adjacent_spans(
    grid: &SliceGrid<'_, u8>,
    row: usize,
    column: usize,
) -> Result<ArrayVec<Span, 8>> {
    let mut spans = ArrayVec::<Span, 8>::new();

    for (dr, dc) in NEIGHBORS {
        let (Some(r), Some(c)) = (row.checked_add_signed(dr), column.checked_add_signed(dc))
        else {
            continue;
        };

        let Some(span) = resolve(grid, r, c)? else {
            continue;
        };

        if spans.iter().any(|s| s.row == span.row && s.start == span.start) {
            continue;
        }

        spans.push(span);
    }

    Ok(spans)
}

/// Resolve the digit run that covers the given cell, if the cell is a digit.
fn resolve(grid: &SliceGrid<'_, u8>, row: usize, column: usize) -> Result<Option<Span>> {
    let Some(line) = grid.row(row) else {
        return Ok(None);
    };

    if !line.get(column).is_some_and(u8::is_ascii_digit) {
        return Ok(None);
    }

    let (before, after) = line.split_at(column);

    let start = before
        .iter()
        .rposition(|c| !c.is_ascii_digit())
        .map_or(0, |n| n + 1);

    let end = after
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(line.len(), |n| column + n);

    let value = line[start..end]
        .iter()
        .try_fold(0u32, |v, &d| v.checked_mul(10)?.checked_add(u32::from(d - b'0')))
        .with_context(|| anyhow!("{}:{}: number out of range", row + 1, start + 1))?;

    Ok(Some(Span {
        row,
        start,
        end,
        value,
    }))
}

#[cfg(test)]
mod tests {
    use lib::grid;

    use super::{adjacent_spans, part1, part2, resolve, Span};

    const SAMPLE: &[u8] = b"\
467..114..
...*......
..35..633.
......#...
617*......
.....+.58.
..592.....
......755.
...$.*....
.664.598..
";

    #[test]
    fn test_sample() {
        let grid = grid::lines(SAMPLE).unwrap();
        assert_eq!(part1(&grid).unwrap(), 4361);
        assert_eq!(part2(&grid).unwrap(), 467835);
    }

    #[test]
    fn test_single_row() {
        let grid = grid::lines(b"..12#...").unwrap();
        assert_eq!(part1(&grid).unwrap(), 12);
    }

    #[test]
    fn test_gear() {
        let grid = grid::lines(b"467.\n...*\n....\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 0);

        let grid = grid::lines(b"467..\n...*.\n....3\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 467 * 3);

        let grid = grid::lines(b"467...\n...*..\n....35\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 16345);
    }

    #[test]
    fn test_gear_needs_exactly_two() {
        let grid = grid::lines(b"1.2\n.*.\n..3\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 0);

        let grid = grid::lines(b"...\n.*5\n...\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 0);

        let grid = grid::lines(b"...\n2*5\n...\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 10);
    }

    #[test]
    fn test_runs_at_edges() {
        let grid = grid::lines(b"12.34\n").unwrap();

        assert_eq!(
            resolve(&grid, 0, 1).unwrap(),
            Some(Span {
                row: 0,
                start: 0,
                end: 2,
                value: 12
            })
        );

        assert_eq!(
            resolve(&grid, 0, 3).unwrap(),
            Some(Span {
                row: 0,
                start: 3,
                end: 5,
                value: 34
            })
        );

        assert_eq!(resolve(&grid, 0, 2).unwrap(), None);
        assert_eq!(resolve(&grid, 0, 5).unwrap(), None);
        assert_eq!(resolve(&grid, 1, 0).unwrap(), None);
    }

    #[test]
    fn test_symbols_at_corners() {
        let grid = grid::lines(b"#1.\n...\n.2#\n").unwrap();
        assert_eq!(part1(&grid).unwrap(), 3);

        let grid = grid::lines(b"*9\n9*\n").unwrap();
        assert_eq!(part2(&grid).unwrap(), 81 * 2);
    }

    #[test]
    fn test_run_counted_once() {
        // Both the last and second to last digit of 123 touch the symbol.
        let grid = grid::lines(b"123.\n..#.\n").unwrap();
        let spans = adjacent_spans(&grid, 1, 2).unwrap();
        assert_eq!(spans.len(), 1);
        assert_eq!(part1(&grid).unwrap(), 123);
    }

    #[test]
    fn test_shared_number_counted_once() {
        let grid = grid::lines(b"#.\n5.\n#.\n").unwrap();
        assert_eq!(part1(&grid).unwrap(), 5);
    }

    #[test]
    fn test_number_out_of_range() {
        let grid = grid::lines(b"99999999999#").unwrap();
        assert!(part1(&grid).is_err());
    }

    #[test]
    fn test_totals_out_of_range() {
        let grid = grid::lines(b"4000000000#4000000000\n").unwrap();
        assert!(part1(&grid).is_err());

        let grid = grid::lines(b"100000*100000\n").unwrap();
        assert!(part2(&grid).is_err());
        assert_eq!(part1(&grid).unwrap(), 200000);
    }
}
