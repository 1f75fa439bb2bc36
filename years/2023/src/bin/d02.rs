use lib::prelude::*;

/// The bag holds at most this many cubes of each color in the first part.
const LIMIT: Cubes = Cubes {
    red: 12,
    green: 13,
    blue: 14,
};

#[entry(input = "d02.txt", expect = (8, 2286))]
fn main(input: IStr) -> Result<(u32, u32)> {
    let games = games(input)?;

    let part1 = games
        .iter()
        .filter(|g| g.max.within(&LIMIT))
        .try_fold(0u32, |sum, g| sum.checked_add(g.id))
        .context("game id sum out of range")?;

    Ok((part1, total_power(&games)?))
}

/// Sum the power of the fewest cubes each game could be played with.
fn total_power(games: &[Game]) -> Result<u32> {
    games
        .iter()
        .try_fold(0u32, |sum, g| sum.checked_add(g.max.power()?))
        .context("power sum out of range")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    Red,
    Green,
    Blue,
}

lib::from_input! {
    |value: W<&str>| -> Color {
        let W(name) = value;

        Ok(match name {
            "red" => Color::Red,
            "green" => Color::Green,
            "blue" => Color::Blue,
            other => bail!("unknown color `{other}`"),
        })
    }
}

/// Cube counts by color.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
struct Cubes {
    red: u32,
    green: u32,
    blue: u32,
}

impl Cubes {
    /// Raise the count of the given color to at least `count`.
    fn raise(&mut self, color: Color, count: u32) {
        let slot = match color {
            Color::Red => &mut self.red,
            Color::Green => &mut self.green,
            Color::Blue => &mut self.blue,
        };

        *slot = (*slot).max(count);
    }

    fn within(&self, limit: &Cubes) -> bool {
        self.red <= limit.red && self.green <= limit.green && self.blue <= limit.blue
    }

    /// The product of all counts, or `None` if it does not fit a `u32`.
    fn power(&self) -> Option<u32> {
        self.red.checked_mul(self.green)?.checked_mul(self.blue)
    }
}

#[derive(Debug)]
struct Game {
    id: u32,
    /// The most cubes of each color seen in any single draw.
    max: Cubes,
}

/// Parse every game, such as `Game 1: 3 blue, 4 red; 1 red, 2 green`.
fn games(mut input: IStr) -> Result<Vec<Game>> {
    let mut games = Vec::new();

    while let Some(mut line) = input.try_line::<IStr>()? {
        if line.is_empty() {
            continue;
        }

        let mut header = line.until(b':')?;

        if !header.eat(b"Game") {
            return Err(header.error(ErrorKind::Condition("line starts with `Game`")).into());
        }

        let id = header.next::<u32>()?;
        let mut max = Cubes::default();

        while let Some(mut draw) = line.split_once(b';') {
            while let Some(mut cube) = draw.split_once(b',') {
                let (count, color) = cube.next::<(u32, Color)>()?;
                cube.finish()?;
                max.raise(color, count);
            }
        }

        log::debug!("game {id}: {max:?}");
        games.push(Game { id, max });
    }

    Ok(games)
}
