//! Input decoding
//!
//! Particle lines look like `p=<-6,0,0>, v=<3,0,0>, a=<0,0,0>`; generator
//! seed lines look like `Generator A starts with 65`.

use crate::error::{Error, Result};
use crate::sim::{InitialConditions, Vec3};

const TAGS: [char; 3] = ['p', 'v', 'a'];

/// Decode one particle line (`line_no` is only used for error messages)
pub fn parse_particle(line: &str, line_no: usize) -> Result<InitialConditions> {
    let mut rest = line.trim();
    let mut vectors = [Vec3::ZERO; 3];

    for (i, tag) in TAGS.iter().enumerate() {
        if i > 0 {
            rest = rest
                .trim_start()
                .strip_prefix(',')
                .ok_or_else(|| Error::parse(line_no, format!("expected ',' before '{tag}='")))?;
        }
        rest = rest.trim_start();
        rest = rest
            .strip_prefix(*tag)
            .and_then(|r| r.trim_start().strip_prefix('='))
            .and_then(|r| r.trim_start().strip_prefix('<'))
            .ok_or_else(|| Error::parse(line_no, format!("expected '{tag}=<'")))?;

        let close = rest
            .find('>')
            .ok_or_else(|| Error::parse(line_no, format!("unterminated '{tag}' vector")))?;
        vectors[i] = parse_vector(&rest[..close], line_no)?;
        rest = &rest[close + 1..];
    }

    if !rest.trim().is_empty() {
        return Err(Error::parse(
            line_no,
            format!("unexpected trailing input '{}'", rest.trim()),
        ));
    }

    let [position, velocity, acceleration] = vectors;
    Ok(InitialConditions::new(position, velocity, acceleration))
}

fn parse_vector(body: &str, line_no: usize) -> Result<Vec3> {
    let components = body
        .split(',')
        .map(|s| {
            let s = s.trim();
            s.parse::<i64>()
                .map_err(|_| Error::parse(line_no, format!("'{s}' is not an integer")))
        })
        .collect::<Result<Vec<i64>>>()?;

    match components.as_slice() {
        [x, y, z] => Ok(Vec3::new(*x, *y, *z)),
        other => Err(Error::parse(
            line_no,
            format!("expected 3 components, found {}", other.len()),
        )),
    }
}

/// Decode every non-blank line, keeping file order
pub fn parse_particles(text: &str) -> Result<Vec<InitialConditions>> {
    text.lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| parse_particle(line, i + 1))
        .collect()
}

/// Start values of generators A and B
///
/// Takes the last token of each of the first two non-blank lines.
pub fn parse_generator_seeds(text: &str) -> Result<(u64, u64)> {
    let mut seeds = text
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(i, line)| {
            let token = line.split_whitespace().last().unwrap_or_default();
            token
                .parse::<u64>()
                .map_err(|_| Error::parse(i + 1, format!("'{token}' is not a start value")))
        });

    let a = seeds.next().ok_or(Error::MissingSeed("A"))??;
    let b = seeds.next().ok_or(Error::MissingSeed("B"))??;
    Ok((a, b))
}
