use crate::world::Direction;

/// A line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Choice {
    Go(Direction),
    Quit,
    Invalid(String),
}

/// Parses one input line. Only a single key, in either case, is a choice.
pub fn parse_choice(input: &str) -> Choice {
    let trimmed = input.trim();
    let mut chars = trimmed.chars();

    let key = match (chars.next(), chars.next()) {
        (Some(c), None) => c.to_ascii_lowercase(),
        _ => return Choice::Invalid(trimmed.to_string()),
    };

    if key == 's' {
        return Choice::Quit;
    }

    Direction::ALL
        .into_iter()
        .find(|d| d.key() == key)
        .map(Choice::Go)
        .unwrap_or_else(|| Choice::Invalid(trimmed.to_string()))
}
