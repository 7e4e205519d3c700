////////////////////////////////
/// ROOM TREE AND DIRECTIONS ///
////////////////////////////////

/// One of the two branches leaving a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 2] = [Direction::Left, Direction::Right];

    /// Key the player types to take this branch.
    pub fn key(self) -> char {
        match self {
            Direction::Left => 'e',
            Direction::Right => 'd',
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::Left => "Esquerda",
            Direction::Right => "Direita",
        }
    }

    /// Phrase used in "no path" messages ("à esquerda").
    pub fn toward(self) -> &'static str {
        match self {
            Direction::Left => "à esquerda",
            Direction::Right => "à direita",
        }
    }
}

/// A location in the mansion. Children are owned, so the map is always a tree.
#[derive(Debug, PartialEq, Eq)]
pub struct Room {
    name: String,
    left: Option<Box<Room>>,
    right: Option<Box<Room>>,
}

impl Room {
    pub fn new(name: impl Into<String>) -> Self {
        Room {
            name: name.into(),
            left: None,
            right: None,
        }
    }

    pub fn with_left(mut self, child: Room) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn with_right(mut self, child: Room) -> Self {
        self.right = Some(Box::new(child));
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn left(&self) -> Option<&Room> {
        self.left.as_deref()
    }

    pub fn right(&self) -> Option<&Room> {
        self.right.as_deref()
    }

    pub fn child(&self, direction: Direction) -> Option<&Room> {
        match direction {
            Direction::Left => self.left(),
            Direction::Right => self.right(),
        }
    }

    /// A room with no way forward ends the exploration.
    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }

    /// Existing branches, left first.
    pub fn exits(&self) -> impl Iterator<Item = (Direction, &Room)> {
        Direction::ALL
            .into_iter()
            .filter_map(move |d| self.child(d).map(|room| (d, room)))
    }
}
