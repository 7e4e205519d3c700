#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    Title(String),
    Text(String),
    Event(String),
    Exits(Vec<String>),
    Prompt(String),
}

#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn title(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Title(s));
        }
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Event(s));
        }
    }

    pub fn set_exits(&mut self, lines: Vec<String>) {
        if !lines.is_empty() {
            self.blocks.push(OutputBlock::Exits(lines));
        }
    }

    pub fn prompt(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Prompt(s.into()));
    }

    /// All text lines in order, exits flattened.
    pub fn lines(&self) -> Vec<&str> {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                OutputBlock::Title(s)
                | OutputBlock::Text(s)
                | OutputBlock::Event(s)
                | OutputBlock::Prompt(s) => lines.push(s.as_str()),
                OutputBlock::Exits(exits) => lines.extend(exits.iter().map(String::as_str)),
            }
        }
        lines
    }
}
