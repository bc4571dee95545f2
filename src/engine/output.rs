use std::io::{self, Write};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBlock {
    /// Ordinary narration.
    Text(String),
    /// Something that ends or changes the game: a death, a win, the farewell.
    Event(String),
    /// A broken world file showing through at play time.
    Error(String),
}

impl OutputBlock {
    pub fn text(&self) -> &str {
        match self {
            OutputBlock::Text(s) | OutputBlock::Event(s) | OutputBlock::Error(s) => s,
        }
    }
}

/// Everything one turn wants to tell the player, in order.
#[derive(Default, Debug)]
pub struct Output {
    pub blocks: Vec<OutputBlock>,
}

impl Output {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn say(&mut self, s: impl Into<String>) {
        let s = s.into();
        if !s.trim().is_empty() {
            self.blocks.push(OutputBlock::Text(s));
        }
    }

    pub fn event(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Event(s.into()));
    }

    pub fn error(&mut self, s: impl Into<String>) {
        self.blocks.push(OutputBlock::Error(s.into()));
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(OutputBlock::text)
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.lines().any(|l| l.contains(needle))
    }

    /// One line per block, each newline-terminated. `Error` blocks go to
    /// `errors`, everything else to `w`.
    pub fn write_to<W: Write, E: Write>(&self, w: &mut W, errors: &mut E) -> io::Result<()> {
        for block in &self.blocks {
            match block {
                OutputBlock::Error(line) => writeln!(errors, "{}", line)?,
                other => writeln!(w, "{}", other.text())?,
            }
        }
        Ok(())
    }
}
