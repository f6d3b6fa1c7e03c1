//! Shared presentation helpers: status tags and optional coloring.

use owo_colors::OwoColorize;

/// Status tag printed at the start of report lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Ok,
    Alert,
    Error,
    Info,
    Warn,
}

impl Tag {
    pub fn label(self) -> &'static str {
        match self {
            Tag::Ok => "[ OK ]",
            Tag::Alert => "[ ALERT ]",
            Tag::Error => "[ ERROR ]",
            Tag::Info => "[ INFO ]",
            Tag::Warn => "[ WARN ]",
        }
    }
}

/// Color switch for everything the CLI prints.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    pub color: bool,
}

impl Palette {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn tag(&self, tag: Tag) -> String {
        let label = tag.label();
        if !self.color {
            return label.to_string();
        }
        match tag {
            Tag::Ok => label.green().bold().to_string(),
            Tag::Alert | Tag::Error => label.red().bold().to_string(),
            Tag::Info => label.cyan().bold().to_string(),
            Tag::Warn => label.yellow().bold().to_string(),
        }
    }

    pub fn bold(&self, s: &str) -> String {
        if self.color {
            s.bold().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn accent(&self, s: &str) -> String {
        if self.color {
            s.cyan().to_string()
        } else {
            s.to_string()
        }
    }

    pub fn good(&self, s: &str) -> String {
        if self.color {
            s.green().bold().to_string()
        } else {
            s.to_string()
        }
    }

    /// One tagged report line.
    pub fn line(&self, tag: Tag, message: &str) -> String {
        format!("{} {}", self.tag(tag), message)
    }
}
