pub const TYPE_DELAY_MS: u32 = 55;
pub const DELETE_DELAY_MS: u32 = 20;
pub const HOLD_DELAY_MS: u32 = 2000;

/// Typewriter effect cycling through a list of phrases.
///
/// Each `tick` performs one step and returns how long to wait before the
/// next one.
#[derive(Debug, Clone, PartialEq)]
pub struct TypingCycle {
    phrases: Vec<&'static str>,
    index: usize,
    shown: usize,
    deleting: bool,
}

impl TypingCycle {
    /// Returns `None` for an empty phrase list.
    pub fn new(phrases: &[&'static str]) -> Option<Self> {
        if phrases.is_empty() {
            return None;
        }
        Some(Self {
            phrases: phrases.to_vec(),
            index: 0,
            shown: 0,
            deleting: false,
        })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn is_deleting(&self) -> bool {
        self.deleting
    }

    pub fn phrase(&self) -> &'static str {
        self.phrases[self.index]
    }

    pub fn text(&self) -> &'static str {
        let phrase = self.phrase();
        let end = phrase
            .char_indices()
            .nth(self.shown)
            .map(|(idx, _)| idx)
            .unwrap_or(phrase.len());
        &phrase[..end]
    }

    pub fn tick(&mut self) -> u32 {
        let len = self.phrase().chars().count();
        if !self.deleting {
            if self.shown < len {
                self.shown += 1;
                if self.shown < len {
                    return TYPE_DELAY_MS;
                }
            }
            self.deleting = true;
            return HOLD_DELAY_MS;
        }
        if self.shown > 0 {
            self.shown -= 1;
            return DELETE_DELAY_MS;
        }
        self.deleting = false;
        self.index = (self.index + 1) % self.phrases.len();
        TYPE_DELAY_MS
    }
}
