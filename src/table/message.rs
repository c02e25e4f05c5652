/// A transient banner that counts down once per tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Banner {
    text: Option<&'static str>,
    remaining: u32,
}

impl Banner {
    /// Shows `text` for `ticks` ticks, replacing any current banner.
    pub const fn show(&mut self, text: &'static str, ticks: u32) {
        self.text = Some(text);
        self.remaining = ticks;
    }

    /// Removes the banner.
    pub const fn clear(&mut self) {
        self.text = None;
        self.remaining = 0;
    }

    /// Counts one tick down. The text is dropped once the timer runs out.
    pub const fn tick(&mut self) {
        if self.remaining > 0 {
            self.remaining -= 1;
            if self.remaining == 0 {
                self.text = None;
            }
        }
    }

    /// The text, while the timer is running.
    #[must_use]
    pub const fn text(&self) -> Option<&'static str> {
        if self.remaining > 0 { self.text } else { None }
    }

    /// Ticks left.
    #[must_use]
    pub const fn remaining(&self) -> u32 {
        self.remaining
    }
}
