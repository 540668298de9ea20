//! Bounded command-line edit buffer.

/// Default buffer capacity, including the reserved terminator slot.
pub const DEFAULT_CAPACITY: usize = 1024;

/// Append/remove-at-end text buffer holding at most `capacity - 1` characters.
///
/// One slot is kept in reserve so the contents always fit a terminated
/// buffer of `capacity` bytes. Only ASCII is accepted, so character count
/// and byte length coincide.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InputBuffer {
    text: String,
    capacity: usize,
}

impl InputBuffer {
    /// Create an empty buffer. Capacities below 2 are raised to 2 so the
    /// buffer can hold at least one character.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(2);
        Self {
            text: String::with_capacity(capacity - 1),
            capacity,
        }
    }

    /// Append a character. Returns `false` and leaves the buffer untouched
    /// when it is full or the character is not ASCII.
    pub fn append(&mut self, c: char) -> bool {
        if self.is_full() || !c.is_ascii() {
            return false;
        }
        self.text.push(c);
        true
    }

    /// Remove and return the last character.
    pub fn remove_last(&mut self) -> Option<char> {
        self.text.pop()
    }

    pub fn clear(&mut self) {
        self.text.clear();
    }

    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// True once `capacity - 1` characters are held.
    pub fn is_full(&self) -> bool {
        self.text.len() >= self.capacity - 1
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Default for InputBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_CAPACITY)
    }
}
