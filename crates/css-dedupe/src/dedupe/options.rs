//! Engine configuration.

/// Which member of a redundant pair survives.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RemovalDirection {
    /// Remove earlier occurrences; the last one in document order wins.
    #[default]
    KeepLast,
    /// Remove later occurrences; the first one in document order wins.
    KeepFirst,
}

impl RemovalDirection {
    /// Indices `0..len` in the order candidates are visited.
    ///
    /// The first member of an equal set seen in this order is the survivor.
    pub(crate) fn scan_order(self, len: usize) -> Vec<usize> {
        match self {
            RemovalDirection::KeepLast => (0..len).rev().collect(),
            RemovalDirection::KeepFirst => (0..len).collect(),
        }
    }
}

/// Options for [`deduplicate`](crate::dedupe::deduplicate).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DedupeOptions {
    /// Keep the earliest occurrence and remove later ones instead of the
    /// default of keeping the latest.
    pub reverse_removal: bool,
}

impl DedupeOptions {
    /// Create options with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set reverse removal mode.
    pub fn reverse_removal(mut self, enabled: bool) -> Self {
        self.reverse_removal = enabled;
        self
    }

    /// Get the removal direction these options select.
    pub fn direction(&self) -> RemovalDirection {
        if self.reverse_removal {
            RemovalDirection::KeepFirst
        } else {
            RemovalDirection::KeepLast
        }
    }
}
