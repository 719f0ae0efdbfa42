/// Construction options for a `MemoryStream`.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StreamConfig {
    /// Expandable, nothing allocated until the first write.
    #[default]
    Expandable,
    /// Expandable, with the given capacity allocated up front.
    Reserve(usize),
    /// Non-expandable, the given capacity is a hard ceiling.
    Fixed(usize),
}

impl StreamConfig {
    #[must_use]
    pub fn is_expandable(&self) -> bool {
        !matches!(self, StreamConfig::Fixed(_))
    }

    /// Capacity allocated at construction.
    #[must_use]
    pub fn initial_capacity(&self) -> usize {
        match *self {
            StreamConfig::Expandable => 0,
            StreamConfig::Reserve(capacity) | StreamConfig::Fixed(capacity) => capacity,
        }
    }
}
