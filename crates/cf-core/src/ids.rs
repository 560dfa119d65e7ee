use core::fmt;
use core::num::NonZeroU32;

/// Identifier handed out to each cable placed in a conduit.
///
/// Numbering starts at 1, matching what users see in the cable list.
/// `NonZero` keeps `Option<CableId>` the same size as `CableId`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct CableId(NonZeroU32);

impl CableId {
    pub const FIRST: CableId = CableId(NonZeroU32::MIN);

    /// `None` for 0.
    pub fn new(raw: u32) -> Option<Self> {
        NonZeroU32::new(raw).map(Self)
    }

    pub fn get(self) -> u32 {
        self.0.get()
    }

    /// The id issued after this one, or `None` once the counter is exhausted.
    pub fn next(self) -> Option<Self> {
        self.0.checked_add(1).map(Self)
    }
}

impl Default for CableId {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Debug for CableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CableId({})", self.get())
    }
}

impl fmt::Display for CableId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.get())
    }
}
