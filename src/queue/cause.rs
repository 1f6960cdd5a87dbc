//! Trigger causes for buildable tasks.

use serde::{Deserialize, Serialize, Serializer};

/// Why a task became buildable.
///
/// A task may carry several causes at once (e.g. a timer fired in the same
/// queuing window as a push), including repeats of the same kind. Cause kinds
/// the sorter does not weight collapse into [`Cause::Other`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cause {
    /// Manually requested by a user.
    UserInitiated,
    /// Triggered by a source-control change.
    SourceChange,
    /// Triggered by a scheduled timer.
    Timer,
    /// Any cause kind this sorter does not specifically weight.
    Other,
}

impl Cause {
    /// Canonical tag, as used in queue snapshots and order output.
    pub const fn as_tag(self) -> &'static str {
        match self {
            Self::UserInitiated => "user",
            Self::SourceChange => "scm",
            Self::Timer => "timer",
            Self::Other => "other",
        }
    }

    /// Map a tag to its cause kind.
    ///
    /// Total: unknown tags fold into [`Cause::Other`], so a snapshot from a
    /// host with richer cause taxonomy still resolves (contributing zero
    /// weight) instead of failing.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "user" => Self::UserInitiated,
            "scm" => Self::SourceChange,
            "timer" => Self::Timer,
            _ => Self::Other,
        }
    }
}

impl std::fmt::Display for Cause {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_tag())
    }
}

impl Serialize for Cause {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_tag())
    }
}

impl<'de> Deserialize<'de> for Cause {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let tag = String::deserialize(deserializer)?;
        Ok(Self::from_tag(&tag))
    }
}
