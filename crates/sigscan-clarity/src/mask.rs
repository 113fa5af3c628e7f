use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use sigscan_core::{ChannelId, View};

/// Per-channel bad/dead flags, indexed by view and channel number.
///
/// The mask is event-independent and read-only: it changes at most
/// between data-taking periods and may be shared across event-processing
/// threads.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorChannelMask {
    flags: BTreeMap<View, Vec<bool>>,
}

impl DetectorChannelMask {
    /// Creates a mask with every channel good.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the full flag vector for one view.
    pub fn set_view(&mut self, view: View, flags: Vec<bool>) {
        self.flags.insert(view, flags);
    }

    /// Builds a mask marking the listed channels bad on one view.
    pub fn from_bad_channels(
        view: View,
        channel_count: u32,
        bad: impl IntoIterator<Item = ChannelId>,
    ) -> Self {
        let mut flags = vec![false; channel_count as usize];
        for channel in bad {
            if let Some(flag) = flags.get_mut(channel.as_raw() as usize) {
                *flag = true;
            }
        }
        let mut mask = Self::new();
        mask.set_view(view, flags);
        mask
    }

    /// Returns whether a channel is flagged bad.
    ///
    /// Channels outside the stored range, and views without a stored flag
    /// vector, are reported good; range policing is the geometry
    /// service's concern, not the mask's.
    pub fn is_bad(&self, view: View, channel: ChannelId) -> bool {
        self.flags
            .get(&view)
            .and_then(|flags| flags.get(channel.as_raw() as usize))
            .copied()
            .unwrap_or(false)
    }
}
