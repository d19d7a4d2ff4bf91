//! Package manager query flags and the caller-facing options that produce
//! them.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::intent::{Intent, IntentFlags};

bitflags! {
    /// Flags passed to the platform resolver with each query.
    ///
    /// Values match the platform constants so they can be forwarded to a
    /// real package manager unchanged.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct QueryFlags: u32 {
        /// Populate `ResolveInfo::filter`.
        const GET_RESOLVED_FILTER       = 0x0000_0040;
        /// Populate `ActivityInfo::metadata`.
        const GET_META_DATA             = 0x0000_0080;
        /// Only match filters declaring the default category.
        const MATCH_DEFAULT_ONLY        = 0x0001_0000;
        /// Include components that are not direct-boot aware.
        const MATCH_DIRECT_BOOT_UNAWARE = 0x0004_0000;
        /// Include components that are direct-boot aware.
        const MATCH_DIRECT_BOOT_AWARE   = 0x0008_0000;
        /// Include instant apps.
        const MATCH_INSTANT             = 0x0080_0000;
    }
}

impl Default for QueryFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for QueryFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for QueryFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_truncate(bits))
    }
}

impl QueryFlags {
    /// Flags for one intent: `base` plus instant-app matching for web
    /// intents and intents that ask to match external components.
    pub fn for_intent(base: Self, intent: &Intent) -> Self {
        if intent.is_web_intent() || intent.flags.contains(IntentFlags::ACTIVITY_MATCH_EXTERNAL) {
            base | Self::MATCH_INSTANT
        } else {
            base
        }
    }
}

/// What the caller wants the package manager to return.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QueryOptions {
    /// Include the filter that matched each result.
    pub resolved_filter: bool,
    /// Include activity `<meta-data>`.
    pub activity_metadata: bool,
    /// Restrict to filters in the default category.
    pub default_only: bool,
}

impl QueryOptions {
    /// Flags shared by every intent in a query.
    ///
    /// Direct-boot awareness is never a filter here: both kinds are always
    /// matched.
    pub fn base_flags(self) -> QueryFlags {
        let mut flags = QueryFlags::MATCH_DIRECT_BOOT_AWARE | QueryFlags::MATCH_DIRECT_BOOT_UNAWARE;
        if self.default_only {
            flags |= QueryFlags::MATCH_DEFAULT_ONLY;
        }
        if self.resolved_filter {
            flags |= QueryFlags::GET_RESOLVED_FILTER;
        }
        if self.activity_metadata {
            flags |= QueryFlags::GET_META_DATA;
        }
        flags
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::intent::{ACTION_SEND, ACTION_VIEW};

    #[test]
    fn test_base_flags_always_match_direct_boot() {
        let flags = QueryOptions::default().base_flags();
        assert_eq!(
            flags,
            QueryFlags::MATCH_DIRECT_BOOT_AWARE | QueryFlags::MATCH_DIRECT_BOOT_UNAWARE
        );
    }

    #[test]
    fn test_base_flags_from_options() {
        let options = QueryOptions {
            resolved_filter: true,
            activity_metadata: true,
            default_only: true,
        };
        let flags = options.base_flags();

        assert!(flags.contains(QueryFlags::GET_RESOLVED_FILTER));
        assert!(flags.contains(QueryFlags::GET_META_DATA));
        assert!(flags.contains(QueryFlags::MATCH_DEFAULT_ONLY));
        assert!(!flags.contains(QueryFlags::MATCH_INSTANT));
    }

    #[test]
    fn test_instant_matching_for_web_and_external() {
        let base = QueryOptions::default().base_flags();
        let web = Intent::new(ACTION_VIEW).with_data("https://example.com");
        let external = Intent::new(ACTION_SEND).with_flags(IntentFlags::ACTIVITY_MATCH_EXTERNAL);
        let plain = Intent::new(ACTION_SEND);

        assert!(QueryFlags::for_intent(base, &web).contains(QueryFlags::MATCH_INSTANT));
        assert!(QueryFlags::for_intent(base, &external).contains(QueryFlags::MATCH_INSTANT));
        assert_eq!(QueryFlags::for_intent(base, &plain), base);
    }
}
