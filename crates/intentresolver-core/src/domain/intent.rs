//! Intent and intent filter types.
//!
//! Only the parts of an intent that influence resolution and ranking are
//! modelled here. Extras and clip data never reach this core.

use bitflags::bitflags;
use serde::{Deserialize, Serialize};

use super::component::ComponentName;

/// Standard "view this data" action.
pub const ACTION_VIEW: &str = "android.intent.action.VIEW";
/// Standard "share this content" action.
pub const ACTION_SEND: &str = "android.intent.action.SEND";

bitflags! {
    /// Launch flags carried by an intent.
    ///
    /// Only flags the resolver inspects are named; unknown bits survive a
    /// round trip through serialization untouched.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    #[repr(transparent)]
    pub struct IntentFlags: u32 {
        /// Allow matching components outside the calling app's visibility,
        /// including instant apps.
        const ACTIVITY_MATCH_EXTERNAL = 0x0000_0800;
        /// Start the activity in a new task.
        const ACTIVITY_NEW_TASK       = 0x1000_0000;

        const _ = !0;
    }
}

impl Default for IntentFlags {
    fn default() -> Self {
        Self::empty()
    }
}

impl Serialize for IntentFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for IntentFlags {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let bits = u32::deserialize(deserializer)?;
        Ok(Self::from_bits_retain(bits))
    }
}

/// A request to perform an action, as seen by the resolver.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Intent {
    /// Action string (e.g. [`ACTION_SEND`]).
    pub action: Option<String>,
    /// Data URI, if any.
    pub data: Option<String>,
    /// Explicit MIME type, if any.
    pub mime_type: Option<String>,
    /// Categories the target must declare.
    pub categories: Vec<String>,
    /// Launch flags.
    pub flags: IntentFlags,
    /// Explicit target component, if the intent is explicit.
    pub component: Option<ComponentName>,
}

impl Intent {
    /// Create an implicit intent for `action`.
    pub fn new(action: impl Into<String>) -> Self {
        Self {
            action: Some(action.into()),
            ..Self::default()
        }
    }

    /// Set the data URI.
    #[must_use]
    pub fn with_data(mut self, data: impl Into<String>) -> Self {
        self.data = Some(data.into());
        self
    }

    /// Set the MIME type.
    #[must_use]
    pub fn with_type(mut self, mime_type: impl Into<String>) -> Self {
        self.mime_type = Some(mime_type.into());
        self
    }

    /// Add launch flags.
    #[must_use]
    pub fn with_flags(mut self, flags: IntentFlags) -> Self {
        self.flags |= flags;
        self
    }

    /// Set an explicit target component.
    #[must_use]
    pub fn with_component(mut self, component: ComponentName) -> Self {
        self.component = Some(component);
        self
    }

    /// Scheme of the data URI, lowercased.
    pub fn scheme(&self) -> Option<String> {
        let data = self.data.as_deref()?;
        let (scheme, _) = data.split_once(':')?;
        if scheme.is_empty() {
            return None;
        }
        Some(scheme.to_ascii_lowercase())
    }

    /// True when this is a `VIEW` of an `http`/`https` URI.
    pub fn is_web_intent(&self) -> bool {
        self.action.as_deref() == Some(ACTION_VIEW)
            && matches!(self.scheme().as_deref(), Some("http" | "https"))
    }

    /// MIME type used when matching against intent filters.
    pub fn resolve_type(&self) -> Option<&str> {
        self.mime_type.as_deref()
    }

    /// Like [`Intent::resolve_type`], but `None` for explicit intents, which
    /// bypass filter matching.
    pub fn resolve_type_if_needed(&self) -> Option<&str> {
        if self.component.is_some() {
            return None;
        }
        self.resolve_type()
    }
}

/// The filter an activity declared, as returned alongside a resolution when
/// the resolved filter was requested.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct IntentFilter {
    pub actions: Vec<String>,
    pub categories: Vec<String>,
    pub data_schemes: Vec<String>,
    pub data_types: Vec<String>,
    pub priority: i32,
}

impl IntentFilter {
    /// Create a filter matching a single action.
    pub fn for_action(action: impl Into<String>) -> Self {
        Self {
            actions: vec![action.into()],
            ..Self::default()
        }
    }

    pub fn has_action(&self, action: &str) -> bool {
        self.actions.iter().any(|a| a == action)
    }
}
