//! Avatar selection and the media-library picker port.
//!
//! The picker is a *driven* port: the registration screen calls it to ask
//! for permission and launch the platform's image library. Tests substitute
//! a double so avatar flows run without a device.

use async_trait::async_trait;

/// Notice shown once when the user declines media-library access.
pub const PERMISSION_DENIED_NOTICE: &str = "Access denied. Enable photos permission in Settings.";

/// Local reference to a picked image.
///
/// The URI is opaque: it is displayed, never parsed, uploaded or validated
/// beyond being non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarSelection(String);

impl AvatarSelection {
    /// Wrap a picked asset URI; an empty URI is no selection.
    ///
    /// # Examples
    /// ```
    /// use onboarding::AvatarSelection;
    ///
    /// assert!(AvatarSelection::from_uri("").is_none());
    /// let avatar = AvatarSelection::from_uri("file:///photos/me.jpg").expect("non-empty");
    /// assert_eq!(avatar.uri(), "file:///photos/me.jpg");
    /// ```
    pub fn from_uri(uri: impl Into<String>) -> Option<Self> {
        let raw = uri.into();
        (!raw.is_empty()).then_some(Self(raw))
    }

    /// URI handed back by the picker.
    #[must_use]
    pub fn uri(&self) -> &str {
        self.0.as_str()
    }
}

/// Answer to a media-library permission request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    /// Access granted; the picker may open.
    Granted,
    /// Access explicitly refused.
    Denied,
    /// The platform gave no definite answer.
    Undetermined,
}

/// Platform image picker.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AvatarPicker: Send + Sync {
    /// Ask for media-library access.
    async fn request_permission(&self) -> PermissionStatus;

    /// Open the image library and return the picked asset URI.
    ///
    /// `None` means the user dismissed the picker.
    async fn pick_image(&self) -> Option<String>;
}

/// What happened when the user tapped the avatar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickOutcome {
    /// A new image replaced the current avatar.
    Selected(AvatarSelection),
    /// The picker closed without a usable image; the avatar is unchanged.
    Cancelled,
    /// Access was not granted; the notice should be shown once.
    PermissionDenied {
        /// Text for the informational alert.
        notice: &'static str,
    },
}

impl PickOutcome {
    /// Notice the UI should surface, if any.
    #[must_use]
    pub const fn notice(&self) -> Option<&'static str> {
        match self {
            Self::PermissionDenied { notice } => Some(*notice),
            _ => None,
        }
    }
}
