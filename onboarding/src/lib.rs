//! Headless registration and sign-in screens.
//!
//! Purpose: model the state a UI layer keeps for the two onboarding
//! screens, drive [`form_validation`] on submit, and move between screens.
//! Rendering is left to whatever front end owns the pixels.
//!
//! Public surface:
//! - [`screens`]: per-screen form state and submit gating.
//! - [`avatar`]: the image-picker port and avatar selection.
//! - [`navigation`]: the screen stack.
//! - [`config`]: policy overrides loaded via OrthoConfig.

pub mod avatar;
pub mod config;
pub mod navigation;
pub mod screens;

pub use avatar::{
    AvatarPicker, AvatarSelection, PERMISSION_DENIED_NOTICE, PermissionStatus, PickOutcome,
};
pub use config::{FormSettings, SettingsError};
pub use navigation::{NavigationError, Navigator, Route, Screen};
pub use screens::{FormScreen, RegistrationScreen, SignInScreen, SubmitOutcome};
