//! Screen stack for the two onboarding screens.
//!
//! Pushing a route mounts a fresh screen on top of the stack; going back
//! drops the top screen and reveals the one beneath it untouched. The root
//! screen cannot be popped.

use std::fmt;
use std::str::FromStr;

use form_validation::ValidationPolicy;
use thiserror::Error;
use tracing::debug;

use crate::screens::{FormScreen, RegistrationScreen, SignInScreen};

/// Errors raised by [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// `back` was requested with only the root screen mounted.
    #[error("already at the root screen")]
    AtRoot,
    /// A path did not name a known route.
    #[error("unknown route: {path}")]
    UnknownRoute {
        /// The rejected path.
        path: String,
    },
}

/// Navigable destinations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    /// Registration screen; the initial route.
    Register,
    /// Sign-in screen.
    SignIn,
}

impl Route {
    /// Route shown when the app starts.
    pub const INITIAL: Self = Self::Register;

    /// Router path for the route.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Register => "/register",
            Self::SignIn => "/signin",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for Route {
    type Err = NavigationError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        match path.trim().trim_start_matches('/') {
            "register" => Ok(Self::Register),
            "signin" => Ok(Self::SignIn),
            _ => Err(NavigationError::UnknownRoute {
                path: path.to_owned(),
            }),
        }
    }
}

/// A mounted screen.
#[derive(Debug, Clone)]
pub enum Screen {
    /// "Create Account".
    Registration(RegistrationScreen),
    /// "Sign In".
    SignIn(SignInScreen),
}

impl Screen {
    /// Route this screen is mounted under.
    #[must_use]
    pub const fn route(&self) -> Route {
        match self {
            Self::Registration(_) => Route::Register,
            Self::SignIn(_) => Route::SignIn,
        }
    }

    /// Heading shown above the form.
    #[must_use]
    pub const fn title(&self) -> &'static str {
        match self {
            Self::Registration(_) => RegistrationScreen::TITLE,
            Self::SignIn(_) => SignInScreen::TITLE,
        }
    }

    /// Label and destination of the screen's link to the other screen.
    #[must_use]
    pub const fn link(&self) -> (&'static str, Route) {
        match self {
            Self::Registration(screen) => (RegistrationScreen::LINK_LABEL, screen.link()),
            Self::SignIn(screen) => (SignInScreen::LINK_LABEL, screen.link()),
        }
    }

    /// Form state of whichever screen this is.
    #[must_use]
    pub const fn form(&self) -> &FormScreen {
        match self {
            Self::Registration(screen) => screen.form(),
            Self::SignIn(screen) => screen.form(),
        }
    }

    /// Mutable form state of whichever screen this is.
    pub const fn form_mut(&mut self) -> &mut FormScreen {
        match self {
            Self::Registration(screen) => screen.form_mut(),
            Self::SignIn(screen) => screen.form_mut(),
        }
    }
}

/// Stack of mounted screens.
///
/// ## Invariants
/// - A root screen is always mounted.
/// - Every push mounts a fresh screen with empty fields and no errors.
#[derive(Debug, Clone)]
pub struct Navigator {
    registration_policy: ValidationPolicy,
    sign_in_policy: ValidationPolicy,
    root: Screen,
    pushed: Vec<Screen>,
}

impl Navigator {
    /// Start at [`Route::INITIAL`] with the named policies.
    #[must_use]
    pub fn new() -> Self {
        Self::with_policies(ValidationPolicy::registration(), ValidationPolicy::sign_in())
    }

    /// Start at [`Route::INITIAL`] with tuned policies for each screen.
    #[must_use]
    pub fn with_policies(
        registration_policy: ValidationPolicy,
        sign_in_policy: ValidationPolicy,
    ) -> Self {
        let root = mount(Route::INITIAL, &registration_policy, &sign_in_policy);
        Self {
            registration_policy,
            sign_in_policy,
            root,
            pushed: Vec::new(),
        }
    }

    /// Mount a fresh screen for `route` on top of the stack.
    pub fn push(&mut self, route: Route) -> &mut Screen {
        debug!(%route, depth = self.depth() + 1, "navigating");
        let screen = mount(route, &self.registration_policy, &self.sign_in_policy);
        self.pushed.push(screen);
        self.current_mut()
    }

    /// Follow the active screen's link to the other screen.
    pub fn follow_link(&mut self) -> &mut Screen {
        let (_, route) = self.current().link();
        self.push(route)
    }

    /// Drop the active screen and return to the one beneath it.
    ///
    /// # Errors
    ///
    /// Returns [`NavigationError::AtRoot`] when only the root is mounted.
    pub fn back(&mut self) -> Result<Route, NavigationError> {
        let dropped = self.pushed.pop().ok_or(NavigationError::AtRoot)?;
        debug!(from = %dropped.route(), to = %self.route(), "navigating back");
        Ok(self.route())
    }

    /// Active screen.
    #[must_use]
    pub fn current(&self) -> &Screen {
        self.pushed.last().unwrap_or(&self.root)
    }

    /// Active screen, mutably.
    pub fn current_mut(&mut self) -> &mut Screen {
        self.pushed.last_mut().unwrap_or(&mut self.root)
    }

    /// Route of the active screen.
    #[must_use]
    pub fn route(&self) -> Route {
        self.current().route()
    }

    /// Number of mounted screens, root included.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.pushed.len() + 1
    }
}

impl Default for Navigator {
    fn default() -> Self {
        Self::new()
    }
}

fn mount(route: Route, registration: &ValidationPolicy, sign_in: &ValidationPolicy) -> Screen {
    match route {
        Route::Register => Screen::Registration(RegistrationScreen::with_policy(registration.clone())),
        Route::SignIn => Screen::SignIn(SignInScreen::with_policy(sign_in.clone())),
    }
}
