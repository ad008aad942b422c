//! Dashboard navigation model.
//!
//! The dashboard renders this model: a fixed set of links, a collapsible
//! mobile menu and a login/logout control driven by the caller's
//! authentication state.

use serde::Serialize;

/// A link in the navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NavLink {
    /// Visible text.
    pub title: &'static str,
    /// Target route or URL.
    pub href: &'static str,
    /// Whether the target leaves the dashboard (e.g. a `mailto:` link).
    pub external: bool,
}

const LINKS: [NavLink; 5] = [
    NavLink {
        title: "Homepage",
        href: "/",
        external: false,
    },
    NavLink {
        title: "About Us",
        href: "/about",
        external: false,
    },
    NavLink {
        title: "Projects",
        href: "#projects",
        external: false,
    },
    NavLink {
        title: "Data",
        href: "/data",
        external: false,
    },
    NavLink {
        title: "Contact Us",
        href: "mailto:info@maxxpotential.com",
        external: true,
    },
];

/// What the login/logout control does when pressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthAction {
    /// Start a login flow.
    Login,
    /// End the current session.
    Logout,
}

impl AuthAction {
    /// Button label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Login => "Login",
            Self::Logout => "Logout",
        }
    }
}

/// Navigation bar state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Navigation {
    menu_open: bool,
    authenticated: bool,
}

impl Navigation {
    /// Create a navigation model.
    #[must_use]
    pub const fn new(menu_open: bool, authenticated: bool) -> Self {
        Self {
            menu_open,
            authenticated,
        }
    }

    /// Links in display order.
    #[must_use]
    pub const fn links(&self) -> &'static [NavLink] {
        &LINKS
    }

    /// Whether the mobile menu is open.
    #[must_use]
    pub const fn menu_open(&self) -> bool {
        self.menu_open
    }

    /// Flip the mobile menu between open and closed.
    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    /// Page scrolling is locked while the mobile menu is open.
    #[must_use]
    pub const fn scroll_locked(&self) -> bool {
        self.menu_open
    }

    /// The control offered for the current authentication state.
    #[must_use]
    pub const fn auth_action(&self) -> AuthAction {
        if self.authenticated {
            AuthAction::Logout
        } else {
            AuthAction::Login
        }
    }
}

impl Serialize for Navigation {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let action = self.auth_action();
        let mut s = serializer.serialize_struct("Navigation", 5)?;
        s.serialize_field("links", self.links())?;
        s.serialize_field("menu_open", &self.menu_open)?;
        s.serialize_field("scroll_locked", &self.scroll_locked())?;
        s.serialize_field("auth_action", &action)?;
        s.serialize_field("auth_label", action.label())?;
        s.end()
    }
}
