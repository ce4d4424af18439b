//! Static route table

use std::fmt;

/// Named routes of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RouteName {
    Home,
    Login,
    Register,
    Profile,
    Friends,
}

impl RouteName {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Login => "Login",
            Self::Register => "Register",
            Self::Profile => "Profile",
            Self::Friends => "Friends",
        }
    }

    /// Descriptor registered for this name
    pub fn descriptor(self) -> &'static RouteDescriptor {
        ROUTES
            .iter()
            .find(|route| route.name == self)
            .unwrap_or(&ROUTES[0])
    }

    pub fn path(self) -> &'static str {
        self.descriptor().path
    }
}

impl fmt::Display for RouteName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Immutable description of one route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteDescriptor {
    pub name: RouteName,
    pub path: &'static str,
    pub requires_auth: bool,
}

impl RouteDescriptor {
    /// Login and registration pages, which an authenticated user skips
    pub const fn is_auth_entry(&self) -> bool {
        matches!(self.name, RouteName::Login | RouteName::Register)
    }
}

/// Every route, `Home` first
pub static ROUTES: &[RouteDescriptor] = &[
    RouteDescriptor {
        name: RouteName::Home,
        path: "/",
        requires_auth: false,
    },
    RouteDescriptor {
        name: RouteName::Login,
        path: "/login",
        requires_auth: false,
    },
    RouteDescriptor {
        name: RouteName::Register,
        path: "/register",
        requires_auth: false,
    },
    RouteDescriptor {
        name: RouteName::Profile,
        path: "/profile",
        requires_auth: true,
    },
    RouteDescriptor {
        name: RouteName::Friends,
        path: "/friends",
        requires_auth: true,
    },
];

/// Look up a route by path. The query string and a trailing slash are ignored.
pub fn find_by_path(path: &str) -> Option<&'static RouteDescriptor> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let path = match path.trim_end_matches('/') {
        "" => "/",
        trimmed => trimmed,
    };
    ROUTES.iter().find(|route| route.path == path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_name_has_a_descriptor() {
        for name in [
            RouteName::Home,
            RouteName::Login,
            RouteName::Register,
            RouteName::Profile,
            RouteName::Friends,
        ] {
            assert_eq!(name.descriptor().name, name);
        }
    }

    #[test]
    fn test_find_by_path_normalizes() {
        assert_eq!(find_by_path("/profile/").map(|r| r.name), Some(RouteName::Profile));
        assert_eq!(
            find_by_path("/login?redirect=%2Fprofile").map(|r| r.name),
            Some(RouteName::Login)
        );
        assert_eq!(find_by_path("").map(|r| r.name), Some(RouteName::Home));
        assert_eq!(find_by_path("/nowhere"), None);
    }

    #[test]
    fn test_protected_routes() {
        let protected: Vec<_> = ROUTES
            .iter()
            .filter(|r| r.requires_auth)
            .map(|r| r.name)
            .collect();
        assert_eq!(protected, [RouteName::Profile, RouteName::Friends]);
    }
}
