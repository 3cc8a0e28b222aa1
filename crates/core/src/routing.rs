//! Role-gated navigation
//!
//! One table owns every route declaration together with its access rule;
//! nothing else in the workspace compares roles. The gate is a small state
//! machine per navigation: anonymous sessions and wrong-role sessions are
//! redirected to the landing route (never an error page, so protected pages
//! are not revealed to the wrong audience), and a landing visit while
//! authenticated bounces to the role's home page. A redirect is terminal
//! for that navigation; nothing is retried.

use brick_domain::{Role, Session};

/// Every navigable page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Chat,
    Dossier,
    Vault,
    Workbook,
    Resources,
    Legal,
    Directory,
    HudIntake,
    Caseworker,
    Agency,
    Cleanup,
    LegalPortal,
}

/// Access rule attached to a route
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Access {
    /// Renders for anonymous visitors
    Public,
    /// Any authenticated session
    Authenticated,
    /// Authenticated session with this exact role
    RoleRequired(Role),
}

/// The single route declaration table
const ROUTE_TABLE: &[(Route, &str, Access)] = &[
    (Route::Landing, "/", Access::Public),
    (Route::Chat, "/brick", Access::Authenticated),
    (Route::Dossier, "/dossier", Access::RoleRequired(Role::User)),
    (Route::Vault, "/vault", Access::RoleRequired(Role::User)),
    (Route::Workbook, "/workbook", Access::RoleRequired(Role::User)),
    (Route::Resources, "/resources", Access::Authenticated),
    (Route::Legal, "/legal", Access::Authenticated),
    (Route::Directory, "/directory", Access::Authenticated),
    (Route::HudIntake, "/hud-intake", Access::RoleRequired(Role::Caseworker)),
    (Route::Caseworker, "/caseworker", Access::RoleRequired(Role::Caseworker)),
    (Route::Agency, "/agency", Access::RoleRequired(Role::AgencyStaff)),
    (Route::Cleanup, "/cleanup", Access::RoleRequired(Role::CleanupCrew)),
    (Route::LegalPortal, "/legal-portal", Access::RoleRequired(Role::LegalAid)),
];

impl Route {
    /// URL path of this route
    pub fn path(&self) -> &'static str {
        // Route appears exactly once in the table
        ROUTE_TABLE
            .iter()
            .find(|(route, _, _)| route == self)
            .map(|(_, path, _)| *path)
            .unwrap_or("/")
    }

    /// Look a route up by its URL path
    pub fn from_path(path: &str) -> Option<Route> {
        ROUTE_TABLE.iter().find(|(_, p, _)| *p == path).map(|(route, _, _)| *route)
    }

    fn access(&self) -> Access {
        ROUTE_TABLE
            .iter()
            .find(|(route, _, _)| route == self)
            .map(|(_, _, access)| *access)
            .unwrap_or(Access::Public)
    }
}

/// Home page for each role, used when an authenticated session hits landing
pub fn home_path(role: Role) -> &'static str {
    match role {
        Role::AgencyStaff => Route::Agency.path(),
        Role::CleanupCrew => Route::Cleanup.path(),
        Role::LegalAid => Route::LegalPortal.path(),
        Role::Caseworker => Route::Caseworker.path(),
        Role::User => Route::Chat.path(),
    }
}

/// Outcome of resolving one navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Navigation {
    /// The requested route may render
    Render(Route),
    /// Terminal redirect to another path
    Redirect(&'static str),
}

/// Decides, per navigation, whether a requested page may render
pub struct RouterGate;

impl RouterGate {
    /// Resolve a navigation against the current session
    pub fn resolve(route: Route, session: &Session) -> Navigation {
        match route.access() {
            Access::Public => {
                if session.is_authenticated() {
                    // Landing bounces an authenticated session to its home page
                    let role = session.user.as_ref().map(|u| u.role).unwrap_or(Role::User);
                    Navigation::Redirect(home_path(role))
                } else {
                    Navigation::Render(route)
                }
            }
            Access::Authenticated => {
                if session.is_authenticated() {
                    Navigation::Render(route)
                } else {
                    Navigation::Redirect(Route::Landing.path())
                }
            }
            Access::RoleRequired(required) => {
                let role_matches = session.is_authenticated()
                    && session.user.as_ref().is_some_and(|u| u.role == required);
                if role_matches {
                    Navigation::Render(route)
                } else {
                    Navigation::Redirect(Route::Landing.path())
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use brick_domain::User;

    use super::*;

    fn session_with_role(role: Role) -> Session {
        Session {
            token: Some("tok".into()),
            user: Some(User {
                id: "u1".into(),
                email: "a@b.com".into(),
                full_name: "A B".into(),
                role,
                organization: None,
                is_veteran: false,
                phone: None,
                created_at: None,
            }),
        }
    }

    #[test]
    fn anonymous_is_redirected_from_every_protected_route() {
        let session = Session::anonymous();
        for (route, _, _) in ROUTE_TABLE.iter().filter(|(r, _, _)| *r != Route::Landing) {
            assert_eq!(
                RouterGate::resolve(*route, &session),
                Navigation::Redirect("/"),
                "route {route:?} should redirect anonymous sessions"
            );
        }
    }

    #[test]
    fn wrong_role_redirects_to_landing_not_an_error() {
        let session = session_with_role(Role::User);
        assert_eq!(RouterGate::resolve(Route::Caseworker, &session), Navigation::Redirect("/"));
        assert_eq!(RouterGate::resolve(Route::Agency, &session), Navigation::Redirect("/"));
    }

    #[test]
    fn matching_role_renders() {
        let session = session_with_role(Role::Caseworker);
        assert_eq!(
            RouterGate::resolve(Route::Caseworker, &session),
            Navigation::Render(Route::Caseworker)
        );

        let session = session_with_role(Role::User);
        assert_eq!(RouterGate::resolve(Route::Workbook, &session), Navigation::Render(Route::Workbook));
    }

    #[test]
    fn authenticated_landing_bounces_to_role_home() {
        for (role, home) in [
            (Role::User, "/brick"),
            (Role::Caseworker, "/caseworker"),
            (Role::AgencyStaff, "/agency"),
            (Role::CleanupCrew, "/cleanup"),
            (Role::LegalAid, "/legal-portal"),
        ] {
            let session = session_with_role(role);
            assert_eq!(RouterGate::resolve(Route::Landing, &session), Navigation::Redirect(home));
        }
    }

    #[test]
    fn token_without_user_fails_role_gates() {
        // Mid-bootstrap state: token restored, identity not yet resolved
        let session = Session { token: Some("tok".into()), user: None };
        assert_eq!(RouterGate::resolve(Route::Dossier, &session), Navigation::Redirect("/"));
        assert_eq!(RouterGate::resolve(Route::Chat, &session), Navigation::Render(Route::Chat));
    }

    #[test]
    fn paths_round_trip_through_the_table() {
        for (route, path, _) in ROUTE_TABLE {
            assert_eq!(route.path(), *path);
            assert_eq!(Route::from_path(path), Some(*route));
        }
        assert_eq!(Route::from_path("/nope"), None);
    }
}
