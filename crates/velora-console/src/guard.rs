//! Route admission control
//!
//! [`RouteGuard`] gates every navigation into the protected area of the
//! console. It reads the injected [`SessionStore`] on each decision, so a
//! login or logout changes the outcome of the very next navigation.
//!
//! Before the store has been initialized the guard answers [`Decision::Hold`]:
//! the shell shows a neutral loading state instead of either flashing a
//! protected view or bouncing a returning admin to the login screen while
//! the persisted session is still being restored.

use std::sync::Arc;

use velora_client::SessionStore;
use velora_common::Role;

/// Protected views of the console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Dashboard,
    Users,
    Products,
    Orders,
    Inventory,
    Reports,
    Admins,
    Settings,
    MyProfile,
    UserManagement,
}

/// Where an admitted navigation lands when the requested view is unavailable.
pub const LANDING: View = View::Dashboard;

impl View {
    /// All protected views, in navigation order.
    pub const ALL: [View; 10] = [
        View::Dashboard,
        View::Users,
        View::Products,
        View::Orders,
        View::Inventory,
        View::Reports,
        View::Admins,
        View::Settings,
        View::MyProfile,
        View::UserManagement,
    ];

    /// Route path of this view.
    pub fn path(&self) -> &'static str {
        match self {
            View::Dashboard => "/dashboard",
            View::Users => "/dashboard/users",
            View::Products => "/dashboard/products",
            View::Orders => "/dashboard/orders",
            View::Inventory => "/dashboard/inventory",
            View::Reports => "/dashboard/reports",
            View::Admins => "/dashboard/admins",
            View::Settings => "/dashboard/settings",
            View::MyProfile => "/dashboard/my-profile",
            View::UserManagement => "/dashboard/user-management",
        }
    }

    /// Resolve a route path to a view.
    pub fn from_path(path: &str) -> Option<View> {
        View::ALL.iter().copied().find(|view| view.path() == path)
    }

    /// Roles allowed into this view beyond holding a session at all.
    ///
    /// An empty slice means any admitted session may enter.
    pub fn required_roles(&self) -> &'static [Role] {
        match self {
            View::UserManagement => &[Role::SuperAdmin],
            _ => &[],
        }
    }
}

/// Session state as seen by the guard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// The store has not finished restoring persisted state yet.
    Unknown,
    /// The store is initialized and holds no session.
    Denied,
    /// A session is present.
    Admitted,
}

/// Redirect destinations the guard can signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// The login view, for unauthenticated navigations.
    Login,
    /// The default landing view, for authenticated but unauthorized ones.
    Landing,
}

/// Outcome of one navigation attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Keep showing a neutral loading state; decide again once the store
    /// is initialized.
    Hold,
    /// Leave the protected area.
    Redirect(Target),
    /// Render the requested view.
    Render(View),
}

/// Per-navigation admission check over an injected session store.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    store: Arc<SessionStore>,
}

impl RouteGuard {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Classify the current session state.
    pub fn admission(&self) -> Admission {
        if !self.store.is_initialized() {
            return Admission::Unknown;
        }
        if self.store.current().is_some() {
            Admission::Admitted
        } else {
            Admission::Denied
        }
    }

    /// Decide one navigation attempt.
    ///
    /// The attempted destination is not preserved across a login redirect;
    /// after signing in the shell starts over at [`LANDING`].
    pub fn decide(&self, view: View) -> Decision {
        match self.admission() {
            Admission::Unknown => Decision::Hold,
            Admission::Denied => Decision::Redirect(Target::Login),
            Admission::Admitted => {
                let required = view.required_roles();
                if required.is_empty() {
                    return Decision::Render(view);
                }
                match self.store.current() {
                    Some(session) if required.contains(&session.role()) => {
                        Decision::Render(view)
                    }
                    _ => Decision::Redirect(Target::Landing),
                }
            }
        }
    }
}
