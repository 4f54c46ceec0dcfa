//! Route guards: render a page or redirect, based on the session.
//!
//! The decision is a synchronous function of "is there a session token",
//! evaluated on every render. Redirects always replace the history entry so
//! the back button never lands on a page the user was bounced from.
//!
//! The token lives in browser storage, which the server cannot see. Until
//! the guard is mounted in the browser a session-dependent guard renders
//! nothing, on the server and in the hydrating client alike.

use dioxus::prelude::*;

use super::services::{use_mounted, use_services, use_store};
use crate::bridge::{NavigateOptions, LOGIN_PATH, ROOT_PATH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    Render,
    Redirect { to: &'static str, replace: bool },
}

pub trait RouteGuard {
    fn decide(&self, authenticated: bool) -> GuardDecision;

    /// The decision when the session is not known yet, if it does not
    /// depend on the session at all.
    fn decide_unknown(&self) -> Option<GuardDecision> {
        let signed_in = self.decide(true);
        (signed_in == self.decide(false)).then_some(signed_in)
    }
}

/// Pages only for signed-out users (login). Signed-in users go to `/`.
#[derive(Debug, Clone, Copy)]
pub struct PublicOnly;

/// Pages reachable regardless of session.
#[derive(Debug, Clone, Copy)]
pub struct Public;

/// Pages that need a session. Signed-out users go to `/login`.
#[derive(Debug, Clone, Copy)]
pub struct Private;

impl RouteGuard for PublicOnly {
    fn decide(&self, authenticated: bool) -> GuardDecision {
        if authenticated {
            GuardDecision::Redirect {
                to: ROOT_PATH,
                replace: true,
            }
        } else {
            GuardDecision::Render
        }
    }
}

impl RouteGuard for Public {
    fn decide(&self, _authenticated: bool) -> GuardDecision {
        GuardDecision::Render
    }
}

impl RouteGuard for Private {
    fn decide(&self, authenticated: bool) -> GuardDecision {
        if authenticated {
            GuardDecision::Render
        } else {
            GuardDecision::Redirect {
                to: LOGIN_PATH,
                replace: true,
            }
        }
    }
}

/// Evaluate `guard` for this render and schedule the redirect, if any.
/// `None` means "not decided yet": mounted in the browser only.
fn use_guard<G: RouteGuard + Copy + 'static>(guard: G) -> Option<GuardDecision> {
    let services = use_services();
    let mounted = use_mounted();
    // Subscribing makes sign-in/sign-out re-run the guard
    let signed_in = use_store(services.session.flag());
    let decision = if mounted {
        let _ = signed_in();
        Some(guard.decide(services.session.is_authenticated()))
    } else {
        guard.decide_unknown()
    };

    let navigation = services.navigation.clone();
    let session = services.session.clone();
    use_effect(move || {
        let _ = signed_in();
        if let GuardDecision::Redirect { to, replace } = guard.decide(session.is_authenticated()) {
            navigation.navigate(to, NavigateOptions { replace });
        }
    });

    decision
}

fn render_guarded(decision: Option<GuardDecision>, children: Element) -> Element {
    match decision {
        Some(GuardDecision::Render) => children,
        Some(GuardDecision::Redirect { .. }) | None => rsx! {},
    }
}

#[component]
pub fn PublicOnlyRoute(children: Element) -> Element {
    let decision = use_guard(PublicOnly);
    render_guarded(decision, children)
}

#[component]
pub fn PublicRoute(children: Element) -> Element {
    let decision = use_guard(Public);
    render_guarded(decision, children)
}

#[component]
pub fn PrivateRoute(children: Element) -> Element {
    let decision = use_guard(Private);
    render_guarded(decision, children)
}
