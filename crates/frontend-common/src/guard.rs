//! Route guard for protected and auth-only views

use yew::prelude::*;

use crate::components::LoadingSpinner;
use crate::config::AuthConfig;
use crate::redirect::redirect_to;
use crate::session::use_session;

/// What the guard should do for a given session state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuardDecision {
    /// Auth state not yet determined: placeholder only.
    Wait,
    /// Render the children.
    Render,
    /// Send the visitor to the login entry point.
    RedirectToLogin,
    /// Send the signed-in visitor to the landing page.
    RedirectToLanding,
}

impl GuardDecision {
    /// Decision table for the guard. No redirect is ever issued while
    /// loading, so hydration cannot bounce between routes.
    pub fn decide(loading: bool, authenticated: bool, require_auth: bool) -> Self {
        if loading {
            Self::Wait
        } else if require_auth && !authenticated {
            Self::RedirectToLogin
        } else if !require_auth && authenticated {
            Self::RedirectToLanding
        } else {
            Self::Render
        }
    }
}

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RouteGuardProps {
    /// Require a signed-in session (`true`) or a signed-out one (`false`,
    /// for auth-only pages like the login form).
    #[prop_or(true)]
    pub require_auth: bool,
    /// Override the redirect target.
    #[prop_or_default]
    pub redirect_to: Option<String>,
    pub children: Children,
}

/// Gates rendering of a subtree on the session state.
///
/// Redirects fire from an effect on the decision transition, never during
/// the initial synchronous render.
#[function_component(RouteGuard)]
pub fn route_guard(props: &RouteGuardProps) -> Html {
    let session = use_session();
    let decision =
        GuardDecision::decide(session.loading, session.is_authenticated(), props.require_auth);

    {
        let target = props.redirect_to.clone();
        use_effect_with(decision, move |decision| {
            match decision {
                GuardDecision::RedirectToLogin => {
                    redirect_to(target.as_deref().unwrap_or(AuthConfig::LOGIN_PATH));
                }
                GuardDecision::RedirectToLanding => {
                    redirect_to(target.as_deref().unwrap_or(AuthConfig::LANDING_PATH));
                }
                GuardDecision::Wait | GuardDecision::Render => {}
            }
            || ()
        });
    }

    match decision {
        GuardDecision::Wait => html! { <LoadingSpinner /> },
        GuardDecision::Render => html! { <>{ props.children.clone() }</> },
        GuardDecision::RedirectToLogin | GuardDecision::RedirectToLanding => Html::default(),
    }
}
