//! Capability gate for the staff dashboards.

use dioxus::prelude::*;
use hms_model::Capability;

use crate::app::session::use_session;

/// Render `children` only when the signed-in role carries `capability`.
///
/// Shows nothing while the session is still resolving, and a notice once it
/// is clear the user lacks access. The API enforces the same rule; this only
/// keeps staff screens out of the way of everyone else.
#[component]
pub fn RoleGate(capability: Capability, children: Element) -> Element {
    let session = use_session();

    if session.allows(capability) {
        return children;
    }
    if !session.is_resolved() {
        return rsx! {};
    }

    rsx! {
        div { class: "max-w-xl bg-white/5 border border-white/10 rounded-xl p-6",
            p { class: "font-semibold", "Restricted" }
            p { class: "text-slate-400 text-sm mt-1",
                "Sign in with a staff account that has access to this dashboard."
            }
        }
    }
}
