//! Headless `VirtualDom` harness for hooks and routed screens.
//!
//! Mounts a root that provides an [`ApiClient`] and the session, then either
//! runs a hook under it or renders the router over an in-memory history.
//! Tasks are driven with real timers, so responses delayed by the mock
//! transport resolve inside [`Mounted::settle`].

#![cfg(test)]

use std::cell::RefCell;
use std::future::Future;
use std::rc::Rc;
use std::time::Duration;

use dioxus::dioxus_core::{ScopeId, VirtualDom};
use dioxus::history::MemoryHistory;
use dioxus::prelude::*;
use dioxus::router::{root_router, RouterContext};

use crate::api::ApiClient;
use crate::app::session::{use_session_provider, Session};
use crate::app::Route;

type Slot<T> = Rc<RefCell<Option<T>>>;

#[derive(Clone)]
struct HarnessProps<T: Clone + 'static> {
    api: ApiClient,
    hook: fn(ApiClient, Session) -> T,
    routed: bool,
    slot: Slot<T>,
}

fn harness_root<T: Clone + 'static>(props: HarnessProps<T>) -> Element {
    let api = use_context_provider(|| props.api.clone());
    let session = use_session_provider();
    let value = (props.hook)(api, session);
    props.slot.borrow_mut().replace(value);

    rsx! {
        if props.routed {
            Router::<Route> {}
        }
    }
}

/// A mounted harness and the value its hook last returned.
pub struct Mounted<T: Clone + 'static> {
    dom: VirtualDom,
    slot: Slot<T>,
    history: Option<Rc<MemoryHistory>>,
}

impl<T: Clone + 'static> Mounted<T> {
    /// Run `hook` under a fresh session. Nothing is rendered.
    pub fn hook(api: ApiClient, hook: fn(ApiClient, Session) -> T) -> Self {
        Self::mount(api, hook, None)
    }

    fn mount(api: ApiClient, hook: fn(ApiClient, Session) -> T, start: Option<Route>) -> Self {
        let slot: Slot<T> = Rc::new(RefCell::new(None));
        let props = HarnessProps {
            api,
            hook,
            routed: start.is_some(),
            slot: slot.clone(),
        };
        let mut dom = VirtualDom::new_with_props(harness_root::<T>, props);

        let history = start.map(|route| Rc::new(MemoryHistory::with_initial_path(route)));
        if let Some(history) = &history {
            dom.provide_root_context(history.clone() as Rc<dyn History>);
        }
        dom.rebuild_in_place();

        Self { dom, slot, history }
    }

    pub fn value(&self) -> T {
        self.slot.borrow().clone().expect("harness root rendered")
    }

    /// Run `f` inside the app scope.
    pub fn in_app<R>(&self, f: impl FnOnce() -> R) -> R {
        self.dom.in_scope(ScopeId::APP, f)
    }

    /// Spawn `task` in the app scope. It runs during the next [`settle`](Self::settle).
    pub fn spawn(&self, task: impl Future<Output = ()> + 'static) {
        self.in_app(|| {
            spawn(task);
        });
    }

    /// Drive tasks and re-renders for `ms` milliseconds.
    pub async fn settle(&mut self, ms: u64) {
        let deadline = tokio::time::Instant::now() + Duration::from_millis(ms);
        while tokio::time::timeout_at(deadline, self.dom.wait_for_work())
            .await
            .is_ok()
        {
            self.dom.render_immediate_to_vec();
        }
    }
}

impl Mounted<Session> {
    /// Render the full router starting at `start`.
    pub fn app(api: ApiClient, start: Route) -> Self {
        Self::mount(api, |_, session| session, Some(start))
    }

    pub fn router(&self) -> RouterContext {
        self.dom.in_runtime(root_router).expect("router mounted")
    }

    /// Current location of the in-memory history.
    pub fn path(&self) -> String {
        self.history
            .as_ref()
            .map(|h| h.current_route())
            .expect("mounted with a router")
    }
}
