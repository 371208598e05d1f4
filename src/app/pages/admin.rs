//! Room inventory dashboard.

use dioxus::prelude::*;
use hms_model::{prepend, remove_by_id, Capability, Id, NewRoom, Room, RoomStatus, RoomType};

use crate::api::{self, ApiClient};
use crate::app::components::{Layout, RoleGate};
use crate::app::format::money;
use crate::app::session::{use_session, Session};

/// Create a room, returning the server's record or an inline message.
pub(crate) async fn add_room(api: &ApiClient, room: &NewRoom) -> Result<Room, String> {
    api::create_room(api, room)
        .await
        .map_err(|e| e.user_message("Could not create room"))
}

/// Delete a room on the server. Callers drop it from the local list only
/// after this returns `Ok`.
pub(crate) async fn remove_room(api: &ApiClient, id: &Id) -> Result<(), String> {
    api::delete_room(api, id)
        .await
        .map_err(|e| e.user_message("Could not delete room"))
}

/// Room inventory as last confirmed by the server, plus the latest inline
/// error. Mutations patch the list in place; it is never re-fetched.
#[derive(Clone, Copy)]
pub(crate) struct RoomBoard {
    pub rooms: Signal<Vec<Room>>,
    pub error: Signal<Option<String>>,
}

/// Load the inventory once the session carries [`Capability::ManageRooms`].
pub(crate) fn use_room_board(api: ApiClient, session: Session) -> RoomBoard {
    let mut rooms = use_signal(Vec::<Room>::new);
    let error = use_signal(|| None::<String>);

    let fetched = use_resource(move || {
        let api = api.clone();
        let allowed = session.allows(Capability::ManageRooms);
        async move {
            if !allowed {
                return None;
            }
            api::list_rooms(&api).await.ok()
        }
    });

    use_effect(move || {
        if let Some(Some(loaded)) = fetched.read().as_ref() {
            rooms.set(loaded.clone());
        }
    });

    RoomBoard { rooms, error }
}

impl RoomBoard {
    /// Create a room and put the server's record on top. Returns whether
    /// the server accepted it.
    pub(crate) async fn create(mut self, api: ApiClient, room: NewRoom) -> bool {
        self.error.set(None);
        match add_room(&api, &room).await {
            Ok(created) => {
                self.rooms.with_mut(|list| prepend(list, created));
                true
            }
            Err(msg) => {
                self.error.set(Some(msg));
                false
            }
        }
    }

    /// Delete a room, dropping it locally once the server has confirmed.
    pub(crate) async fn delete(mut self, api: ApiClient, id: Id) {
        self.error.set(None);
        match remove_room(&api, &id).await {
            Ok(()) => {
                self.rooms.with_mut(|list| {
                    remove_by_id(list, &id);
                });
            }
            Err(msg) => self.error.set(Some(msg)),
        }
    }
}

/// Admin page component.
#[component]
pub fn Admin() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_session();

    let board = use_room_board(api.clone(), session);
    let RoomBoard { rooms, error } = board;
    let mut room_number = use_signal(String::new);
    let mut kind = use_signal(RoomType::default);
    let mut price = use_signal(|| NewRoom::default().price);
    let mut status = use_signal(RoomStatus::default);

    let create_api = api.clone();
    let on_create = move |evt: FormEvent| {
        evt.prevent_default();

        let api = create_api.clone();
        let new_room = NewRoom {
            room_number: room_number(),
            kind: kind(),
            price: price(),
            status: status(),
            ..NewRoom::default()
        };
        spawn(async move {
            if board.create(api, new_room).await {
                let defaults = NewRoom::default();
                room_number.set(defaults.room_number);
                kind.set(defaults.kind);
                price.set(defaults.price);
                status.set(defaults.status);
            }
        });
    };

    let on_delete = use_callback(move |id: Id| {
        spawn(board.delete(api.clone(), id));
    });

    rsx! {
        Layout {
            title: "Admin".to_string(),
            nav_active: "admin".to_string(),

            h2 { class: "text-2xl font-semibold mb-6", "Admin Dashboard" }
            RoleGate { capability: Capability::ManageRooms,
                if let Some(msg) = error() {
                    p { class: "form-error mb-4", "{msg}" }
                }
                div { class: "grid grid-cols-1 lg:grid-cols-3 gap-6",
                    div { class: "lg:col-span-2 bg-white/5 border border-white/10 rounded-xl p-4",
                        div { class: "font-semibold mb-3", "Rooms" }
                        div { class: "grid grid-cols-1 sm:grid-cols-2 gap-4",
                            for room in rooms() {
                                RoomTile { key: "{room.id}", room: room.clone(), on_delete: on_delete }
                            }
                        }
                    }

                    form {
                        class: "bg-white/5 border border-white/10 rounded-xl p-4",
                        onsubmit: on_create,

                        div { class: "font-semibold mb-3", "Add Room" }
                        div { class: "space-y-3",
                            input {
                                class: "form-field",
                                placeholder: "Room Number",
                                value: "{room_number}",
                                oninput: move |e| room_number.set(e.value()),
                            }
                            select {
                                class: "form-field",
                                value: "{kind}",
                                onchange: move |e| {
                                    if let Some(t) = RoomType::parse(&e.value()) {
                                        kind.set(t);
                                    }
                                },
                                for t in RoomType::ALL {
                                    option { key: "{t}", value: "{t}", selected: t == kind(), "{t}" }
                                }
                            }
                            input {
                                class: "form-field",
                                r#type: "number",
                                step: "0.01",
                                placeholder: "Price",
                                value: "{price}",
                                // The number input hands over "" while mid-edit
                                oninput: move |e| {
                                    if let Ok(p) = e.value().parse::<f64>() {
                                        price.set(p);
                                    }
                                },
                            }
                            select {
                                class: "form-field",
                                value: "{status}",
                                onchange: move |e| {
                                    if let Some(s) = RoomStatus::parse(&e.value()) {
                                        status.set(s);
                                    }
                                },
                                for s in RoomStatus::ALL {
                                    option { key: "{s}", value: "{s}", selected: s == status(), "{s}" }
                                }
                            }
                            button {
                                class: "w-full bg-orange-500 hover:bg-orange-600 rounded-lg py-2",
                                r#type: "submit",
                                "Create"
                            }
                        }
                    }
                }
            }
        }
    }
}

/// Room card with a delete control
#[component]
fn RoomTile(room: Room, on_delete: Callback<Id>) -> Element {
    let id = room.id.clone();

    rsx! {
        div { class: "p-3 bg-white/5 rounded-lg",
            div { class: "font-semibold", "Room {room.room_number} • {room.kind}" }
            div { class: "text-xs text-slate-400 mb-2", "{money(room.price)} • {room.status}" }
            button {
                class: "text-red-400 text-sm",
                r#type: "button",
                onclick: move |_| on_delete.call(id.clone()),
                "Delete"
            }
        }
    }
}
