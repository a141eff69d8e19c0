use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaBullhorn;
use dioxus_free_icons::Icon;

use crate::client::components::Page;
use crate::client::router::Route;
use crate::client::store::session::SessionState;

#[component]
pub fn ManageButton() -> Element {
    let session = use_context::<Signal<SessionState>>();

    let state = session.read();

    rsx!(
        if state.session.is_present() {
            Link {
                to: Route::AdminAdvertisements {},
                class: "btn btn-primary flex gap-2",
                Icon { width: 16, height: 16, icon: FaBullhorn }
                "Manage Advertisements"
            }
        } else if state.fetched {
            p { class: "opacity-70",
                "Sign in to see campus announcements and sponsored content."
            }
        }
    )
}

#[component]
pub fn Home() -> Element {
    rsx!(
        Title { "Campus Ads" }
        Meta {
            name: "description",
            content: "Announcements and sponsored content for the campus community."
        }
        Page { class: "flex items-center justify-center",
            div { class: "flex flex-col items-center gap-4 px-4 max-w-256",
                p { class: "text-2xl", "Campus Ads" }
                p { class: "text-center",
                    "Club events, library notices and partner offers appear alongside your pages, placed to fit your screen."
                }
                ManageButton { }
            }
        }
    )
}
