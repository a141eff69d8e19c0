use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaBars, FaBullhorn, FaHouse};
use dioxus_free_icons::Icon;

use crate::client::{components::AppTitleButton, router::Route};

#[component]
pub fn Navbar(on_drawer_toggle: EventHandler<MouseEvent>) -> Element {
    rsx! {
        div {
            class: "navbar bg-base-200 fixed top-0 z-50",
            div {
                class: "navbar-start gap-2",
                button {
                    class: "btn btn-ghost btn-square",
                    aria_label: "Toggle navigation",
                    onclick: move |e| on_drawer_toggle.call(e),
                    Icon { width: 20, height: 20, icon: FaBars }
                }
                AppTitleButton {}
            }
        }
    }
}

/// Navigation drawer, collapsed to icons when closed
#[component]
pub fn SideDrawer(open: bool) -> Element {
    let width = if open { "w-[240px]" } else { "w-[80px]" };

    rsx! {
        nav {
            class: "hidden sm:flex flex-col fixed left-0 top-[64px] h-full bg-base-200 {width}",
            style: "transition: width 195ms cubic-bezier(0.4, 0, 0.6, 1);",
            ul { class: "menu gap-1",
                li {
                    Link { to: Route::Home {},
                        Icon { width: 18, height: 18, icon: FaHouse }
                        if open { span { "Home" } }
                    }
                }
                li {
                    Link { to: Route::AdminAdvertisements {},
                        Icon { width: 18, height: 18, icon: FaBullhorn }
                        if open { span { "Advertisements" } }
                    }
                }
            }
        }
    }
}
