use dioxus::prelude::*;

use crate::{
    client::{
        components::{ads::AdVariant, AdContainer, Navbar, SideDrawer},
        config::ViewportClass,
        router::Route,
        store::{session::SessionState, viewport::ViewportState},
    },
    model::advertisement::{AdType, Position},
};

/// Fixed ad placements around the page content
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Slot {
    TopBanner,
    RightSidebar,
    Bottom,
    Footer,
}

impl Slot {
    pub fn position(&self) -> Position {
        match self {
            Slot::TopBanner => Position::ContentTop,
            Slot::RightSidebar => Position::SidebarRight,
            Slot::Bottom => Position::ContentBottom,
            Slot::Footer => Position::Footer,
        }
    }

    pub fn ad_type(&self) -> AdType {
        match self {
            Slot::RightSidebar => AdType::Sidebar,
            Slot::TopBanner | Slot::Bottom | Slot::Footer => AdType::Banner,
        }
    }

    pub fn variant(&self) -> AdVariant {
        match self {
            Slot::TopBanner | Slot::Bottom => AdVariant::Banner,
            Slot::RightSidebar => AdVariant::Sidebar,
            Slot::Footer => AdVariant::Footer,
        }
    }
}

/// Ad slots mounted for a session state and viewport class.
///
/// Anonymous visitors get no ads. Tablets lose the right sidebar for lack of width; mobile keeps
/// only the bottom slot.
pub fn mounted_slots(session_present: bool, viewport: ViewportClass) -> Vec<Slot> {
    if !session_present {
        return Vec::new();
    }

    match viewport {
        ViewportClass::Desktop => vec![Slot::TopBanner, Slot::RightSidebar, Slot::Bottom, Slot::Footer],
        ViewportClass::Tablet => vec![Slot::TopBanner, Slot::Bottom, Slot::Footer],
        ViewportClass::Mobile => vec![Slot::Bottom],
    }
}

pub const DRAWER_OPEN_WIDTH: u32 = 240;
pub const DRAWER_CLOSED_WIDTH: u32 = 80;

#[component]
fn SlotAds(slot: Slot) -> Element {
    rsx!(AdContainer {
        position: slot.position(),
        ad_type: slot.ad_type(),
        variant: slot.variant(),
    })
}

#[component]
pub fn Layout() -> Element {
    let session = use_context::<Signal<SessionState>>();
    let viewport = use_context::<Signal<ViewportState>>();
    let mut drawer_open = use_signal(|| false);

    let signed_in = session.read().session.is_present();
    let slots = match viewport.read().class() {
        Some(class) => mounted_slots(signed_in, class),
        None => Vec::new(),
    };
    let mounted = |slot: Slot| slots.contains(&slot);

    let main_style = if signed_in {
        let drawer_width = if drawer_open() {
            DRAWER_OPEN_WIDTH
        } else {
            DRAWER_CLOSED_WIDTH
        };
        format!(
            "--drawer-width: {}px; transition: margin 195ms cubic-bezier(0.4, 0, 0.6, 1), width 195ms cubic-bezier(0.4, 0, 0.6, 1);",
            drawer_width
        )
    } else {
        String::new()
    };
    let main_class = if signed_in {
        "grow p-2 sm:p-4 md:p-6 pt-[64px] sm:ml-[var(--drawer-width)] sm:w-[calc(100%-var(--drawer-width))]"
    } else {
        "grow p-2 sm:p-4 md:p-6 w-full"
    };

    rsx!(
        div { class: "flex",
            if signed_in {
                Navbar {
                    on_drawer_toggle: move |_| {
                        let open = drawer_open();
                        drawer_open.set(!open);
                    }
                }
                SideDrawer { open: drawer_open() }
            }
            main { class: main_class, style: "{main_style}",
                if mounted(Slot::TopBanner) {
                    div { class: "mb-4",
                        SlotAds { slot: Slot::TopBanner }
                    }
                }
                div { class: "flex flex-col lg:flex-row gap-0 md:gap-4 lg:gap-6",
                    div { class: "grow min-w-0 w-full lg:w-auto",
                        Outlet::<Route> {}
                    }
                    if mounted(Slot::RightSidebar) {
                        aside { class: "hidden lg:block shrink-0 lg:w-[280px] xl:w-[320px]",
                            SlotAds { slot: Slot::RightSidebar }
                        }
                    }
                }
                if mounted(Slot::Bottom) {
                    div { class: "mt-6",
                        SlotAds { slot: Slot::Bottom }
                    }
                }
                if mounted(Slot::Footer) {
                    footer { class: "mt-8",
                        SlotAds { slot: Slot::Footer }
                    }
                }
            }
        }
    )
}
