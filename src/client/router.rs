use dioxus::prelude::*;

use crate::client::{
    components::Layout,
    routes::{AdminAdvertisements, Home, NotFound},
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]

    #[route("/")]
    Home {},

    #[route("/admin/advertisements")]
    AdminAdvertisements {},

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}
