pub mod pages;

use dioxus::prelude::*;
use pages::{AppLayout, ComponentGallery, Gallery};

pub const MAIN_CSS: Asset = asset!("/assets/main.css");
pub const BEFORE_IMAGE: Asset = asset!("/assets/before.svg");
pub const AFTER_IMAGE: Asset = asset!("/assets/after.svg");

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
    #[route("/")]
    Gallery {},
    #[route("/components")]
    ComponentGallery {},
}

#[component]
pub fn App() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        div { class: "min-h-screen", Router::<Route> {} }
    }
}
