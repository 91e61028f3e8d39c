use crate::Route;
use dioxus::prelude::*;

#[component]
pub fn AppLayout() -> Element {
    let current_route = use_route::<Route>();

    let nav_class = |active: bool| {
        if active {
            "nav-link nav-link-active"
        } else {
            "nav-link"
        }
    };

    rsx! {
        header { class: "site-header",
            h1 { class: "site-title", "Before / After" }
            nav { class: "site-nav",
                Link {
                    class: nav_class(matches!(current_route, Route::Gallery {})).to_string(),
                    to: Route::Gallery {},
                    "Page sliders"
                }
                Link {
                    class: nav_class(matches!(current_route, Route::ComponentGallery {})).to_string(),
                    to: Route::ComponentGallery {},
                    "Component sliders"
                }
            }
        }
        main { class: "site-main", Outlet::<Route> {} }
    }
}
