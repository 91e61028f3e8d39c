//! compare-web - Before/after slider gallery
//!
//! Serves static slider markup enhanced by the page controller alongside
//! component-rendered sliders. `dioxus::launch` installs the default tracing
//! subscriber, so controller logs show up in the browser console.

fn main() {
    dioxus::launch(compare_web::App);
}
