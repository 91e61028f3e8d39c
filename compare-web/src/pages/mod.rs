mod component_gallery;
mod gallery;
mod layout;

pub use component_gallery::ComponentGallery;
pub use gallery::Gallery;
pub use layout::AppLayout;
