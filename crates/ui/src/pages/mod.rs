//! Root compositions, one per [`Demo`].

mod catalog;
mod gallery;
mod landing;

pub use catalog::CatalogPage;
pub use gallery::GalleryPage;
pub use landing::LandingPage;

use dioxus::prelude::Element;
use showcase_domain::Demo;

/// Root component of `demo`, ready to mount or pre-render.
#[must_use]
pub fn root(demo: Demo) -> fn() -> Element {
    match demo {
        Demo::Landing => LandingPage,
        Demo::Gallery => GalleryPage,
        Demo::Catalog => CatalogPage,
    }
}
