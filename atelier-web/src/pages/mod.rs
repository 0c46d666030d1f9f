mod about;
mod gallery;
mod home;
mod layout;
mod not_found;
mod overlay;

pub use about::About;
pub use gallery::{PaintingYear, Sketch};
pub use home::Home;
pub use layout::{BackgroundPage, SiteLayout};
pub use not_found::NotFound;
pub use overlay::{PaintingOverlay, SketchOverlay};
