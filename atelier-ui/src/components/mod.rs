//! View components

pub mod dropdown;
pub mod home_carousel;
pub mod icons;
pub mod lightbox;
pub mod navbar;
pub mod strip_carousel;

pub use dropdown::NavDropdown;
pub use home_carousel::HomeCarouselView;
pub use icons::{ChevronLeftIcon, ChevronRightIcon, XIcon};
pub use lightbox::LightboxView;
pub use navbar::NavBarView;
pub use strip_carousel::StripCarouselView;
