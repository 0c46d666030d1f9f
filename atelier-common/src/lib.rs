//! atelier-common - Pure portfolio logic shared by the UI and web crates
//!
//! Nothing in here touches the DOM: catalog resolution, gallery selection, the
//! page model, and the state machines behind the carousels and the lightbox.

pub mod catalog;
pub mod config;
pub mod home_carousel;
pub mod lightbox;
pub mod menu;
pub mod modal;
pub mod page;
pub mod selection;
pub mod strip;

pub use catalog::{
    Artwork, Catalog, CatalogError, ImageRegistry, ResolvedArtwork, ResolvedCatalog,
};
pub use config::{ConfigError, NavLink, SiteConfig, SketchKind, Timing, YearRange};
pub use home_carousel::{HomeCarousel, PointerSide};
pub use lightbox::{Lightbox, LightboxPhase, LoadTicket, Retarget, Step};
pub use menu::{MenuEntry, MenuItem, MenuPalette};
pub use modal::{
    close_action, keeps_background, resolve_overlay, CloseAction, OverlayResolution, RenderPlan,
};
pub use page::{Page, Theme};
pub use selection::{GalleryKey, GallerySelection};
pub use strip::{StripCarousel, WheelOutcome, DIMMED_OPACITY};
