use atelier_common::{
    close_action, keeps_background, resolve_overlay, Artwork, Catalog, CloseAction, GalleryKey,
    ImageRegistry, Lightbox, OverlayResolution, Page, RenderPlan, ResolvedCatalog, Retarget,
    Step, StripCarousel, Timing,
};

/// Browser history as the router sees it, plus the layout's single in-memory
/// background slot. After every move the slot is dropped unless the current
/// entry is an overlay, the same rule `SiteLayout` applies on each render.
struct History {
    entries: Vec<Page>,
    cursor: usize,
    background: Option<Page>,
}

impl History {
    fn new(page: Page) -> Self {
        Self {
            entries: vec![page],
            cursor: 0,
            background: None,
        }
    }

    /// A gallery click: remember the gallery, then push the overlay
    fn open(&mut self, overlay: Page) {
        self.background = Some(self.current().clone());
        self.push(overlay);
    }

    fn push(&mut self, page: Page) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(page);
        self.cursor += 1;
        self.settle();
    }

    fn replace(&mut self, page: Page) {
        self.entries[self.cursor] = page;
        self.settle();
    }

    fn back(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
        self.settle();
    }

    fn forward(&mut self) {
        if self.cursor + 1 < self.entries.len() {
            self.cursor += 1;
        }
        self.settle();
    }

    fn settle(&mut self) {
        if !keeps_background(self.current()) {
            self.background = None;
        }
    }

    fn current(&self) -> &Page {
        &self.entries[self.cursor]
    }

    fn background(&self) -> Option<&Page> {
        self.background.as_ref()
    }

    fn plan(&self) -> RenderPlan {
        RenderPlan::resolve(self.current(), self.background())
    }

    fn close(&mut self) {
        match close_action(self.current(), self.background()) {
            CloseAction::GoBack => self.back(),
            CloseAction::Replace(page) => self.replace(page),
        }
    }
}

/// What the mounted strip does on each render: follow the gallery in the base slot
fn sync_strip(strip: &mut StripCarousel, plan: &RenderPlan, catalog: &ResolvedCatalog) -> bool {
    let Some(key) = plan.base.gallery_key() else {
        return false;
    };
    let len = catalog.selection(&key).len();
    strip.sync(&key, len)
}

fn artwork(file: &str, year: &str) -> Artwork {
    Artwork {
        file: file.to_string(),
        year: year.to_string(),
        kind: "painting".to_string(),
        title: file.to_uppercase(),
        medium: "oil".to_string(),
    }
}

fn catalog(files: &[(&str, &str)]) -> ResolvedCatalog {
    let registry = ImageRegistry::from_assets(
        files
            .iter()
            .map(|(f, _)| (format!("public/art/{f}"), format!("/art/{f}"))),
    );
    Catalog::new(files.iter().map(|(f, y)| artwork(f, y)).collect()).resolve(&registry)
}

fn year_1850() -> Page {
    Page::PaintingYear {
        year: "1850".into(),
    }
}

#[test]
fn test_open_step_and_close_preserves_gallery() {
    let catalog = catalog(&[("a.jpg", "1850"), ("b.jpg", "1850")]);
    let mut history = History::new(year_1850());

    let key = history.current().gallery_key().unwrap();
    let selection = catalog.selection(&key);
    assert_eq!(selection.len(), 2);

    let mut strip = StripCarousel::new(0, Timing::default().wheel_throttle_ms);
    assert!(sync_strip(&mut strip, &history.plan(), &catalog));
    let gallery_base = history.plan().base;

    // Click item 0: the gallery becomes the background of the pushed overlay
    let file = selection.get(0).unwrap().file().to_string();
    history.open(Page::overlay(&key, file));
    assert_eq!(history.current().path(), "/painting/1850/a.jpg");
    assert!(history.plan().is_modal());
    assert_eq!(history.plan().base, gallery_base);

    let mut lightbox = Lightbox::new();
    let (overlay_key, overlay_file) = history.current().overlay_target().unwrap();
    let overlay_selection = catalog.selection(&overlay_key);
    let OverlayResolution::Show { index } = resolve_overlay(&overlay_selection, overlay_file)
    else {
        panic!("Expected a.jpg to resolve");
    };
    assert_eq!(index, 0);
    assert_eq!(lightbox.retarget(index, overlay_selection.len()), Retarget::ShowNow);

    // ArrowRight replaces the entry; the background slot is untouched
    let next = lightbox.step(Step::Next).unwrap();
    let next_file = overlay_selection.get(next).unwrap().file().to_string();
    history.replace(Page::overlay(&overlay_key, next_file));
    assert_eq!(history.current().path(), "/painting/1850/b.jpg");
    assert_eq!(history.entries.len(), 2);
    assert!(history.plan().is_modal());
    assert_eq!(lightbox.retarget(next, overlay_selection.len()), Retarget::FadeOut);

    // ArrowRight again is a no-op at the end
    lightbox.finish_fade();
    assert_eq!(lightbox.step(Step::Next), None);

    // Escape goes back to the gallery, which was never remounted
    assert_eq!(
        close_action(history.current(), history.background()),
        CloseAction::GoBack
    );
    history.close();
    assert_eq!(history.current().path(), "/painting/1850");
    assert_eq!(history.background(), None);
    assert_eq!(history.plan().base, gallery_base);
    assert!(!sync_strip(&mut strip, &history.plan(), &catalog));
}

#[test]
fn test_closing_returns_to_opened_position() {
    let catalog = catalog(&[("a.jpg", "1850"), ("b.jpg", "1850"), ("c.jpg", "1850")]);
    let mut history = History::new(year_1850());
    let key = history.current().gallery_key().unwrap();
    let selection = catalog.selection(&key);

    let mut strip = StripCarousel::new(0, 400);
    sync_strip(&mut strip, &history.plan(), &catalog);
    strip.next();
    strip.next();
    let opened_at = strip.position();

    let file = selection.get(opened_at).unwrap().file().to_string();
    history.open(Page::overlay(&key, file));
    assert!(!sync_strip(&mut strip, &history.plan(), &catalog));

    history.close();
    assert!(!sync_strip(&mut strip, &history.plan(), &catalog));
    assert_eq!(strip.position(), opened_at);
}

#[test]
fn test_forward_after_close_reopens_overlay_alone() {
    let catalog = catalog(&[("a.jpg", "1850"), ("b.jpg", "1850")]);
    let mut history = History::new(year_1850());
    let key = history.current().gallery_key().unwrap();

    history.open(Page::overlay(&key, "a.jpg"));
    assert!(history.plan().is_modal());

    // Escape pops back to the gallery, which drops the background
    history.close();
    assert_eq!(history.current(), &year_1850());
    assert_eq!(history.background(), None);

    // Browser Forward returns to the overlay entry, now without a background
    history.forward();
    assert_eq!(history.current().path(), "/painting/1850/a.jpg");
    let plan = history.plan();
    assert!(!plan.is_modal());
    assert_eq!(plan.base, Page::overlay(&key, "a.jpg"));

    // Closing it now replaces the entry with the gallery instead of going back
    assert_eq!(
        close_action(history.current(), history.background()),
        CloseAction::Replace(year_1850())
    );
    history.close();
    assert_eq!(history.current(), &year_1850());
    assert_eq!(history.cursor, 1);
    assert_eq!(history.entries.len(), 2);
}

#[test]
fn test_navbar_from_overlay_drops_background() {
    let mut history = History::new(year_1850());
    let key = history.current().gallery_key().unwrap();
    history.open(Page::overlay(&key, "a.jpg"));

    history.push(Page::About);
    assert_eq!(history.background(), None);

    history.back();
    assert!(!history.plan().is_modal());
}

#[test]
fn test_direct_link_to_unknown_file_redirects() {
    let catalog = catalog(&[("a.jpg", "1850"), ("b.jpg", "1850")]);
    let mut history = History::new(Page::parse("/painting/1850/c.jpg"));

    let plan = history.plan();
    assert!(!plan.is_modal());

    let (key, file) = history.current().overlay_target().unwrap();
    match resolve_overlay(&catalog.selection(&key), file) {
        OverlayResolution::Redirect(page) => history.replace(page),
        OverlayResolution::Show { index } => panic!("Unexpected index {index}"),
    }
    assert_eq!(history.current().path(), "/painting/1850");
    assert_eq!(history.entries.len(), 1);
}

#[test]
fn test_direct_link_close_falls_back_to_gallery() {
    let catalog = catalog(&[("a.jpg", "1850")]);
    let mut history = History::new(Page::parse("/painting/1850/a.jpg"));
    let (key, file) = history.current().overlay_target().unwrap();
    assert_eq!(
        resolve_overlay(&catalog.selection(&key), file),
        OverlayResolution::Show { index: 0 }
    );
    history.close();
    assert_eq!(history.current(), &year_1850());
    assert_eq!(history.entries.len(), 1);
}

#[test]
fn test_changing_year_resets_strip() {
    let catalog = catalog(&[("a.jpg", "1850"), ("b.jpg", "1850"), ("c.jpg", "1851")]);
    let mut history = History::new(year_1850());

    let mut strip = StripCarousel::new(0, 400);
    sync_strip(&mut strip, &history.plan(), &catalog);
    while strip.reveal_next() {}
    strip.next();
    assert_eq!(strip.position(), 1);

    history.push(Page::PaintingYear {
        year: "1851".into(),
    });
    assert!(sync_strip(&mut strip, &history.plan(), &catalog));
    assert_eq!(strip.position(), 0);
    assert_eq!(strip.revealed(), 0);
    assert_eq!(strip.key(), Some(&GalleryKey::Year("1851".into())));
    assert_eq!(
        catalog.selection(&GalleryKey::Year("1851".into())).files(),
        vec!["c.jpg"]
    );
}
