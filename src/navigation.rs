use log::warn;
use web_sys::{window, ScrollBehavior, ScrollIntoViewOptions};

/// In-page anchors. The page has no routes, only these section ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Section {
    Home,
    Stats,
    Services,
    App,
    Testimonials,
    Commitment,
    Contact,
}

impl Section {
    pub const ALL: [Section; 7] = [
        Section::Home,
        Section::Stats,
        Section::Services,
        Section::App,
        Section::Testimonials,
        Section::Commitment,
        Section::Contact,
    ];

    /// Sections linked from the navigation bar.
    pub const MENU: [Section; 5] = [
        Section::Services,
        Section::App,
        Section::Testimonials,
        Section::Commitment,
        Section::Contact,
    ];

    pub fn anchor(self) -> &'static str {
        match self {
            Section::Home => "accueil",
            Section::Stats => "chiffres",
            Section::Services => "services",
            Section::App => "application",
            Section::Testimonials => "temoignages",
            Section::Commitment => "engagement",
            Section::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Home => "Accueil",
            Section::Stats => "Chiffres",
            Section::Services => "Services",
            Section::App => "Application",
            Section::Testimonials => "Témoignages",
            Section::Commitment => "Engagement",
            Section::Contact => "Contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.anchor())
    }
}

/// Smooth-scrolls the section into view. Missing window or element is logged, not fatal.
pub fn scroll_to(section: Section) {
    let Some(document) = window().and_then(|w| w.document()) else {
        warn!("no document, cannot scroll to #{}", section.anchor());
        return;
    };
    match document.get_element_by_id(section.anchor()) {
        Some(element) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
        None => warn!("section #{} is not rendered", section.anchor()),
    }
}
