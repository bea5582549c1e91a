use leptos::document;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions};

/// The fixed page sections navigation can jump to, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Programs,
    Workouts,
    Nutrition,
    Testimonials,
    Contact,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Programs,
        Section::Workouts,
        Section::Nutrition,
        Section::Testimonials,
        Section::Contact,
    ];

    /// Element id the section renders under.
    pub fn anchor(self) -> &'static str {
        match self {
            Section::Programs => "programs",
            Section::Workouts => "workouts",
            Section::Nutrition => "nutrition",
            Section::Testimonials => "testimonials",
            Section::Contact => "contact",
        }
    }

    pub fn ui_text(self) -> &'static str {
        match self {
            Section::Programs => "Programs",
            Section::Workouts => "Workouts",
            Section::Nutrition => "Nutrition",
            Section::Testimonials => "Testimonials",
            Section::Contact => "Contact",
        }
    }

    /// Smooth-scrolls the viewport to the section's anchor element. A
    /// missing element is a no-op.
    pub fn scroll_into_view(self) {
        if let Some(element) = document().get_element_by_id(self.anchor()) {
            let mut options = ScrollIntoViewOptions::new();
            options.behavior(ScrollBehavior::Smooth);
            element.scroll_into_view_with_scroll_into_view_options(&options);
        }
    }
}

#[cfg(test)]
mod test {
    use super::Section;

    #[test]
    fn test_anchors_are_unique() {
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a.anchor(), b.anchor());
            }
        }
    }

    #[test]
    fn test_every_section_has_anchor_and_label() {
        for section in Section::ALL {
            assert!(!section.anchor().is_empty());
            assert!(!section.ui_text().is_empty());
        }
    }
}
