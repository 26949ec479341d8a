#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Section {
    Home,
    Videos,
    Contact,
}

impl Section {
    /// Declared page order; earlier sections win when bands overlap.
    pub const ALL: [Section; 3] = [Section::Home, Section::Videos, Section::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Videos => "videos",
            Self::Contact => "contact",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Videos => "Videos",
            Self::Contact => "Contact",
        }
    }
}

/// Vertical extent of a section in document coordinates.
#[derive(Clone, Copy, PartialEq, Debug)]
pub struct SectionBounds {
    pub top: f64,
    pub height: f64,
}

impl SectionBounds {
    pub fn contains(&self, position: f64) -> bool {
        position >= self.top && position < self.top + self.height
    }
}

/// First section, in the order given, whose band holds `position`.
pub fn locate_section<I>(position: f64, sections: I) -> Option<Section>
where
    I: IntoIterator<Item = (Section, SectionBounds)>,
{
    sections
        .into_iter()
        .find(|(_, bounds)| bounds.contains(position))
        .map(|(section, _)| section)
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct NavigationState {
    active: Section,
}

impl Default for NavigationState {
    fn default() -> Self {
        Self {
            active: Section::Home,
        }
    }
}

impl NavigationState {
    pub fn active(&self) -> Section {
        self.active
    }

    /// Recomputes the active section for a scroll offset. Sections that
    /// could not be measured are simply absent from `sections`; when no
    /// band matches, the previous section stays active.
    pub fn on_scroll<I>(&mut self, scroll_y: f64, probe_offset: f64, sections: I) -> bool
    where
        I: IntoIterator<Item = (Section, SectionBounds)>,
    {
        match locate_section(scroll_y + probe_offset, sections) {
            Some(section) if section != self.active => {
                self.active = section;
                true
            }
            _ => false,
        }
    }

    /// Optimistic highlight for a nav click; the next scroll tick may
    /// override it.
    pub fn navigate_to(&mut self, section: Section) {
        self.active = section;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stacked(heights: [f64; 3]) -> Vec<(Section, SectionBounds)> {
        let mut top = 0.0;
        Section::ALL
            .into_iter()
            .zip(heights)
            .map(|(section, height)| {
                let bounds = SectionBounds { top, height };
                top += height;
                (section, bounds)
            })
            .collect()
    }

    #[test]
    fn scrolling_to_850_with_probe_100_highlights_videos() {
        let mut state = NavigationState::default();

        assert!(state.on_scroll(850.0, 100.0, stacked([800.0, 600.0, 900.0])));
        assert_eq!(state.active(), Section::Videos);
    }

    #[test]
    fn every_offset_inside_a_band_selects_that_band() {
        let sections = stacked([800.0, 600.0, 900.0]);
        let probe = 100.0;

        for (section, bounds) in &sections {
            let mut position = bounds.top;
            while position < bounds.top + bounds.height {
                let mut state = NavigationState::default();
                state.on_scroll(position - probe, probe, sections.clone());
                assert_eq!(state.active(), *section, "position {position}");
                position += 25.0;
            }
        }
    }

    #[test]
    fn band_end_is_exclusive() {
        let sections = stacked([800.0, 600.0, 900.0]);

        assert_eq!(locate_section(799.9, sections.clone()), Some(Section::Home));
        assert_eq!(locate_section(800.0, sections), Some(Section::Videos));
    }

    #[test]
    fn overlapping_bands_prefer_declared_order() {
        let sections = vec![
            (Section::Home, SectionBounds { top: 0.0, height: 1_000.0 }),
            (Section::Videos, SectionBounds { top: 500.0, height: 1_000.0 }),
        ];

        assert_eq!(locate_section(700.0, sections), Some(Section::Home));
    }

    #[test]
    fn no_match_keeps_previous_section() {
        let mut state = NavigationState::default();
        state.navigate_to(Section::Contact);

        assert!(!state.on_scroll(10_000.0, 100.0, stacked([800.0, 600.0, 900.0])));
        assert_eq!(state.active(), Section::Contact);
    }

    #[test]
    fn unmeasured_sections_are_skipped() {
        let mut state = NavigationState::default();
        let sections = vec![(Section::Contact, SectionBounds { top: 1_400.0, height: 900.0 })];

        state.on_scroll(900.0, 100.0, sections.clone());
        assert_eq!(state.active(), Section::Home);

        state.on_scroll(1_350.0, 100.0, sections);
        assert_eq!(state.active(), Section::Contact);
    }

    #[test]
    fn navigation_is_overridden_by_next_scroll() {
        let mut state = NavigationState::default();
        state.navigate_to(Section::Contact);
        assert_eq!(state.active(), Section::Contact);

        state.on_scroll(0.0, 100.0, stacked([800.0, 600.0, 900.0]));
        assert_eq!(state.active(), Section::Home);
    }

    #[test]
    fn section_ids_are_distinct() {
        let ids: std::collections::HashSet<_> = Section::ALL.into_iter().map(Section::id).collect();
        assert_eq!(ids.len(), Section::ALL.len());
    }
}
