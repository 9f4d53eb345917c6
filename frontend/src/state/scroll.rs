/// Offset at which the navbar switches to its solid background.
pub const NAVBAR_SOLID_OFFSET: f64 = 50.0;
/// Offset at which the sticky mobile call-to-action slides in.
pub const STICKY_CTA_OFFSET: f64 = 300.0;

/// Vertical scroll position of the window, in CSS pixels.
///
/// There is a single instance of this per page, published through a Yew
/// context by `ScrollProvider`. Consumers read it and apply their own
/// threshold instead of registering their own scroll listeners.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollOffset(pub f64);

impl ScrollOffset {
    pub fn navbar_style(self) -> NavbarStyle {
        NavbarStyle::from_offset(self)
    }

    pub fn sticky_cta_visible(self) -> bool {
        sticky_cta_visible(self)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavbarStyle {
    Transparent,
    Solid,
}

impl NavbarStyle {
    pub fn from_offset(offset: ScrollOffset) -> Self {
        if offset.0 >= NAVBAR_SOLID_OFFSET {
            NavbarStyle::Solid
        } else {
            NavbarStyle::Transparent
        }
    }

    pub fn classes(self) -> &'static str {
        match self {
            NavbarStyle::Solid => "bg-black/95 backdrop-blur-md border-b border-white/10 py-3",
            NavbarStyle::Transparent => "bg-transparent py-5",
        }
    }
}

pub fn sticky_cta_visible(offset: ScrollOffset) -> bool {
    offset.0 >= STICKY_CTA_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_is_transparent_at_top_of_page() {
        assert_eq!(ScrollOffset(0.0).navbar_style(), NavbarStyle::Transparent);
        assert_eq!(ScrollOffset::default().navbar_style(), NavbarStyle::Transparent);
    }

    #[test]
    fn navbar_turns_solid_at_threshold_inclusive() {
        assert_eq!(ScrollOffset(49.9).navbar_style(), NavbarStyle::Transparent);
        assert_eq!(ScrollOffset(50.0).navbar_style(), NavbarStyle::Solid);
        assert_eq!(ScrollOffset(1200.0).navbar_style(), NavbarStyle::Solid);
    }

    #[test]
    fn sticky_cta_threshold_is_inclusive() {
        assert!(!ScrollOffset(0.0).sticky_cta_visible());
        assert!(!ScrollOffset(299.0).sticky_cta_visible());
        assert!(ScrollOffset(300.0).sticky_cta_visible());
    }

    #[test]
    fn both_consumers_flip_back_when_scrolling_up() {
        let down = ScrollOffset(500.0);
        assert_eq!(down.navbar_style(), NavbarStyle::Solid);
        assert!(down.sticky_cta_visible());

        let up = ScrollOffset(0.0);
        assert_eq!(up.navbar_style(), NavbarStyle::Transparent);
        assert!(!up.sticky_cta_visible());
    }

    #[test]
    fn thresholds_are_independent() {
        // Between the two thresholds only the navbar has changed.
        let offset = ScrollOffset(120.0);
        assert_eq!(offset.navbar_style(), NavbarStyle::Solid);
        assert!(!offset.sticky_cta_visible());
    }

    #[test]
    fn every_offset_matches_its_threshold() {
        for px in (0..1000).step_by(7) {
            let offset = ScrollOffset(px as f64);
            assert_eq!(
                offset.navbar_style() == NavbarStyle::Solid,
                offset.0 >= NAVBAR_SOLID_OFFSET
            );
            assert_eq!(offset.sticky_cta_visible(), offset.0 >= STICKY_CTA_OFFSET);
        }
    }
}
