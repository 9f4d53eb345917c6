/// Accordion over a fixed list of entries. At most one entry is open.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FaqAccordion {
    open: Option<usize>,
    len: usize,
}

impl FaqAccordion {
    /// New accordion with the first entry expanded.
    pub fn new(len: usize) -> Self {
        Self {
            open: (len > 0).then_some(0),
            len,
        }
    }

    pub fn open_index(&self) -> Option<usize> {
        self.open
    }

    pub fn is_open(&self, index: usize) -> bool {
        self.open == Some(index)
    }

    /// Clicking the open entry collapses it, clicking any other opens that one.
    /// Indices outside the list are ignored.
    pub fn toggled(self, index: usize) -> Self {
        if index >= self.len {
            return self;
        }
        let open = if self.is_open(index) { None } else { Some(index) };
        Self { open, ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_entry_starts_open() {
        let faq = FaqAccordion::new(4);
        assert_eq!(faq.open_index(), Some(0));
        assert!(faq.is_open(0));
        assert!(!faq.is_open(1));
    }

    #[test]
    fn empty_accordion_starts_closed() {
        assert_eq!(FaqAccordion::new(0).open_index(), None);
    }

    #[test]
    fn clicking_open_entry_closes_everything() {
        let faq = FaqAccordion::new(4).toggled(0);
        assert_eq!(faq.open_index(), None);
        assert!((0..4).all(|i| !faq.is_open(i)));
    }

    #[test]
    fn clicking_closed_entry_opens_only_that_one() {
        let faq = FaqAccordion::new(4).toggled(2);
        assert_eq!(faq.open_index(), Some(2));
        assert_eq!((0..4).filter(|&i| faq.is_open(i)).count(), 1);

        let faq = faq.toggled(3);
        assert_eq!(faq.open_index(), Some(3));
        assert!(!faq.is_open(2));
    }

    #[test]
    fn reopening_after_collapse() {
        let faq = FaqAccordion::new(4).toggled(0).toggled(1);
        assert_eq!(faq.open_index(), Some(1));
    }

    #[test]
    fn out_of_range_click_is_ignored() {
        let faq = FaqAccordion::new(4);
        assert_eq!(faq.toggled(4), faq);
        assert_eq!(faq.toggled(0).toggled(17).open_index(), None);
    }
}
