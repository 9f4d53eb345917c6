use yew::prelude::*;

use crate::components::lead_modal::LeadModal;
use crate::components::reveal::use_scroll_reveal;
use crate::sections::{
    bonus_website::BonusWebsite,
    faq::Faq,
    features::Features,
    final_cta::FinalCta,
    footer::Footer,
    hero::Hero,
    navbar::Navbar,
    package_details::PackageDetails,
    pain_points::PainPoints,
    pricing::Pricing,
    stats::Stats,
    sticky_cta::StickyCta,
    testimonials::Testimonials,
};
use crate::state::modal::{CloseReason, ModalState, ModalTrigger};

#[function_component(Landing)]
pub fn landing() -> Html {
    let modal = use_state(ModalState::default);

    use_scroll_reveal();

    let open_modal = {
        let modal = modal.clone();
        Callback::from(move |trigger: ModalTrigger| {
            modal.set(modal.open(trigger));
        })
    };

    let close_modal = {
        let modal = modal.clone();
        Callback::from(move |reason: CloseReason| {
            modal.set(modal.close(reason));
        })
    };

    html! {
        <div class="w-full min-h-screen bg-neutral-950 text-white selection:bg-brand-500 selection:text-white font-sans overflow-x-hidden pb-24 md:pb-0">
            <Navbar on_open_modal={open_modal.clone()} />
            <Hero on_open_modal={open_modal.clone()} />
            <Stats />
            <PainPoints />
            <Features />
            <BonusWebsite />
            <PackageDetails />
            <Pricing on_open_modal={open_modal.clone()} />
            <Testimonials />
            <Faq />
            <FinalCta on_open_modal={open_modal.clone()} />
            <Footer />
            <StickyCta on_open_modal={open_modal} />
            <LeadModal is_open={modal.is_open()} on_close={close_modal} />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use crate::api::leads::{Lead, LeadError, LeadField};
    use crate::sections::faq::FAQ_ENTRIES;
    use crate::state::faq::FaqAccordion;
    use crate::state::modal::{CloseReason, LeadForm, ModalState, ModalTrigger, SubmissionOutcome, SubmissionStatus};
    use crate::state::scroll::{NavbarStyle, ScrollOffset};

    /// The page pieces a visitor can drive, wired the way `Landing` and
    /// `LeadModal` wire them.
    struct Visit {
        offset: ScrollOffset,
        modal: ModalState,
        form: LeadForm,
        faq: FaqAccordion,
    }

    impl Visit {
        fn new() -> Self {
            Self {
                offset: ScrollOffset::default(),
                modal: ModalState::default(),
                form: LeadForm::default(),
                faq: FaqAccordion::new(FAQ_ENTRIES.len()),
            }
        }

        fn scroll_to(&mut self, y: f64) {
            self.offset = ScrollOffset(y);
        }

        fn set_modal(&mut self, next: ModalState) {
            if next != self.modal {
                self.form.reset();
            }
            self.modal = next;
        }

        fn open(&mut self, trigger: ModalTrigger) {
            let next = self.modal.open(trigger);
            self.set_modal(next);
        }

        fn dismiss(&mut self) {
            self.form.reset();
            let next = self.modal.close(CloseReason::Dismissed);
            self.set_modal(next);
        }

        fn submit(&mut self, company: &str) -> Option<(u64, Lead)> {
            self.form.submit(Lead::from_form(company, "Maria", "(11) 98888-7777"))
        }

        fn reply(&mut self, generation: u64, result: Result<(), LeadError>) -> SubmissionOutcome {
            let outcome = self.form.finish(generation, result);
            if outcome == SubmissionOutcome::Accepted {
                let next = self.modal.close(CloseReason::Submitted);
                self.set_modal(next);
            }
            outcome
        }
    }

    #[test]
    fn sticky_cta_lead_fails_then_reopens_clean() {
        let mut visit = Visit::new();
        visit.scroll_to(500.0);
        assert!(visit.offset.sticky_cta_visible());

        visit.open(ModalTrigger::StickyCta);
        let (generation, _) = visit.submit("Oficina Central").unwrap();
        assert_eq!(visit.reply(generation, Err(LeadError::Rejected(500))), SubmissionOutcome::Failed);
        assert!(visit.modal.is_open());
        assert_eq!(visit.form.status().error(), Some(&LeadError::Rejected(500)));

        visit.dismiss();
        assert!(!visit.modal.is_open());
        visit.open(ModalTrigger::Pricing);
        assert_eq!(visit.form.status(), &SubmissionStatus::Idle);

        let (generation, _) = visit.submit("Oficina Central").unwrap();
        assert_eq!(visit.reply(generation, Ok(())), SubmissionOutcome::Accepted);
        assert!(!visit.modal.is_open());
    }

    #[test]
    fn reply_from_dismissed_modal_is_dropped_after_reopen() {
        let mut visit = Visit::new();
        visit.open(ModalTrigger::Hero);
        let (abandoned, _) = visit.submit("Padaria Sol").unwrap();
        visit.dismiss();
        visit.open(ModalTrigger::Navbar);

        // A late success must neither close the new modal nor settle it
        assert_eq!(visit.reply(abandoned, Ok(())), SubmissionOutcome::Stale);
        assert!(visit.modal.is_open());
        assert_eq!(visit.form.status(), &SubmissionStatus::Idle);

        let (current, _) = visit.submit("Padaria Sol").unwrap();
        assert_eq!(visit.reply(abandoned, Err(LeadError::Network("timeout".into()))), SubmissionOutcome::Stale);
        assert!(visit.form.status().is_submitting());
        assert_eq!(visit.reply(current, Ok(())), SubmissionOutcome::Accepted);
    }

    #[test]
    fn double_click_on_submit_sends_one_lead() {
        let mut visit = Visit::new();
        visit.open(ModalTrigger::FinalCta);
        let first = visit.submit("Clínica Vida");
        let second = visit.submit("Clínica Vida");
        assert!(first.is_some());
        assert!(second.is_none());

        // A trigger firing again while open keeps the request in flight
        visit.open(ModalTrigger::StickyCta);
        assert!(visit.form.status().is_submitting());
    }

    #[test]
    fn blank_field_keeps_modal_open_until_fixed() {
        let mut visit = Visit::new();
        visit.open(ModalTrigger::Navbar);
        assert!(visit.submit("   ").is_none());
        assert_eq!(
            visit.form.status().error(),
            Some(&LeadError::MissingField(LeadField::CompanyName))
        );
        assert!(visit.modal.is_open());

        let (generation, lead) = visit.submit("Loja Azul").unwrap();
        assert_eq!(lead.company_name, "Loja Azul");
        visit.reply(generation, Ok(()));
        assert!(!visit.modal.is_open());
    }

    #[test]
    fn reading_faq_while_scrolling_back_to_top() {
        let mut visit = Visit::new();
        visit.scroll_to(2400.0);
        assert_eq!(visit.offset.navbar_style(), NavbarStyle::Solid);

        visit.faq = visit.faq.toggled(2);
        visit.faq = visit.faq.toggled(2);
        assert_eq!(visit.faq.open_index(), None);
        visit.faq = visit.faq.toggled(3);

        visit.scroll_to(0.0);
        assert_eq!(visit.offset.navbar_style(), NavbarStyle::Transparent);
        assert!(!visit.offset.sticky_cta_visible());
        assert_eq!(visit.faq.open_index(), Some(3));
        assert!(!visit.modal.is_open());
    }
}
