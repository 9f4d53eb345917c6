use yew::prelude::*;

use crate::components::icons::WhatsAppIcon;
use crate::components::scroll::use_scroll_offset;
use crate::state::modal::ModalTrigger;

#[derive(Properties, PartialEq)]
pub struct StickyCtaProps {
    pub on_open_modal: Callback<ModalTrigger>,
}

/// Mobile-only bar that slides up once the hero button is out of view.
#[function_component(StickyCta)]
pub fn sticky_cta(props: &StickyCtaProps) -> Html {
    let position = if use_scroll_offset().sticky_cta_visible() {
        "translate-y-0"
    } else {
        "translate-y-full"
    };

    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalTrigger::StickyCta))
    };

    html! {
        <div class={classes!(
            "fixed", "bottom-0", "left-0", "w-full", "px-4", "pt-4", "pb-[calc(1rem+env(safe-area-inset-bottom))]",
            "bg-neutral-900/95", "backdrop-blur", "border-t", "border-brand-900", "z-50", "md:hidden",
            "transition-transform", "duration-300", "ease-in-out", position
        )}>
            <button
                onclick={open_modal}
                class="w-full bg-brand-600 hover:bg-brand-500 text-white font-bold py-3.5 rounded-lg shadow-[0_0_15px_rgba(66,133,244,0.3)] flex items-center justify-center gap-2 animate-pulse-fast"
            >
                <WhatsAppIcon class="w-5 h-5 fill-current" />
                {"FALAR COM UM ESPECIALISTA"}
            </button>
        </div>
    }
}
