use yew::prelude::*;

use crate::components::icons::{Logo, WhatsAppIcon};
use crate::components::scroll::use_scroll_offset;
use crate::state::modal::ModalTrigger;

#[derive(Properties, PartialEq)]
pub struct NavbarProps {
    pub on_open_modal: Callback<ModalTrigger>,
}

#[function_component(Navbar)]
pub fn navbar(props: &NavbarProps) -> Html {
    let style = use_scroll_offset().navbar_style();

    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalTrigger::Navbar))
    };

    html! {
        <nav class={classes!("fixed", "w-full", "z-50", "transition-all", "duration-300", style.classes())}>
            <div class="container mx-auto px-4 flex justify-between items-center">
                <Logo />
                <button
                    onclick={open_modal}
                    class="hidden md:flex bg-brand-600 hover:bg-brand-500 text-white font-bold py-2.5 px-6 rounded-full transition-all transform hover:scale-105 shadow-[0_0_15px_rgba(66,133,244,0.5)] items-center gap-2 border border-brand-400/20"
                >
                    <WhatsAppIcon class="w-5 h-5 fill-current" />
                    {"Análise Gratuita"}
                </button>
            </div>
        </nav>
    }
}
