use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::state::modal::ModalTrigger;

#[derive(Properties, PartialEq)]
pub struct FinalCtaProps {
    pub on_open_modal: Callback<ModalTrigger>,
}

#[function_component(FinalCta)]
pub fn final_cta(props: &FinalCtaProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalTrigger::FinalCta))
    };

    html! {
        <section class="py-32 bg-gradient-to-b from-neutral-900 to-black text-center relative overflow-hidden">
            <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[600px] h-[600px] bg-brand-600/20 rounded-full blur-[100px] pointer-events-none"></div>

            <div class="container mx-auto px-4 max-w-4xl relative z-10 reveal">
                <h2 class="text-4xl md:text-7xl font-black text-white mb-8 tracking-tight">
                    {"Chega de ser um "}
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-neutral-500 to-neutral-700 decoration-4 line-through decoration-google-red">{"fantasma"}</span>
                    {" digital."}
                </h2>
                <p class="text-xl text-neutral-300 mb-12 max-w-2xl mx-auto">
                    {"A oportunidade de dominar sua região está a um clique de distância. Não deixe seu concorrente ver isso antes de você."}
                </p>
                <button
                    onclick={open_modal}
                    class="bg-brand-600 hover:bg-brand-500 text-white text-xl md:text-2xl font-bold py-6 px-12 rounded-2xl transition-all transform hover:-translate-y-2 shadow-[0_0_50px_rgba(66,133,244,0.5)] flex items-center justify-center gap-3 mx-auto"
                >
                    <IconView icon={Icon::Zap} class="w-6 h-6 fill-white" />
                    {"DOMINAR O GOOGLE AGORA"}
                </button>
            </div>
        </section>
    }
}
