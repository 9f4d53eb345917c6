use yew::prelude::*;

use crate::components::icons::{Icon, IconView, WhatsAppIcon};
use crate::state::modal::ModalTrigger;

const BACKGROUND_URL: &str = "https://images.unsplash.com/photo-1477959858617-67f85cf4f1df?q=80&w=2613&auto=format&fit=crop";

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub on_open_modal: Callback<ModalTrigger>,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalTrigger::Hero))
    };

    html! {
        <section class="relative min-h-screen flex items-center justify-center pt-20 overflow-hidden bg-neutral-950 border-b border-white/10">
            <div class="absolute inset-0 z-0">
                <img
                    src={BACKGROUND_URL}
                    alt="Dark City Background"
                    class="w-full h-full object-cover opacity-20 grayscale mix-blend-overlay"
                />
                <div class="absolute inset-0 bg-gradient-to-b from-neutral-950/90 via-neutral-950/80 to-neutral-950"></div>
                <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-[800px] h-[800px] bg-brand-600/10 rounded-full blur-[120px] pointer-events-none animate-pulse-fast"></div>
            </div>

            <div class="container mx-auto px-4 z-10 text-center relative reveal">
                <div class="inline-flex items-center gap-3 bg-white/5 border border-brand-500/30 rounded-full px-6 py-3 mb-10 shadow-[0_0_30px_rgba(66,133,244,0.2)] animate-bounce cursor-default hover:bg-white/10 transition-colors backdrop-blur-sm">
                    <IconView icon={Icon::Layout} class="w-5 h-5 text-brand-400 animate-pulse" />
                    <span class="text-white text-sm md:text-base font-bold uppercase tracking-wider">
                        {"Bônus: Ganhe um "}
                        <span class="text-brand-400 underline decoration-2 underline-offset-4">{"Site Profissional"}</span>
                    </span>
                </div>

                <h1 class="text-5xl md:text-7xl lg:text-8xl font-black text-white mb-6 leading-[0.9] tracking-tight drop-shadow-2xl">
                    {"DOMINE O TOPO DO"}<br />
                    <span class="text-transparent bg-clip-text bg-gradient-to-r from-[#4285F4] via-[#EA4335] via-[#FBBC04] to-[#34A853]">
                        {"GOOGLE MAPS"}
                    </span>
                </h1>

                <p class="text-lg md:text-2xl text-neutral-300 max-w-3xl mx-auto mb-10 font-medium leading-relaxed">
                    {"Seu cliente está pesquisando agora. Se você não está no topo, está invisível. Nós colocamos sua empresa na "}
                    <strong class="text-white decoration-brand-500 decoration-2 underline underline-offset-4">{"primeira página"}</strong>
                    {"."}
                </p>

                <div class="flex flex-col md:flex-row gap-5 justify-center items-center">
                    <button
                        onclick={open_modal}
                        class="group w-full md:w-auto bg-brand-600 hover:bg-brand-500 text-white text-lg md:text-xl font-bold py-5 px-10 rounded-xl transition-all transform hover:-translate-y-1 shadow-[0_0_30px_rgba(66,133,244,0.6)] flex items-center justify-center gap-3 border border-brand-400/20"
                    >
                        <WhatsAppIcon class="w-6 h-6 fill-current" />
                        {"QUERO VENDER MAIS"}
                        <IconView icon={Icon::ArrowRight} class="w-6 h-6 group-hover:translate-x-1 transition-transform" />
                    </button>

                    <div class="hidden md:flex flex-col text-left">
                        { for ["Resultado Comprovado", "Suporte Premium"].iter().map(|label| html! {
                            <div class="flex items-center gap-2 text-white font-bold text-sm">
                                <IconView icon={Icon::CheckCircle} class="w-4 h-4 text-brand-500" />
                                {*label}
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
