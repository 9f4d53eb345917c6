use yew::prelude::*;

use crate::components::icons::{Icon, IconView, WhatsAppIcon};
use crate::state::modal::ModalTrigger;

#[derive(Properties, PartialEq)]
pub struct PricingProps {
    pub on_open_modal: Callback<ModalTrigger>,
}

#[function_component(Pricing)]
pub fn pricing(props: &PricingProps) -> Html {
    let open_modal = {
        let on_open_modal = props.on_open_modal.clone();
        Callback::from(move |_: MouseEvent| on_open_modal.emit(ModalTrigger::Pricing))
    };

    html! {
        <section class="py-24 bg-neutral-900 relative border-y border-white/5">
            <div class="container mx-auto px-4 reveal text-center">
                <div class="max-w-4xl mx-auto">
                    <h2 class="text-3xl md:text-5xl font-black text-white mb-6">{"Investimento sob Medida"}</h2>
                    <p class="text-neutral-400 text-lg md:text-xl mb-12 leading-relaxed max-w-2xl mx-auto">
                        {"Entendemos que cada empresa tem um momento e uma necessidade diferente. Nossa equipe está pronta para analisar o seu cenário e montar o plano estratégico ideal para você dominar sua região."}
                    </p>

                    <div class="bg-neutral-950 border border-white/10 rounded-2xl p-8 md:p-12 max-w-3xl mx-auto shadow-2xl shadow-brand-900/20 relative overflow-hidden group hover:border-brand-500/30 transition-colors">
                        <div class="absolute top-1/2 left-1/2 -translate-x-1/2 -translate-y-1/2 w-full h-full bg-brand-600/5 rounded-full blur-[80px] group-hover:bg-brand-600/10 transition-all duration-500"></div>

                        <div class="relative z-10 flex flex-col items-center">
                            <div class="w-20 h-20 bg-brand-900/20 rounded-full flex items-center justify-center mb-6 border border-brand-500/30 shadow-inner">
                                <IconView icon={Icon::TrendingUp} class="w-10 h-10 text-brand-400" />
                            </div>

                            <h3 class="text-2xl md:text-3xl font-bold text-white mb-4">{"Solicite uma Cotação Personalizada"}</h3>
                            <p class="text-neutral-400 mb-8 max-w-lg">
                                {"Fale com um de nossos consultores para entender qual estratégia trará o maior retorno sobre investimento para o seu modelo de negócio."}
                            </p>

                            <button
                                onclick={open_modal}
                                class="w-full md:w-auto bg-brand-600 hover:bg-brand-500 text-white text-lg font-bold py-4 px-10 rounded-xl transition-all transform hover:-translate-y-1 shadow-lg hover:shadow-brand-500/25 flex items-center justify-center gap-3 border border-brand-400/20"
                            >
                                <WhatsAppIcon class="w-6 h-6 fill-current" />
                                {"Falar com Especialista"}
                            </button>

                            <p class="mt-6 text-sm text-neutral-500">{"Sem compromisso. Análise de perfil inclusa."}</p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
