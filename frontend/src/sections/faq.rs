use log::debug;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView};
use crate::state::faq::FaqAccordion;

pub const FAQ_ENTRIES: [(&str, &str); 4] = [
    (
        "Em quanto tempo vejo resultados?",
        "Os primeiros resultados de impressões começam a aparecer em 15 dias. O aumento expressivo de ligações e rotas geralmente ocorre entre 30 a 60 dias de trabalho consistente.",
    ),
    (
        "Preciso pagar anúncios (Google Ads)?",
        "Não! Nosso foco é no posicionamento orgânico (gratuito) do Google Maps. Uma vez no topo, você recebe cliques sem pagar por cada um deles.",
    ),
    (
        "O site bônus é meu para sempre?",
        "Sim. O site One-Page desenvolvido é seu. Ele é otimizado para carregar rápido e converter visitantes em chamadas no WhatsApp.",
    ),
    (
        "Funciona para qualquer nicho?",
        "Funciona para qualquer empresa que tenha endereço físico ou atenda uma área local (Delivery, Prestadores de Serviço, Clínicas, Escritórios, Lojas).",
    ),
];

#[function_component(Faq)]
pub fn faq() -> Html {
    let accordion = use_state(|| FaqAccordion::new(FAQ_ENTRIES.len()));

    html! {
        <section class="py-24 bg-neutral-900 border-t border-neutral-800">
            <div class="container mx-auto px-4 max-w-3xl reveal">
                <h2 class="text-3xl md:text-4xl font-bold text-center text-white mb-12">
                    {"Perguntas Frequentes"}
                </h2>
                <div class="space-y-4">
                    { for FAQ_ENTRIES.iter().enumerate().map(|(index, (question, answer))| {
                        let is_open = accordion.is_open(index);
                        let answer_state = if is_open { "max-h-40 pb-6 opacity-100" } else { "max-h-0 opacity-0" };
                        let toggle = {
                            let accordion = accordion.clone();
                            Callback::from(move |e: MouseEvent| {
                                e.prevent_default();
                                let next = accordion.toggled(index);
                                debug!("FAQ entry {} clicked, open entry now {:?}", index, next.open_index());
                                accordion.set(next);
                            })
                        };

                        html! {
                            <div class="bg-neutral-950 border border-neutral-800 rounded-xl overflow-hidden">
                                <button
                                    onclick={toggle}
                                    class="w-full flex justify-between items-center p-6 text-left hover:bg-neutral-900 transition-colors"
                                >
                                    <span class="font-bold text-white text-lg">{*question}</span>
                                    if is_open {
                                        <IconView icon={Icon::ChevronUp} class="w-6 h-6 text-brand-500" />
                                    } else {
                                        <IconView icon={Icon::ChevronDown} class="w-6 h-6 text-neutral-500" />
                                    }
                                </button>
                                <div class={classes!("px-6", "overflow-hidden", "transition-all", "duration-300", answer_state)}>
                                    <p class="text-neutral-400 leading-relaxed">{*answer}</p>
                                </div>
                            </div>
                        }
                    }) }
                </div>
            </div>
        </section>
    }
}
