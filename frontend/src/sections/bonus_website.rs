use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

const PREVIEW_URL: &str = "https://images.unsplash.com/photo-1460925895917-afdab827c52f?q=80&w=2015&auto=format&fit=crop";

const PERKS: [(Icon, &str, &str); 4] = [
    (Icon::Gauge, "Ultra Rápido (PageSpeed)", "Carregamento instantâneo para você não perder nenhum cliente impaciente."),
    (Icon::Smartphone, "100% Responsivo", "Funciona perfeitamente em celulares, tablets e computadores."),
    (Icon::Search, "SEO Técnico Integrado", "Estrutura de código otimizada para o Google ler e ranquear seu site."),
    (Icon::MousePointerClick, "Botão WhatsApp Flutuante", "Facilita o contato imediato do cliente com apenas um clique."),
];

#[function_component(BonusWebsite)]
pub fn bonus_website() -> Html {
    html! {
        <section class="py-20 bg-gradient-to-br from-brand-950 via-black to-neutral-950 border-y border-white/10 relative overflow-hidden">
            <div class="absolute top-0 right-0 w-[500px] h-[500px] bg-brand-600/5 rounded-full blur-[100px] pointer-events-none"></div>

            <div class="container mx-auto px-4 relative z-10 reveal">
                <div class="flex flex-col lg:flex-row items-center gap-12">
                    <div class="lg:w-1/2">
                        <div class="inline-block bg-brand-600 text-white text-xs font-bold px-3 py-1 rounded-full mb-4 animate-pulse">
                            {"PRESENTE EXCLUSIVO (R$ 1.500 OFF)"}
                        </div>
                        <h2 class="text-4xl md:text-5xl font-black text-white mb-6 leading-tight">
                            {"Não é só um perfil."}<br />
                            {"Você ganha um "}<span class="text-brand-500">{"Site Completo"}</span>{"."}
                        </h2>
                        <p class="text-lg text-neutral-300 mb-8 leading-relaxed">
                            {"A maioria das agências cobra mais de R$ 1.500 apenas para criar um site simples. No "}
                            <strong>{"GMN TURBO"}</strong>
                            {", você ganha uma Landing Page de Alta Conversão totalmente de graça ao assinar o plano."}
                        </p>

                        <div class="space-y-6">
                            { for PERKS.iter().map(|(icon, title, desc)| html! {
                                <div class="flex gap-4">
                                    <div class="mt-1 bg-brand-900/20 p-2 rounded-lg border border-brand-500/20 shrink-0 h-fit">
                                        <IconView icon={*icon} class="w-6 h-6 text-brand-400" />
                                    </div>
                                    <div>
                                        <h4 class="text-white font-bold text-lg">{*title}</h4>
                                        <p class="text-neutral-400 text-sm">{*desc}</p>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>

                    <div class="lg:w-1/2 w-full">
                        <div class="relative bg-neutral-900 border border-neutral-800 rounded-2xl p-4 shadow-2xl transform rotate-1 hover:rotate-0 transition-all duration-500 group">
                            <div class="absolute -top-4 -right-4 bg-brand-600 text-white font-bold w-24 h-24 rounded-full flex items-center justify-center text-center text-sm shadow-lg z-20 animate-bounce">
                                {"VALOR:"}<br />{"R$ 0,00"}
                            </div>
                            <div class="bg-neutral-950 rounded-xl overflow-hidden aspect-[4/3] relative border border-neutral-800 group-hover:border-brand-500/50 transition-colors">
                                <div class="absolute inset-0 bg-gradient-to-t from-black via-transparent to-transparent opacity-80 z-10"></div>
                                <img
                                    src={PREVIEW_URL}
                                    alt="Exemplo de Site Otimizado"
                                    class="w-full h-full object-cover opacity-60 group-hover:scale-105 transition-transform duration-700"
                                />
                                <div class="absolute bottom-0 left-0 w-full p-8 z-20">
                                    <div class="flex gap-2 mb-2">
                                        <div class="w-3 h-3 rounded-full bg-google-red"></div>
                                        <div class="w-3 h-3 rounded-full bg-google-yellow"></div>
                                        <div class="w-3 h-3 rounded-full bg-google-green"></div>
                                    </div>
                                    <p class="text-brand-400 font-mono text-xs mb-1">{"Status: Online & Otimizado"}</p>
                                    <h3 class="text-white font-bold text-2xl">{"Sua Empresa.com.br"}</h3>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
