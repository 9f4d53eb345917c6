use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

const PROFILE_ITEMS: [&str; 9] = [
    "Categoria Certa",
    "Fotos Otimizadas",
    "SEO Local",
    "Palavras-chave Estratégicas",
    "Descrição Profissional",
    "Links Clicáveis",
    "Geolocalização Precisa",
    "Configurações Avançadas",
    "Perfil 100% Preenchido",
];

const WEBSITE_ITEMS: [&str; 8] = [
    "Design Moderno",
    "Totalmente Responsivo",
    "Botão WhatsApp Clicável",
    "Páginas Otimizadas",
    "Layout Premium",
    "Feito Sob Medida",
    "Hospedagem de Alta Performance",
    "Integração com GMB",
];

fn checklist(items: &[&'static str], accent: &'static str) -> Html {
    html! {
        <div class="space-y-4">
            { for items.iter().map(|item| html! {
                <div class="flex items-center gap-3">
                    <div class={classes!("rounded-full", "border", "p-0.5", "shrink-0", format!("border-{}/30", accent))}>
                        <IconView icon={Icon::Check} class={format!("w-3 h-3 text-{}", accent)} />
                    </div>
                    <span class="text-neutral-300 font-medium text-sm md:text-base">{*item}</span>
                </div>
            }) }
        </div>
    }
}

#[function_component(PackageDetails)]
pub fn package_details() -> Html {
    html! {
        <section class="py-24 bg-neutral-950 border-t border-white/5">
            <div class="container mx-auto px-4 reveal">
                <div class="text-center mb-16">
                    <p class="text-brand-500 font-bold uppercase tracking-wider text-sm mb-2">{"PACOTE COMPLETO"}</p>
                    <h2 class="text-4xl md:text-5xl font-black text-white mb-4">{"O que você recebe?"}</h2>
                    <p class="text-neutral-400">
                        {"Tudo o que seu negócio precisa para se posicionar como autoridade na sua cidade."}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 gap-8 max-w-5xl mx-auto">
                    <div class="bg-[#0f1115] rounded-3xl border border-white/5 p-8 md:p-10 relative overflow-hidden hover:border-brand-500/30 transition-colors group">
                        <div class="absolute top-1/2 right-0 -translate-y-1/2 translate-x-1/4 opacity-5 group-hover:opacity-10 transition-opacity">
                            <IconView icon={Icon::MapPin} class="w-64 h-64 text-white" />
                        </div>
                        <div class="relative z-10">
                            <div class="flex items-center gap-3 mb-8">
                                <div class="bg-brand-600 p-2.5 rounded-lg">
                                    <IconView icon={Icon::MapPin} class="w-6 h-6 text-white" />
                                </div>
                                <h3 class="text-2xl font-bold text-white">{"Google Meu Negócio"}</h3>
                            </div>
                            { checklist(&PROFILE_ITEMS, "brand-500") }
                        </div>
                    </div>

                    <div class="bg-[#172554]/20 rounded-3xl border border-brand-500/30 p-8 md:p-10 relative overflow-hidden hover:bg-[#172554]/30 transition-colors group">
                        <div class="absolute top-8 right-8 bg-google-yellow text-black text-xs font-black px-3 py-1.5 rounded-md uppercase z-20">
                            {"GRÁTIS"}
                        </div>
                        <div class="absolute top-1/2 right-0 -translate-y-1/2 translate-x-1/4 opacity-10 group-hover:opacity-20 transition-opacity">
                            <IconView icon={Icon::Layout} class="w-64 h-64 text-brand-300" />
                        </div>
                        <div class="relative z-10">
                            <div class="flex items-center gap-3 mb-8">
                                <div class="bg-google-green p-2.5 rounded-lg">
                                    <IconView icon={Icon::Globe} class="w-6 h-6 text-white" />
                                </div>
                                <h3 class="text-2xl font-bold text-white">{"Site Profissional"}</h3>
                            </div>
                            { checklist(&WEBSITE_ITEMS, "google-green") }
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
