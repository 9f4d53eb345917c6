use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

struct Feature {
    icon: Icon,
    tint: &'static str,
    title: &'static str,
    desc: &'static str,
}

const FEATURES: [Feature; 6] = [
    Feature {
        icon: Icon::Search,
        tint: "text-brand-400",
        title: "SEO Local Avançado",
        desc: "Descobrimos exatamente como seu cliente pesquisa e configuramos seu perfil para aparecer nessas buscas.",
    },
    Feature {
        icon: Icon::Star,
        tint: "text-google-yellow",
        title: "Gestão de Reputação",
        desc: "Estratégias para aumentar avaliações 5 estrelas e neutralizar comentários negativos profissionalmente.",
    },
    Feature {
        icon: Icon::Layout,
        tint: "text-google-blue",
        title: "Site One-Page Grátis",
        desc: "Desenvolvemos um site rápido e otimizado para conversão que ajuda a ranquear seu perfil no Google.",
    },
    Feature {
        icon: Icon::BarChart,
        tint: "text-google-green",
        title: "Relatórios de Performance",
        desc: "Você vai ver o telefone tocando, mas também enviaremos relatórios provando o aumento de rotas e chamadas.",
    },
    Feature {
        icon: Icon::TrendingUp,
        tint: "text-brand-400",
        title: "Postagens Semanais",
        desc: "Manteremos seu perfil vivo e atrativo com fotos de alta qualidade e atualizações constantes.",
    },
    Feature {
        icon: Icon::ShieldCheck,
        tint: "text-google-blue",
        title: "Blindagem de Perfil",
        desc: "Protegemos seu perfil contra edições maliciosas de concorrentes e suspensões do Google.",
    },
];

#[function_component(Features)]
pub fn features() -> Html {
    html! {
        <section class="py-24 bg-neutral-950 relative">
            <div class="absolute inset-0 bg-[radial-gradient(ellipse_at_top,_var(--tw-gradient-stops))] from-brand-900/20 via-neutral-950 to-neutral-950 pointer-events-none"></div>

            <div class="container mx-auto px-4 relative z-10 reveal">
                <div class="text-center mb-16">
                    <h2 class="text-3xl md:text-5xl font-bold text-white mb-4">
                        {"Arsenal Completo de "}<span class="text-brand-500">{"Guerra"}</span>
                    </h2>
                    <p class="text-neutral-400 max-w-2xl mx-auto">
                        {"Não fazemos apenas o básico. Implementamos uma estratégia agressiva para dominar sua região."}
                    </p>
                </div>

                <div class="grid md:grid-cols-2 lg:grid-cols-3 gap-6">
                    { for FEATURES.iter().map(|feature| html! {
                        <div class="bg-neutral-900/40 backdrop-blur-sm border border-white/10 p-8 rounded-xl hover:border-brand-500/50 hover:bg-neutral-900/60 transition-all duration-300 group hover:-translate-y-2 shadow-lg hover:shadow-brand-900/20">
                            <div class="mb-6 bg-neutral-800 w-16 h-16 rounded-xl flex items-center justify-center group-hover:bg-white transition-colors shadow-inner">
                                <IconView
                                    icon={feature.icon}
                                    class={format!("w-8 h-8 {} group-hover:scale-110 transition-transform", feature.tint)}
                                />
                            </div>
                            <h3 class="text-xl font-bold text-white mb-3">{feature.title}</h3>
                            <p class="text-neutral-400 text-sm leading-relaxed group-hover:text-neutral-300">{feature.desc}</p>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
