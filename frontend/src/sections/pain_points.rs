use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

const PAINS: [&str; 5] = [
    "Telefone que nunca toca.",
    "Concorrentes roubando seus clientes.",
    "Avaliações negativas sem resposta.",
    "Loja vazia enquanto o vizinho enche.",
    "Dinheiro deixado na mesa todos os dias.",
];

#[function_component(PainPoints)]
pub fn pain_points() -> Html {
    html! {
        <section class="py-20 bg-neutral-900 border-b border-white/5 relative overflow-hidden">
            <div class="absolute top-0 right-0 w-64 h-64 bg-brand-900/10 rounded-full blur-3xl"></div>

            <div class="container mx-auto px-4 reveal">
                <div class="grid md:grid-cols-2 gap-12 items-center">
                    <div class="order-2 md:order-1">
                        <div class="bg-neutral-950 p-8 rounded-2xl border border-white/10 relative overflow-hidden group hover:border-brand-500/50 transition-colors">
                            <div class="absolute top-0 right-0 w-32 h-32 bg-google-red/10 rounded-bl-full blur-2xl"></div>
                            <h3 class="text-2xl font-bold text-white mb-6 flex items-center gap-2">
                                <IconView icon={Icon::AlertTriangle} class="w-6 h-6 text-google-red" />
                                {"O Custo da Invisibilidade"}
                            </h3>
                            <ul class="space-y-4">
                                { for PAINS.iter().map(|pain| html! {
                                    <li class="flex items-start gap-3 text-neutral-400 group-hover:text-neutral-300 transition-colors">
                                        <IconView icon={Icon::X} class="w-5 h-5 text-google-red mt-0.5 shrink-0" />
                                        <span class="font-medium">{*pain}</span>
                                    </li>
                                }) }
                            </ul>
                        </div>
                    </div>
                    <div class="order-1 md:order-2">
                        <h2 class="text-3xl md:text-5xl font-bold text-white mb-6 leading-tight">
                            {"O Google é a nova "}<span class="text-brand-500">{"Página Amarela"}</span>{"."}
                        </h2>
                        <p class="text-lg text-neutral-400 leading-relaxed mb-6">
                            {"97% das pessoas pesquisam online antes de comprar algo localmente. Se sua empresa não está entre os 3 primeiros resultados do Google Maps, você está, literalmente, entregando dinheiro para o concorrente."}
                        </p>
                        <div class="p-6 bg-brand-900/20 border-l-4 border-brand-500 rounded-r-lg">
                            <p class="text-lg text-white font-bold italic">
                                {"\"Não é sorte. É engenharia de dados. E nós temos o código.\""}
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
