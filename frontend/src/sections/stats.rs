use yew::prelude::*;

const STATS: [(&str, &str); 3] = [
    ("+400%", "Em Ligações Telefônicas"),
    ("TOP 3", "Garantido em 90 dias"),
    ("15x", "Retorno sobre Investimento"),
];

#[function_component(Stats)]
pub fn stats() -> Html {
    html! {
        <section class="py-20 bg-brand-950 relative overflow-hidden border-t border-brand-900/30">
            <div class="absolute inset-0 bg-[url('https://www.transparenttextures.com/patterns/carbon-fibre.png')] opacity-10"></div>
            <div class="container mx-auto px-4 relative z-10 reveal">
                <div class="grid md:grid-cols-3 gap-8 text-center divide-y md:divide-y-0 md:divide-x divide-brand-800/50">
                    { for STATS.iter().map(|(value, label)| html! {
                        <div class="p-6">
                            <div class="text-5xl md:text-6xl font-black text-white mb-2 tracking-tighter">{*value}</div>
                            <div class="text-brand-400 font-bold uppercase tracking-wider text-sm">{*label}</div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}
