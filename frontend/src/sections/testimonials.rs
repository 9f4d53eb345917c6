use yew::prelude::*;

use crate::components::icons::{Icon, IconView};

struct Testimonial {
    name: &'static str,
    role: &'static str,
    text: &'static str,
}

impl Testimonial {
    fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Ricardo M.",
        role: "Dono de Oficina Mecânica",
        text: "Eu achava que Google era bobagem. Depois que a equipe assumiu, tivemos que contratar mais 2 mecânicos para dar conta. O telefone não para.",
    },
    Testimonial {
        name: "Ana Silva",
        role: "Clínica de Estética",
        text: "Estava perdendo clientes para uma clínica nova na rua de cima. Em 45 dias passamos eles nas buscas. Minha agenda está lotada.",
    },
    Testimonial {
        name: "Carlos Eduardo",
        role: "Pizzaria Delivery",
        text: "As rotas para o meu endereço triplicaram. O trabalho de otimização de fotos fez toda a diferença. O site que ganhei de bônus é incrível.",
    },
];

#[function_component(Testimonials)]
pub fn testimonials() -> Html {
    html! {
        <section class="py-24 bg-neutral-950">
            <div class="container mx-auto px-4 reveal">
                <h2 class="text-3xl md:text-5xl font-bold text-center text-white mb-16">
                    {"Quem aplicou, "}<span class="text-brand-500">{"lucrou"}</span>{"."}
                </h2>
                <div class="grid md:grid-cols-3 gap-8">
                    { for TESTIMONIALS.iter().map(|t| html! {
                        <div class="bg-neutral-900 p-8 rounded-2xl border border-neutral-800 relative hover:border-brand-700 transition-colors">
                            <div class="absolute -top-4 -left-4 w-10 h-10 bg-brand-600 rounded-full flex items-center justify-center">
                                <span class="text-2xl font-serif text-white">{"\""}</span>
                            </div>
                            <div class="flex gap-1 mb-4 pt-2">
                                { for (0..5).map(|_| html! {
                                    <IconView icon={Icon::Star} class="w-4 h-4 text-google-yellow fill-google-yellow" />
                                }) }
                            </div>
                            <p class="text-neutral-300 mb-6 italic text-sm leading-relaxed">{format!("\"{}\"", t.text)}</p>
                            <div class="flex items-center gap-4 mt-auto">
                                <div class="w-10 h-10 bg-neutral-800 rounded-full flex items-center justify-center text-white font-bold border border-neutral-700">
                                    {t.initial()}
                                </div>
                                <div>
                                    <div class="text-white font-bold">{t.name}</div>
                                    <div class="text-brand-500 text-xs uppercase font-semibold">{t.role}</div>
                                </div>
                            </div>
                        </div>
                    }) }
                </div>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn avatar_uses_first_letter() {
        let initials: Vec<String> = TESTIMONIALS.iter().map(Testimonial::initial).collect();
        assert_eq!(initials, ["R", "A", "C"]);
    }
}
