use chrono::Datelike;
use yew::prelude::*;

use crate::components::icons::{Icon, IconView, Logo, WhatsAppIcon};

const SERVICES: [&str; 3] = ["Otimização GMB", "Criação de Sites", "Gestão de Tráfego"];
const COMPANY: [&str; 3] = ["Sobre Nós", "Casos de Sucesso", "Contato"];

fn link_column(title: &'static str, links: &[&'static str]) -> Html {
    html! {
        <div>
            <h4 class="text-white font-bold mb-4">{title}</h4>
            <ul class="space-y-2 text-sm text-neutral-500">
                { for links.iter().map(|label| html! {
                    <li><a href="#" class="hover:text-brand-500 transition-colors">{*label}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Local::now().year();

    html! {
        <footer class="bg-black py-16 border-t border-neutral-900">
            <div class="container mx-auto px-4">
                <div class="grid md:grid-cols-4 gap-12 mb-12">
                    <div class="col-span-1 md:col-span-1">
                        <div class="mb-4">
                            <Logo />
                        </div>
                        <p class="text-neutral-500 text-sm leading-relaxed">
                            {"Especialistas em posicionamento local. Transformamos buscas no Google em dinheiro no seu caixa."}
                        </p>
                    </div>

                    { link_column("Serviços", &SERVICES) }
                    { link_column("Empresa", &COMPANY) }

                    <div>
                        <h4 class="text-white font-bold mb-4">{"Contato"}</h4>
                        <ul class="space-y-2 text-sm text-neutral-500">
                            <li class="flex items-center gap-2"><WhatsAppIcon class="w-4 h-4" />{" (11) 99999-9999"}</li>
                            <li class="flex items-center gap-2"><IconView icon={Icon::Globe} class="w-4 h-4" />{" contato@gmnturbo.com.br"}</li>
                        </ul>
                    </div>
                </div>

                <div class="pt-8 border-t border-neutral-900 flex flex-col md:flex-row justify-between items-center gap-4">
                    <div class="text-neutral-600 text-sm">
                        {format!("© {} GMN TURBO. Todos os direitos reservados.", year)}
                    </div>
                    <div class="flex gap-6 text-sm">
                        <a href="#" class="text-neutral-600 hover:text-brand-500 transition-colors">{"Termos de Uso"}</a>
                        <a href="#" class="text-neutral-600 hover:text-brand-500 transition-colors">{"Política de Privacidade"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
