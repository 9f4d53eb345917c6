use log::{info, warn};
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::leads::{submit_lead, Lead, LeadError};
use crate::components::icons::{Icon, IconView, WhatsAppIcon};
use crate::state::modal::{CloseReason, LeadForm, SubmissionOutcome};

const ACKNOWLEDGEMENT: &str = "Obrigado pelo interesse! Entraremos em contato.";

const INPUT_CLASS: &str = "w-full bg-neutral-950 border border-neutral-800 rounded-lg p-3 text-white focus:ring-2 focus:ring-brand-500 focus:border-brand-500 outline-none transition-all placeholder:text-neutral-600";

#[derive(Properties, PartialEq)]
pub struct LeadModalProps {
    pub is_open: bool,
    pub on_close: Callback<CloseReason>,
}

pub enum LeadModalMsg {
    Submit,
    Submitted(u64, Result<(), LeadError>),
    Dismiss,
}

pub struct LeadModal {
    form: LeadForm,
    company_name: NodeRef,
    contact_name: NodeRef,
    phone_number: NodeRef,
}

impl LeadModal {
    fn read_lead(&self) -> Result<Lead, LeadError> {
        let value = |node: &NodeRef| {
            node.cast::<HtmlInputElement>()
                .map(|input| input.value())
                .unwrap_or_default()
        };
        Lead::from_form(
            &value(&self.company_name),
            &value(&self.contact_name),
            &value(&self.phone_number),
        )
    }

    fn acknowledge() {
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(ACKNOWLEDGEMENT);
        }
    }

    fn field(label: &'static str, input_type: &'static str, placeholder: &'static str, node: &NodeRef) -> Html {
        html! {
            <div>
                <label class="block text-sm font-medium text-neutral-300 mb-1">{label}</label>
                <input
                    ref={node.clone()}
                    type={input_type}
                    required=true
                    placeholder={placeholder}
                    class={INPUT_CLASS}
                />
            </div>
        }
    }
}

impl Component for LeadModal {
    type Message = LeadModalMsg;
    type Properties = LeadModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            form: LeadForm::default(),
            company_name: NodeRef::default(),
            contact_name: NodeRef::default(),
            phone_number: NodeRef::default(),
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        // Opening or closing abandons whatever the previous form was doing
        if old_props.is_open != ctx.props().is_open {
            self.form.reset();
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LeadModalMsg::Submit => {
                let lead = self.read_lead();
                if let Some((generation, lead)) = self.form.submit(lead) {
                    info!("Submitting lead for {}", lead.company_name);
                    ctx.link().send_future(async move {
                        LeadModalMsg::Submitted(generation, submit_lead(&lead).await)
                    });
                }
                true
            }
            LeadModalMsg::Submitted(generation, result) => {
                if let Err(e) = &result {
                    warn!("Lead submission failed: {}", e);
                }
                match self.form.finish(generation, result) {
                    SubmissionOutcome::Accepted => {
                        Self::acknowledge();
                        ctx.props().on_close.emit(CloseReason::Submitted);
                        true
                    }
                    SubmissionOutcome::Failed => true,
                    SubmissionOutcome::Stale => false,
                }
            }
            LeadModalMsg::Dismiss => {
                self.form.reset();
                ctx.props().on_close.emit(CloseReason::Dismissed);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if !ctx.props().is_open {
            return html! {};
        }

        let onsubmit = ctx.link().callback(|e: SubmitEvent| {
            e.prevent_default();
            LeadModalMsg::Submit
        });
        let dismiss = ctx.link().callback(|_: MouseEvent| LeadModalMsg::Dismiss);
        let submitting = self.form.status().is_submitting();

        html! {
            <div class="fixed inset-0 z-[100] flex items-center justify-center p-4 bg-black/90 backdrop-blur-sm animate-fade-in">
                <div class="bg-neutral-900 border border-brand-500/30 rounded-2xl w-full max-w-md p-8 relative shadow-2xl shadow-brand-900/50 animate-slide-up">
                    <button onclick={dismiss} class="absolute top-4 right-4 text-neutral-500 hover:text-white transition-colors">
                        <IconView icon={Icon::X} />
                    </button>

                    <div class="text-center mb-6">
                        <div class="bg-brand-900/20 w-16 h-16 rounded-full flex items-center justify-center mx-auto mb-4 border border-brand-500/20">
                            <IconView icon={Icon::TrendingUp} class="w-8 h-8 text-brand-500" />
                        </div>
                        <h3 class="text-2xl font-bold text-white mb-2">{"Análise Gratuita de Perfil"}</h3>
                        <p class="text-neutral-400 text-sm">{"Descubra quanto dinheiro você está deixando na mesa."}</p>
                    </div>

                    <form class="space-y-4" {onsubmit}>
                        { Self::field("Nome da Empresa", "text", "Ex: Pizzaria do João", &self.company_name) }
                        { Self::field("Seu Nome", "text", "Seu nome", &self.contact_name) }
                        { Self::field("WhatsApp", "tel", "(11) 99999-9999", &self.phone_number) }

                        if let Some(error) = self.form.status().error() {
                            <p class="text-sm text-google-red bg-google-red/10 border border-google-red/30 rounded-lg p-3">
                                { error.user_message() }
                            </p>
                        }

                        <button
                            type="submit"
                            disabled={submitting}
                            class="w-full bg-brand-600 hover:bg-brand-500 disabled:opacity-60 text-white font-bold py-4 rounded-lg shadow-lg hover:shadow-brand-500/20 transition-all transform hover:-translate-y-1 flex justify-center gap-2 items-center"
                        >
                            <WhatsAppIcon class="w-5 h-5 fill-current" />
                            { if submitting { "ENVIANDO..." } else { "QUERO VENDER MAIS" } }
                        </button>

                        <p class="text-xs text-center text-neutral-500 mt-4 flex items-center justify-center gap-1">
                            <IconView icon={Icon::ShieldCheck} class="w-3 h-3" />
                            {" Seus dados estão 100% seguros."}
                        </p>
                    </form>
                </div>
            </div>
        }
    }
}
