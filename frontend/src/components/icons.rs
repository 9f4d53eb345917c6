use yew::prelude::*;

const LOGO_URL: &str = "https://i.ibb.co/gLkCMqjB/logo-MN-SEM-FUNDO.png";

const WHATSAPP_PATH: &str = "M17.472 14.382c-.297-.149-1.758-.867-2.03-.967-.273-.099-.471-.148-.67.15-.197.297-.767.966-.94 1.164-.173.199-.347.223-.644.075-.297-.15-1.255-.463-2.39-1.475-.883-.788-1.48-1.761-1.653-2.059-.173-.297-.018-.458.13-.606.134-.133.298-.347.446-.52.149-.174.198-.298.298-.497.099-.198.05-.371-.025-.52-.075-.149-.669-1.612-.916-2.207-.242-.579-.487-.5-.669-.51-.173-.008-.371-.01-.57-.01-.198 0-.52.074-.792.372-.272.297-1.04 1.016-1.04 2.479 0 1.462 1.065 2.875 1.213 3.074.149.198 2.096 3.2 5.077 4.487.709.306 1.262.489 1.694.625.712.227 1.36.195 1.871.118.571-.085 1.758-.719 2.006-1.413.248-.694.248-1.289.173-1.413-.074-.124-.272-.198-.57-.347m-5.421 7.403h-.004a9.87 9.87 0 01-5.031-1.378l-.361-.214-3.741.982.998-3.648-.235-.374a9.86 9.86 0 01-1.51-5.26c.001-5.45 4.436-9.884 9.888-9.884 2.64 0 5.122 1.03 6.988 2.898a9.825 9.825 0 012.893 6.994c-.003 5.45-4.437 9.884-9.885 9.884m8.413-18.297A11.815 11.815 0 0012.05 0C5.495 0 .16 5.335.157 11.892c0 2.096.547 4.142 1.588 5.945L.057 24l6.305-1.654a11.882 11.882 0 005.683 1.448h.005c6.554 0 11.89-5.335 11.893-11.893a11.821 11.821 0 00-3.48-8.413Z";

/// Stroke icons used across the page (lucide outlines).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    AlertTriangle,
    ArrowRight,
    BarChart,
    Check,
    CheckCircle,
    ChevronDown,
    ChevronUp,
    Gauge,
    Globe,
    Layout,
    MapPin,
    MousePointerClick,
    Search,
    ShieldCheck,
    Smartphone,
    Star,
    TrendingUp,
    X,
    Zap,
}

impl Icon {
    fn paths(self) -> &'static [&'static str] {
        match self {
            Icon::AlertTriangle => &[
                "m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3Z",
                "M12 9v4",
                "M12 17h.01",
            ],
            Icon::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Icon::BarChart => &["M3 3v18h18", "M18 17V9", "M13 17V5", "M8 17v-3"],
            Icon::Check => &["M20 6 9 17l-5-5"],
            Icon::CheckCircle => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "m9 12 2 2 4-4",
            ],
            Icon::ChevronDown => &["m6 9 6 6 6-6"],
            Icon::ChevronUp => &["m18 15-6-6-6 6"],
            Icon::Gauge => &["m12 14 4-4", "M3.34 19a10 10 0 1 1 17.32 0"],
            Icon::Globe => &[
                "M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20",
                "M12 2a14.5 14.5 0 0 0 0 20 14.5 14.5 0 0 0 0-20",
                "M2 12h20",
            ],
            Icon::Layout => &[
                "M5 3h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z",
                "M3 9h18",
                "M9 21V9",
            ],
            Icon::MapPin => &[
                "M20 10c0 6-8 12-8 12s-8-6-8-12a8 8 0 0 1 16 0Z",
                "M12 7a3 3 0 1 0 0 6a3 3 0 1 0 0-6",
            ],
            Icon::MousePointerClick => &[
                "m9 9 5 12 1.8-5.2L21 14Z",
                "M7.2 2.2 8 5.1",
                "m5.1 8-2.9-.8",
                "M14 4.1 12 6",
                "m6 12-1.9 2",
            ],
            Icon::Search => &["M11 3a8 8 0 1 0 0 16a8 8 0 1 0 0-16", "m21 21-4.3-4.3"],
            Icon::ShieldCheck => &[
                "M12 22s8-4 8-10V5l-8-3-8 3v7c0 6 8 10 8 10",
                "m9 12 2 2 4-4",
            ],
            Icon::Smartphone => &[
                "M7 2h10a2 2 0 0 1 2 2v16a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V4a2 2 0 0 1 2-2z",
                "M12 18h.01",
            ],
            Icon::Star => &[
                "M12 2l3.09 6.26L22 9.27l-5 4.87 1.18 6.88L12 17.77l-6.18 3.25L7 14.14 2 9.27l6.91-1.01L12 2z",
            ],
            Icon::TrendingUp => &["M22 7l-8.5 8.5-5-5L2 17", "M16 7h6v6"],
            Icon::X => &["M18 6 6 18", "m6 6 12 12"],
            Icon::Zap => &["M13 2 3 14h9l-1 8 10-12h-9l1-8z"],
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct IconProps {
    pub icon: Icon,
    #[prop_or(AttrValue::Static("w-6 h-6"))]
    pub class: AttrValue,
}

#[function_component(IconView)]
pub fn icon_view(props: &IconProps) -> Html {
    html! {
        <svg
            viewBox="0 0 24 24"
            class={props.class.to_string()}
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            xmlns="http://www.w3.org/2000/svg"
        >
            { for props.icon.paths().iter().map(|d| html! { <path d={*d} /> }) }
        </svg>
    }
}

#[derive(Properties, PartialEq)]
pub struct WhatsAppIconProps {
    #[prop_or(AttrValue::Static("w-6 h-6"))]
    pub class: AttrValue,
}

#[function_component(WhatsAppIcon)]
pub fn whatsapp_icon(props: &WhatsAppIconProps) -> Html {
    html! {
        <svg viewBox="0 0 24 24" class={props.class.to_string()} fill="currentColor" xmlns="http://www.w3.org/2000/svg">
            <path d={WHATSAPP_PATH} />
        </svg>
    }
}

#[function_component(Logo)]
pub fn logo() -> Html {
    html! {
        <div class="flex items-center">
            <img
                src={LOGO_URL}
                alt="MN Consultoria Logo"
                class="h-12 md:h-14 w-auto object-contain"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_icon_has_geometry() {
        let icons = [
            Icon::AlertTriangle, Icon::ArrowRight, Icon::BarChart, Icon::Check,
            Icon::CheckCircle, Icon::ChevronDown, Icon::ChevronUp, Icon::Gauge,
            Icon::Globe, Icon::Layout, Icon::MapPin, Icon::MousePointerClick,
            Icon::Search, Icon::ShieldCheck, Icon::Smartphone, Icon::Star,
            Icon::TrendingUp, Icon::X, Icon::Zap,
        ];
        for icon in icons {
            assert!(!icon.paths().is_empty(), "{icon:?}");
            assert!(icon.paths().iter().all(|d| d.starts_with(['M', 'm'])), "{icon:?}");
        }
    }
}
