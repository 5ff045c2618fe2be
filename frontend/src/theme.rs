use stylist::css;
use stylist::yew::Global;
use yew::prelude::*;

/// Page-wide layout and the entrance animations toggled by the `animate`
/// class.
#[function_component(Theme)]
pub fn theme() -> Html {
    html! {
        <Global css={css!(r#"
            html {
                scroll-behavior: smooth;
            }
            body {
                margin: 0;
                font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, Helvetica, Arial, sans-serif;
                color: #1c2434;
                background: #ffffff;
            }
            .container {
                max-width: 1200px;
                margin: 0 auto;
                padding: 0 16px;
            }
            section {
                padding: 80px 0;
            }
            .accent {
                background: linear-gradient(90deg, #063b6d, #e0801f);
                -webkit-background-clip: text;
                background-clip: text;
                color: transparent;
            }
            .muted {
                color: #5f6b7a;
            }
            .fade-in-up {
                opacity: 0;
                transform: translateY(30px);
                transition: opacity 0.8s ease-out, transform 0.8s ease-out;
            }
            .scale-in {
                opacity: 0;
                transform: scale(0.9);
                transition: opacity 0.6s ease-out, transform 0.6s ease-out;
            }
            .fade-in-up.animate, .scale-in.animate {
                opacity: 1;
                transform: none;
            }
            .stagger-1 { transition-delay: 0.1s; }
            .stagger-2 { transition-delay: 0.2s; }
            .stagger-3 { transition-delay: 0.3s; }
            .stagger-4 { transition-delay: 0.4s; }
            @keyframes float {
                0% { transform: translateY(0px); }
                50% { transform: translateY(-20px); }
                100% { transform: translateY(0px); }
            }
            .float {
                animation: float 6s ease-in-out infinite;
            }
            @keyframes pulse-glow {
                0% { box-shadow: 0 0 0 0 rgba(224, 128, 31, 0.5); }
                70% { box-shadow: 0 0 0 12px rgba(224, 128, 31, 0); }
                100% { box-shadow: 0 0 0 0 rgba(224, 128, 31, 0); }
            }
            .pulse-glow {
                animation: pulse-glow 2s infinite;
            }
            .card-premium, .card-feature {
                background: #ffffff;
                border-radius: 16px;
                padding: 32px;
                box-shadow: 0 8px 24px rgba(6, 59, 109, 0.08);
            }
            .btn-primary, .btn-secondary, .btn-outline {
                border-radius: 12px;
                padding: 14px 28px;
                font-weight: 600;
                cursor: pointer;
                border: 2px solid #063b6d;
            }
            .btn-primary { background: #063b6d; color: #ffffff; }
            .btn-secondary { background: #e0801f; border-color: #e0801f; color: #ffffff; }
            .btn-outline { background: transparent; color: #063b6d; }
            .filter-option {
                padding: 8px 16px;
                border-radius: 8px;
                border: 1px solid #d8dee6;
                background: #ffffff;
                cursor: pointer;
            }
            .filter-option.active {
                background: #063b6d;
                border-color: #063b6d;
                color: #ffffff;
            }
            .top-nav {
                position: fixed;
                left: 0;
                right: 0;
                z-index: 50;
                transition: background 0.3s;
            }
            .top-nav.scrolled {
                background: rgba(255, 255, 255, 0.95);
                box-shadow: 0 4px 12px rgba(0, 0, 0, 0.08);
            }
            @media (max-width: 1024px) {
                .nav-links, .nav-cta {
                    display: none;
                }
            }
        "#)} />
    }
}
