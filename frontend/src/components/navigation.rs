use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::config;

#[function_component(Navigation)]
pub fn navigation() -> Html {
    let menu_open = use_state(|| false);
    let is_scrolled = use_state_eq(|| false);

    {
        let is_scrolled = is_scrolled.clone();
        use_effect_with_deps(
            move |_| {
                let window = web_sys::window();
                let scroll_callback = window.as_ref().map(|window| {
                    let scrolled_window = window.clone();
                    let scroll_callback = Closure::wrap(Box::new(move || {
                        let scroll_y = scrolled_window.scroll_y().unwrap_or(0.0);
                        is_scrolled.set(scroll_y > config::NAV_SCROLL_THRESHOLD);
                    }) as Box<dyn FnMut()>);

                    if let Err(err) = window
                        .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())
                    {
                        warn!("Could not listen for scroll: {:?}", err);
                    }
                    scroll_callback
                });

                move || {
                    if let (Some(window), Some(scroll_callback)) = (window, scroll_callback) {
                        let _ = window.remove_event_listener_with_callback(
                            "scroll",
                            scroll_callback.as_ref().unchecked_ref(),
                        );
                    }
                }
            },
            (),
        );
    }

    let toggle_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            menu_open.set(!*menu_open);
        })
    };

    // Links keep their default action so the page-level anchor handler can
    // scroll to the section.
    let close_menu = {
        let menu_open = menu_open.clone();
        Callback::from(move |_: MouseEvent| menu_open.set(false))
    };

    let links = |onclick: Option<Callback<MouseEvent>>| {
        config::NAV_LINKS
            .iter()
            .map(|(id, label)| {
                html! {
                    <a key={*id} href={format!("#{}", id)} class="nav-link" onclick={onclick.clone()}>
                        {*label}
                    </a>
                }
            })
            .collect::<Html>()
    };

    html! {
        <>
            <div class="top-bar">
                <div class="container top-bar-content">
                    <div class="top-bar-contacts">
                        <span>{"📞 "}{config::PHONE}</span>
                        <span>{"✉️ "}{config::EMAIL}</span>
                    </div>
                    <span>{"📍 "}{config::CITY}</span>
                </div>
            </div>

            <nav class={classes!("top-nav", (*is_scrolled).then(|| "scrolled"))}>
                <div class="container nav-content">
                    <a href="#home" class="nav-logo">
                        <img src={config::LOGO_PATH} alt="Frankmillers Education" />
                    </a>

                    <div class="nav-links">
                        { links(None) }
                    </div>

                    <div class="nav-cta">
                        <a href="#contact">
                            <button class="btn-secondary">{"Get Free Consultation"}</button>
                        </a>
                    </div>

                    <button class="burger-menu" onclick={toggle_menu}>
                        { if *menu_open { "✕" } else { "☰" } }
                    </button>
                </div>

                {
                    if *menu_open {
                        html! {
                            <div class="mobile-menu">
                                <div class="container mobile-menu-links">
                                    { links(Some(close_menu.clone())) }
                                    <a href="#contact" onclick={close_menu.clone()}>
                                        <button class="btn-secondary">{"Get Free Consultation"}</button>
                                    </a>
                                </div>
                            </div>
                        }
                    } else {
                        html! {}
                    }
                }
            </nav>
        </>
    }
}
