use gloo_timers::callback::Timeout;
use log::debug;
use web_sys::Element;
use yew::prelude::*;

use crate::config;
use crate::reveal;

/// True once the section behind `node` has been on screen; stays true.
#[hook]
pub fn use_reveal(node: NodeRef) -> bool {
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let section = node.cast::<Element>();
                let id = section.as_ref().map(Element::id).unwrap_or_default();
                let on_reveal = Callback::from(move |_| {
                    debug!("Section #{} revealed", id);
                    visible.set(true);
                });
                let guard = reveal::observe(section, config::REVEAL_THRESHOLD, on_reveal);

                // Observer is disconnected on unmount whether or not it fired.
                move || drop(guard)
            },
            node,
        );
    }

    *visible
}

/// False until `delay_ms` after mount, then true.
#[hook]
pub fn use_delayed_flag(delay_ms: u32) -> bool {
    let started = use_state(|| false);

    {
        let started = started.clone();
        use_effect_with_deps(
            move |delay_ms: &u32| {
                let timeout = Timeout::new(*delay_ms, move || started.set(true));
                move || drop(timeout)
            },
            delay_ms,
        );
    }

    *started
}
