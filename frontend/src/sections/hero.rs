use yew::prelude::*;

use crate::config;
use crate::hooks::use_delayed_flag;
use crate::reveal::entrance;

// (glyph, value, label)
const STATS: [(&str, &str, &str); 4] = [
    ("👥", "5000+", "Students Guided"),
    ("🏆", "98%", "Success Rate"),
    ("🌐", "15+", "Countries"),
    ("⭐", "4.9/5", "Rating"),
];

#[function_component(HeroSection)]
pub fn hero_section() -> Html {
    // The hero is on screen at load, so it animates after a short delay
    // instead of waiting on an observer.
    let started = use_delayed_flag(config::HERO_ANIMATION_DELAY_MS);

    html! {
        <section id="home" class="hero">
            <div class="hero-background"></div>

            <div class="container hero-content">
                <div class={entrance("fade-in-up", 0, started)}>
                    <h1>
                        {"Your Gateway to "}
                        <span class="hero-title accent">{"Global Education"}</span>
                    </h1>
                </div>

                <div class={entrance("fade-in-up", 1, started)}>
                    <p class="hero-subtitle muted">
                        {"Unlock premium education opportunities worldwide with Sri Lanka's most trusted \
                          international education consultancy. From application to graduation, we're with you every step."}
                    </p>
                </div>

                <div class={classes!(entrance("fade-in-up", 2, started), "hero-cta-group")}>
                    <a href="#contact">
                        <button class="btn-primary">{"Start Your Journey →"}</button>
                    </a>
                    <a href="#courses">
                        <button class="btn-outline">{"Explore Courses"}</button>
                    </a>
                </div>

                <div class={entrance("scale-in", 3, started)}>
                    <div class="hero-stats">
                        { for STATS.iter().map(|(glyph, value, label)| html! {
                            <div class="hero-stat">
                                <div class="stat-icon">{*glyph}</div>
                                <div class="stat-value">{*value}</div>
                                <div class="stat-label muted">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="floating-orb orb-left float"></div>
            <div class="floating-orb orb-right float" style="animation-delay: 2s;"></div>
            <div class="floating-orb orb-center float" style="animation-delay: 4s;"></div>
        </section>
    }
}
