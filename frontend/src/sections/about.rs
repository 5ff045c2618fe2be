use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::reveal::entrance;

struct Milestone {
    year: &'static str,
    title: &'static str,
    description: &'static str,
}

const MILESTONES: [Milestone; 4] = [
    Milestone {
        year: "2010",
        title: "Founded",
        description: "Established as Sri Lanka's premier education consultancy",
    },
    Milestone {
        year: "2015",
        title: "Global Expansion",
        description: "Partnerships with 50+ universities worldwide",
    },
    Milestone {
        year: "2020",
        title: "Digital Innovation",
        description: "Launched comprehensive online guidance platform",
    },
    Milestone {
        year: "2024",
        title: "Excellence Recognition",
        description: "5000+ successful student placements globally",
    },
];

// (glyph, title, description)
const VALUES: [(&str, &str, &str); 4] = [
    ("🎯", "Excellence", "We pursue the highest standards in education consulting and student guidance."),
    ("❤️", "Student-First", "Every decision we make is centered around our students' success and wellbeing."),
    ("🌐", "Global Vision", "We connect local talent with worldwide opportunities for boundless growth."),
    ("🏅", "Integrity", "Transparent, honest guidance built on trust and professional ethics."),
];

const METRICS: [(&str, &str); 4] = [
    ("5000+", "Students Placed"),
    ("150+", "Partner Universities"),
    ("15", "Countries"),
    ("98%", "Success Rate"),
];

#[function_component(AboutSection)]
pub fn about_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="about" ref={section} class="about">
            <div class="container">
                <div class={classes!(entrance("fade-in-up", 0, visible), "section-header")}>
                    <h2>
                        {"Empowering Dreams for "}
                        <span class="accent">{"Over a Decade"}</span>
                    </h2>
                    <p class="muted">
                        {"From humble beginnings to becoming Sri Lanka's most trusted education consultancy, \
                          our journey has been defined by student success stories and unwavering commitment to excellence."}
                    </p>
                </div>

                <div class={classes!(entrance("fade-in-up", 1, visible), "timeline")}>
                    <h3>{"Our Journey"}</h3>
                    <div class="timeline-line"></div>
                    { for MILESTONES.iter().enumerate().map(|(index, milestone)| {
                        let side = if index % 2 == 0 { "timeline-row left" } else { "timeline-row right" };
                        html! {
                            <div class={side}>
                                <div class="card-feature">
                                    <div class="milestone-year">{milestone.year}</div>
                                    <h4>{milestone.title}</h4>
                                    <p class="muted">{milestone.description}</p>
                                </div>
                                <div class="timeline-dot pulse-glow">{&milestone.year[2..]}</div>
                                <div class="timeline-spacer"></div>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!(entrance("fade-in-up", 2, visible), "mission-vision")}>
                    <div class="card-premium">
                        <h3>{"🎯 Our Mission"}</h3>
                        <p class="muted">
                            {"To democratize global education by providing personalized, comprehensive guidance \
                              that transforms academic aspirations into successful international careers. We bridge \
                              the gap between local talent and worldwide opportunities."}
                        </p>
                    </div>
                    <div class="card-premium">
                        <h3>{"👁️ Our Vision"}</h3>
                        <p class="muted">
                            {"To be recognized as the global leader in education consulting, where every student \
                              who dreams of international education finds the guidance, support, and opportunities \
                              they need to succeed beyond borders."}
                        </p>
                    </div>
                </div>

                <div class={entrance("fade-in-up", 3, visible)}>
                    <h3 class="values-title">{"Our Core Values"}</h3>
                    <div class="values-grid">
                        { for VALUES.iter().map(|(glyph, title, description)| html! {
                            <div class="card-feature value-card">
                                <div class="value-icon">{*glyph}</div>
                                <h4>{*title}</h4>
                                <p class="muted">{*description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!(entrance("fade-in-up", 4, visible), "metrics-banner")}>
                    <h3>{"Trusted by Thousands"}</h3>
                    <div class="metrics-grid">
                        { for METRICS.iter().map(|(value, label)| html! {
                            <div>
                                <div class="metric-value">{*value}</div>
                                <div class="metric-label">{*label}</div>
                            </div>
                        }) }
                    </div>
                </div>
            </div>
        </section>
    }
}
