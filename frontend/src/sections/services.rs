use yew::prelude::*;

use crate::hooks::use_reveal;
use crate::reveal::entrance;

struct Service {
    glyph: &'static str,
    title: &'static str,
    description: &'static str,
    features: [&'static str; 4],
}

const SERVICES: [Service; 6] = [
    Service {
        glyph: "📄",
        title: "Application Assistance",
        description: "Complete guidance through university applications, document preparation, and submission processes.",
        features: ["Personal Statement Review", "Document Verification", "Application Tracking", "Deadline Management"],
    },
    Service {
        glyph: "🛂",
        title: "Visa Guidance",
        description: "Expert support for student visa applications with high success rates across all destinations.",
        features: ["Visa Documentation", "Interview Preparation", "Embassy Liaison", "Process Updates"],
    },
    Service {
        glyph: "🏆",
        title: "Scholarship Support",
        description: "Identify and apply for scholarships, grants, and financial aid opportunities worldwide.",
        features: ["Scholarship Search", "Application Support", "Essay Writing Help", "Interview Coaching"],
    },
    Service {
        glyph: "🏠",
        title: "Accommodation",
        description: "Secure safe, comfortable, and affordable housing options near your chosen university.",
        features: ["Housing Search", "Virtual Tours", "Lease Assistance", "Local Area Guidance"],
    },
    Service {
        glyph: "✈️",
        title: "Pre-Departure",
        description: "Comprehensive preparation for your journey including travel arrangements and orientation.",
        features: ["Travel Booking", "Packing Guidance", "Cultural Briefing", "Airport Assistance"],
    },
    Service {
        glyph: "👥",
        title: "Career Counseling",
        description: "Professional guidance to align your academic choices with long-term career goals.",
        features: ["Career Assessment", "Industry Insights", "Networking Support", "Job Market Analysis"],
    },
];

// (step, title, description)
const PROCESS: [(&str, &str, &str); 6] = [
    ("01", "Free Consultation", "Understand your goals, assess qualifications, and create a personalized roadmap."),
    ("02", "Course Selection", "Identify the best programs and universities that match your profile and aspirations."),
    ("03", "Application Process", "Complete application preparation, submission, and follow-up with universities."),
    ("04", "Visa & Documentation", "Handle all visa requirements, documentation, and embassy procedures."),
    ("05", "Pre-Departure Support", "Final preparations including accommodation, travel, and orientation guidance."),
    ("06", "Ongoing Support", "Continued assistance during your studies and career development."),
];

#[function_component(ServicesSection)]
pub fn services_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());

    html! {
        <section id="services" ref={section} class="services">
            <div class="container">
                <div class={classes!(entrance("fade-in-up", 0, visible), "section-header")}>
                    <h2>
                        {"Student "}
                        <span class="accent">{"Essentials"}</span>
                    </h2>
                    <p class="muted">
                        {"Everything you need for a successful international education journey. \
                          From applications to graduation, we provide comprehensive support every step of the way."}
                    </p>
                </div>

                <div class={classes!(entrance("fade-in-up", 1, visible), "services-grid")}>
                    { for SERVICES.iter().map(|service| html! {
                        <div class="card-feature service-card">
                            <div class="service-icon">{service.glyph}</div>
                            <h3>{service.title}</h3>
                            <p class="muted">{service.description}</p>
                            <ul>
                                { for service.features.iter().map(|feature| html! {
                                    <li>{"✔ "}{*feature}</li>
                                }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class={classes!(entrance("fade-in-up", 2, visible), "process")}>
                    <div class="section-header">
                        <h3>{"Your Journey Simplified"}</h3>
                        <p class="muted">
                            {"Our proven 6-step process ensures a smooth and successful path to your dream university."}
                        </p>
                    </div>
                    <div class="timeline-line"></div>
                    { for PROCESS.iter().enumerate().map(|(index, (step, title, description))| {
                        let side = if index % 2 == 0 { "timeline-row left" } else { "timeline-row right" };
                        html! {
                            <div class={side}>
                                <div class="card-premium">
                                    <div class="process-step">{*step}</div>
                                    <h4>{*title}</h4>
                                    <p class="muted">{*description}</p>
                                </div>
                                <div class="timeline-dot pulse-glow">{*step}</div>
                                <div class="timeline-spacer"></div>
                            </div>
                        }
                    }) }
                </div>

                <div class={classes!(entrance("fade-in-up", 3, visible), "services-cta")}>
                    <h3>{"Ready to Start Your Journey?"}</h3>
                    <p>
                        {"Book a free consultation with our expert advisors and take the first step \
                          towards your international education dreams."}
                    </p>
                    <div class="cta-buttons">
                        <a href="#contact">
                            <button class="btn-primary">{"Book Free Consultation →"}</button>
                        </a>
                        <button class="btn-outline">{"Download Brochure"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
