use gloo_timers::callback::Timeout;
use log::info;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::catalog::{Axis, Country};
use crate::config;
use crate::hooks::use_reveal;
use crate::reveal::entrance;
use crate::submit::SubmitStub;

struct ContactCard {
    glyph: &'static str,
    title: &'static str,
    details: [&'static str; 2],
    action: &'static str,
}

const CONTACT_CARDS: [ContactCard; 4] = [
    ContactCard {
        glyph: "📞",
        title: "Phone",
        details: [config::PHONE, "+94 77 123 4567"],
        action: "Call Now",
    },
    ContactCard {
        glyph: "✉️",
        title: "Email",
        details: [config::EMAIL, "admissions@frankmillers.lk"],
        action: "Send Email",
    },
    ContactCard {
        glyph: "📍",
        title: "Office",
        details: ["123 Galle Road", "Colombo 03, Sri Lanka"],
        action: "Get Directions",
    },
    ContactCard {
        glyph: "🕒",
        title: "Hours",
        details: ["Mon - Fri: 9:00 AM - 6:00 PM", "Sat: 9:00 AM - 2:00 PM"],
        action: "View Calendar",
    },
];

const OFFICE_HOURS: [(&str, &str); 3] = [
    ("Monday - Friday", "9:00 AM - 6:00 PM"),
    ("Saturday", "9:00 AM - 2:00 PM"),
    ("Sunday", "Closed"),
];

fn contact_form(onsubmit: Callback<SubmitEvent>) -> Html {
    html! {
        <form class="contact-form" {onsubmit}>
            <div class="form-row">
                <div>
                    <label>{"First Name"}</label>
                    <input type="text" placeholder="John" required={true} />
                </div>
                <div>
                    <label>{"Last Name"}</label>
                    <input type="text" placeholder="Doe" required={true} />
                </div>
            </div>

            <div>
                <label>{"Email"}</label>
                <input type="email" placeholder="john.doe@example.com" required={true} />
            </div>

            <div>
                <label>{"Phone Number"}</label>
                <input type="tel" placeholder="+94 77 123 4567" required={true} />
            </div>

            <div>
                <label>{"Preferred Destination"}</label>
                <select>
                    <option value="">{"Select a country"}</option>
                    { for Country::VALUES.iter().map(|country| html! {
                        <option value={country.code()}>{country.label()}</option>
                    }) }
                    <option value="other">{"Other"}</option>
                </select>
            </div>

            <div>
                <label>{"Message"}</label>
                <textarea
                    placeholder="Tell us about your education goals and how we can help you..."
                    rows="4"
                    required={true}
                />
            </div>

            <button type="submit" class="btn-primary">{"Send Message ➤"}</button>

            <p class="form-note muted">
                {"By submitting this form, you agree to our privacy policy and terms of service."}
            </p>
        </form>
    }
}

#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let section = use_node_ref();
    let visible = use_reveal(section.clone());
    let submitted = use_state(|| false);

    // Held for the lifetime of the section so the pending reset timer is
    // cancelled with it.
    let stub = {
        let submitted = submitted.setter();
        use_mut_ref(move || {
            SubmitStub::<Timeout>::new(
                config::FORM_RESET_MS,
                Callback::from(move |value: bool| submitted.set(value)),
            )
        })
    };

    let onsubmit = {
        let stub = stub.clone();
        Callback::from(move |e: SubmitEvent| {
            info!("Contact form submitted");
            stub.borrow_mut().submit(&e);
        })
    };

    html! {
        <section id="contact" ref={section} class="contact">
            <div class="container">
                <div class={classes!(entrance("fade-in-up", 0, visible), "section-header")}>
                    <h2>
                        {"Get in "}
                        <span class="accent">{"Touch"}</span>
                    </h2>
                    <p class="muted">
                        {"Ready to begin your international education journey? Our expert consultants are here \
                          to guide you every step of the way. Let's make your dreams a reality."}
                    </p>
                </div>

                <div class="contact-grid">
                    <div class={entrance("fade-in-up", 1, visible)}>
                        <h3>{"Let's Connect"}</h3>
                        <div class="contact-cards">
                            { for CONTACT_CARDS.iter().map(|card| html! {
                                <div class="card-feature contact-card">
                                    <div class="contact-icon">{card.glyph}</div>
                                    <div>
                                        <h4>{card.title}</h4>
                                        { for card.details.iter().map(|detail| html! {
                                            <p class="muted">{*detail}</p>
                                        }) }
                                        <button class="link-button">{card.action}</button>
                                    </div>
                                </div>
                            }) }
                        </div>

                        <div class="quick-actions">
                            <h4>{"Quick Actions"}</h4>
                            <button class="btn-primary">{"💬 WhatsApp Consultation"}</button>
                            <button class="btn-outline">{"📞 Schedule a Call"}</button>
                        </div>
                    </div>

                    <div class={entrance("fade-in-up", 2, visible)}>
                        <div class="card-premium">
                            <h3>{"Send us a Message"}</h3>
                            {
                                if *submitted {
                                    html! {
                                        <div class="form-success">
                                            <div class="success-icon">{"✅"}</div>
                                            <h4>{"Message Sent!"}</h4>
                                            <p class="muted">
                                                {"Thank you for reaching out. We'll get back to you within 24 hours."}
                                            </p>
                                        </div>
                                    }
                                } else {
                                    contact_form(onsubmit)
                                }
                            }
                        </div>
                    </div>
                </div>

                <div class={classes!(entrance("fade-in-up", 3, visible), "office")}>
                    <h3>{"Visit Our Office"}</h3>
                    <div class="office-card">
                        <div class="office-icon">{"📍"}</div>
                        <h4>{config::COMPANY_NAME}</h4>
                        <p class="muted">{"123 Galle Road, Colombo 03, Sri Lanka"}</p>
                        <div class="office-hours">
                            { for OFFICE_HOURS.iter().map(|(day, hours)| html! {
                                <div class="office-hours-row">
                                    <span>{*day}</span>
                                    <span class="muted">{*hours}</span>
                                </div>
                            }) }
                        </div>
                        <button class="btn-outline">{"Get Directions"}</button>
                    </div>
                </div>
            </div>
        </section>
    }
}
