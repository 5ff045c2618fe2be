use chrono::{Datelike, Local};
use yew::prelude::*;

use crate::catalog::{Axis, Country};
use crate::config;

const SERVICES: [&str; 6] = [
    "University Applications",
    "Visa Assistance",
    "Scholarship Guidance",
    "Accommodation Support",
    "Career Counseling",
    "Test Preparation",
];

const COMPANY: [&str; 6] = [
    "About Us",
    "Our Team",
    "Success Stories",
    "Partnerships",
    "Careers",
    "Contact Us",
];

const RESOURCES: [&str; 6] = [
    "Study Guides",
    "Country Profiles",
    "University Rankings",
    "Scholarship Database",
    "Visa Requirements",
    "Cost Calculator",
];

// (glyph, label)
const SOCIAL: [(&str, &str); 4] = [
    ("f", "Facebook"),
    ("𝕏", "Twitter"),
    ("◎", "Instagram"),
    ("in", "LinkedIn"),
];

fn link_column(title: &str, links: &[&'static str]) -> Html {
    html! {
        <div class="footer-column">
            <h3>{title.to_string()}</h3>
            <ul>
                { for links.iter().map(|link| html! {
                    <li><a href="#">{*link}</a></li>
                }) }
            </ul>
        </div>
    }
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = Local::now().year();
    let destinations: Vec<&'static str> = Country::VALUES.iter().map(|country| country.label()).collect();

    html! {
        <footer class="site-footer">
            <div class="container footer-grid">
                <div class="footer-company">
                    <img src={config::LOGO_PATH} alt="Frankmillers Education" class="footer-logo" />
                    <p>
                        {"Sri Lanka's premier international education consultancy, guiding students \
                          to world-class universities for over a decade. Your gateway to global opportunities."}
                    </p>
                    <div class="footer-contact">
                        <div>{"📞 "}{config::PHONE}</div>
                        <div>{"✉️ "}{config::EMAIL}</div>
                        <div>{"📍 "}{config::STREET_ADDRESS}</div>
                    </div>
                    <div class="footer-social">
                        { for SOCIAL.iter().map(|(glyph, label)| html! {
                            <a href="#" aria-label={*label}>{*glyph}</a>
                        }) }
                    </div>
                </div>

                { link_column("Services", &SERVICES) }
                { link_column("Destinations", &destinations) }
                { link_column("Company", &COMPANY) }
                { link_column("Resources", &RESOURCES) }
            </div>

            <div class="footer-bottom">
                <div class="container footer-bottom-content">
                    <div class="copyright">
                        {format!("© {} {}. All rights reserved.", year, config::COMPANY_NAME)}
                    </div>
                    <div class="footer-legal">
                        <a href="#">{"Privacy Policy"}</a>
                        <a href="#">{"Terms of Service"}</a>
                        <a href="#">{"Cookie Policy"}</a>
                    </div>
                </div>
            </div>
        </footer>
    }
}
