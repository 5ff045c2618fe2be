use log::info;
use yew::prelude::*;

use crate::anchor::AnchorScroll;
use crate::components::{footer::Footer, navigation::Navigation};
use crate::sections::{
    about::AboutSection, contact::ContactSection, courses::CoursesSection, hero::HeroSection,
    services::ServicesSection,
};

#[function_component]
pub fn Home() -> Html {
    // One click listener for every in-page link, removed when the page goes.
    use_effect_with_deps(
        |_| {
            info!("Home page mounted");
            let anchors = web_sys::window()
                .and_then(|window| window.document())
                .and_then(AnchorScroll::install);
            move || drop(anchors)
        },
        (),
    );

    html! {
        <div class="site">
            <Navigation />
            <HeroSection />
            <AboutSection />
            <CoursesSection />
            <ServicesSection />
            <ContactSection />
            <Footer />
        </div>
    }
}
