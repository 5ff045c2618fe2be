use log::Level;

/// Fraction of a section that must be on screen before it animates in.
pub const REVEAL_THRESHOLD: f64 = 0.2;

pub const HERO_ANIMATION_DELAY_MS: u32 = 500;

/// How long the "Message Sent!" confirmation stays up.
pub const FORM_RESET_MS: u32 = 3000;

/// Pixels scrolled before the nav bar gets its solid background.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

pub const LOGO_PATH: &str = "/assets/logo.png";
pub const COMPANY_NAME: &str = "Frankmillers Education Consultancy";

pub const PHONE: &str = "+94 11 234 5678";
pub const EMAIL: &str = "info@frankmillers.lk";
pub const STREET_ADDRESS: &str = "123 Galle Road, Colombo 03";
pub const CITY: &str = "Colombo, Sri Lanka";

// (section id, nav label)
pub const NAV_LINKS: [(&str, &str); 5] = [
    ("home", "Home"),
    ("about", "About Us"),
    ("courses", "Courses"),
    ("services", "Student Essentials"),
    ("contact", "Contact"),
];

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
