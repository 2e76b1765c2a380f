//! Sections of the landing page, top to bottom.

mod client_segments;
mod contact_form;
mod contacts;
mod faq;
mod hero;
mod news;
mod packages;
mod services;
mod testimonials;

pub use client_segments::ClientSegments;
pub use contact_form::ContactFormSection;
pub use contacts::ContactsSection;
pub use faq::Faq;
pub use hero::Hero;
pub use news::NewsSection;
pub use packages::PackagesSection;
pub use services::Services;
pub use testimonials::Testimonials;
