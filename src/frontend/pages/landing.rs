use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::frontend::sections::{
    ClientSegments, ContactFormSection, ContactsSection, Faq, Hero, NewsSection,
    PackagesSection, Services, Testimonials,
};

/// The public one-page site.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <div class="min-h-screen bg-white">
            <Nav/>
            <Hero/>
            <ClientSegments/>
            <Services/>
            <PackagesSection/>
            <Testimonials/>
            <Faq/>
            <ContactFormSection/>
            <NewsSection/>
            <ContactsSection/>
            <Footer/>
        </div>
    }
}
