//! Reusable UI components

mod alert;
mod button;
mod footer;
mod input;
mod nav;
mod service_card;

pub use alert::{Alert, AlertVariant, ErrorAlert, SuccessAlert};
pub use button::{Button, ButtonVariant};
pub use footer::Footer;
pub use input::{EmailInput, PasswordInput, TextArea, TextInput};
pub use nav::{Nav, NAV_ITEMS};
pub use service_card::ServiceCard;
