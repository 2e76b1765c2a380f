use crate::api::AdminClient;
use crate::common::ApiError;
use crate::models::Contacts;
use crate::services::{Liveness, StateCell};

use super::LIST_FETCH_FAILED;

pub const CONTACTS_SAVE_FAILED: &str = "Ошибка сохранения контактов";

#[derive(Debug, Clone, Default)]
pub struct ContactsState {
    pub contacts: Contacts,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<Contacts>,
    pub saving: bool,
    pub alert: Option<String>,
}

#[derive(Clone, Debug)]
pub struct ContactsEditor {
    client: AdminClient,
    state: StateCell<ContactsState>,
    liveness: Liveness,
}

impl ContactsEditor {
    pub fn new(client: AdminClient, liveness: Liveness) -> Self {
        Self {
            client,
            state: StateCell::default(),
            liveness,
        }
    }

    pub fn state(&self) -> ContactsState {
        self.state.snapshot()
    }

    pub async fn fetch(&self) -> Result<(), ApiError> {
        self.state.update(|s| {
            s.loading = true;
            s.error = None;
        });

        let Some(result) = self.liveness.guard(self.client.content()).await else {
            return Ok(());
        };

        self.state.update(|s| {
            s.loading = false;
            match result {
                Ok(content) => {
                    s.contacts = content.contacts;
                    Ok(())
                }
                Err(e) => {
                    log::warn!("failed to fetch contacts: {e}");
                    s.error = Some(e.user_message(LIST_FETCH_FAILED));
                    Err(e)
                }
            }
        })
    }

    pub fn open_form(&self) {
        self.state.update(|s| s.form = Some(s.contacts.clone()));
    }

    pub fn close_form(&self) {
        self.state.update(|s| s.form = None);
    }

    pub fn take_alert(&self) -> Option<String> {
        self.state.update(|s| s.alert.take())
    }

    pub fn update_form(&self, edit: impl FnOnce(&mut Contacts)) {
        self.state.update(|s| {
            if let Some(form) = s.form.as_mut() {
                edit(form);
            }
        });
    }

    pub fn add_phone(&self) {
        self.update_form(|c| c.phones.push(String::new()));
    }

    pub fn remove_phone(&self, index: usize) {
        self.update_form(|c| {
            if index < c.phones.len() {
                c.phones.remove(index);
            }
        });
    }

    /// `PUT /admin/contacts` with the whole form. Blank phone rows are
    /// dropped before sending.
    pub async fn submit(&self) -> Result<(), ApiError> {
        let Some(mut next) = self.state.read(|s| s.form.clone()) else {
            return Err(ApiError::InvalidRequest("no contacts form is open".into()));
        };
        next.phones.retain(|p| !p.trim().is_empty());

        self.state.update(|s| {
            s.saving = true;
            s.alert = None;
        });

        let Some(result) = self.liveness.guard(self.client.update_contacts(&next)).await else {
            return Ok(());
        };

        match result {
            Ok(()) => {
                self.state.update(|s| {
                    s.saving = false;
                    s.form = None;
                });
                if let Err(e) = self.fetch().await {
                    log::debug!("saved, but reloading contacts failed: {e}");
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to save contacts: {e}");
                self.state.update(|s| {
                    s.saving = false;
                    s.alert = Some(e.user_message(CONTACTS_SAVE_FAILED));
                });
                Err(e)
            }
        }
    }
}
