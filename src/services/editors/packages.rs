use crate::api::AdminClient;
use crate::common::ApiError;
use crate::models::{Package, PackageSegment, Packages, next_package_id};
use crate::services::{Liveness, StateCell};

use super::LIST_FETCH_FAILED;

pub const PACKAGES_SAVE_FAILED: &str = "Ошибка сохранения пакетов";

/// Working copy of one segment's package list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackagesForm {
    pub segment: PackageSegment,
    pub items: Vec<Package>,
}

#[derive(Debug, Clone, Default)]
pub struct PackagesState {
    pub packages: Packages,
    pub loading: bool,
    pub error: Option<String>,
    pub form: Option<PackagesForm>,
    pub saving: bool,
    pub alert: Option<String>,
}

/// Editor for the b2c/b2b package lists.
///
/// One segment is edited at a time, but saving always sends the whole
/// [`Packages`] document with the other segment taken from the last fetch.
#[derive(Clone, Debug)]
pub struct PackagesEditor {
    client: AdminClient,
    state: StateCell<PackagesState>,
    liveness: Liveness,
}

impl PackagesEditor {
    pub fn new(client: AdminClient, liveness: Liveness) -> Self {
        Self {
            client,
            state: StateCell::default(),
            liveness,
        }
    }

    pub fn state(&self) -> PackagesState {
        self.state.snapshot()
    }

    /// Reads the packages out of `GET /content`.
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
                    s.packages = content.packages;
                    Ok(())
                }
                Err(e) => {
                    log::warn!("failed to fetch packages: {e}");
                    s.error = Some(e.user_message(LIST_FETCH_FAILED));
                    Err(e)
                }
            }
        })
    }

    pub fn open_segment(&self, segment: PackageSegment) {
        self.state.update(|s| {
            s.form = Some(PackagesForm {
                segment,
                items: s.packages.segment(segment).to_vec(),
            });
        });
    }

    pub fn close_form(&self) {
        self.state.update(|s| s.form = None);
    }

    pub fn take_alert(&self) -> Option<String> {
        self.state.update(|s| s.alert.take())
    }

    /// Appends a blank package with the next id in this segment.
    pub fn add_package(&self) {
        self.edit_items(|items| {
            let id = next_package_id(items);
            items.push(Package {
                id,
                name: "Новый пакет".to_string(),
                features: vec![String::new()],
                ..Package::default()
            });
        });
    }

    pub fn remove_package(&self, index: usize) {
        self.edit_items(|items| {
            if index < items.len() {
                items.remove(index);
            }
        });
    }

    pub fn add_feature(&self, package: usize) {
        self.update_package(package, |p| p.features.push(String::new()));
    }

    pub fn remove_feature(&self, package: usize, feature: usize) {
        self.update_package(package, |p| {
            if feature < p.features.len() {
                p.features.remove(feature);
            }
        });
    }

    /// Applies `edit` to the package at `index` in the open form.
    pub fn update_package(&self, index: usize, edit: impl FnOnce(&mut Package)) {
        self.edit_items(|items| {
            if let Some(package) = items.get_mut(index) {
                edit(package);
            }
        });
    }

    fn edit_items(&self, edit: impl FnOnce(&mut Vec<Package>)) {
        self.state.update(|s| {
            if let Some(form) = s.form.as_mut() {
                edit(&mut form.items);
            }
        });
    }

    /// `PUT /admin/packages` with the open segment swapped in.
    pub async fn submit(&self) -> Result<(), ApiError> {
        let Some(next) = self.state.read(|s| {
            s.form
                .as_ref()
                .map(|form| s.packages.with_segment(form.segment, form.items.clone()))
        }) else {
            return Err(ApiError::InvalidRequest("no packages form is open".into()));
        };

        self.state.update(|s| {
            s.saving = true;
            s.alert = None;
        });

        let Some(result) = self.liveness.guard(self.client.update_packages(&next)).await else {
            return Ok(());
        };

        match result {
            Ok(()) => {
                self.state.update(|s| {
                    s.saving = false;
                    s.form = None;
                });
                if let Err(e) = self.fetch().await {
                    log::debug!("saved, but reloading packages failed: {e}");
                }
                Ok(())
            }
            Err(e) => {
                log::warn!("failed to save packages: {e}");
                self.state.update(|s| {
                    s.saving = false;
                    s.alert = Some(e.user_message(PACKAGES_SAVE_FAILED));
                });
                Err(e)
            }
        }
    }
}
