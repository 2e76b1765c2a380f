use std::sync::Arc;

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::ApiClient;
use crate::models::{Contacts, Packages, SiteContent};
use crate::services::{ContentProvider, LoadOutcome};

/// Site-wide content shared through context.
///
/// Wraps a [`ContentProvider`] and mirrors its state into signals so the
/// sections re-render when a load lands.
#[derive(Clone)]
pub struct SiteData {
    api: ApiClient,
    provider: ContentProvider,
    content: RwSignal<Arc<SiteContent>>,
    loading: RwSignal<bool>,
}

impl SiteData {
    pub fn new(api: ApiClient) -> Self {
        let provider = ContentProvider::new(api.clone());
        let initial = provider.state();

        Self {
            api,
            provider,
            content: RwSignal::new(initial.content),
            loading: RwSignal::new(initial.loading),
        }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Starts a background load. Only the latest started load updates the
    /// signals.
    pub fn load(&self) {
        let provider = self.provider.clone();
        let content = self.content;
        let loading = self.loading;

        loading.set(true);
        spawn_local(async move {
            let outcome = provider.load().await;
            if outcome == LoadOutcome::Superseded {
                return;
            }
            let state = provider.state();
            content.try_set(state.content);
            loading.try_set(state.loading);
        });
    }

    pub fn contacts(&self) -> Signal<Contacts> {
        let content = self.content;
        Signal::derive(move || content.with(|c| c.contacts.clone()))
    }

    pub fn packages(&self) -> Signal<Packages> {
        let content = self.content;
        Signal::derive(move || content.with(|c| c.packages.clone()))
    }

    pub fn loading(&self) -> Signal<bool> {
        self.loading.into()
    }
}

/// The [`SiteData`] provided by `App`.
pub fn use_site_data() -> Option<SiteData> {
    use_context::<SiteData>()
}
