use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::client::{
    api::{default_transport, ApiClient},
    config::{AdConfig, ClientConfig, DEFAULT_API_URL},
    router::Route,
    service::AdvertisementService,
    store::{
        session::{Session, SessionState},
        viewport::ViewportState,
    },
    util::browser::{stored_token, watch_viewport_width},
};

fn ad_config() -> AdConfig {
    match AdConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Ad configuration error, using defaults: {}", e);
            AdConfig::default()
        }
    }
}

fn api_url() -> String {
    match ClientConfig::from_env() {
        Ok(config) => config.api_url,
        Err(e) => {
            tracing::error!("Configuration error, using {}: {}", DEFAULT_API_URL, e);
            DEFAULT_API_URL.to_string()
        }
    }
}

#[component]
pub fn App() -> Element {
    let api = use_context_provider(|| ApiClient::new(&api_url(), default_transport()));
    use_context_provider(|| AdvertisementService::new(api.clone()));
    use_context_provider(ad_config);

    let mut session = use_context_provider(|| Signal::new(SessionState::default()));
    let mut viewport = use_context_provider(|| Signal::new(ViewportState::default()));

    // Read the token saved by the sign-in flow once on startup
    use_future(move || async move {
        let token = stored_token().await;

        let mut state = session.write();
        state.session = Session::new(token);
        state.fetched = true;
    });

    use_future(move || async move {
        watch_viewport_width(move |width| {
            if viewport.read().width != Some(width) {
                viewport.write().width = Some(width);
            }
        })
        .await;
    });

    rsx! {
        Router::<Route> {}
    }
}
