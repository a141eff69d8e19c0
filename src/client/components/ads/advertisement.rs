use dioxus::prelude::*;

use crate::{
    client::{
        config::{AdConfig, ResponsiveHeight, SizeLimit, ViewportClass},
        service::AdvertisementService,
        store::{session::SessionState, viewport::ViewportState},
        util::browser::open_in_new_tab,
    },
    model::advertisement::AdvertisementDto,
};

/// Characters of the description shown before it is cut off
pub const DESCRIPTION_LIMIT: usize = 100;

/// Visual treatment of a rendered advertisement
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdVariant {
    Banner,
    #[default]
    Sidebar,
    Popup,
    Footer,
}

impl AdVariant {
    fn container_class(&self) -> &'static str {
        match self {
            AdVariant::Banner | AdVariant::Footer => "card bg-base-100 shadow-sm w-full mb-4 overflow-hidden",
            AdVariant::Sidebar => "card bg-base-100 shadow-sm w-full max-w-full mb-4",
            // Hidden below the md breakpoint
            AdVariant::Popup => {
                "card bg-base-100 shadow-lg max-w-[400px] fixed bottom-5 right-5 z-[1000] hidden min-[900px]:block"
            }
        }
    }

    fn image_height(&self) -> ResponsiveHeight {
        match self {
            AdVariant::Banner => ResponsiveHeight::new(80, 100, 120),
            AdVariant::Sidebar => ResponsiveHeight::new(150, 180, 200),
            AdVariant::Popup | AdVariant::Footer => ResponsiveHeight::new(200, 200, 200),
        }
    }
}

/// Image height in pixels for `variant`, capped by the ad type's configured size limit
pub fn image_height_px(
    variant: AdVariant,
    limit: Option<&SizeLimit>,
    viewport: ViewportClass,
) -> u32 {
    let height = variant.image_height().for_viewport(viewport);

    match limit {
        Some(limit) => height.min(limit.max_height.for_viewport(viewport)),
        None => height,
    }
}

/// Cuts `text` after `max_chars` characters, appending `...` only when something was cut
pub fn truncate_description(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Remembers which advertisement a view was last reported for
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewTracker {
    last: Option<i64>,
}

impl ViewTracker {
    /// Returns true when `ad_id` differs from the last observed id, i.e. a view should be sent
    pub fn observe(&mut self, ad_id: i64) -> bool {
        if self.last == Some(ad_id) {
            return false;
        }

        self.last = Some(ad_id);
        true
    }
}

#[component]
pub fn Advertisement(ad: Option<AdvertisementDto>, #[props(default)] variant: AdVariant) -> Element {
    let service = use_context::<AdvertisementService>();
    let config = use_context::<AdConfig>();
    let session = use_context::<Signal<SessionState>>();
    let viewport = use_context::<Signal<ViewportState>>();
    let mut tracker = use_signal(ViewTracker::default);

    let ad_id = ad.as_ref().map(|ad| ad.id);
    let view_service = service.clone();
    use_effect(use_reactive((&ad_id,), move |(ad_id,)| {
        let Some(id) = ad_id else {
            return;
        };

        if tracker.write().observe(id) {
            let service = view_service.clone();
            spawn(async move {
                service.track_view(id).await;
            });
        }
    }));

    let Some(ad) = ad else {
        return rsx! {};
    };

    let viewport_class = viewport.read().class().unwrap_or(ViewportClass::Desktop);
    let image_height = image_height_px(variant, config.size_limit(ad.ad_type), viewport_class);
    let container_style = match (variant, config.size_limit(ad.ad_type)) {
        (AdVariant::Banner | AdVariant::Footer, Some(limit)) => format!(
            "max-height: {}px;",
            limit.max_height.for_viewport(viewport_class)
        ),
        _ => String::new(),
    };

    let id = ad.id;
    let link_url = ad.link_url.clone();
    let onclick = move |_: MouseEvent| {
        let service = service.clone();
        let session = session.read().session.clone();
        spawn(async move {
            service.track_click(id, &session).await;
        });

        if let Some(url) = &link_url {
            open_in_new_tab(url);
        }
    };

    rsx!(
        div {
            class: variant.container_class(),
            style: "{container_style}",
            button {
                class: "text-left w-full cursor-pointer",
                onclick: onclick,
                if let Some(image_url) = &ad.image_url {
                    figure {
                        img {
                            class: "w-full object-cover",
                            style: "height: {image_height}px;",
                            src: "{image_url}",
                            alt: "{ad.title}",
                        }
                    }
                }
                div { class: "card-body p-3 sm:p-4",
                    h3 { class: "text-sm sm:text-base font-semibold",
                        "{ad.title}"
                    }
                    if let Some(description) = &ad.description {
                        p { class: "text-xs sm:text-sm opacity-70 line-clamp-2 sm:line-clamp-3",
                            {truncate_description(description, DESCRIPTION_LIMIT)}
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod tests;
