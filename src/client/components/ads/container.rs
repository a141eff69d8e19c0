use dioxus::prelude::*;
use dioxus_logger::tracing;

use crate::{
    client::{
        components::ads::{AdVariant, Advertisement},
        config::{AdConfig, ViewportClass},
        service::AdvertisementService,
        store::viewport::ViewportState,
    },
    model::advertisement::{AdFilters, AdType, AdvertisementDto, Position},
};

/// Whether the display policy lets a `variant` slot show at a viewport `width` pixels wide
pub fn slot_allowed(config: &AdConfig, variant: AdVariant, width: u32) -> bool {
    if !config.enabled {
        return false;
    }
    if config.display.mobile_hide && ViewportClass::from_width(width) == ViewportClass::Mobile {
        return false;
    }

    let hide_below = match variant {
        AdVariant::Sidebar => config.display.sidebar_hide_below,
        AdVariant::Banner | AdVariant::Footer => config.display.banner_hide_below,
        AdVariant::Popup => None,
    };

    !hide_below.is_some_and(|breakpoint| breakpoint.is_below(width))
}

/// Keeps ads meeting the minimum priority, in server order, up to the position's limit
pub fn select_ads(
    ads: Vec<AdvertisementDto>,
    config: &AdConfig,
    position: Position,
) -> Vec<AdvertisementDto> {
    ads.into_iter()
        .filter(|ad| config.meets_min_priority(ad.priority))
        .take(config.max_ads(position))
        .collect()
}

#[component]
pub fn AdContainer(
    position: Position,
    ad_type: AdType,
    #[props(default)] variant: AdVariant,
) -> Element {
    let service = use_context::<AdvertisementService>();
    let config = use_context::<AdConfig>();
    let viewport = use_context::<Signal<ViewportState>>();

    let width = viewport.read().width;
    let allowed = config.max_ads(position) > 0
        && width.is_some_and(|width| slot_allowed(&config, variant, width));

    // Disallowed slots never hit the API
    let ads = use_resource(use_reactive(
        (&allowed, &position, &ad_type),
        move |(allowed, position, ad_type)| {
            let service = service.clone();
            async move {
                if !allowed {
                    return Vec::new();
                }

                let filters = AdFilters::for_slot(position, ad_type);
                match service.list_advertisements(&filters).await {
                    Ok(ads) => ads,
                    Err(e) => {
                        tracing::warn!("Failed to load advertisements for {}: {}", position, e);
                        Vec::new()
                    }
                }
            }
        },
    ));

    let selected = match &*ads.read() {
        Some(ads) if allowed => select_ads(ads.clone(), &config, position),
        _ => Vec::new(),
    };

    if selected.is_empty() {
        return rsx! {};
    }

    rsx!(
        div { class: "flex flex-col gap-2",
            for ad in selected {
                Advertisement {
                    key: "{ad.id}",
                    ad: ad.clone(),
                    variant: variant,
                }
            }
        }
    )
}

#[cfg(test)]
mod tests;
