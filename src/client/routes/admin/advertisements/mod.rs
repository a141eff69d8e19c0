//! Admin console for advertisement records.
//!
//! Lists every advertisement with its traffic and click-through rate, and creates, edits,
//! deletes, and toggles records. Each mutation is followed by a full list refetch once it has
//! succeeded; failures are shown in a dismissible banner and leave the list as it was.

pub mod form;
pub mod state;

#[cfg(test)]
mod tests;

use chrono::Utc;
use dioxus::document::{Meta, Title};
use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::{FaEye, FaEyeSlash, FaPen, FaPlus, FaTrash};
use dioxus_free_icons::Icon;

use crate::{
    client::{
        api::ApiClient, components::Page, service::AdvertisementAdmin,
        store::session::SessionState,
    },
    model::advertisement::{AdType, AdvertisementDto, Position, TargetAudience},
};

pub use form::AdvertisementForm;
pub use state::{AdminState, DialogState};

#[component]
pub fn AdminAdvertisements() -> Element {
    let api = use_context::<ApiClient>();
    let session = use_context::<Signal<SessionState>>();
    let mut state = use_signal(|| AdminState::new(Utc::now().date_naive()));

    let admin =
        use_memo(move || AdvertisementAdmin::new(api.clone(), session.read().session.clone()));

    // Load once the stored token has been read
    use_effect(move || {
        let admin = admin();
        if !session.read().fetched {
            return;
        }

        spawn(async move {
            let result = admin.list_all().await;
            state.write().apply_list(result);
        });
    });

    let onsubmit = move |e: FormEvent| {
        e.prevent_default();

        let (editing, payload) = {
            let current = state.read();
            (current.editing_id(), current.form.to_payload())
        };
        let payload = match payload {
            Ok(payload) => payload,
            Err(e) => {
                state.write().fail(e.to_string());
                return;
            }
        };

        let admin = admin();
        spawn(async move {
            let result = admin.save(editing, &payload).await;
            state.write().apply_saved(result);
        });
    };

    let on_confirm_delete = move |_: MouseEvent| {
        let Some(id) = state.read().pending_delete else {
            return;
        };

        let admin = admin();
        spawn(async move {
            let result = admin.delete_confirmed(id, true).await;
            state.write().apply_deleted(result);
        });
    };

    let current = state.read();

    rsx!(
        Title { "Manage Advertisements" }
        Meta {
            name: "description",
            content: "Create, edit and retire in-app advertisements."
        }
        Page {
            if current.loading {
                div { class: "flex justify-center mt-8",
                    span { class: "loading loading-spinner loading-lg" }
                }
            } else {
                div { class: "flex justify-between items-center mb-6",
                    h1 { class: "text-3xl", "Manage Advertisements" }
                    button {
                        class: "btn btn-primary flex gap-2",
                        onclick: move |_| state.write().open_create(Utc::now().date_naive()),
                        Icon { width: 16, height: 16, icon: FaPlus }
                        "Create Ad"
                    }
                }
                if let Some(error) = &current.error {
                    div { role: "alert", class: "alert alert-error mb-4 flex justify-between",
                        span { "{error}" }
                        button {
                            class: "btn btn-sm btn-ghost",
                            onclick: move |_| state.write().dismiss_error(),
                            "Dismiss"
                        }
                    }
                }
                AdvertisementTable { ads: current.ads.clone(), admin: admin, state: state }
            }
        }
        if current.dialog != DialogState::Closed {
            AdvertisementDialog { state: state, onsubmit: onsubmit }
        }
        if current.pending_delete.is_some() {
            div { class: "modal modal-open",
                div { class: "modal-box",
                    h3 { class: "text-lg font-bold", "Delete advertisement" }
                    p { class: "py-4", "Are you sure you want to delete this advertisement?" }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            onclick: move |_| state.write().cancel_delete(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-error",
                            onclick: on_confirm_delete,
                            "Delete"
                        }
                    }
                }
            }
        }
    )
}

fn toggle_label(is_active: bool) -> &'static str {
    if is_active {
        "Deactivate"
    } else {
        "Activate"
    }
}

#[component]
fn AdvertisementTable(
    ads: Vec<AdvertisementDto>,
    admin: Memo<AdvertisementAdmin>,
    state: Signal<AdminState>,
) -> Element {
    let mut state = state;

    rsx!(
        div { class: "overflow-x-auto bg-base-100 shadow-sm rounded-box",
            table { class: "table table-md",
                thead {
                    tr {
                        th { "Title" }
                        th { "Type" }
                        th { "Position" }
                        th { "Audience" }
                        th { "Priority" }
                        th { "Status" }
                        th { "Views" }
                        th { "Clicks" }
                        th { "CTR" }
                        th { "Actions" }
                    }
                }
                tbody {
                    for ad in ads {
                        tr { key: "{ad.id}",
                            td { "{ad.title}" }
                            td { "{ad.ad_type}" }
                            td { "{ad.position}" }
                            td { "{ad.target_audience}" }
                            td { "{ad.priority}" }
                            td {
                                if ad.is_active {
                                    span { class: "badge badge-success badge-sm", "Active" }
                                } else {
                                    span { class: "badge badge-ghost badge-sm", "Inactive" }
                                }
                            }
                            td { "{ad.view_count}" }
                            td { "{ad.click_count}" }
                            td { {format!("{}%", ad.ctr_display())} }
                            td {
                                div { class: "flex gap-1",
                                    button {
                                        class: "btn btn-ghost btn-sm btn-square",
                                        title: toggle_label(ad.is_active),
                                        onclick: {
                                            let id = ad.id;
                                            move |_| {
                                                let admin = admin();
                                                spawn(async move {
                                                    let result = admin.toggle_and_refresh(id).await;
                                                    state.write().apply_toggled(result);
                                                });
                                            }
                                        },
                                        if ad.is_active {
                                            Icon { width: 16, height: 16, icon: FaEye }
                                        } else {
                                            Icon { width: 16, height: 16, icon: FaEyeSlash }
                                        }
                                    }
                                    button {
                                        class: "btn btn-ghost btn-sm btn-square",
                                        title: "Edit",
                                        onclick: {
                                            let ad = ad.clone();
                                            move |_| state.write().open_edit(&ad)
                                        },
                                        Icon { width: 16, height: 16, icon: FaPen }
                                    }
                                    button {
                                        class: "btn btn-ghost btn-sm btn-square",
                                        title: "Delete",
                                        onclick: {
                                            let id = ad.id;
                                            move |_| state.write().request_delete(id)
                                        },
                                        Icon { width: 16, height: 16, icon: FaTrash }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[component]
fn AdvertisementDialog(state: Signal<AdminState>, onsubmit: EventHandler<FormEvent>) -> Element {
    let mut state = state;
    let current = state.read();
    let form = &current.form;
    let editing = current.editing_id().is_some();

    rsx!(
        div { class: "modal modal-open",
            div { class: "modal-box max-w-3xl",
                form {
                    onsubmit: move |e| onsubmit.call(e),
                    h3 { class: "text-lg font-bold mb-4",
                        if editing { "Edit Advertisement" } else { "Create Advertisement" }
                    }
                    div { class: "flex flex-col gap-3",
                        label { class: "form-control w-full",
                            span { class: "label-text", "Title *" }
                            input {
                                class: "input input-bordered w-full",
                                name: "title",
                                required: true,
                                value: "{form.title}",
                                oninput: move |e| state.write().form.title = e.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Description" }
                            textarea {
                                class: "textarea textarea-bordered w-full",
                                name: "description",
                                rows: "3",
                                value: "{form.description}",
                                oninput: move |e| state.write().form.description = e.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Image URL" }
                            input {
                                class: "input input-bordered w-full",
                                name: "image_url",
                                value: "{form.image_url}",
                                oninput: move |e| state.write().form.image_url = e.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Link URL" }
                            input {
                                class: "input input-bordered w-full",
                                name: "link_url",
                                value: "{form.link_url}",
                                oninput: move |e| state.write().form.link_url = e.value(),
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Ad Type" }
                            select {
                                class: "select select-bordered w-full",
                                name: "ad_type",
                                onchange: move |e| {
                                    if let Some(ad_type) = AdType::parse(&e.value()) {
                                        state.write().form.ad_type = ad_type;
                                    }
                                },
                                for ad_type in AdType::ALL {
                                    option {
                                        value: ad_type.as_str(),
                                        selected: form.ad_type == ad_type,
                                        {ad_type.label()}
                                    }
                                }
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Target Audience" }
                            select {
                                class: "select select-bordered w-full",
                                name: "target_audience",
                                onchange: move |e| {
                                    if let Some(audience) = TargetAudience::parse(&e.value()) {
                                        state.write().form.target_audience = audience;
                                    }
                                },
                                for audience in TargetAudience::ALL {
                                    option {
                                        value: audience.as_str(),
                                        selected: form.target_audience == audience,
                                        {audience.label()}
                                    }
                                }
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Position" }
                            select {
                                class: "select select-bordered w-full",
                                name: "position",
                                onchange: move |e| {
                                    if let Some(position) = Position::parse(&e.value()) {
                                        state.write().form.position = position;
                                    }
                                },
                                for position in Position::ALL {
                                    option {
                                        value: position.as_str(),
                                        selected: form.position == position,
                                        {position.label()}
                                    }
                                }
                            }
                        }
                        label { class: "form-control w-full",
                            span { class: "label-text", "Priority" }
                            input {
                                class: "input input-bordered w-full",
                                r#type: "number",
                                name: "priority",
                                value: "{form.priority}",
                                oninput: move |e| state.write().form.priority = e.value(),
                            }
                        }
                        div { class: "flex gap-3",
                            label { class: "form-control w-full",
                                span { class: "label-text", "Start Date" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "date",
                                    name: "start_date",
                                    value: "{form.start_date}",
                                    oninput: move |e| state.write().form.start_date = e.value(),
                                }
                            }
                            label { class: "form-control w-full",
                                span { class: "label-text", "End Date" }
                                input {
                                    class: "input input-bordered w-full",
                                    r#type: "date",
                                    name: "end_date",
                                    value: "{form.end_date}",
                                    oninput: move |e| state.write().form.end_date = e.value(),
                                }
                            }
                        }
                        label { class: "label cursor-pointer justify-start gap-3",
                            input {
                                class: "toggle toggle-primary",
                                r#type: "checkbox",
                                name: "is_active",
                                checked: form.is_active,
                                onchange: move |e| state.write().form.is_active = e.checked(),
                            }
                            span { class: "label-text", "Active" }
                        }
                    }
                    div { class: "modal-action",
                        button {
                            class: "btn",
                            r#type: "button",
                            onclick: move |_| state.write().close_dialog(),
                            "Cancel"
                        }
                        button {
                            class: "btn btn-primary",
                            r#type: "submit",
                            if editing { "Update" } else { "Create" }
                        }
                    }
                }
            }
        }
    )
}
