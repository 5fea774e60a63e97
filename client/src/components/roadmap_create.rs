//! Creation form for new roadmaps.
//!
//! DESIGN
//! ======
//! Form state lives in a local `CreateFormState` signal. A successful create
//! is published on the shared `CreatedFeed` so the listing can refresh.

use leptos::prelude::*;

use crate::net::api::RoadmapClient;
use crate::state::create_form::CreateFormState;
use crate::state::feed::CreatedFeed;

/// Title + description form with a save button.
#[component]
pub fn RoadmapCreate(client: RoadmapClient, feed: RwSignal<CreatedFeed>) -> impl IntoView {
    let form = RwSignal::new(CreateFormState::default());

    let save = Callback::new(move |()| {
        let Some(draft) = form.try_update(CreateFormState::begin_submit).flatten() else {
            return;
        };

        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let outcome = client.create(&draft).await;
                if let Err(err) = &outcome {
                    log::warn!("roadmap create failed: {err}");
                }
                if let Some(created) = form.try_update(|f| f.finish_submit(&outcome)).flatten() {
                    log::info!("roadmap created: {}", created.id);
                    feed.update(|f| f.publish(created));
                }
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (draft, &client, feed);
        }
    });

    let submitting = move || form.with(CreateFormState::is_submitting);

    view! {
        <form
            class="roadmap-create"
            on:submit=move |ev: leptos::ev::SubmitEvent| {
                ev.prevent_default();
                save.run(());
            }
        >
            <label class="roadmap-create__label">
                "Title"
                <input
                    class="roadmap-create__input"
                    type="text"
                    prop:value=move || form.with(|f| f.title.clone())
                    prop:disabled=submitting
                    on:input=move |ev| form.update(|f| f.set_title(event_target_value(&ev)))
                />
            </label>
            <label class="roadmap-create__label">
                "Description"
                <textarea
                    class="roadmap-create__input"
                    prop:value=move || form.with(|f| f.description.clone())
                    prop:disabled=submitting
                    on:input=move |ev| form.update(|f| f.set_description(event_target_value(&ev)))
                ></textarea>
            </label>
            <button class="btn btn--primary" type="submit" prop:disabled=submitting>
                {move || if submitting() { "Saving..." } else { "Save" }}
            </button>
            <Show when=move || form.with(|f| f.saved)>
                <p class="roadmap-create__saved">
                    {move || feed.with(|f| f.last().map(|r| format!("Saved \u{201c}{}\u{201d}", r.title)))}
                </p>
            </Show>
            {move || {
                form.with(|f| f.error().map(ToOwned::to_owned))
                    .map(|message| {
                        view! {
                            <p class="roadmap-create__error" role="alert">
                                {message}
                                <button
                                    class="btn"
                                    type="button"
                                    on:click=move |_| form.update(CreateFormState::dismiss_error)
                                >
                                    "Dismiss"
                                </button>
                            </p>
                        }
                    })
            }}
        </form>
    }
}
