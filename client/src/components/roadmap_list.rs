//! Roadmap listing with refresh and retry.

use leptos::prelude::*;

use crate::net::api::RoadmapClient;
use crate::state::feed::CreatedFeed;
use crate::state::roadmap_list::RoadmapListState;

/// Full roadmap collection. Loads on activation and after every creation
/// published on `feed`.
#[component]
pub fn RoadmapList(client: RoadmapClient, feed: RwSignal<CreatedFeed>) -> impl IntoView {
    let list = RwSignal::new(RoadmapListState::default());

    let fetch = Callback::new(move |ticket: u64| {
        #[cfg(feature = "hydrate")]
        {
            let client = client.clone();
            leptos::task::spawn_local(async move {
                let outcome = client.list().await;
                if let Err(err) = &outcome {
                    log::warn!("roadmap list failed: {err}");
                }
                list.update(|l| {
                    l.finish_load(ticket, outcome);
                });
            });
        }

        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (ticket, &client);
        }
    });

    let load = Callback::new(move |()| {
        if let Some(ticket) = list.try_update(RoadmapListState::begin_load) {
            fetch.run(ticket);
        }
    });

    Effect::new(move || {
        let revision = feed.with(CreatedFeed::revision);
        if let Some(ticket) = list.try_update(|l| l.observe_feed(revision)).flatten() {
            fetch.run(ticket);
        }
    });

    view! {
        <section class="roadmap-list">
            <header class="roadmap-list__header">
                <h2>"Roadmaps"</h2>
                <button
                    class="btn"
                    type="button"
                    prop:disabled=move || list.with(|l| l.loading)
                    on:click=move |_| load.run(())
                >
                    "Refresh"
                </button>
            </header>
            <Show when=move || list.with(|l| l.loading)>
                <p class="roadmap-list__status">"Loading roadmaps..."</p>
            </Show>
            {move || {
                list.with(|l| l.error.clone())
                    .map(|message| {
                        view! {
                            <p class="roadmap-list__error" role="alert">
                                {message}
                                <button class="btn" type="button" on:click=move |_| load.run(())>
                                    "Retry"
                                </button>
                            </p>
                        }
                    })
            }}
            <Show when=move || list.with(|l| !l.loading && l.error.is_none() && l.is_empty())>
                <p class="roadmap-list__empty">"No roadmaps yet."</p>
            </Show>
            <ul class="roadmap-list__items">
                {move || {
                    list.with(|l| l.items.clone())
                        .into_iter()
                        .map(|roadmap| {
                            view! {
                                <li class="roadmap-list__item">
                                    <h3 class="roadmap-list__title">{roadmap.title}</h3>
                                    <p class="roadmap-list__description">{roadmap.description}</p>
                                </li>
                            }
                        })
                        .collect::<Vec<_>>()
                }}
            </ul>
        </section>
    }
}
