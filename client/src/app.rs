//! Root application component and SSR shell.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{roadmap_create::RoadmapCreate, roadmap_list::RoadmapList};
use crate::net::api::RoadmapClient;
use crate::state::feed::CreatedFeed;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component with routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Roadmaps"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=RoadmapsPage/>
            </Routes>
        </Router>
    }
}

/// Creation form and listing side by side.
///
/// Owns the single `RoadmapClient` and the `CreatedFeed` and hands both to
/// the two views explicitly.
#[component]
pub fn RoadmapsPage() -> impl IntoView {
    let client = RoadmapClient::default();
    let feed = RwSignal::new(CreatedFeed::default());

    view! {
        <main class="container">
            <h1>"Roadmaps"</h1>
            <RoadmapCreate client=client.clone() feed=feed/>
            <RoadmapList client=client feed=feed/>
        </main>
    }
}
