//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_region::ToastRegion;
use crate::pages::voyages::VoyagesPage;
use crate::state::toasts::Toasts;

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

/// Root application component.
///
/// Provides the notification port and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let toasts = Toasts::new();
    provide_context(toasts);

    view! {
        <Stylesheet id="leptos" href="/pkg/voyage-desk.css"/>
        <Title text="Voyages"/>

        <Router>
            <main class="layout">
                <Routes fallback=|| "Page not found.".into_view()>
                    <Route path=StaticSegment("") view=VoyagesPage/>
                </Routes>
            </main>
        </Router>
        <ToastRegion toasts=toasts/>
    }
}
