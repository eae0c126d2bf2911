//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::builder::BuilderPage;
use crate::pages::dashboard::DashboardPage;
use crate::pages::fill::FillPage;
use crate::pages::sheet::{PreviewPage, ViewerPage};
use crate::state::editor::EditorState;
use crate::state::forms::FormsState;

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
/// Provides shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let editor = RwSignal::new(EditorState::default());
    let forms = RwSignal::new(FormsState::default());

    provide_context(editor);
    provide_context(forms);

    view! {
        <Stylesheet id="leptos" href="/pkg/formboard.css"/>
        <Title text="Formboard"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=DashboardPage/>
                <Route
                    path=(StaticSegment("forms"), StaticSegment("build"), ParamSegment("id"))
                    view=BuilderPage
                />
                <Route
                    path=(StaticSegment("forms"), StaticSegment("fill"), ParamSegment("id"))
                    view=FillPage
                />
                <Route
                    path=(StaticSegment("forms"), StaticSegment("preview"), ParamSegment("id"))
                    view=PreviewPage
                />
                <Route
                    path=(StaticSegment("forms"), StaticSegment("view"), ParamSegment("id"))
                    view=ViewerPage
                />
            </Routes>
        </Router>
    }
}
