mod carousel;
mod header;
mod hero;
mod homepage;
mod media;
mod timeline;

use header::Header;
use homepage::HomePage;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{components::*, path};

const OWNER: &str = "Vamshi Mailaram";
const BUILD_YEAR: &str = env!("BUILD_YEAR");

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en" class="scroll-smooth">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <meta name="color-scheme" content="dark" />
                <link rel="shortcut icon" type="image/ico" href="/favicon.ico" />
                <link rel="stylesheet" id="leptos" href="/pkg/portfolio-site.css" />
                <MetaTags />
            </head>
            <body class="font-mono">
                <App />
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    view! {
        <Title formatter=|title| format!("{OWNER} - {title}") />

        <Router>
            <div class="min-h-screen flex flex-col bg-background text-foreground">
                <Header />
                <main class="flex-grow">
                    <Routes fallback=|| view! { <NotFound /> }>
                        <Route path=path!("/") view=HomePage />
                    </Routes>
                </main>
                <Footer />
            </div>
        </Router>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="text-center py-8 text-sm bg-backgroundDark">
            <p>{format!("© {BUILD_YEAR} {OWNER}. All rights reserved.")}</p>
            <p>"Built with Rust, Leptos, and Tailwind CSS."</p>
        </footer>
    }
}

#[component]
fn NotFound() -> impl IntoView {
    #[cfg(feature = "ssr")]
    {
        if let Some(resp) = use_context::<leptos_axum::ResponseOptions>() {
            resp.set_status(http::StatusCode::NOT_FOUND);
        }
    }

    view! {
        <Title text="Not Found" />
        <p class="text-center py-20 text-muted">"Page not found."</p>
    }
}
