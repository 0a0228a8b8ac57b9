use leptos::prelude::*;
use web_sys::{ScrollBehavior, ScrollToOptions};

fn scroll_to_top() {
    let opts = ScrollToOptions::new();
    opts.set_top(0.0);
    opts.set_behavior(ScrollBehavior::Smooth);
    window().scroll_to_with_scroll_to_options(&opts);
}

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="bg-background/80 backdrop-blur-md shadow-lg sticky top-0 z-40 w-full">
            <div class="container mx-auto px-4 sm:px-6 lg:px-8">
                <div class="flex items-center justify-between h-16">
                    <div class="flex-shrink-0">
                        <button
                            on:click=move |_| scroll_to_top()
                            class="text-2xl font-bold font-heading text-roseQuartz bg-backgroundDark hover:bg-ultraViolet hover:text-paleDogwood px-4 py-2 rounded-lg transition-colors duration-300"
                        >
                            "My Portfolio"
                        </button>
                    </div>
                    <nav></nav>
                </div>
            </div>
        </header>
    }
}
