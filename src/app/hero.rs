use leptos::prelude::*;

#[component]
pub fn HeroSection(
    name: &'static str,
    summary: &'static str,
    profile_image: &'static str,
    background_image: &'static str,
) -> impl IntoView {
    view! {
        <section
            class="relative py-20 md:py-32 bg-cover bg-center"
            style=format!("background-image: url({background_image})")
            aria-labelledby="hero-name"
        >
            <div class="absolute inset-0 bg-background/80 backdrop-blur-sm"></div>
            <div class="container mx-auto px-4 sm:px-6 lg:px-8 relative z-10 text-center">
                <img
                    src=profile_image
                    alt="Profile"
                    class="w-32 h-32 md:w-40 md:h-40 rounded-full mx-auto mb-6 border-4 border-roseQuartz shadow-xl shadow-roseQuartz/30"
                />
                <h1
                    id="hero-name"
                    class="text-4xl sm:text-5xl md:text-6xl font-bold font-heading mb-4"
                >
                    {name}
                </h1>
                <p class="text-lg sm:text-xl md:text-2xl text-isabelline max-w-3xl mx-auto">
                    {summary}
                </p>
            </div>
        </section>
    }
}
