use leptos::prelude::*;
use leptos::server_fn::codec::GetUrl;
use leptos_meta::Title;

#[cfg(feature = "ssr")]
use crate::timeline::load_events;
use crate::timeline::TimelineEvent;

use super::hero::HeroSection;
use super::timeline::Timeline;
use super::OWNER;

const HERO_BACKGROUND: &str = "https://picsum.photos/seed/portfolio_background/1920/1080";

#[server(input = GetUrl)]
pub async fn get_events_server() -> Result<Vec<TimelineEvent>, ServerFnError> {
    load_events().map_err(|e| ServerFnError::new(e.to_string()))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let events = Resource::new(|| (), |_| get_events_server());

    view! {
        <Title text="Portfolio" />
        <HeroSection
            name=OWNER
            summary="Passionate visual storyteller, capturing moments and crafting narratives through photography and videography."
            profile_image="https://picsum.photos/seed/vamshi_profile/200/200"
            background_image=HERO_BACKGROUND
        />
        <Suspense fallback=|| {
            view! { <p class="text-center text-paleDogwood py-10">"Loading timeline..."</p> }
        }>
            {move || Suspend::new(async move {
                match events.await {
                    Ok(events) => view! { <Timeline events /> }.into_any(),
                    Err(e) => {
                        log::error!("failed to load timeline: {e}");
                        view! {
                            <p class="text-center text-red py-10">"Couldn't load the timeline."</p>
                        }
                            .into_any()
                    }
                }
            })}
        </Suspense>
    }
}
