use leptos::prelude::*;

use crate::timeline::TimelineEvent;

use super::carousel::{ActiveModal, Carousel};

const DOT_OFFSET_PX: i32 = 40;

#[component]
pub fn Timeline(events: Vec<TimelineEvent>) -> impl IntoView {
    if events.is_empty() {
        return view! {
            <p class="text-center text-paleDogwood py-10">"No events to display."</p>
        }
        .into_any();
    }

    // one modal for the whole page, owned by whichever carousel opened it last
    provide_context(ActiveModal::default());

    view! {
        <div class="container mx-auto max-w-[1024px] px-4 sm:px-6 lg:px-8 py-8 sm:py-12 h-[80vh] box-border">
            <div class="relative h-full flex flex-col overflow-y-auto no-scrollbar">
                <div
                    class="absolute w-1 bg-roseQuartz rounded-full top-0 bottom-0"
                    style=format!("left: {DOT_OFFSET_PX}px")
                    aria-hidden="true"
                />
                <div class="flex flex-col space-y-10 mt-2">
                    {events
                        .into_iter()
                        .map(|event| {
                            view! {
                                <div class="min-h-[500px]">
                                    <TimelineCard event />
                                </div>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </div>
    }
    .into_any()
}

#[component]
fn TimelineCard(event: TimelineEvent) -> impl IntoView {
    let TimelineEvent {
        id,
        date,
        title,
        category,
        description_html,
        profile_image,
        autoplay,
        media,
        ..
    } = event;

    view! {
        <article class="relative flex items-start gap-6" id=id.clone()>
            <div
                class="absolute top-0 w-[2px] h-full bg-roseQuartz"
                style=format!("left: {DOT_OFFSET_PX}px")
            />
            <span
                class="block w-5 h-5 rounded-full bg-roseQuartz absolute"
                style=format!("left: {}px; top: 10px", DOT_OFFSET_PX - 6)
                aria-hidden="true"
            />
            <div class="ml-20 w-full max-w-xl">
                <div class="flex items-center gap-3 mb-1">
                    <img
                        src=profile_image
                        alt=""
                        class="w-10 h-10 rounded-full border-2 border-roseQuartz"
                        loading="lazy"
                    />
                    <h3 class="text-xl font-semibold font-heading">{title}</h3>
                </div>
                <p class="text-sm text-muted mb-2">
                    {date} " · " <span class="text-paleDogwood">{category}</span>
                </p>
                <div class="mb-4 space-y-2 text-foreground/80" inner_html=description_html></div>
                <Carousel owner=id.clone() media autoplay />
            </div>
        </article>
    }
}
