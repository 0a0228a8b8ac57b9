use leptos::{either::*, prelude::*};

use crate::timeline::{MediaItem, MediaKind};

const DEFAULT_SPLIT: f64 = 50.0;

/// Parses the comparison slider value, keeping it inside `0..=100`.
fn parse_split(value: &str) -> f64 {
    value
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .map(|v| v.clamp(0.0, 100.0))
        .unwrap_or(DEFAULT_SPLIT)
}

#[component]
pub fn MediaRenderer(item: MediaItem, #[prop(optional, into)] classes: String) -> impl IntoView {
    let alt = item.alt_text().to_string();
    match item.kind {
        MediaKind::Image => EitherOf4::A(view! {
            <img
                src=item.src
                alt=alt
                class=format!("w-full h-full object-cover {classes}")
                loading="lazy"
            />
        }),
        MediaKind::YoutubeVideo => EitherOf4::B(view! {
            <iframe
                src=item.src
                title=alt
                allow="accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture; web-share"
                allowfullscreen=true
                class=format!("w-full h-full {classes}")
            ></iframe>
        }
        .attr("frameborder", "0")),
        MediaKind::GenericVideo | MediaKind::InstagramReel => EitherOf4::C(view! {
            <video
                src=item.src
                controls=true
                aria-label=alt
                class=format!("w-full h-full object-cover {classes}")
            >
                "Your browser does not support the video tag."
            </video>
        }),
        MediaKind::BeforeAfter => EitherOf4::D(view! {
            <BeforeAfter
                before=item.src
                after=item.after.unwrap_or_default()
                alt=alt
                classes
            />
        }),
    }
}

#[component]
fn BeforeAfter(before: String, after: String, alt: String, classes: String) -> impl IntoView {
    let (split, set_split) = signal(DEFAULT_SPLIT);

    view! {
        <div class=format!("relative w-full h-full overflow-hidden select-none {classes}")>
            <img
                src=after
                alt=format!("{alt} (after)")
                class="absolute inset-0 w-full h-full object-cover"
                loading="lazy"
            />
            <img
                src=before
                alt=format!("{alt} (before)")
                class="absolute inset-0 w-full h-full object-cover"
                style=move || format!("clip-path: inset(0 {}% 0 0)", 100.0 - split.get())
                loading="lazy"
            />
            <div
                class="absolute top-0 bottom-0 w-0.5 bg-isabelline pointer-events-none"
                style=move || format!("left: {}%", split.get())
                aria-hidden="true"
            />
            <span class="absolute top-1 left-1 px-1 text-xs rounded bg-background/70">
                "Before"
            </span>
            <span class="absolute top-1 right-1 px-1 text-xs rounded bg-background/70">
                "After"
            </span>
            <input
                type="range"
                min="0"
                max="100"
                step="1"
                prop:value=move || split.get().to_string()
                on:input=move |ev| set_split.set(parse_split(&event_target_value(&ev)))
                aria-label="Before and after divider"
                class="absolute bottom-2 left-1/2 -translate-x-1/2 w-2/3 accent-roseQuartz"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_split() {
        assert_eq!(parse_split("25"), 25.0);
        assert_eq!(parse_split("100"), 100.0);
        assert_eq!(parse_split("140"), 100.0);
        assert_eq!(parse_split("-3"), 0.0);
        assert_eq!(parse_split("NaN"), DEFAULT_SPLIT);
        assert_eq!(parse_split(""), DEFAULT_SPLIT);
    }
}
