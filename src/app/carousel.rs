use std::time::Duration;

use leptos::{ev, html, prelude::*};
use leptos_use::{on_click_outside, use_interval_fn, use_window_size, UseWindowSizeReturn};

use crate::carousel::{
    CarouselConfig, CarouselState, DeltaMode, Direction, Timer, WheelInput, WheelOutcome,
};
use crate::timeline::MediaItem;

use super::media::MediaRenderer;

/// Which carousel currently owns the page's preview modal.
#[derive(Debug, Clone, Copy)]
pub struct ActiveModal(RwSignal<Option<String>>);

impl Default for ActiveModal {
    fn default() -> Self {
        Self(RwSignal::new(None))
    }
}

impl ActiveModal {
    fn is_owned_by(&self, owner: &str) -> bool {
        self.0.with(|o| o.as_deref() == Some(owner))
    }

    fn claim(&self, owner: &str) {
        if !self.0.with_untracked(|o| o.as_deref() == Some(owner)) {
            self.0.set(Some(owner.to_string()));
        }
    }

    fn release(&self, owner: &str) {
        if self.0.with_untracked(|o| o.as_deref() == Some(owner)) {
            self.0.set(None);
        }
    }
}

/// Milliseconds for `use_interval_fn`, saturating instead of truncating.
fn interval_millis(interval: Duration) -> u64 {
    u64::try_from(interval.as_millis()).unwrap_or(u64::MAX)
}

#[component]
pub fn Carousel(
    /// Unique on the page; used to coordinate the preview modal.
    owner: String,
    media: Vec<MediaItem>,
    #[prop(optional)] autoplay: bool,
    #[prop(optional)] config: Option<CarouselConfig>,
) -> impl IntoView {
    let config = config.unwrap_or_default();
    let mut initial = CarouselState::new(media.len(), config);
    initial.set_autoplay(autoplay);
    let state = RwSignal::new(initial);
    let active = use_context::<ActiveModal>().unwrap_or_default();
    let owner = StoredValue::new(owner);
    let media = StoredValue::new(media);
    let modal_ref = NodeRef::<html::Div>::new();

    // mirror the local preview into the page-wide owner
    let publish = move || {
        let preview = state.with_untracked(|s| s.preview());
        owner.with_value(|o| match preview {
            Some(index) => {
                log::debug!("{o}: previewing slide {index}");
                active.claim(o);
            }
            None => {
                log::debug!("{o}: preview closed");
                active.release(o);
            }
        });
    };

    let schedule = move |timer: Option<Timer>| {
        let Some(timer) = timer else {
            return;
        };
        let res = set_timeout_with_handle(
            move || {
                let changed = state
                    .try_update(|s| s.timer_elapsed(timer.kind, timer.token))
                    .unwrap_or(false);
                if changed {
                    publish();
                }
            },
            timer.delay,
        );
        if let Err(e) = res {
            log::warn!("couldn't schedule {:?} timer: {e:?}", timer.kind);
        }
    };

    let close = move || {
        if state.try_update(|s| s.close_preview()).unwrap_or(false) {
            publish();
        }
    };

    // another carousel took the modal
    Effect::new(move |_| {
        let mine = owner.with_value(|o| active.is_owned_by(o));
        if !mine && state.with_untracked(|s| s.preview().is_some()) {
            state.update(|s| {
                s.close_preview();
            });
        }
    });

    let UseWindowSizeReturn { width, .. } = use_window_size();
    Effect::new(move |_| {
        let width = width.get();
        state.update(|s| {
            s.resize(width);
        });
    });

    if autoplay {
        let interval = interval_millis(config.autoplay_interval);
        let _ = use_interval_fn(
            move || {
                state.try_update(|s| s.autoplay_tick());
            },
            interval,
        );
    }

    let escape_handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && state.try_update(|s| s.escape()).unwrap_or(false) {
            publish();
        }
    });
    on_cleanup(move || escape_handle.remove());

    let _ = on_click_outside(modal_ref, move |_| {
        if state.with_untracked(|s| s.preview().is_some())
            && state.try_update(|s| s.click_outside()).unwrap_or(false)
        {
            publish();
        }
    });

    let on_wheel = move |ev: ev::WheelEvent| {
        let input = WheelInput {
            delta_x: ev.delta_x(),
            delta_y: ev.delta_y(),
            shift: ev.shift_key(),
            mode: DeltaMode::from(ev.delta_mode()),
            timestamp: ev.time_stamp(),
        };
        let outcome = state
            .try_update(|s| s.wheel(input))
            .unwrap_or(WheelOutcome::Ignored);
        if outcome.is_consumed() {
            ev.prevent_default();
        }
    };

    let on_keydown = move |ev: ev::KeyboardEvent| {
        let direction = match ev.key().as_ref() {
            "ArrowLeft" => Direction::Backward,
            "ArrowRight" => Direction::Forward,
            _ => return,
        };
        ev.prevent_default();
        state.update(|s| {
            s.step(direction);
        });
    };

    let slide_enter =
        move |index: usize| schedule(state.try_update(|s| s.pointer_enter_slide(index)).flatten());
    let slide_leave =
        move |index: usize| schedule(state.try_update(|s| s.pointer_leave_slide(index)).flatten());

    let slides = media.with_value(|items| {
        items
            .iter()
            .cloned()
            .enumerate()
            .map(|(index, item)| {
                view! {
                    <div
                        class="relative h-full flex-shrink-0"
                        style=move || {
                            format!("width: calc(100% / {})", state.with(|s| s.items_visible()))
                        }
                        on:mouseenter=move |_| slide_enter(index)
                        on:mouseleave=move |_| slide_leave(index)
                        on:touchstart=move |_| slide_enter(index)
                        on:touchend=move |_| slide_leave(index)
                        on:touchcancel=move |_| slide_leave(index)
                        role="group"
                        aria-roledescription="slide"
                    >
                        <div
                            class="w-full h-full p-0.5 sm:p-1 rounded-md transition-transform duration-300 ease-in-out origin-center"
                            class=("scale-105", move || state.with(|s| s.preview() == Some(index)))
                            class=("z-20", move || state.with(|s| s.preview() == Some(index)))
                        >
                            <MediaRenderer item classes="rounded-md" />
                        </div>
                    </div>
                }
            })
            .collect_view()
    });

    // changes only when the previewed slide changes
    let shown = Memo::new(move |_| {
        state
            .with(|s| s.preview())
            .filter(|_| owner.with_value(|o| active.is_owned_by(o)))
    });

    let modal = move || {
        let item = shown
            .get()
            .and_then(|index| media.with_value(|m| m.get(index).cloned()));
        item.map(|item| {
            let caption = item.caption.clone();
            view! {
                <div
                    class="fixed inset-0 z-50 flex items-center justify-center bg-background/70 pointer-events-none"
                    role="dialog"
                    aria-modal="true"
                >
                    <div
                        node_ref=modal_ref
                        class="relative pointer-events-auto max-w-4xl w-[90vw] bg-backgroundDark rounded-lg shadow-2xl p-2"
                        on:mouseenter=move |_| state.update(|s| s.pointer_enter_modal())
                        on:mouseleave=move |_| schedule(state.try_update(|s| s.pointer_leave_modal()).flatten())
                    >
                        <button
                            class="absolute top-2 right-2 z-10 px-2 rounded bg-background/80 hover:bg-ultraViolet"
                            on:click=move |_| close()
                            aria-label="Close preview"
                        >
                            "✕"
                        </button>
                        <div class="h-[70vh]">
                            <MediaRenderer item classes="rounded-md object-contain" />
                        </div>
                        {caption.map(|c| view! { <p class="p-2 text-sm text-isabelline">{c}</p> })}
                    </div>
                </div>
            }
        })
    };

    let nav_button = move |direction: Direction| {
        let (label, glyph) = match direction {
            Direction::Backward => ("Previous", "‹"),
            Direction::Forward => ("Next", "›"),
        };
        view! {
            <button
                class="px-3 py-1 rounded-md bg-backgroundDark hover:bg-ultraViolet disabled:opacity-30 disabled:cursor-default transition-colors duration-200"
                disabled=move || !state.with(|s| s.can_step(direction))
                on:click=move |_| {
                    state.update(|s| {
                        s.step(direction);
                    })
                }
                aria-label=label
            >
                {glyph}
            </button>
        }
    };

    view! {
        <div
            class="relative w-full focus:outline-none"
            tabindex="0"
            role="region"
            aria-roledescription="carousel"
            on:mouseenter=move |_| state.update(|s| s.pointer_enter_carousel())
            on:mouseleave=move |_| state.update(|s| s.pointer_leave_carousel())
            on:wheel=on_wheel
            on:keydown=on_keydown
        >
            <div class="overflow-hidden rounded-md h-48 sm:h-64">
                <div
                    class="flex h-full transition-transform duration-500 ease-in-out"
                    style=move || {
                        format!("transform: translateX(-{}%)", state.with(|s| s.translate_percent()))
                    }
                >
                    {slides}
                </div>
            </div>
            <div class="flex items-center justify-between mt-2 text-sm text-muted">
                {nav_button(Direction::Backward)}
                <span>
                    {move || {
                        state
                            .with(|s| {
                                let range = s.visible_range();
                                if s.is_empty() {
                                    "0 / 0".to_string()
                                } else {
                                    format!("{}–{} / {}", range.start + 1, range.end, s.len())
                                }
                            })
                    }}
                </span>
                {nav_button(Direction::Forward)}
            </div>
            {modal}
        </div>
    }
}
