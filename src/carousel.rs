//! Interaction state for a media carousel.
//!
//! Nothing in here touches the DOM. The UI layer forwards pointer, wheel,
//! keyboard and resize events to [`CarouselState`] and schedules the
//! [`Timer`]s it hands back. A timer that fires after it has been
//! superseded is recognised by its token and ignored.

use std::ops::Range;
use std::time::Duration;

const LINE_HEIGHT_PX: f64 = 16.0;
const PAGE_HEIGHT_PX: f64 = 800.0;
const WIDE_ITEMS: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CarouselConfig {
    pub dwell: Duration,
    pub grace: Duration,
    pub wheel_threshold: f64,
    pub wheel_cooldown: Duration,
    /// `(medium, wide)` viewport widths in CSS pixels.
    pub breakpoints: (f64, f64),
    pub autoplay_interval: Duration,
    pub autoplay_idle_ticks: u32,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            dwell: Duration::from_millis(1500),
            grace: Duration::from_millis(150),
            wheel_threshold: 10.0,
            wheel_cooldown: Duration::from_millis(300),
            breakpoints: (640.0, 1024.0),
            autoplay_interval: Duration::from_millis(3000),
            autoplay_idle_ticks: 2,
        }
    }
}

impl CarouselConfig {
    /// Number of slides shown side by side at the given viewport width.
    pub fn items_for_width(&self, width: f64) -> usize {
        let (medium, wide) = self.breakpoints;
        if width.is_nan() || width <= 0.0 {
            1
        } else if width < medium {
            1
        } else if width < wide {
            2
        } else {
            WIDE_ITEMS
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Backward,
    Forward,
}

impl Direction {
    fn reversed(self) -> Self {
        match self {
            Self::Backward => Self::Forward,
            Self::Forward => Self::Backward,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerKind {
    Dwell,
    Grace,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timer {
    pub kind: TimerKind,
    pub token: u64,
    pub delay: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeltaMode {
    #[default]
    Pixel,
    Line,
    Page,
}

impl From<u32> for DeltaMode {
    fn from(value: u32) -> Self {
        match value {
            1 => Self::Line,
            2 => Self::Page,
            _ => Self::Pixel,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WheelInput {
    pub delta_x: f64,
    pub delta_y: f64,
    pub shift: bool,
    pub mode: DeltaMode,
    /// Event timestamp in milliseconds.
    pub timestamp: f64,
}

impl WheelInput {
    /// Horizontal component in pixels, or `None` when the input is a plain
    /// vertical scroll that belongs to the page.
    fn horizontal_delta(&self) -> Option<f64> {
        let scale = match self.mode {
            DeltaMode::Pixel => 1.0,
            DeltaMode::Line => LINE_HEIGHT_PX,
            DeltaMode::Page => PAGE_HEIGHT_PX,
        };
        let (dx, dy) = (self.delta_x * scale, self.delta_y * scale);
        if !dx.is_finite() || !dy.is_finite() {
            return None;
        }
        if self.shift {
            // some platforms already swap the axes when shift is held
            Some(if dx.abs() > dy.abs() { dx } else { dy })
        } else if dx.abs() > dy.abs() {
            Some(dx)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WheelOutcome {
    /// Not meant for the carousel; let the page scroll.
    Ignored,
    /// Meant for the carousel but produced no movement.
    Held,
    Moved(Direction),
}

impl WheelOutcome {
    pub fn is_consumed(&self) -> bool {
        !matches!(self, Self::Ignored)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Preview {
    index: usize,
    over_slide: bool,
    over_modal: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Dwell {
    index: usize,
    token: u64,
}

#[derive(Debug, Clone, PartialEq)]
struct Autoplay {
    enabled: bool,
    direction: Direction,
    idle_ticks: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarouselState {
    config: CarouselConfig,
    len: usize,
    items_visible: usize,
    offset: usize,
    preview: Option<Preview>,
    dwell: Option<Dwell>,
    grace: Option<u64>,
    next_token: u64,
    last_wheel_step: Option<f64>,
    pointer_inside: bool,
    autoplay: Autoplay,
}

impl CarouselState {
    pub fn new(len: usize, config: CarouselConfig) -> Self {
        Self {
            config,
            len,
            // matches what the server renders before the viewport is known
            items_visible: WIDE_ITEMS,
            offset: 0,
            preview: None,
            dwell: None,
            grace: None,
            next_token: 0,
            last_wheel_step: None,
            pointer_inside: false,
            autoplay: Autoplay {
                enabled: false,
                direction: Direction::Forward,
                idle_ticks: 0,
            },
        }
    }

    pub fn config(&self) -> &CarouselConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn items_visible(&self) -> usize {
        self.items_visible
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn max_offset(&self) -> usize {
        self.len.saturating_sub(self.items_visible)
    }

    pub fn visible_range(&self) -> Range<usize> {
        self.offset..(self.offset + self.items_visible).min(self.len)
    }

    /// Index of the slide currently shown in the modal.
    pub fn preview(&self) -> Option<usize> {
        self.preview.map(|p| p.index)
    }

    /// Index of the slide whose dwell timer is running.
    pub fn dwelling(&self) -> Option<usize> {
        self.dwell.map(|d| d.index)
    }

    pub fn can_step(&self, direction: Direction) -> bool {
        match direction {
            Direction::Backward => self.offset > 0,
            Direction::Forward => self.offset < self.max_offset(),
        }
    }

    /// Horizontal translation of the slide track, as a percentage of the
    /// viewport width.
    pub fn translate_percent(&self) -> f64 {
        self.offset as f64 * 100.0 / self.items_visible as f64
    }

    pub fn autoplay_enabled(&self) -> bool {
        self.autoplay.enabled
    }

    pub fn resize(&mut self, width: f64) -> bool {
        let items = self.config.items_for_width(width);
        let changed = items != self.items_visible;
        self.items_visible = items;
        self.clamp_offset();
        changed
    }

    fn clamp_offset(&mut self) {
        self.offset = self.offset.min(self.max_offset());
    }

    fn interacted(&mut self) {
        self.autoplay.idle_ticks = 0;
    }

    fn move_by_one(&mut self, direction: Direction) -> bool {
        if !self.can_step(direction) {
            return false;
        }
        match direction {
            Direction::Backward => self.offset -= 1,
            Direction::Forward => self.offset += 1,
        }
        true
    }

    pub fn step(&mut self, direction: Direction) -> bool {
        self.interacted();
        self.move_by_one(direction)
    }

    pub fn wheel(&mut self, input: WheelInput) -> WheelOutcome {
        let delta = match input.horizontal_delta() {
            Some(d) => d,
            None => return WheelOutcome::Ignored,
        };
        self.interacted();
        if delta.abs() < self.config.wheel_threshold {
            return WheelOutcome::Held;
        }
        let cooldown = self.config.wheel_cooldown.as_secs_f64() * 1000.0;
        if let Some(last) = self.last_wheel_step {
            if input.timestamp >= last && input.timestamp - last < cooldown {
                return WheelOutcome::Held;
            }
        }
        let direction = if delta > 0.0 {
            Direction::Forward
        } else {
            Direction::Backward
        };
        if self.move_by_one(direction) {
            self.last_wheel_step = Some(input.timestamp);
            WheelOutcome::Moved(direction)
        } else {
            WheelOutcome::Held
        }
    }

    fn issue(&mut self, kind: TimerKind) -> Timer {
        self.next_token += 1;
        let delay = match kind {
            TimerKind::Dwell => self.config.dwell,
            TimerKind::Grace => self.config.grace,
        };
        Timer {
            kind,
            token: self.next_token,
            delay,
        }
    }

    fn start_grace(&mut self) -> Timer {
        let timer = self.issue(TimerKind::Grace);
        self.grace = Some(timer.token);
        timer
    }

    pub fn pointer_enter_slide(&mut self, index: usize) -> Option<Timer> {
        if index >= self.len {
            return None;
        }
        self.interacted();
        if let Some(preview) = self.preview.as_mut() {
            if preview.index == index {
                preview.over_slide = true;
                self.grace = None;
                return None;
            }
        }
        let timer = self.issue(TimerKind::Dwell);
        self.dwell = Some(Dwell {
            index,
            token: timer.token,
        });
        Some(timer)
    }

    pub fn pointer_leave_slide(&mut self, index: usize) -> Option<Timer> {
        if self.dwell.is_some_and(|d| d.index == index) {
            self.dwell = None;
        }
        let preview = self.preview.as_mut()?;
        if preview.index != index {
            return None;
        }
        preview.over_slide = false;
        if preview.over_modal {
            None
        } else {
            Some(self.start_grace())
        }
    }

    pub fn pointer_enter_modal(&mut self) {
        if let Some(preview) = self.preview.as_mut() {
            preview.over_modal = true;
            self.grace = None;
        }
    }

    pub fn pointer_leave_modal(&mut self) -> Option<Timer> {
        let preview = self.preview.as_mut()?;
        preview.over_modal = false;
        if preview.over_slide {
            None
        } else {
            Some(self.start_grace())
        }
    }

    /// Applies a fired timer. Returns whether the preview changed.
    pub fn timer_elapsed(&mut self, kind: TimerKind, token: u64) -> bool {
        match kind {
            TimerKind::Dwell => {
                let Some(dwell) = self.dwell.filter(|d| d.token == token) else {
                    return false;
                };
                self.dwell = None;
                self.grace = None;
                self.preview = Some(Preview {
                    index: dwell.index,
                    over_slide: true,
                    over_modal: false,
                });
                true
            }
            TimerKind::Grace => {
                if self.grace != Some(token) {
                    return false;
                }
                self.grace = None;
                match self.preview {
                    Some(p) if !p.over_slide && !p.over_modal => {
                        self.preview = None;
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Closes the preview and forgets every pending timer.
    pub fn close_preview(&mut self) -> bool {
        self.dwell = None;
        self.grace = None;
        self.preview.take().is_some()
    }

    pub fn escape(&mut self) -> bool {
        self.close_preview()
    }

    pub fn click_outside(&mut self) -> bool {
        self.interacted();
        self.close_preview()
    }

    pub fn pointer_enter_carousel(&mut self) {
        self.pointer_inside = true;
        self.interacted();
    }

    pub fn pointer_leave_carousel(&mut self) {
        self.pointer_inside = false;
        self.interacted();
    }

    pub fn set_autoplay(&mut self, enabled: bool) {
        self.autoplay.enabled = enabled;
        self.autoplay.idle_ticks = 0;
    }

    /// Advances autoplay by one tick. Returns whether the offset moved.
    pub fn autoplay_tick(&mut self) -> bool {
        if !self.autoplay.enabled || self.max_offset() == 0 {
            return false;
        }
        if self.pointer_inside || self.preview.is_some() || self.dwell.is_some() {
            self.autoplay.idle_ticks = 0;
            return false;
        }
        self.autoplay.idle_ticks = self.autoplay.idle_ticks.saturating_add(1);
        if self.autoplay.idle_ticks < self.config.autoplay_idle_ticks {
            return false;
        }
        if !self.can_step(self.autoplay.direction) {
            self.autoplay.direction = self.autoplay.direction.reversed();
        }
        self.move_by_one(self.autoplay.direction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state(len: usize) -> CarouselState {
        CarouselState::new(len, CarouselConfig::default())
    }

    fn wheel_x(delta_x: f64, timestamp: f64) -> WheelInput {
        WheelInput {
            delta_x,
            timestamp,
            ..Default::default()
        }
    }

    fn assert_in_range(s: &CarouselState) {
        assert!(s.offset() <= s.len().saturating_sub(s.items_visible()));
    }

    #[test]
    fn test_breakpoints() {
        let config = CarouselConfig::default();
        assert_eq!(config.items_for_width(320.0), 1);
        assert_eq!(config.items_for_width(639.9), 1);
        assert_eq!(config.items_for_width(640.0), 2);
        assert_eq!(config.items_for_width(1023.0), 2);
        assert_eq!(config.items_for_width(1024.0), 3);
        assert_eq!(config.items_for_width(f64::INFINITY), 3);
        assert_eq!(config.items_for_width(f64::NAN), 1);
        assert_eq!(config.items_for_width(0.0), 1);
    }

    #[test]
    fn test_resize_reclamps_offset() {
        let mut s = state(5);
        s.resize(400.0);
        assert_eq!(s.items_visible(), 1);
        for _ in 0..10 {
            s.step(Direction::Forward);
        }
        assert_eq!(s.offset(), 4);

        s.resize(800.0);
        assert_eq!(s.offset(), 3);
        assert_eq!(s.visible_range(), 3..5);

        s.resize(1600.0);
        assert_eq!(s.offset(), 2);
        assert_in_range(&s);
    }

    #[test]
    fn test_resize_sequence_stays_in_range() {
        let mut s = state(7);
        let widths = [300.0, 2000.0, 700.0, 500.0, 1100.0, 650.0, 320.0];
        for (i, w) in widths.iter().enumerate() {
            s.resize(*w);
            for _ in 0..i {
                s.step(Direction::Forward);
            }
            assert_in_range(&s);
        }
    }

    #[test]
    fn test_fewer_items_than_visible() {
        let mut s = state(2);
        assert_eq!(s.max_offset(), 0);
        assert!(!s.step(Direction::Forward));
        assert!(!s.step(Direction::Backward));
        assert_eq!(s.offset(), 0);
        assert_eq!(s.visible_range(), 0..2);

        let mut empty = state(0);
        empty.resize(300.0);
        assert!(empty.is_empty());
        assert_eq!(empty.offset(), 0);
        assert_eq!(empty.pointer_enter_slide(0), None);
    }

    #[test]
    fn test_translate_percent() {
        let mut s = state(6);
        s.resize(800.0);
        s.step(Direction::Forward);
        assert_eq!(s.translate_percent(), 50.0);
    }

    #[test]
    fn test_wheel_below_threshold_does_not_move() {
        let mut s = state(6);
        s.resize(400.0);
        assert_eq!(s.wheel(wheel_x(4.0, 0.0)), WheelOutcome::Held);
        assert_eq!(s.wheel(wheel_x(-9.9, 1000.0)), WheelOutcome::Held);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_wheel_large_delta_moves_one_step() {
        let mut s = state(6);
        s.resize(400.0);
        assert_eq!(
            s.wheel(wheel_x(5000.0, 0.0)),
            WheelOutcome::Moved(Direction::Forward)
        );
        assert_eq!(s.offset(), 1);
        assert_eq!(
            s.wheel(wheel_x(-5000.0, 1000.0)),
            WheelOutcome::Moved(Direction::Backward)
        );
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_wheel_cooldown() {
        let mut s = state(6);
        s.resize(400.0);
        assert!(matches!(s.wheel(wheel_x(40.0, 100.0)), WheelOutcome::Moved(_)));
        assert_eq!(s.wheel(wheel_x(40.0, 200.0)), WheelOutcome::Held);
        assert_eq!(s.offset(), 1);
        assert!(matches!(s.wheel(wheel_x(40.0, 450.0)), WheelOutcome::Moved(_)));
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn test_wheel_vertical_and_shift() {
        let mut s = state(6);
        s.resize(400.0);
        let vertical = WheelInput {
            delta_y: 120.0,
            ..Default::default()
        };
        assert_eq!(s.wheel(vertical), WheelOutcome::Ignored);
        assert!(!s.wheel(vertical).is_consumed());

        let shifted = WheelInput {
            delta_y: 120.0,
            shift: true,
            ..Default::default()
        };
        assert_eq!(s.wheel(shifted), WheelOutcome::Moved(Direction::Forward));
    }

    #[test]
    fn test_wheel_line_mode_is_scaled() {
        let mut s = state(6);
        s.resize(400.0);
        let lines = WheelInput {
            delta_x: 1.0,
            mode: DeltaMode::from(1),
            ..Default::default()
        };
        assert_eq!(s.wheel(lines), WheelOutcome::Moved(Direction::Forward));
    }

    #[test]
    fn test_wheel_page_mode_is_scaled() {
        let mut s = state(6);
        s.resize(400.0);
        let page = WheelInput {
            delta_x: 0.02,
            mode: DeltaMode::from(2),
            ..Default::default()
        };
        assert_eq!(page.mode, DeltaMode::Page);
        assert_eq!(s.wheel(page), WheelOutcome::Moved(Direction::Forward));
    }

    #[test]
    fn test_wheel_non_finite_delta_is_ignored() {
        let mut s = state(6);
        s.resize(400.0);
        s.step(Direction::Forward);
        let nan = WheelInput {
            delta_y: f64::NAN,
            shift: true,
            ..Default::default()
        };
        assert_eq!(s.wheel(nan), WheelOutcome::Ignored);
        let inf = WheelInput {
            delta_x: f64::INFINITY,
            ..Default::default()
        };
        assert_eq!(s.wheel(inf), WheelOutcome::Ignored);
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn test_wheel_timestamp_going_backwards() {
        let mut s = state(6);
        s.resize(400.0);
        assert!(matches!(s.wheel(wheel_x(40.0, 1000.0)), WheelOutcome::Moved(_)));
        // an earlier timestamp is not inside the cooldown window
        assert!(matches!(s.wheel(wheel_x(40.0, 500.0)), WheelOutcome::Moved(_)));
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn test_wheel_at_boundary_is_held() {
        let mut s = state(3);
        assert_eq!(s.wheel(wheel_x(-50.0, 0.0)), WheelOutcome::Held);
        assert_eq!(s.wheel(wheel_x(50.0, 1000.0)), WheelOutcome::Held);
        assert_eq!(s.offset(), 0);
    }

    #[test]
    fn test_short_dwell_never_opens() {
        let mut s = state(4);
        let timer = s.pointer_enter_slide(1).expect("dwell timer");
        assert_eq!(timer.kind, TimerKind::Dwell);
        assert_eq!(timer.delay, Duration::from_millis(1500));
        assert_eq!(s.dwelling(), Some(1));

        s.pointer_leave_slide(1);
        assert_eq!(s.dwelling(), None);
        assert!(!s.timer_elapsed(TimerKind::Dwell, timer.token));
        assert_eq!(s.preview(), None);
    }

    #[test]
    fn test_dwell_opens_preview() {
        let mut s = state(4);
        let timer = s.pointer_enter_slide(2).unwrap();
        assert!(s.timer_elapsed(timer.kind, timer.token));
        assert_eq!(s.preview(), Some(2));
        assert_eq!(s.dwelling(), None);
    }

    #[test]
    fn test_reenter_uses_fresh_token() {
        let mut s = state(4);
        let first = s.pointer_enter_slide(0).unwrap();
        s.pointer_leave_slide(0);
        let second = s.pointer_enter_slide(0).unwrap();
        assert_ne!(first.token, second.token);
        assert!(!s.timer_elapsed(TimerKind::Dwell, first.token));
        assert_eq!(s.preview(), None);
        assert!(s.timer_elapsed(TimerKind::Dwell, second.token));
        assert_eq!(s.preview(), Some(0));
    }

    #[test]
    fn test_grace_closes_after_leaving_slide_and_modal() {
        let mut s = state(4);
        let dwell = s.pointer_enter_slide(1).unwrap();
        s.timer_elapsed(dwell.kind, dwell.token);

        let grace = s.pointer_leave_slide(1).expect("grace timer");
        assert_eq!(grace.kind, TimerKind::Grace);
        assert!(s.timer_elapsed(grace.kind, grace.token));
        assert_eq!(s.preview(), None);
    }

    #[test]
    fn test_moving_into_modal_keeps_preview() {
        let mut s = state(4);
        let dwell = s.pointer_enter_slide(1).unwrap();
        s.timer_elapsed(dwell.kind, dwell.token);

        let grace = s.pointer_leave_slide(1).unwrap();
        s.pointer_enter_modal();
        assert!(!s.timer_elapsed(grace.kind, grace.token));
        assert_eq!(s.preview(), Some(1));

        let grace = s.pointer_leave_modal().unwrap();
        assert!(s.timer_elapsed(grace.kind, grace.token));
        assert_eq!(s.preview(), None);
    }

    #[test]
    fn test_brief_exit_does_not_flicker() {
        let mut s = state(4);
        let dwell = s.pointer_enter_slide(3).unwrap();
        s.timer_elapsed(dwell.kind, dwell.token);

        let grace = s.pointer_leave_slide(3).unwrap();
        assert_eq!(s.pointer_enter_slide(3), None);
        assert!(!s.timer_elapsed(grace.kind, grace.token));
        assert_eq!(s.preview(), Some(3));
    }

    #[test]
    fn test_only_one_preview_at_a_time() {
        let mut s = state(4);
        let first = s.pointer_enter_slide(0).unwrap();
        s.timer_elapsed(first.kind, first.token);
        s.pointer_leave_slide(0);

        let second = s.pointer_enter_slide(1).unwrap();
        assert_eq!(s.preview(), Some(0));
        assert!(s.timer_elapsed(second.kind, second.token));
        assert_eq!(s.preview(), Some(1));
    }

    #[test]
    fn test_escape_and_outside_click_close() {
        let mut s = state(4);
        let dwell = s.pointer_enter_slide(0).unwrap();
        s.timer_elapsed(dwell.kind, dwell.token);
        assert!(s.escape());
        assert_eq!(s.preview(), None);
        assert!(!s.escape());

        let dwell = s.pointer_enter_slide(2).unwrap();
        s.timer_elapsed(dwell.kind, dwell.token);
        s.pointer_enter_modal();
        assert!(s.click_outside());
        assert_eq!(s.preview(), None);
        assert!(!s.click_outside());
    }

    #[test]
    fn test_close_forgets_pending_dwell() {
        let mut s = state(4);
        let dwell = s.pointer_enter_slide(1).unwrap();
        s.close_preview();
        assert!(!s.timer_elapsed(dwell.kind, dwell.token));
        assert_eq!(s.preview(), None);
    }

    #[test]
    fn test_autoplay_waits_for_idle_window() {
        let mut s = state(4);
        s.resize(400.0);
        assert!(!s.autoplay_tick());
        s.set_autoplay(true);
        assert!(!s.autoplay_tick());
        assert!(s.autoplay_tick());
        assert_eq!(s.offset(), 1);
    }

    #[test]
    fn test_autoplay_reverses_at_boundaries() {
        let mut s = state(3);
        s.resize(400.0);
        s.set_autoplay(true);
        let mut offsets = Vec::new();
        for _ in 0..7 {
            if s.autoplay_tick() {
                offsets.push(s.offset());
            }
        }
        assert_eq!(offsets, vec![1, 2, 1, 0, 1, 2]);
    }

    #[test]
    fn test_autoplay_pauses_on_interaction() {
        let mut s = state(5);
        s.resize(400.0);
        s.set_autoplay(true);
        s.autoplay_tick();
        s.step(Direction::Forward);
        assert!(!s.autoplay_tick());
        assert_eq!(s.offset(), 1);

        s.pointer_enter_carousel();
        for _ in 0..5 {
            assert!(!s.autoplay_tick());
        }
        s.pointer_leave_carousel();
        assert!(!s.autoplay_tick());
        assert!(s.autoplay_tick());
        assert_eq!(s.offset(), 2);
    }

    #[test]
    fn test_autoplay_idle_when_everything_fits() {
        let mut s = state(3);
        s.set_autoplay(true);
        for _ in 0..5 {
            assert!(!s.autoplay_tick());
        }
        assert_eq!(s.offset(), 0);
    }
}
