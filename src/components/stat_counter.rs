use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use yew::prelude::*;

const TICK_MS: u32 = 25;

/// One-shot trigger for the scroll-started animation: transitions
/// `Pending -> Fired` exactly once and ignores every later intersection
/// event, so the counters never restart on subsequent scrolls.
pub enum CounterTrigger {
    Pending,
    Fired,
}

impl CounterTrigger {
    pub fn new() -> Self {
        CounterTrigger::Pending
    }

    /// Returns true only on the call that performs the transition.
    pub fn fire(&mut self) -> bool {
        match self {
            CounterTrigger::Pending => {
                *self = CounterTrigger::Fired;
                true
            }
            CounterTrigger::Fired => false,
        }
    }
}

/// Exponential ease-out, normalized so the animation lands exactly on the
/// target at the end of the duration.
pub fn ease_out_expo(t: f64) -> f64 {
    if t <= 0.0 {
        0.0
    } else if t >= 1.0 {
        1.0
    } else {
        (1.0 - 2.0_f64.powf(-10.0 * t)) * 1024.0 / 1023.0
    }
}

pub fn counter_value(target: u32, progress: f64) -> u32 {
    (target as f64 * ease_out_expo(progress)).round() as u32
}

/// Thousands grouping, e.g. 9870 -> "9,870".
pub fn format_grouped(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

#[derive(Properties, PartialEq)]
pub struct StatCounterProps {
    pub target: u32,
    pub start: bool,
    #[prop_or(2500)]
    pub duration_ms: u32,
}

/// Eased count-up from 0 to `target` over `duration_ms`, driven by a timer
/// tick. Animation begins when `start` flips to true.
#[function_component(StatCounter)]
pub fn stat_counter(props: &StatCounterProps) -> Html {
    let display = use_state(|| format_grouped(0));

    {
        let display = display.clone();
        let target = props.target;
        let duration_ms = props.duration_ms;
        use_effect_with_deps(
            move |&start: &bool| {
                let interval: Rc<RefCell<Option<Interval>>> = Rc::new(RefCell::new(None));
                if start {
                    let total_ticks = (duration_ms / TICK_MS).max(1);
                    let tick = Rc::new(RefCell::new(0u32));
                    let handle = {
                        let interval = interval.clone();
                        Interval::new(TICK_MS, move || {
                            let mut t = tick.borrow_mut();
                            *t += 1;
                            let progress = *t as f64 / total_ticks as f64;
                            display.set(format_grouped(counter_value(target, progress)));
                            if *t >= total_ticks {
                                // Dropping the handle cancels the timer.
                                interval.borrow_mut().take();
                            }
                        })
                    };
                    *interval.borrow_mut() = Some(handle);
                }
                move || {
                    interval.borrow_mut().take();
                }
            },
            props.start,
        );
    }

    html! {
        <span class="stat-counter">{ (*display).clone() }</span>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_fires_exactly_once() {
        let mut trigger = CounterTrigger::new();
        assert!(trigger.fire());
        assert!(!trigger.fire());
        assert!(!trigger.fire());
    }

    #[test]
    fn easing_hits_both_endpoints() {
        assert_eq!(ease_out_expo(0.0), 0.0);
        assert_eq!(ease_out_expo(1.0), 1.0);
        assert_eq!(ease_out_expo(-0.5), 0.0);
        assert_eq!(ease_out_expo(2.0), 1.0);
    }

    #[test]
    fn easing_is_monotone() {
        let mut prev = 0.0;
        for i in 0..=100 {
            let v = ease_out_expo(i as f64 / 100.0);
            assert!(v >= prev);
            prev = v;
        }
    }

    #[test]
    fn counter_lands_on_target() {
        assert_eq!(counter_value(342, 1.0), 342);
        assert_eq!(counter_value(1234, 1.0), 1234);
        assert_eq!(counter_value(9870, 0.0), 0);
    }

    #[test]
    fn grouping_matches_display_format() {
        assert_eq!(format_grouped(0), "0");
        assert_eq!(format_grouped(342), "342");
        assert_eq!(format_grouped(1234), "1,234");
        assert_eq!(format_grouped(9870), "9,870");
        assert_eq!(format_grouped(1_234_567), "1,234,567");
    }
}
