//! Stat Card Component
//!
//! Dashboard stat tiles and the animated counter that fills them.

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use leptos::*;

/// Milliseconds between counter frames.
const TICK_MS: u32 = 16;

/// Counter value after `step` of `total_steps` ticks: linear interpolation
/// from 0 to `target`, clamped so the final step lands exactly on target.
fn counter_value(target: i64, step: u32, total_steps: u32) -> i64 {
    if step >= total_steps {
        return target;
    }
    let progress = f64::from(step) / f64::from(total_steps);
    (target as f64 * progress).round() as i64
}

/// Group digits in threes, `toLocaleString`-style.
fn format_thousands(value: i64) -> String {
    let digits = value.abs().to_string();
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    if value < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

/// Integer counter that ramps from 0 to `target` over `duration_ms`.
#[component]
pub fn AnimatedCounter(
    target: i64,
    #[prop(default = 1200)] duration_ms: u32,
) -> impl IntoView {
    let (current, set_current) = create_signal(0i64);

    let total_steps = (duration_ms / TICK_MS).max(1);
    let step = Rc::new(Cell::new(0u32));

    let interval = {
        let step = Rc::clone(&step);
        Interval::new(TICK_MS, move || {
            let s = step.get();
            if s >= total_steps {
                return;
            }
            let s = s + 1;
            step.set(s);
            // the view can be gone before the ramp finishes
            set_current.try_set(counter_value(target, s, total_steps));
        })
    };
    // dropping the interval cancels it
    on_cleanup(move || drop(interval));

    view! {
        <span>{move || format_thousands(current.get())}</span>
    }
}

/// Dashboard stat tile with an icon, a trend badge and a value rendered by
/// the caller (usually an [`AnimatedCounter`]).
#[component]
pub fn StatCard(
    title: &'static str,
    icon: &'static str,
    trend: f64,
    children: Children,
) -> impl IntoView {
    let (arrow, trend_color) = if trend > 0.0 {
        ("↑", "text-green-400")
    } else {
        ("↓", "text-red-400")
    };

    view! {
        <div class="bg-white/10 backdrop-blur-lg rounded-xl p-6 flex items-center justify-between
                    transition duration-200 hover:scale-105">
            <div>
                <p class="text-gray-400 text-sm">{title}</p>
                <p class="text-2xl font-bold mt-1">{children()}</p>
                <p class=format!("text-sm mt-2 {}", trend_color)>
                    {arrow}
                    " "
                    {format!("{:.1}%", trend.abs())}
                </p>
            </div>
            <span class="text-4xl text-blue-400">{icon}</span>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counter_starts_at_zero_and_ends_on_target() {
        assert_eq!(counter_value(15234, 0, 75), 0);
        assert_eq!(counter_value(15234, 75, 75), 15234);
        // past the end stays pinned
        assert_eq!(counter_value(15234, 80, 75), 15234);
    }

    #[test]
    fn test_counter_is_monotone() {
        let total = 75;
        let mut last = 0;
        for step in 0..=total {
            let v = counter_value(684_250, step, total);
            assert!(v >= last, "step {} regressed: {} < {}", step, v, last);
            last = v;
        }
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(384), "384");
        assert_eq!(format_thousands(15_234), "15,234");
        assert_eq!(format_thousands(684_250), "684,250");
        assert_eq!(format_thousands(1_000_000), "1,000,000");
        assert_eq!(format_thousands(-5_000), "-5,000");
    }
}
