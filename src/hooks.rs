use gloo_timers::callback::Interval;
use innisbrook_dashboard::{now_ms, Countdown, CountdownStyle, Rotation, RotationTick, TargetInstant};
use log::{debug, info};
use std::num::NonZeroUsize;
use yew::prelude::*;

use crate::config::COUNTDOWN_TICK_MS;

/// Live countdown towards `target`, recomputed from the wall clock every tick.
///
/// The interval lives inside the effect and is dropped (cleared) by the effect
/// destructor, either on unmount or once the countdown reaches
/// [`Countdown::Arrived`]. Returns `None` when there is no target.
#[hook]
pub fn use_countdown(target: Option<TargetInstant>, style: CountdownStyle) -> Option<Countdown> {
    let countdown = use_state(|| target.map(|target| Countdown::at(target, now_ms(), style)));
    let arrived = matches!(*countdown, Some(Countdown::Arrived));

    {
        let countdown = countdown.clone();
        use_effect_with((target, style, arrived), move |&(target, style, arrived)| {
            let ticker = match target {
                Some(target) if !arrived => {
                    debug!("Countdown towards {} started", target);
                    Some(Interval::new(COUNTDOWN_TICK_MS, move || {
                        countdown.set(Some(Countdown::at(target, now_ms(), style)));
                    }))
                }
                Some(target) => {
                    info!("Reached {}, countdown halted", target);
                    None
                }
                None => None,
            };
            move || drop(ticker)
        });
    }

    *countdown
}

/// Index of the currently featured record, advancing every `period_ms`.
///
/// Returns `None` (and runs no timer) when the sequence is empty.
#[hook]
pub fn use_rotation(len: Option<NonZeroUsize>, period_ms: u32) -> Option<usize> {
    let rotation = use_reducer(|| Rotation::new(len.unwrap_or(NonZeroUsize::MIN)));

    {
        let dispatcher = rotation.dispatcher();
        use_effect_with((len, period_ms), move |&(len, period_ms)| {
            let ticker = len.map(|len| {
                debug!("Rotating {} featured records every {}ms", len, period_ms);
                Interval::new(period_ms, move || dispatcher.dispatch(RotationTick))
            });
            move || drop(ticker)
        });
    }

    len.map(|_| rotation.index())
}
