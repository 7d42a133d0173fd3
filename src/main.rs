//! Innisbrook trip dashboard using Yew.
//! Wires the countdown and rotation hooks to the view components.

use innisbrook_dashboard::{content, logging, TargetInstant};
use log::{error, info};
use yew::prelude::*;

mod components;
mod config;
mod hooks;
mod utils;

use components::{
    render_dinners, render_gauntlet, render_weather, CountdownHero, DashboardHeader,
    FeaturedCourseCard, MapLinkCard, TripStats,
};
use config::*;
use hooks::{use_countdown, use_rotation};
use utils::stagger_style;

/// Primary dashboard component. Owns the two live values; everything else is
/// read straight from the embedded content store.
#[function_component(Dashboard)]
fn dashboard() -> Html {
    let store = content::store();
    let target = use_memo((), |_| TargetInstant::parse(TARGET_INSTANT));

    // Report a bad target once on mount rather than on every render.
    {
        let target = target.clone();
        use_effect_with((), move |_| {
            match &*target {
                Ok(target) => info!("Counting down to {}", target),
                Err(err) => error!("{}", err),
            }
            || ()
        });
    }

    let target_error = (*target)
        .as_ref()
        .err()
        .map(|err| AttrValue::from(err.to_string()));
    let countdown = use_countdown((*target).as_ref().ok().copied(), COUNTDOWN_STYLE);
    let featured = use_rotation(store.featured_len(), ROTATION_PERIOD_MS);
    let featured_course = featured.and_then(|idx| store.featured(idx).map(|course| (idx, course)));
    let total = store.courses().len();

    html! {
        <div class="container">
            <DashboardHeader trip={store.trip()} />

            <CountdownHero countdown={countdown} style={COUNTDOWN_STYLE} error={target_error} />

            <TripStats stats={store.stats()} />

            // Main grid: round list beside the rotating course intel
            <div class="main-grid">
                <div class="span-2 reveal" style={stagger_style(2)}>
                    { render_gauntlet(store.courses(), featured) }
                </div>
                <div class="reveal" style={stagger_style(3)}>
                    if let Some((index, course)) = featured_course {
                        <FeaturedCourseCard course={course} index={index} total={total} />
                    }
                </div>
            </div>

            <div class="reveal" style={stagger_style(4)}>
                { render_weather(store.weather()) }
            </div>

            <div class="secondary-grid reveal" style={stagger_style(5)}>
                { render_dinners(store.dinners()) }
                <MapLinkCard location={store.map()} />
            </div>
        </div>
    }
}

#[function_component]
pub fn App() -> Html {
    html! { <Dashboard /> }
}

/// Entry point: installs the panic hook and logger, then renders the App.
fn main() {
    console_error_panic_hook::set_once();
    logging::init(LOG_LEVEL);
    yew::Renderer::<App>::new().render();
}
