//! Pure Yew view components for the trip dashboard.
//!
//! Everything here renders from props only; the live values come from the
//! hooks in `hooks.rs` and the tables from the embedded content store.

use crate::utils::{
    accent_class, condition_glyph, countdown_units, format_temp_range, format_yardage,
    stagger_style,
};
use innisbrook_dashboard::content::{Course, Dinner, MapLocation, TripInfo, TripStat, WeatherDay};
use innisbrook_dashboard::{Countdown, CountdownStyle};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct HeaderProps {
    pub trip: &'static TripInfo,
}

#[function_component(DashboardHeader)]
pub fn dashboard_header(props: &HeaderProps) -> Html {
    let trip = props.trip;
    html! {
        <header class="dashboard-header reveal" style={stagger_style(0)}>
            <div>
                <h1 class="title">
                    { &trip.title }{ " " }
                    <span class="accent-copper">{ &trip.highlight }</span>
                </h1>
                <p class="subtitle">{ &trip.subtitle }</p>
            </div>
            <div class="status-badge hover-lift">
                <span class="status-dot pulse"></span>
                <p class="status-text">{ &trip.status }</p>
            </div>
        </header>
    }
}

/// Countdown hero. Shows an arrival banner once the target has passed and an
/// error line when no valid target is configured.
#[derive(Properties, PartialEq)]
pub struct CountdownHeroProps {
    pub countdown: Option<Countdown>,
    pub style: CountdownStyle,
    #[prop_or_default]
    pub error: Option<AttrValue>,
}

#[function_component(CountdownHero)]
pub fn countdown_hero(props: &CountdownHeroProps) -> Html {
    let body = match (props.countdown, &props.error) {
        (Some(Countdown::Arrived), _) => html! {
            <div class="arrived-banner">{ "Tee time. Hit 'em straight." }</div>
        },
        (Some(countdown), _) => {
            let units = countdown_units(&countdown.remaining(), props.style);
            html! {
                <div class="countdown-grid">
                    { units.into_iter().map(|(label, value)| html! {
                        <div key={label} class="countdown-unit">
                            <div class="countdown-value">{ value }</div>
                            <div class="countdown-label">{ label }</div>
                        </div>
                    }).collect::<Html>() }
                </div>
            }
        }
        (None, Some(err)) => html! {
            <div class="current-error">{ err.to_string() }</div>
        },
        (None, None) => html! {},
    };

    html! {
        <section class="countdown-hero reveal hover-glow" style={stagger_style(1)}>
            { body }
            <div class="hero-trophy" aria-hidden="true">{ "🏆" }</div>
        </section>
    }
}

/// The round list. The row matching `featured` is highlighted.
pub fn render_gauntlet(courses: &[Course], featured: Option<usize>) -> Html {
    html! {
        <div class="card gauntlet">
            <h2 class="card-title">{ "📍 THE GAUNTLET" }</h2>
            <div class="round-list">
                { courses.iter().enumerate().map(|(idx, course)| {
                    let active = featured == Some(idx);
                    html! {
                        <div key={course.name.clone()}
                            class={classes!("round-row", "hover-slide", active.then_some("active"))}>
                            <div>
                                <p class="round-course">{ &course.name }</p>
                                <p class="round-time">{ &course.tee_time }</p>
                            </div>
                            <div class={classes!("round-tag", accent_class(course.accent))}>
                                { &course.tag }
                            </div>
                        </div>
                    }
                }).collect::<Html>() }
            </div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FeaturedCourseProps {
    pub course: &'static Course,
    pub index: usize,
    pub total: usize,
}

/// Intel card for the course currently selected by the rotation.
#[function_component(FeaturedCourseCard)]
pub fn featured_course_card(props: &FeaturedCourseProps) -> Html {
    let course = props.course;
    html! {
        // Keyed on the course so the fade-in replays on every rotation.
        <div key={course.name.clone()} class="card intel fade-in">
            <h2 class="card-title intel-title">{ format!("ⓘ {} Intel", course.name) }</h2>
            <p class="intel-headline">{ format!("\"{}\"", course.headline) }</p>
            <div class="intel-ratings">
                <span>{ format!("Par {}", course.par) }</span>
                <span>{ format!("{:.1} / {}", course.rating, course.slope) }</span>
                <span>{ format_yardage(course.yardage) }</span>
            </div>
            <ul class="intel-trivia">
                { course.trivia.iter().map(|fact| html! { <li>{ fact }</li> }).collect::<Html>() }
            </ul>
            <div class="rotation-pips">
                { (0..props.total).map(|i| html! {
                    <span class={classes!("pip", (i == props.index).then_some("current"))}></span>
                }).collect::<Html>() }
            </div>
        </div>
    }
}

pub fn render_weather(days: &[WeatherDay]) -> Html {
    if days.is_empty() {
        return html! {};
    }

    html! {
        <div class="card weather">
            <h2 class="card-title">{ "Forecast" }</h2>
            <div class="weather-strip">
                { days.iter().enumerate().map(|(idx, day)| html! {
                    <div key={day.date.clone()} class="weather-day reveal" style={stagger_style(idx)}>
                        <p class="weather-date">{ &day.date }</p>
                        <p class="weather-glyph">{ condition_glyph(&day.condition) }</p>
                        <p class="weather-temps">{ format_temp_range(day.high_f, day.low_f) }</p>
                        <p class="weather-condition">{ &day.condition }</p>
                        <p class="weather-meta">{ format!("{} • {}% rain", day.wind, day.precip_pct) }</p>
                    </div>
                }).collect::<Html>() }
            </div>
        </div>
    }
}

pub fn render_dinners(dinners: &[Dinner]) -> Html {
    if dinners.is_empty() {
        return html! {};
    }

    html! {
        <div class="card dinners">
            <h2 class="card-title">{ "Dinner Reservations" }</h2>
            { dinners.iter().map(|dinner| html! {
                <div key={dinner.night.clone()} class="dinner-row">
                    <div>
                        <p class="dinner-venue">{ &dinner.venue }</p>
                        <p class="dinner-note">{ &dinner.note }</p>
                    </div>
                    <p class="dinner-when">{ format!("{} • {}", dinner.night, dinner.time) }</p>
                </div>
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TripStatsProps {
    pub stats: &'static [TripStat],
}

#[function_component(TripStats)]
pub fn trip_stats(props: &TripStatsProps) -> Html {
    html! {
        <div class="stats-row">
            { props.stats.iter().enumerate().map(|(idx, stat)| html! {
                <div key={stat.label.clone()} class="stat reveal hover-lift" style={stagger_style(idx)}>
                    <div class="stat-value">{ &stat.value }</div>
                    <div class="stat-label">{ &stat.label }</div>
                </div>
            }).collect::<Html>() }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct MapLinkProps {
    pub location: &'static MapLocation,
}

#[function_component(MapLinkCard)]
pub fn map_link_card(props: &MapLinkProps) -> Html {
    let location = props.location;
    html! {
        <a class="card map-link hover-lift" href={location.url.clone()} target="_blank" rel="noopener noreferrer">
            <p class="map-label">{ format!("📍 {}", location.label) }</p>
            <p class="map-address">{ &location.address }</p>
        </a>
    }
}
