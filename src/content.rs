//! Read-only trip content embedded at compile time.
//!
//! Everything shown on the dashboard besides the two live values comes from
//! here: the trip header, the course line-up (the featured records the
//! rotation cycles through), the weather outlook, dinners, trip stats and the
//! map location.
//!
//! # Sources
//! - `data/trip.json`: header, courses, dinners, stats and map location
//! - `data/weather.csv`: one row per forecast day

use log::{debug, error};
use once_cell::sync::Lazy;
use serde::Deserialize;
use std::fmt;
use std::num::NonZeroUsize;

const TRIP_JSON: &str = include_str!("data/trip.json");
const WEATHER_CSV: &str = include_str!("data/weather.csv");

static STORE: Lazy<ContentStore> = Lazy::new(|| {
    ContentStore::embedded().unwrap_or_else(|err| {
        error!("Failed to load embedded trip content: {}", err);
        ContentStore::default()
    })
});

/// The embedded store, parsed on first access.
pub fn store() -> &'static ContentStore {
    &STORE
}

#[derive(Debug)]
pub enum ContentError {
    Json(serde_json::Error),
    Csv(csv::Error),
}

impl fmt::Display for ContentError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ContentError::Json(err) => write!(f, "Invalid trip data: {}", err),
            ContentError::Csv(err) => write!(f, "Invalid weather data: {}", err),
        }
    }
}

impl std::error::Error for ContentError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ContentError::Json(err) => Some(err),
            ContentError::Csv(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Json(err)
    }
}

impl From<csv::Error> for ContentError {
    fn from(err: csv::Error) -> Self {
        ContentError::Csv(err)
    }
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TripInfo {
    pub title: String,
    /// Resort name rendered in the accent colour after the title.
    pub highlight: String,
    pub subtitle: String,
    pub status: String,
}

/// Colour family used for a course tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    #[default]
    Copper,
    Emerald,
    Blue,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Course {
    pub name: String,
    pub tag: String,
    #[serde(default)]
    pub accent: Accent,
    pub tee_time: String,
    pub par: u8,
    pub rating: f32,
    pub slope: u16,
    pub yardage: u32,
    pub headline: String,
    #[serde(default)]
    pub trivia: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherDay {
    pub date: String,
    pub high_f: i16,
    pub low_f: i16,
    pub condition: String,
    pub wind: String,
    pub precip_pct: u8,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Dinner {
    pub night: String,
    pub venue: String,
    pub time: String,
    #[serde(default)]
    pub note: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TripStat {
    pub label: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct MapLocation {
    pub label: String,
    pub address: String,
    pub url: String,
}

/// Shape of `trip.json`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct TripDocument {
    pub trip: TripInfo,
    pub courses: Vec<Course>,
    #[serde(default)]
    pub dinners: Vec<Dinner>,
    #[serde(default)]
    pub stats: Vec<TripStat>,
    pub map: MapLocation,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ContentStore {
    trip: TripInfo,
    courses: Vec<Course>,
    weather: Vec<WeatherDay>,
    dinners: Vec<Dinner>,
    stats: Vec<TripStat>,
    map: MapLocation,
}

impl ContentStore {
    /// Parse the data files compiled into the binary.
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_sources(TRIP_JSON, WEATHER_CSV)
    }

    pub fn from_sources(trip_json: &str, weather_csv: &str) -> Result<Self, ContentError> {
        let document = read_trip_from_json_str(trip_json)?;
        let weather = read_weather_from_csv_string(weather_csv)?;
        debug!(
            "Loaded {} courses, {} weather days, {} dinners",
            document.courses.len(),
            weather.len(),
            document.dinners.len()
        );

        Ok(ContentStore {
            trip: document.trip,
            courses: document.courses,
            weather,
            dinners: document.dinners,
            stats: document.stats,
            map: document.map,
        })
    }

    pub fn trip(&self) -> &TripInfo {
        &self.trip
    }

    pub fn courses(&self) -> &[Course] {
        &self.courses
    }

    /// Number of featured records, `None` when there is nothing to rotate.
    pub fn featured_len(&self) -> Option<NonZeroUsize> {
        NonZeroUsize::new(self.courses.len())
    }

    pub fn featured(&self, index: usize) -> Option<&Course> {
        self.courses.get(index)
    }

    pub fn weather(&self) -> &[WeatherDay] {
        &self.weather
    }

    pub fn dinners(&self) -> &[Dinner] {
        &self.dinners
    }

    pub fn stats(&self) -> &[TripStat] {
        &self.stats
    }

    pub fn map(&self) -> &MapLocation {
        &self.map
    }
}

pub fn read_trip_from_json_str(json: &str) -> Result<TripDocument, ContentError> {
    Ok(serde_json::from_str(json)?)
}

/// Parse weather rows. The first line is the header; cells are trimmed.
pub fn read_weather_from_csv_string(csv_content: &str) -> Result<Vec<WeatherDay>, ContentError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(csv_content.as_bytes());

    let days = reader
        .deserialize::<WeatherDay>()
        .collect::<Result<Vec<_>, _>>()?;
    Ok(days)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_content_parses() {
        let store = ContentStore::embedded().expect("embedded data is valid");
        assert!(!store.trip().title.is_empty());
        assert_eq!(store.courses().len(), 3);
        assert!(store.featured_len().is_some());
        assert!(!store.weather().is_empty());
        assert!(store.map().url.starts_with("https://"));
    }

    #[test]
    fn courses_keep_file_order() {
        let names: Vec<&str> = store().courses().iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, ["Copperhead", "Island Course", "South Course"]);
        assert_eq!(store().courses()[0].accent, Accent::Copper);
        assert_eq!(store().courses()[1].accent, Accent::Emerald);
    }

    #[test]
    fn featured_is_bounded() {
        let store = store();
        let len = store.featured_len().expect("courses present").get();
        assert!(store.featured(len - 1).is_some());
        assert!(store.featured(len).is_none());
    }

    #[test]
    fn weather_rows_are_trimmed() {
        let csv = "date,high_f,low_f,condition,wind,precip_pct\n\
                   Sat 5/16 , 88, 71 , Sunny , SW 8 mph, 10\n";
        let days = read_weather_from_csv_string(csv).expect("valid csv");
        assert_eq!(
            days,
            vec![WeatherDay {
                date: "Sat 5/16".to_string(),
                high_f: 88,
                low_f: 71,
                condition: "Sunny".to_string(),
                wind: "SW 8 mph".to_string(),
                precip_pct: 10,
            }]
        );
    }

    #[test]
    fn bad_weather_row_is_an_error() {
        let csv = "date,high_f,low_f,condition,wind,precip_pct\nSat,hot,71,Sunny,calm,10\n";
        let err = read_weather_from_csv_string(csv).unwrap_err();
        assert!(matches!(err, ContentError::Csv(_)));
        assert!(err.to_string().starts_with("Invalid weather data"));
    }

    #[test]
    fn bad_trip_json_is_an_error() {
        let err = ContentStore::from_sources("{ \"trip\": ", "date\n").unwrap_err();
        assert!(matches!(err, ContentError::Json(_)));
    }

    #[test]
    fn empty_course_list_has_nothing_to_feature() {
        let json = r#"{
            "trip": { "title": "T", "highlight": "H", "subtitle": "S", "status": "On" },
            "courses": [],
            "map": { "label": "L", "address": "A", "url": "https://example.com" }
        }"#;
        let store = ContentStore::from_sources(json, "date,high_f,low_f,condition,wind,precip_pct\n")
            .expect("minimal document parses");
        assert!(store.featured_len().is_none());
        assert!(store.dinners().is_empty());
        assert!(store.weather().is_empty());
    }
}
