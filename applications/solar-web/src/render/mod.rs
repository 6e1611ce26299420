//! Writing a snapshot into the page
//!
//! The refresh logic only talks to the [`Renderer`] trait; [`dom::DomRenderer`] is the
//! browser implementation.

#[cfg(target_arch = "wasm32")]
pub mod dom;

use chrono::{DateTime, TimeZone};

use crate::config::ElementIds;
use crate::models::StatusSnapshot;

/// The page operations a render pass needs
pub trait Renderer {
    fn set_text(&mut self, element_id: &str, text: &str);

    fn set_title(&mut self, title: &str);

    /// Deferred sources (`data-src`) of the page's images, in document order
    fn deferred_image_sources(&self) -> Vec<String>;

    /// Set the active source of the image at `index` in [`Renderer::deferred_image_sources`]
    fn set_image_source(&mut self, index: usize, src: &str);
}

/// Negative zero displays as "-0"; the page never showed a sign for zero
fn display_value(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

pub fn format_power(watts: f64) -> String {
    format!("{}W", display_value(watts))
}

pub fn format_energy(kwh: f64) -> String {
    format!("{}kWh", display_value(kwh))
}

pub fn format_title(watts: f64) -> String {
    format!("Solar: {}", format_power(watts))
}

/// Append the timestamp as a query string so the browser fetches the image again
pub fn cache_busted_source(deferred_src: &str, last_refresh: i64) -> String {
    format!("{}?{}", deferred_src, last_refresh)
}

/// Format a timestamp as a local date and time string
#[cfg(target_arch = "wasm32")]
pub fn format_refresh_time(epoch_secs: i64) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_f64(epoch_secs as f64 * 1000.0));
    date.to_locale_string("default", &wasm_bindgen::JsValue::UNDEFINED)
        .into()
}

/// Format a timestamp as a local date and time string
#[cfg(not(target_arch = "wasm32"))]
pub fn format_refresh_time(epoch_secs: i64) -> String {
    format_refresh_time_in(epoch_secs, &chrono::Local)
}

pub fn format_refresh_time_in<Tz>(epoch_secs: i64, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    match DateTime::from_timestamp(epoch_secs, 0) {
        Some(utc) => utc
            .with_timezone(tz)
            .format("%Y-%m-%d %H:%M:%S")
            .to_string(),
        None => epoch_secs.to_string(),
    }
}

/// Write every reading of the snapshot into the page
pub fn render<R: Renderer>(snapshot: &StatusSnapshot, elements: &ElementIds, renderer: &mut R) {
    renderer.set_text(
        &elements.last_refresh,
        &format_refresh_time(snapshot.last_refresh),
    );
    renderer.set_text(&elements.now_power, &format_power(snapshot.webdata_now_p));
    renderer.set_text(
        &elements.today_energy,
        &format_energy(snapshot.webdata_today_e),
    );
    renderer.set_text(
        &elements.total_energy,
        &format_energy(snapshot.webdata_total_e),
    );
    renderer.set_title(&format_title(snapshot.webdata_now_p));

    for (index, src) in renderer.deferred_image_sources().into_iter().enumerate() {
        renderer.set_image_source(index, &cache_busted_source(&src, snapshot.last_refresh));
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::HashMap;

    use super::Renderer;

    /// Renderer that records every write
    #[derive(Debug, Default)]
    pub struct RecordingRenderer {
        pub texts: HashMap<String, String>,
        pub title: Option<String>,
        pub deferred: Vec<String>,
        pub image_sources: HashMap<usize, String>,
        pub writes: usize,
    }

    impl RecordingRenderer {
        pub fn with_images(deferred: &[&str]) -> Self {
            Self {
                deferred: deferred.iter().map(|s| s.to_string()).collect(),
                ..Self::default()
            }
        }

        pub fn text(&self, id: &str) -> Option<&str> {
            self.texts.get(id).map(String::as_str)
        }
    }

    impl Renderer for RecordingRenderer {
        fn set_text(&mut self, element_id: &str, text: &str) {
            self.writes += 1;
            self.texts.insert(element_id.to_string(), text.to_string());
        }

        fn set_title(&mut self, title: &str) {
            self.writes += 1;
            self.title = Some(title.to_string());
        }

        fn deferred_image_sources(&self) -> Vec<String> {
            self.deferred.clone()
        }

        fn set_image_source(&mut self, index: usize, src: &str) {
            self.writes += 1;
            self.image_sources.insert(index, src.to_string());
        }
    }
}
