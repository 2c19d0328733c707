//! Current-location lookup and the "search near me" redirect.
//!
//! SYSTEM CONTEXT
//! ==============
//! The venue list endpoint accepts `lat`, `lng` and `radius` query
//! parameters. This module turns a device position into that URL; it does
//! not validate coordinate bounds.
//!
//! A lookup resolves exactly once. [`Completion`] carries the caller's
//! callback into a [`PositionSource`]; if the source drops it without
//! reporting, the callback still fires with [`GeoError::Unavailable`].


#[cfg(feature = "hydrate")]
mod browser;

#[cfg(feature = "hydrate")]
pub use browser::{BrowserGeolocation, BrowserPage, search_near_me};

use futures::channel::oneshot;
use serde::{Deserialize, Serialize};

use crate::error::GeoError;

/// Search radius sent with every "near me" search.
pub const SEARCH_RADIUS: u32 = 50;

/// Alert shown when the position cannot be obtained.
pub const LOCATION_ERROR_MESSAGE: &str = "Unable to get your location. Please enable location services.";

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Venue-list URL centered on `coords`, e.g. `/?lat=1&lng=2&radius=50`.
#[must_use]
pub fn search_url(coords: Coordinates) -> String {
    format!("/?lat={}&lng={}&radius={SEARCH_RADIUS}", coords.lat, coords.lng)
}

type LocationCallback = Box<dyn FnOnce(Result<Coordinates, GeoError>)>;

/// One-shot completion for a location request.
pub struct Completion {
    callback: Option<LocationCallback>,
}

impl Completion {
    pub fn new(callback: impl FnOnce(Result<Coordinates, GeoError>) + 'static) -> Self {
        Self { callback: Some(Box::new(callback)) }
    }

    pub fn resolve(mut self, result: Result<Coordinates, GeoError>) {
        if let Some(callback) = self.callback.take() {
            callback(result);
        }
    }
}

impl Drop for Completion {
    fn drop(&mut self) {
        if let Some(callback) = self.callback.take() {
            log::debug!("location request abandoned without a result");
            callback(Err(GeoError::Unavailable));
        }
    }
}

/// Where positions come from: the browser, or a stub in tests.
pub trait PositionSource {
    /// Start a lookup and eventually resolve `done`.
    fn request_position(&self, done: Completion);
}

/// Request the current position and hand the outcome to `callback`.
///
/// `callback` runs exactly once, with either the coordinates or the error.
pub fn get_current_location<S>(source: &S, callback: impl FnOnce(Result<Coordinates, GeoError>) + 'static)
where
    S: PositionSource + ?Sized,
{
    source.request_position(Completion::new(callback));
}

/// Async form of [`get_current_location`].
///
/// # Errors
///
/// Returns the [`GeoError`] reported by `source`.
pub async fn current_location<S>(source: &S) -> Result<Coordinates, GeoError>
where
    S: PositionSource + ?Sized,
{
    let (tx, rx) = oneshot::channel();
    get_current_location(source, move |result| {
        if tx.send(result).is_err() {
            log::debug!("location result dropped: receiver gone");
        }
    });
    rx.await.unwrap_or(Err(GeoError::Unavailable))
}

/// Page-level side effects of a "near me" search.
pub trait SearchPage {
    fn navigate(&self, url: &str);
    fn alert(&self, message: &str);
}

/// Look up the position, then either navigate to the nearby-venue search or
/// alert the user.
pub async fn search_near<S, P>(source: &S, page: &P)
where
    S: PositionSource + ?Sized,
    P: SearchPage + ?Sized,
{
    match current_location(source).await {
        Ok(coords) => {
            let url = search_url(coords);
            log::info!("searching near {}, {}", coords.lat, coords.lng);
            page.navigate(&url);
        }
        Err(err) => {
            log::warn!("location lookup failed: {err}");
            page.alert(LOCATION_ERROR_MESSAGE);
        }
    }
}
