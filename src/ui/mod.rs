//! Page behaviors attached to server-rendered markup.
//!
//! DESIGN
//! ======
//! Each module keeps its decision logic generic over [`crate::dom::UiElement`]
//! and puts the `web-sys` wiring (queries, listeners, observers) behind the
//! `hydrate` feature next to it.

pub mod forms;
pub mod lazy_images;
pub mod share;
pub mod spoiler;
pub mod star_rating;
pub mod widgets;
