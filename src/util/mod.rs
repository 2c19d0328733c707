//! Utility helpers shared across the page modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure formatting plus the timer seam. Nothing here touches the DOM.

pub mod debounce;
pub mod format;
pub mod timer;
