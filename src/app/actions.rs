//! Actions representing side effects to be executed by the driver.
//!
//! The event handler mutates the session synchronously and returns a list of
//! [`Action`]s for effects it cannot perform itself: changing the page and
//! ending the session. The driver executes them in order.
//!
//! # Example
//!
//! ```rust
//! use marquee::app::{Action, Route};
//!
//! let actions = vec![Action::Navigate(Route::MyList)];
//! assert_eq!(actions[0], Action::Navigate(Route::MyList));
//! ```

use super::modes::Route;

/// Commands for the driver, produced by the event handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Switches the displayed page.
    ///
    /// Emitted on explicit navigation and on search submission, which opens
    /// the results page for the committed query.
    Navigate(Route),

    /// Ends the session and exits the driver.
    Quit,
}
