//! # CLI Module
//!
//! User-facing entry points of the `spoxy` binary:
//!
//! - [`serve`] - runs the HTTP proxy and opens the login page
//! - [`search`] - one-off console search using an app-only token
//! - [`token`] - verifies the configured client credentials
//!
//! These functions are the error boundary of the program: failures are
//! reported through the logging macros and fatal ones end the process.
//!
//! ```bash
//! spoxy serve                         # proxy on SERVER_ADDRESS, browser opens /login
//! spoxy search Blinding Lights        # top match
//! spoxy search --limit 5 daft punk    # table of five matches
//! spoxy token                         # check client id / secret
//! ```

mod search;
mod serve;
mod token;

pub use search::search;
pub use serve::serve;
pub use token::token;
