mod session;

pub use session::{PendingLogin, SessionManager};
