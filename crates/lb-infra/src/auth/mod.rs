mod session;

pub use session::InMemoryAuthSession;
