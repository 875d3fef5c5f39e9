//! Page Components

mod start;

pub use start::StartPage;
