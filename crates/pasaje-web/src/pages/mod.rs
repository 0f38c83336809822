//! Page Components

mod home;
mod login;

pub use home::HomePage;
pub use login::LoginPage;
