// Page bodies rendered by the generator

mod home;
mod success;

pub use home::LandingPage;
pub use success::SuccessPage;
