// Landing page sections, top to bottom

mod categories;
mod comparison;
mod cta;
mod demo;
mod faq;
mod features;
mod footer;
mod hero;
mod how_it_works;
mod nav;
mod pricing;
mod problem;
mod video_hero;

pub use categories::Categories;
pub use comparison::Comparison;
pub use cta::Cta;
pub use demo::Demo;
pub use faq::Faq;
pub use features::Features;
pub use footer::Footer;
pub use hero::Hero;
pub use how_it_works::HowItWorks;
pub use nav::Nav;
pub use pricing::Pricing;
pub use problem::Problem;
pub use video_hero::VideoHero;
