// Landing page sections, in stacking order

mod cta;
mod features;
mod footer;
mod header;
mod hero;
mod skip_link;
mod testimonials;

pub use cta::Cta;
pub use features::Features;
pub use footer::Footer;
pub use header::Header;
pub use hero::Hero;
pub use skip_link::SkipLink;
pub use testimonials::Testimonials;
