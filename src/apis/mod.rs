pub mod common;
pub mod factory;

pub mod devpost;
pub mod hackclub;

pub use devpost::DevpostParser;
pub use hackclub::HackClubParser;
