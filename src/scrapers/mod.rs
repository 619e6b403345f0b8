pub mod idealista;
pub mod number;
pub mod traits;
pub mod types;

pub use idealista::IdealistaScraper;
pub use traits::ListingScraper;
pub use types::ScrapeParams;
