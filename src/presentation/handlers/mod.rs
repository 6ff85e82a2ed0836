mod health;
mod index;
mod review;
mod scaffold;

pub use health::health_handler;
pub use index::index_handler;
pub use review::review_handler;
pub use scaffold::scaffold_review_handler;
