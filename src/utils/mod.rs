pub mod filter_review_record;
pub mod seed;
pub mod validate_review;

pub use self::filter_review_record::{db_counter, filter_review_record};
pub use self::seed::{load_reviews_csv, read_reviews_csv, sample_doctors, sample_reviews};
pub use self::validate_review::{apply_update, build_review, parse_visit_date};
