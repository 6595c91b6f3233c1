pub mod binding;
pub mod faq;
pub mod tag;

pub use binding::bind_onto;
pub use faq::FaqService;
pub use tag::TagService;
