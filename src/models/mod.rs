//! Record shapes for FAQs, tags and their association.

pub mod faq;
pub mod tag;

pub use faq::{Faq, FaqInput, FaqRow, FaqTagRow};
pub use tag::{Tag, TagInput, TagRef};
