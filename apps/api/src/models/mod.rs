pub mod layout;
pub mod resume;

pub use layout::{LayoutLimits, PageSize};
pub use resume::{Contact, EducationEntry, ExperienceEntry, ResumeData};
