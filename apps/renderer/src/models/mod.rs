// CV data model: the raw persisted record shape and the normalized,
// render-safe shape. The normalizer (crate::normalize) maps one to the other.

pub mod cv;
pub mod record;

pub use cv::{Certification, Cv, Education, Language, PersonalInfo, Project, Reference, WorkExperience};
pub use record::{CvRecord, DateField};
