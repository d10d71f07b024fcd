//! Skills module - discovery of the directories to scan

mod enumerate;

pub use enumerate::SkillEnumerator;
