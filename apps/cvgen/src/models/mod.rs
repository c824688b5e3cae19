pub mod cv;

pub use cv::{Certification, CvData, Education, Experience, Position, Skills, Training};
