pub mod assignment;
pub mod submitted_assignment;

pub use assignment::Entity as Assignment;
pub use submitted_assignment::Entity as SubmittedAssignment;
