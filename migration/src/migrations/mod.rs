pub mod m202610150001_create_assignments;
pub mod m202610150002_create_submitted_assignments;
