mod rows;
pub mod sprint_repository;
