pub mod goal;
pub mod goal_dto;
pub mod goal_status;
pub mod goal_type;
pub mod sprint;
pub mod sprint_dto;
