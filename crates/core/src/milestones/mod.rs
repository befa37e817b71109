//! Milestones module - savings targets with derived progress.

mod milestones_model;
mod milestones_repository;
mod milestones_service;
mod milestones_traits;


// Re-export the public interface
pub use milestones_model::{
    Milestone, MilestoneDB, MilestoneUpdate, MilestoneView, NewMilestone,
};
pub use milestones_repository::MilestoneRepository;
pub use milestones_service::MilestoneService;
pub use milestones_traits::{MilestoneRepositoryTrait, MilestoneServiceTrait};
