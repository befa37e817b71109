//! Insurance module - policies, soft delete, and the coverage summary.

mod insurance_model;
mod insurance_repository;
mod insurance_service;
mod insurance_traits;


pub use insurance_model::{
    CoverageBreakdown, InsurancePolicy, InsurancePolicyDB, InsurancePolicyUpdate,
    InsuranceSummary, NewInsurancePolicy, PolicyType, COVERAGE_TYPE_WEIGHT,
    FAMILY_PROTECTION_TARGET, INCOME_PROTECTION_TARGET, INHERITANCE_TAX_TARGET,
};
pub use insurance_repository::InsuranceRepository;
pub use insurance_service::InsuranceService;
pub use insurance_traits::{InsuranceRepositoryTrait, InsuranceServiceTrait};
