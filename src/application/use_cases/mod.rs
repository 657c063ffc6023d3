/// Use cases module containing application business logic orchestration
mod generate_spdx;
mod retrieve_dependencies;
mod summarize_licenses;

pub use generate_spdx::GenerateSpdxUseCase;
pub use retrieve_dependencies::RetrieveDependenciesUseCase;
pub use summarize_licenses::SummarizeLicensesUseCase;
