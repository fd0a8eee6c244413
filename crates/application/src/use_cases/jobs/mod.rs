pub mod search_jobs;

pub use search_jobs::SearchJobsUseCase;
