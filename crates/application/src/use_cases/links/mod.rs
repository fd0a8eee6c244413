pub mod get_govt_links;

pub use get_govt_links::GetGovtLinksUseCase;
