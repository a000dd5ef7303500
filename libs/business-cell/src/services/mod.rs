pub mod business;

pub use business::BusinessService;
