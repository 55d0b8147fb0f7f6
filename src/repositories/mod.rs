pub mod soap_repository;
