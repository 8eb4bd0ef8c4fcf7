pub mod fleet_repository;
