pub mod activity_roster_repo;
pub mod seed_repo;
