mod vote_api;

pub use vote_api::VoteApi;
