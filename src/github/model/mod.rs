//! GitHub data models
//!
//! - `teams`: team membership records of `GET /user/teams`

pub mod teams;
