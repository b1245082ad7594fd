//! # forum-store
//!
//! Storage layer implementing the repository traits from `forum-core`
//! with in-process data structures.
//!
//! ## Overview
//!
//! Every store keys its data by entity id (or id pair) in a `DashMap`,
//! so operations on different keys proceed fully in parallel. Where an
//! update has to read and write together (vote casting), the entry holds
//! a `parking_lot::Mutex` and the whole read-modify-write runs inside
//! that one critical section. Anything providing atomic per-key
//! read-modify-write semantics (a SQL row with `SELECT ... FOR UPDATE`,
//! a Redis hash) could replace these stores behind the same traits.

pub mod blogs;
pub mod follows;
pub mod identity;
pub mod membership;
pub mod posts;
pub mod rating;

// Re-export commonly used types
pub use blogs::MemoryBlogRepository;
pub use follows::MemoryFollowStore;
pub use identity::MemoryIdentityProvider;
pub use membership::MemoryBlogRoster;
pub use posts::MemoryPostRepository;
pub use rating::MemoryRatingLedger;
