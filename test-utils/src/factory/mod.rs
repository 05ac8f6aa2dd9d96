//! Factory methods for creating test data.
//!
//! Each entity has a `Factory` builder for customization and a `create_*` shortcut for
//! inserting a row with defaults.
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let member = factory::member::MemberFactory::new(&db)
//!     .category("Student")
//!     .student_id("2101001")
//!     .batch("2021")
//!     .links(["https://example.org/a"])
//!     .build()
//!     .await?;
//!
//! let notice = factory::create_notice(&db).await?;
//! ```
//!
//! # Available Factories
//!
//! - `member` - Member rows together with their research link rows
//! - `notice` - Notice rows
//! - `research_paper` - Research paper rows

pub mod helpers;
pub mod member;
pub mod notice;
pub mod research_paper;

pub use member::create_member;
pub use notice::create_notice;
pub use research_paper::create_research_paper;
