//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod amenity;
pub mod enquiry;
pub mod floor_plan;
pub mod highlight;
pub mod investor;
pub mod project;
pub mod project_doc;
pub mod project_image;
pub mod setting;
pub mod setting_group;
pub mod testimonial;
pub mod timeline;
